//! HUD overlays: the constellation intel card and the status line.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::interaction::HoveredConstellation;
use crate::telemetry::StationClock;
use crate::theme::Accent;
use crate::types::ViewSettings;

use super::icons;
use super::style;

/// Floating "pattern lock" card while a constellation is hovered.
pub fn constellation_card_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    accent: Res<Accent>,
    settings: Res<ViewSettings>,
    hovered: Res<HoveredConstellation>,
) {
    if !settings.show_constellations {
        return;
    }
    let Some(constellation) = hovered.id.and_then(|id| catalog.constellation(id)) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("constellation_card"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(270.0, 64.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_premultiplied(4, 4, 10, 240))
                .stroke(egui::Stroke::new(1.0, accent.primary_with_alpha(80)))
                .corner_radius(18)
                .inner_margin(14)
                .show(ui, |ui| {
                    ui.set_max_width(280.0);
                    style::heading(ui, &accent, icons::PATTERN, "PATTERN LOCK");
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(constellation.name.to_uppercase())
                            .strong()
                            .size(18.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(constellation.description)
                            .italics()
                            .size(10.0)
                            .color(style::DIM_TEXT),
                    );
                    ui.add_space(6.0);
                    style::heading(ui, &accent, icons::INFO, "GAIA_INTEL // MYTH & SCIENCE");
                    ui.label(
                        egui::RichText::new(constellation.astronomical_context)
                            .size(9.0)
                            .color(egui::Color32::from_white_alpha(140)),
                    );
                });
        });
}

/// Station clock in the corner of the viewport.
pub fn status_line_system(
    mut contexts: EguiContexts,
    accent: Res<Accent>,
    clock: Res<StationClock>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    egui::Area::new(egui::Id::new("status_line"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-300.0, -16.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{} {}  //  LINK: NOMINAL", icons::CLOCK, clock.display))
                    .monospace()
                    .size(9.0)
                    .color(accent.primary_with_alpha(180)),
            );
        });
}
