//! Right shell panel: selected-object analysis, relay bridge, telemetry.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::interaction::{FocusState, SelectedBody};
use crate::search::display_distance;
use crate::telemetry::{EntryStatus, TelemetryFeed};
use crate::theme::Accent;

use super::icons;
use super::style;

pub fn analysis_panel_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    accent: Res<Accent>,
    selected: Res<SelectedBody>,
    feed: Res<TelemetryFeed>,
    mut focus: ResMut<FocusState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Selection ids come from the catalog, so the lookup only misses if the
    // tables change under us.
    let Some(body) = catalog.by_id(selected.id) else {
        return;
    };
    let earth = catalog.earth();

    egui::SidePanel::right("analysis_panel")
        .frame(style::panel_frame(&accent))
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icons::SPARKLE)
                        .color(accent.primary)
                        .size(18.0),
                );
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(body.name.to_uppercase())
                            .strong()
                            .size(17.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} // IDENT: {}",
                            body.kind.label(),
                            body.scientific_name
                        ))
                        .size(8.0)
                        .color(style::DIM_TEXT),
                    );
                });
            });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(body.description)
                    .size(10.0)
                    .color(style::DIM_TEXT),
            );
            ui.add_space(10.0);

            egui::Grid::new("body_stats").num_columns(2).show(ui, |ui| {
                stat_cell(ui, "MASS", body.properties.mass);
                stat_cell(ui, "GRAVITY", body.properties.gravity);
                ui.end_row();
                stat_cell(ui, "TEMP", body.properties.temperature);
                stat_cell(ui, "RADIUS", body.properties.radius);
                ui.end_row();
                if let Some(period) = body.properties.period {
                    stat_cell(ui, "ORBITAL_PERIOD", period);
                    ui.end_row();
                }
            });

            ui.add_space(12.0);
            style::heading(ui, &accent, icons::RELAY, "RELAY_BRIDGE");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} EARTH", icons::SYSTEM_VIEW))
                        .size(9.0)
                        .color(style::DIM_TEXT),
                );
                ui.label(
                    egui::RichText::new(display_distance(body, earth))
                        .monospace()
                        .size(10.0)
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new(format!("{} {}", icons::RELAY, body.name.to_uppercase()))
                        .size(9.0)
                        .color(accent.primary),
                );
            });
            ui.label(
                egui::RichText::new("SIGNAL_DELAY: 3.4S  //  VECTOR_STABILIZATION: LOCKED")
                    .monospace()
                    .size(7.0)
                    .color(style::DIM_TEXT),
            );

            ui.add_space(10.0);
            let scan = egui::Button::new(
                egui::RichText::new("INITIATE FULL SCAN")
                    .strong()
                    .size(11.0)
                    .color(egui::Color32::BLACK),
            )
            .fill(accent.primary)
            .corner_radius(10)
            .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(scan).clicked() {
                focus.open = true;
            }

            ui.add_space(14.0);
            ui.horizontal(|ui| {
                style::heading(ui, &accent, icons::INFO, "LIVE_TELEMETRY");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("STREAMING")
                            .monospace()
                            .size(8.0)
                            .color(accent.primary),
                    );
                });
            });
            ui.add_space(4.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in &feed.entries {
                    let status_color = match entry.status {
                        EntryStatus::Stable => accent.primary,
                        EntryStatus::Warning => egui::Color32::from_rgb(0xff, 0xaa, 0x33),
                    };
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&entry.timestamp)
                                .monospace()
                                .size(8.0)
                                .color(style::DIM_TEXT),
                        );
                        ui.label(
                            egui::RichText::new(entry.event)
                                .monospace()
                                .size(8.0)
                                .color(egui::Color32::from_white_alpha(140)),
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&entry.value)
                                .monospace()
                                .size(8.0)
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(
                            egui::RichText::new(entry.status.label())
                                .monospace()
                                .size(8.0)
                                .color(status_color),
                        );
                    });
                    ui.add_space(3.0);
                }
            });
        });
}

fn stat_cell(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(7.0)
                .color(style::DIM_TEXT),
        );
        ui.label(
            egui::RichText::new(value)
                .monospace()
                .size(9.0)
                .color(egui::Color32::WHITE),
        );
    });
}
