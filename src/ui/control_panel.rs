//! Left shell panel: view switch pill and the stellar search console.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::Catalog;
use crate::interaction::{BodySelected, SelectOrigin};
use crate::search;
use crate::theme::Accent;
use crate::types::ViewMode;

use super::icons;
use super::style;

/// Live search query typed into the console.
#[derive(Resource, Default)]
pub struct SearchState {
    pub query: String,
}

pub fn control_panel_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    accent: Res<Accent>,
    mode: Res<State<ViewMode>>,
    mut next_mode: ResMut<NextState<ViewMode>>,
    mut search_state: ResMut<SearchState>,
    mut select_events: EventWriter<BodySelected>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("control_panel")
        .frame(style::panel_frame(&accent))
        .resizable(false)
        .default_width(250.0)
        .show(ctx, |ui| {
            // View switch pill.
            ui.horizontal(|ui| {
                let current = *mode.get();
                for (target, icon, label) in [
                    (ViewMode::Solar, icons::SYSTEM_VIEW, "SYSTEM"),
                    (ViewMode::Sky, icons::SKY_VIEW, "DEEP SKY"),
                ] {
                    let active = current == target;
                    let text = egui::RichText::new(format!("{icon} {label}")).size(11.0).color(
                        if active {
                            egui::Color32::BLACK
                        } else {
                            style::DIM_TEXT
                        },
                    );
                    let button = egui::Button::new(text)
                        .fill(if active {
                            accent.primary
                        } else {
                            egui::Color32::TRANSPARENT
                        })
                        .corner_radius(14);
                    if ui.add(button).clicked() && !active {
                        next_mode.set(target);
                    }
                }
            });

            ui.add_space(12.0);
            style::heading(ui, &accent, icons::SEARCH, "STELLAR_SEARCH");
            ui.add_space(6.0);

            ui.add(
                egui::TextEdit::singleline(&mut search_state.query)
                    .hint_text("IDENT_UNIT::SEARCH")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);

            let results = search::search(&catalog, &search_state.query);

            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 30.0)
                .show(ui, |ui| {
                    for body in &results {
                        let swatch = crate::theme::parse_hex(body.colors[0])
                            .unwrap_or(accent.primary);
                        let response = ui.add(
                            egui::Button::new(
                                egui::RichText::new(format!(
                                    "{}\n{}",
                                    body.name.to_uppercase(),
                                    body.kind.label()
                                ))
                                .size(10.0),
                            )
                            .fill(egui::Color32::from_white_alpha(8))
                            .stroke(egui::Stroke::new(1.0, swatch.gamma_multiply(0.4)))
                            .min_size(egui::vec2(ui.available_width(), 36.0)),
                        );
                        if response.clicked() {
                            select_events.send(BodySelected {
                                id: body.id,
                                origin: SelectOrigin::Panel,
                            });
                        }
                        ui.add_space(4.0);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("UNITS_FOUND: {}", results.len()))
                        .monospace()
                        .size(8.0)
                        .color(style::DIM_TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("SYSTEM_STABLE")
                            .monospace()
                            .size(8.0)
                            .color(accent.primary),
                    );
                });
            });
        });
}
