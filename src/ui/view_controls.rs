//! Overlaid view controls: zoom, reset, layer toggles, view title.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::theme::Accent;
use crate::types::{ViewMode, ViewSettings, ZOOM_STEP};

use super::icons;
use super::style;

pub fn view_controls_system(
    mut contexts: EguiContexts,
    accent: Res<Accent>,
    mode: Res<State<ViewMode>>,
    mut settings: ResMut<ViewSettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let current = *mode.get();

    let (title, subtitle) = match current {
        ViewMode::Solar => ("SOLAR SYSTEM VISUALIZATION", "SECTOR::SUN"),
        ViewMode::Sky => ("DEEP SKY NAVIGATOR", "GALACTIC SECTOR::MILKY_WAY"),
    };

    egui::Area::new(egui::Id::new("view_title"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(270.0, 16.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .monospace()
                    .size(9.0)
                    .color(egui::Color32::from_white_alpha(110)),
            );
            ui.label(
                egui::RichText::new(subtitle)
                    .monospace()
                    .size(8.0)
                    .color(accent.primary),
            );
        });

    egui::Area::new(egui::Id::new("view_controls"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(270.0, -16.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(style::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, accent.primary_with_alpha(50)))
                .corner_radius(10)
                .inner_margin(8)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if control_button(ui, &accent, icons::ZOOM_IN, true).clicked() {
                            settings.control_mut(current).zoom_by(ZOOM_STEP);
                        }
                        if control_button(ui, &accent, icons::ZOOM_OUT, true).clicked() {
                            settings.control_mut(current).zoom_by(-ZOOM_STEP);
                        }
                        if control_button(ui, &accent, icons::RESET, true).clicked() {
                            settings.control_mut(current).reset();
                        }

                        ui.separator();

                        let grid_on = settings.show_grid;
                        if control_button(ui, &accent, icons::GRID, grid_on).clicked() {
                            settings.show_grid = !grid_on;
                        }
                        let milky_on = settings.show_milky_way;
                        if control_button(ui, &accent, icons::MILKY_WAY, milky_on).clicked() {
                            settings.show_milky_way = !milky_on;
                        }

                        ui.separator();

                        let control = settings.control_mut(current);
                        ui.label(
                            egui::RichText::new("ROT")
                                .monospace()
                                .size(8.0)
                                .color(style::DIM_TEXT),
                        );
                        ui.add(
                            egui::Slider::new(&mut control.orientation.rotation, -180.0..=180.0)
                                .suffix("\u{b0}")
                                .show_value(false),
                        );
                        ui.label(
                            egui::RichText::new("TILT")
                                .monospace()
                                .size(8.0)
                                .color(style::DIM_TEXT),
                        );
                        ui.add(
                            egui::Slider::new(&mut control.orientation.inclination, 0.0..=90.0)
                                .suffix("\u{b0}")
                                .show_value(false),
                        );

                        if current == ViewMode::Sky {
                            let projection_on = settings.show_constellations;
                            let label = if projection_on {
                                "PROJECTION: ACTIVE"
                            } else {
                                "PROJECTION: OFFLINE"
                            };
                            let text = egui::RichText::new(format!(
                                "{} {label}",
                                icons::CONSTELLATIONS
                            ))
                            .size(9.0)
                            .color(if projection_on {
                                accent.primary
                            } else {
                                style::DIM_TEXT
                            });
                            if ui.add(egui::Button::new(text).corner_radius(10)).clicked() {
                                settings.show_constellations = !projection_on;
                            }
                        }
                    });
                });
        });
}

fn control_button(
    ui: &mut egui::Ui,
    accent: &Accent,
    icon: &str,
    active: bool,
) -> egui::Response {
    let color = if active { accent.primary } else { style::DIM_TEXT };
    ui.add(
        egui::Button::new(egui::RichText::new(icon).size(13.0).color(color))
            .corner_radius(8)
            .min_size(egui::vec2(26.0, 26.0)),
    )
}
