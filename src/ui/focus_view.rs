//! Full-screen focus overlay: deep dive on the selected body.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{Catalog, CelestialBody};
use crate::interaction::{FocusState, SelectedBody};
use crate::telemetry::{EntryStatus, TelemetryFeed};
use crate::theme::Accent;

use super::icons;
use super::style;

/// Curated archive blurbs for the inner-system bodies. Everything else gets
/// the placeholder; the archive is fiction, not a data dependency.
fn archive_extract(id: &str) -> &'static str {
    match id {
        "sun" => "The anchor of the solar system, containing 99.86% of its total mass. A G2-type main-sequence star generating energy through nuclear fusion in its core. Current stability: STABLE.",
        "mercury" => "The smallest planet in the system, only slightly larger than Earth's Moon. Positioned as the first planet from the Sun, it has no significant atmosphere.",
        "venus" => "Notable for its retrograde rotation (spinning backward compared to most planets). It possesses a thick, toxic atmosphere reflecting high solar radiation.",
        "earth" => "The only known planet to maintain stable bodies of liquid water. Home world and primary reference point for orbital dynamics.",
        "mars" => "Marks the outer boundary of the inner terrestrial system. Known for its iron-oxide rich surface and thin atmosphere.",
        "jupiter" => "The largest planet in the system, 318 times heavier than Earth. A gas giant mostly composed of hydrogen and helium.",
        "saturn" => "Famous for its spectacular ring system composed of countless particles of ice and dust. Second largest gas giant.",
        "uranus" => "An ice giant with a unique orbital tilt, effectively spinning on its side. Composed primarily of water, ammonia, and methane ices.",
        "neptune" => "The most distant major planet, orbiting in the cold reaches of the system. Characterized by supersonic winds and icy composition.",
        "ceres" => "The largest object in the Asteroid Belt and the only dwarf planet located in the inner Solar System.",
        _ => "Academic record currently undergoing encryption. Check Gaia Archive for full dataset update.",
    }
}

pub fn focus_view_system(
    mut contexts: EguiContexts,
    catalog: Res<Catalog>,
    accent: Res<Accent>,
    selected: Res<SelectedBody>,
    feed: Res<TelemetryFeed>,
    mut focus: ResMut<FocusState>,
) {
    if !focus.open {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(body) = catalog.by_id(selected.id) else {
        focus.open = false;
        return;
    };

    // Dim everything behind the overlay.
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("focus_backdrop"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(210));
        });

    egui::Window::new("focus_overlay")
        .title_bar(false)
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_premultiplied(6, 6, 12, 245))
                .stroke(egui::Stroke::new(1.0, accent.primary_with_alpha(80)))
                .corner_radius(24)
                .inner_margin(28),
        )
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .fixed_size(egui::vec2(
            (screen.width() - 120.0).min(980.0),
            (screen.height() - 120.0).min(620.0),
        ))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icons::SYSTEM_VIEW)
                        .size(34.0)
                        .color(accent.primary),
                );
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(body.name.to_uppercase())
                            .strong()
                            .size(30.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  \u{2022}  {}",
                            body.kind.label(),
                            body.scientific_name.to_uppercase()
                        ))
                        .monospace()
                        .size(9.0)
                        .color(accent.primary),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(icons::CLOSE).size(16.0),
                            )
                            .corner_radius(16)
                            .min_size(egui::vec2(32.0, 32.0)),
                        )
                        .clicked()
                    {
                        focus.open = false;
                    }
                });
            });

            ui.add_space(10.0);
            ui.columns(2, |columns| {
                left_column(&mut columns[0], &accent, body);
                right_column(&mut columns[1], &accent, body, &feed, &mut focus);
            });
        });
}

fn left_column(ui: &mut egui::Ui, accent: &Accent, body: &CelestialBody) {
    ui.label(
        egui::RichText::new(body.description)
            .size(12.0)
            .color(style::DIM_TEXT),
    );
    ui.add_space(12.0);

    egui::Grid::new("focus_stats")
        .num_columns(2)
        .spacing(egui::vec2(24.0, 12.0))
        .show(ui, |ui| {
            focus_stat(ui, icons::MASS, "MASS", body.properties.mass);
            focus_stat(ui, icons::GRAVITY, "GRAVITY", body.properties.gravity);
            ui.end_row();
            focus_stat(ui, icons::TEMPERATURE, "TEMPERATURE", body.properties.temperature);
            focus_stat(ui, icons::SPARKLE, "DISTANCE", body.distance);
            ui.end_row();
        });

    ui.add_space(16.0);
    egui::Frame::NONE
        .fill(accent.primary_with_alpha(12))
        .stroke(egui::Stroke::new(1.0, accent.primary_with_alpha(30)))
        .corner_radius(16)
        .inner_margin(14)
        .show(ui, |ui| {
            style::heading(ui, accent, icons::ARCHIVE, "GAIA_ARCHIVE_EXTRACTION [V4.0]");
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("\"{}\"", archive_extract(body.id)))
                    .italics()
                    .size(11.0)
                    .color(egui::Color32::from_white_alpha(160)),
            );
        });
}

fn right_column(
    ui: &mut egui::Ui,
    accent: &Accent,
    body: &CelestialBody,
    feed: &TelemetryFeed,
    focus: &mut FocusState,
) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("LIVE_STREAM :: {}", body.id.to_uppercase()))
                .monospace()
                .size(9.0)
                .color(egui::Color32::WHITE),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("ENCRYPTED")
                    .monospace()
                    .size(8.0)
                    .color(egui::Color32::from_rgb(0xe0, 0x55, 0x55)),
            );
        });
    });
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 48.0)
        .show(ui, |ui| {
            for entry in &feed.entries {
                let status_color = match entry.status {
                    EntryStatus::Stable => accent.primary,
                    EntryStatus::Warning => egui::Color32::from_rgb(0xff, 0xaa, 0x33),
                };
                ui.label(
                    egui::RichText::new(format!(
                        "[{}] {}  {}  {}",
                        entry.timestamp,
                        entry.event,
                        entry.value,
                        entry.status.label()
                    ))
                    .monospace()
                    .size(8.0)
                    .color(status_color),
                );
            }
        });

    ui.add_space(8.0);
    let link = egui::Button::new(
        egui::RichText::new("ESTABLISH DATA LINK \u{2192}")
            .strong()
            .size(11.0)
            .color(egui::Color32::BLACK),
    )
    .fill(accent.primary)
    .corner_radius(16)
    .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add(link).clicked() {
        focus.open = false;
    }
}

fn focus_stat(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(icon).size(12.0).color(style::DIM_TEXT));
        ui.label(
            egui::RichText::new(label)
                .size(7.0)
                .color(style::DIM_TEXT),
        );
        ui.label(
            egui::RichText::new(value)
                .monospace()
                .size(10.0)
                .color(egui::Color32::WHITE),
        );
    });
}
