//! egui console shell around the scene: search, analysis, overlays.

mod analysis_panel;
mod control_panel;
mod focus_view;
mod hud;
pub mod icons;
mod view_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use control_panel::SearchState;

/// Plugin that adds all shell systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SearchState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI that uses icons.
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel_system,
                    analysis_panel::analysis_panel_system,
                    view_controls::view_controls_system,
                    hud::constellation_card_system,
                    hud::status_line_system,
                    // The focus overlay paints over everything else.
                    focus_view::focus_view_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Shared panel styling helpers, in one place so the shell reads uniformly.
pub(crate) mod style {
    use bevy_egui::egui;

    use crate::theme::Accent;

    pub const PANEL_BG: egui::Color32 = egui::Color32::from_rgba_premultiplied(10, 10, 16, 235);
    pub const DIM_TEXT: egui::Color32 = egui::Color32::from_rgb(0x6c, 0x6c, 0x7a);

    pub fn panel_frame(accent: &Accent) -> egui::Frame {
        egui::Frame::NONE
            .fill(PANEL_BG)
            .stroke(egui::Stroke::new(1.0, accent.primary_with_alpha(60)))
            .corner_radius(12)
            .inner_margin(14)
    }

    pub fn heading(ui: &mut egui::Ui, accent: &Accent, icon: &str, text: &str) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).color(accent.primary).size(13.0));
            ui.label(
                egui::RichText::new(text)
                    .color(egui::Color32::from_white_alpha(110))
                    .monospace()
                    .size(9.0),
            );
        });
    }
}
