//! Phosphor icon setup and the semantic icon names the shell uses.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon fonts into the egui context.
/// Runs in EguiPrimaryContextPass where the context is guaranteed ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Solar-system view switch
pub const SYSTEM_VIEW: &str = egui_phosphor::regular::GLOBE;
/// Deep-sky view switch
pub const SKY_VIEW: &str = egui_phosphor::regular::STAR;
/// Search field
pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
/// Close/X
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Selected-object header
pub const SPARKLE: &str = egui_phosphor::regular::SPARKLE;
/// Mass stat
pub const MASS: &str = egui_phosphor::regular::DATABASE;
/// Gravity stat
pub const GRAVITY: &str = egui_phosphor::regular::LIGHTNING;
/// Temperature stat
pub const TEMPERATURE: &str = egui_phosphor::regular::PULSE;
/// Archive extract
pub const ARCHIVE: &str = egui_phosphor::regular::SHIELD_CHECK;
/// Relay bridge / signal
pub const RELAY: &str = egui_phosphor::regular::BROADCAST;
/// Grid layer toggle
pub const GRID: &str = egui_phosphor::regular::GRID_FOUR;
/// Milky-way layer toggle
pub const MILKY_WAY: &str = egui_phosphor::regular::SHOOTING_STAR;
/// Constellation projection toggle
pub const CONSTELLATIONS: &str = egui_phosphor::regular::PATH;
/// Zoom in
pub const ZOOM_IN: &str = egui_phosphor::regular::PLUS;
/// Zoom out
pub const ZOOM_OUT: &str = egui_phosphor::regular::MINUS;
/// Reset orientation/zoom
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Constellation intel card
pub const PATTERN: &str = egui_phosphor::regular::ASTERISK;
/// Info line
pub const INFO: &str = egui_phosphor::regular::INFO;
/// Station clock
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
