//! Astrodeck - Celestial Observation Dashboard
//!
//! A desktop console for browsing a stylized solar system and deep-sky
//! star map, with live-feeling telemetry dressing around the scene.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use astrodeck::catalog::{self, Catalog};
use astrodeck::engine::EnginePlugin;
use astrodeck::interaction::InteractionPlugin;
use astrodeck::telemetry::{self, StationClock, TelemetryFeed};
use astrodeck::theme::{self, Accent};
use astrodeck::types::{ViewMode, ViewSettings};
use astrodeck::ui::UiPlugin;
use astrodeck::views::ViewsPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Astrodeck".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(Catalog::default())
        .insert_resource(ViewSettings::default())
        .insert_resource(Accent::default())
        .insert_resource(TelemetryFeed::default())
        .insert_resource(StationClock::default())
        .init_state::<ViewMode>()
        // Scene and shell plugins
        .add_plugins((EnginePlugin, ViewsPlugin, InteractionPlugin, UiPlugin))
        .add_systems(Startup, catalog::log_catalog_diagnostics)
        .add_systems(
            Update,
            (theme::update_accent, telemetry::tick_telemetry, telemetry::tick_clock),
        )
        .run();
}
