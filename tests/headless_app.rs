//! Headless Bevy integration tests.
//!
//! These tests verify resources, events, and state transitions without a GPU.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::window::PrimaryWindow;

use astrodeck::catalog::Catalog;
use astrodeck::interaction::{
    BodySelected, FocusState, HoverChanged, HoveredBody, SelectOrigin, SelectedBody,
};
use astrodeck::telemetry::{StationClock, TelemetryFeed};
use astrodeck::theme::{self, Accent};
use astrodeck::types::{ViewMode, ViewSettings};
use astrodeck::views::{self, MilkyWayLayer};

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<ViewMode>();
    app.insert_resource(Catalog::default());
    app.insert_resource(ViewSettings::default());
    // Input resources normally provided by DefaultPlugins.
    app.init_resource::<ButtonInput<MouseButton>>();
    // Normally provided by EguiPlugin; required for systems taking EguiContexts.
    app.init_resource::<bevy_egui::EguiUserTextures>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<bevy::input::mouse::AccumulatedMouseMotion>();
    app.init_resource::<bevy::input::mouse::AccumulatedMouseScroll>();
    app
}

#[test]
fn catalog_resource_initializes() {
    let mut app = create_minimal_app();
    app.update();

    let catalog = app.world().resource::<Catalog>();
    assert!(catalog.all().count() > 40);
    assert_eq!(catalog.sun().id, "sun");
}

#[test]
fn view_mode_starts_in_solar() {
    let mut app = create_minimal_app();
    app.update();

    let state = app.world().resource::<State<ViewMode>>();
    assert_eq!(*state.get(), ViewMode::Solar);
}

#[test]
fn view_mode_switches_to_sky() {
    let mut app = create_minimal_app();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<ViewMode>>()
        .set(ViewMode::Sky);
    app.update();

    let state = app.world().resource::<State<ViewMode>>();
    assert_eq!(*state.get(), ViewMode::Sky);
}

#[derive(Resource, Default)]
struct SolarTicks(u32);

#[test]
fn state_gated_systems_stop_after_leaving_their_view() {
    let mut app = create_minimal_app();
    app.init_resource::<SolarTicks>();
    app.add_systems(
        Update,
        (|mut ticks: ResMut<SolarTicks>| ticks.0 += 1).run_if(in_state(ViewMode::Solar)),
    );

    app.update();
    app.update();
    assert_eq!(app.world().resource::<SolarTicks>().0, 2);

    app.world_mut()
        .resource_mut::<NextState<ViewMode>>()
        .set(ViewMode::Sky);
    app.update();
    let after_switch = app.world().resource::<SolarTicks>().0;
    app.update();
    app.update();
    assert_eq!(
        app.world().resource::<SolarTicks>().0,
        after_switch,
        "solar systems kept running in sky view"
    );
}

#[test]
fn accent_follows_selection() {
    let mut app = create_minimal_app();
    app.insert_resource(Accent::default());
    app.init_resource::<HoveredBody>();
    app.init_resource::<SelectedBody>();
    app.add_systems(Update, theme::update_accent);

    app.update();
    // Default selection is the Sun.
    let sun_accent = *app.world().resource::<Accent>();
    assert_eq!(sun_accent, theme::accent_from_colors(["#ffdd00", "#ff8800"]));

    app.world_mut().resource_mut::<SelectedBody>().id = "earth";
    app.update();
    let earth_accent = *app.world().resource::<Accent>();
    assert_eq!(
        earth_accent,
        theme::accent_from_colors(["#4deeea", "#0077be"])
    );
}

#[test]
fn hover_takes_over_when_nothing_selected_matches() {
    let mut app = create_minimal_app();
    app.insert_resource(Accent::default());
    app.init_resource::<HoveredBody>();
    app.insert_resource(SelectedBody { id: "no_such_body" });
    app.add_systems(Update, theme::update_accent);

    app.world_mut().resource_mut::<HoveredBody>().id = Some("betelgeuse");
    app.update();

    let accent = *app.world().resource::<Accent>();
    assert_eq!(accent, theme::accent_from_colors(["#ff4400", "#aa2200"]));
}

#[test]
fn scene_click_opens_focus_and_panel_click_does_not() {
    use astrodeck::interaction::InteractionPlugin;

    let mut app = create_minimal_app();
    app.add_plugins(InteractionPlugin);
    app.update();

    app.world_mut().send_event(BodySelected {
        id: "mars",
        origin: SelectOrigin::Panel,
    });
    app.update();
    assert_eq!(app.world().resource::<SelectedBody>().id, "mars");
    assert!(!app.world().resource::<FocusState>().open);

    app.world_mut().send_event(BodySelected {
        id: "jupiter",
        origin: SelectOrigin::Scene,
    });
    app.update();
    assert_eq!(app.world().resource::<SelectedBody>().id, "jupiter");
    assert!(app.world().resource::<FocusState>().open);
}

#[test]
fn hover_events_fold_into_resource() {
    use astrodeck::interaction::InteractionPlugin;

    let mut app = create_minimal_app();
    app.add_plugins(InteractionPlugin);
    app.update();

    app.world_mut().send_event(HoverChanged(Some("sirius")));
    app.update();
    assert_eq!(app.world().resource::<HoveredBody>().id, Some("sirius"));

    app.world_mut().send_event(HoverChanged(None));
    app.update();
    assert_eq!(app.world().resource::<HoveredBody>().id, None);
}

#[test]
fn zero_area_window_parks_the_camera_and_resumes() {
    use astrodeck::engine::{guard_zero_area, MainCamera};

    let mut app = create_minimal_app();
    app.add_systems(Update, guard_zero_area);
    let camera = app.world_mut().spawn((Camera::default(), MainCamera)).id();
    let window = app
        .world_mut()
        .spawn((Window::default(), PrimaryWindow))
        .id();

    app.update();
    assert!(app.world().get::<Camera>(camera).unwrap().is_active);

    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .resolution
        .set_physical_resolution(0, 0);
    app.update();
    assert!(
        !app.world().get::<Camera>(camera).unwrap().is_active,
        "camera stayed active with a zero-area surface"
    );

    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .resolution
        .set_physical_resolution(1280, 720);
    app.update();
    assert!(app.world().get::<Camera>(camera).unwrap().is_active);
}

#[test]
fn layer_toggle_applies_to_freshly_spawned_layers() {
    let mut app = create_minimal_app();
    app.add_systems(Update, views::toggle_layers);

    app.world_mut().resource_mut::<ViewSettings>().show_milky_way = false;
    let first = app
        .world_mut()
        .spawn((MilkyWayLayer, Visibility::Inherited))
        .id();
    app.update();
    assert_eq!(
        *app.world().get::<Visibility>(first).unwrap(),
        Visibility::Hidden
    );

    // A view switch despawns the layer and spawns a fresh one with default
    // visibility, without any settings write in between.
    app.world_mut().despawn(first);
    let rebuilt = app
        .world_mut()
        .spawn((MilkyWayLayer, Visibility::Inherited))
        .id();
    app.update();
    assert_eq!(
        *app.world().get::<Visibility>(rebuilt).unwrap(),
        Visibility::Hidden,
        "rebuilt layer ignored the toggle"
    );
}

#[test]
fn telemetry_feed_fills_over_time() {
    // No TimePlugin here: the test drives the clock by hand so the repeating
    // timers actually fire.
    let mut app = App::new();
    app.init_resource::<Time>();
    app.insert_resource(TelemetryFeed::default());
    app.insert_resource(StationClock::default());
    app.add_systems(
        Update,
        (
            astrodeck::telemetry::tick_telemetry,
            astrodeck::telemetry::tick_clock,
        ),
    );

    for _ in 0..3 {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_secs(4));
        app.update();
    }

    let feed = app.world().resource::<TelemetryFeed>();
    assert_eq!(feed.entries.len(), 3);
    let clock = app.world().resource::<StationClock>();
    assert_ne!(clock.display, "--:--:--");
}
