//! Render engine: persistent camera, scene rig, and view lifecycle.
//!
//! One camera and one rig entity live for the whole session. Switching views
//! tears down the rig's children and retunes the lens; the camera itself is
//! never recreated.

use bevy::{
    input::mouse::AccumulatedMouseScroll,
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::EguiContexts;

use crate::types::{SceneSet, ViewMode, ViewSettings, approach, SCENE_SMOOTHING, ZOOM_SPEED};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Root entity the active scene hangs off. Orientation smoothing rotates this
/// rig; scene builders parent everything under it.
#[derive(Component)]
pub struct SceneRig;

/// Marker for entities owned by the active scene, cleaned up on view exit.
#[derive(Component)]
pub struct SceneObject;

pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_engine)
            .add_systems(OnEnter(ViewMode::Solar), configure_lens)
            .add_systems(OnEnter(ViewMode::Sky), configure_lens)
            .add_systems(OnExit(ViewMode::Solar), teardown_scene)
            .add_systems(OnExit(ViewMode::Sky), teardown_scene)
            .configure_sets(Update, SceneSet::Animate.after(SceneSet::Smoothing))
            .add_systems(
                Update,
                (scroll_zoom, apply_view_smoothing)
                    .chain()
                    .in_set(SceneSet::Smoothing),
            )
            .add_systems(Update, guard_zero_area);
    }
}

/// Spawn the camera, the scene rig, and ambient fill light.
fn setup_engine(mut commands: Commands, settings: Res<ViewSettings>) {
    let mode = ViewMode::default();
    let control = settings.control(mode);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: mode.fov(),
            near: 0.1,
            far: 20_000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, mode.base_distance() / control.zoom())
            .looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Rig starts at its target so the first frame doesn't swing into place.
    commands.spawn((
        SceneRig,
        Transform::from_rotation(orientation_quat(
            control.orientation.rotation,
            control.orientation.inclination,
        )),
        Visibility::default(),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
}

/// Rig rotation for a yaw/tilt pair in degrees.
fn orientation_quat(rotation: f32, inclination: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        rotation.to_radians(),
        inclination.to_radians(),
        0.0,
    )
}

/// Retune the lens for the view being entered. Distance is left to the
/// smoothing system so the camera glides rather than snaps.
fn configure_lens(
    mode: Res<State<ViewMode>>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(mut projection) = camera_query.get_single_mut() else {
        return;
    };
    if let Projection::Perspective(ref mut lens) = *projection {
        lens.fov = mode.get().fov();
    }
}

/// Ease the rig orientation and camera distance toward their targets.
fn apply_view_smoothing(
    mode: Res<State<ViewMode>>,
    settings: Res<ViewSettings>,
    mut rig_query: Query<&mut Transform, (With<SceneRig>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let control = settings.control(*mode.get());

    if let Ok(mut rig) = rig_query.get_single_mut() {
        let (yaw, pitch, _) = rig.rotation.to_euler(EulerRot::YXZ);
        let next = orientation_quat(
            approach(
                yaw.to_degrees(),
                control.orientation.rotation,
                SCENE_SMOOTHING,
            ),
            approach(
                pitch.to_degrees(),
                control.orientation.inclination,
                SCENE_SMOOTHING,
            ),
        );
        rig.rotation = next;
    }

    if let Ok(mut camera) = camera_query.get_single_mut() {
        let target = mode.get().base_distance() / control.zoom();
        camera.translation.z = approach(camera.translation.z, target, SCENE_SMOOTHING);
    }
}

/// Scroll wheel zooms the active view, unless the pointer is over the UI.
fn scroll_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mode: Res<State<ViewMode>>,
    mut settings: ResMut<ViewSettings>,
    mut contexts: EguiContexts,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_pointer_input() {
            return;
        }
    }
    let factor = 1.0 + mouse_scroll.delta.y * ZOOM_SPEED;
    settings.control_mut(*mode.get()).zoom_scale(factor);
}

/// Disable rendering while the window has no drawable area (minimized or
/// mid-resize). Re-enables as soon as the surface comes back.
pub fn guard_zero_area(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<&mut Camera, With<MainCamera>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let Ok(mut camera) = camera_query.get_single_mut() else {
        return;
    };
    let size = window.physical_size();
    let drawable = size.x > 0 && size.y > 0;
    if camera.is_active != drawable {
        camera.is_active = drawable;
    }
}

/// Despawn everything the outgoing scene spawned. Children of the rig go with
/// their parents.
fn teardown_scene(mut commands: Commands, scene_query: Query<Entity, With<SceneObject>>) {
    for entity in scene_query.iter() {
        commands.entity(entity).despawn();
    }
}
