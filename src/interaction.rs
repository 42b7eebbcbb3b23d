//! Pointer interaction: hover raycasts, click selection, drag-to-orbit.
//!
//! Hover and selection are published as events and folded into resources by a
//! single writer system, so panels and scene animations always agree on the
//! active body within a frame.

use bevy::{
    input::mouse::AccumulatedMouseMotion,
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::{egui, EguiContexts};

use crate::engine::MainCamera;
use crate::types::{ViewMode, ViewSettings};
use crate::views::sky::ConstellationLines;

/// Pixels of accumulated motion past which a press counts as a drag, not a
/// click.
const CLICK_SLOP: f32 = 5.0;

/// World-space distance within which a ray counts as touching a constellation
/// segment.
const SEGMENT_PICK_DISTANCE: f32 = 30.0;

/// Scene entities the pointer can hit. `radius` is the pick sphere in world
/// units, usually a little larger than the rendered body.
#[derive(Component)]
pub struct Pickable {
    pub id: &'static str,
    pub radius: f32,
}

/// Body currently under the pointer, if any.
#[derive(Resource, Default)]
pub struct HoveredBody {
    pub id: Option<&'static str>,
}

/// Body driving the analysis panel and accent theme. Always set; the Sun is
/// the session default.
#[derive(Resource)]
pub struct SelectedBody {
    pub id: &'static str,
}

impl Default for SelectedBody {
    fn default() -> Self {
        Self { id: "sun" }
    }
}

/// Constellation whose lines the pointer is over (sky view only).
#[derive(Resource, Default)]
pub struct HoveredConstellation {
    pub id: Option<&'static str>,
}

/// Whether the full-screen focus overlay is open.
#[derive(Resource, Default)]
pub struct FocusState {
    pub open: bool,
}

/// Where a selection came from. Scene clicks open the focus overlay; panel
/// clicks only retarget it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOrigin {
    Scene,
    Panel,
}

/// Fired when the hovered body changes. Carries the new value, including
/// `None` when the pointer leaves everything.
#[derive(Event)]
pub struct HoverChanged(pub Option<&'static str>);

/// Fired when a body is chosen, by scene click or from a panel.
#[derive(Event)]
pub struct BodySelected {
    pub id: &'static str,
    pub origin: SelectOrigin,
}

/// Drag bookkeeping between press and release.
#[derive(Resource, Default)]
pub struct DragTracker {
    pub active: bool,
    pub travel: f32,
}

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .init_resource::<SelectedBody>()
            .init_resource::<HoveredConstellation>()
            .init_resource::<FocusState>()
            .init_resource::<DragTracker>()
            .add_event::<HoverChanged>()
            .add_event::<BodySelected>()
            .add_systems(
                Update,
                (
                    pointer_hover,
                    pointer_drag,
                    pointer_click,
                    apply_events,
                    update_cursor,
                )
                    .chain(),
            )
            .add_systems(Update, escape_closes_focus);
    }
}

/// Distance along the ray to the near intersection with a sphere, if any.
pub fn ray_sphere_hit(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    if along < 0.0 {
        return None;
    }
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    Some(along - (radius_sq - closest_sq).sqrt())
}

/// Minimum distance between a ray and a line segment, in closed form.
///
/// Solves the unconstrained closest-approach parameters, then clamps the
/// segment parameter to [0, 1] and the ray parameter to >= 0. Constellation
/// chords span thousands of world units, so this must be exact along the
/// whole segment, not sampled.
pub fn ray_segment_distance(origin: Vec3, direction: Vec3, a: Vec3, b: Vec3) -> f32 {
    let e = b - a;
    let w = origin - a;
    let dd = direction.length_squared();
    let de = direction.dot(e);
    let ee = e.length_squared();
    let dw = direction.dot(w);
    let ew = e.dot(w);

    let denom = dd * ee - de * de;
    let s = if denom > f32::EPSILON {
        ((dd * ew - de * dw) / denom).clamp(0.0, 1.0)
    } else {
        // Ray parallel to the segment (or degenerate segment).
        0.0
    };
    let t = ((s * de - dw) / dd).max(0.0);
    let s = if ee > f32::EPSILON {
        ((ew + t * de) / ee).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (w + direction * t - e * s).length()
}

/// Pick the nearest body under the pointer. Takes the closest hit when pick
/// spheres overlap.
pub fn pick_closest<'a>(
    ray_origin: Vec3,
    ray_direction: Vec3,
    candidates: impl Iterator<Item = (&'a str, Vec3, f32)>,
) -> Option<&'a str> {
    let mut best: Option<(&str, f32)> = None;
    for (id, center, radius) in candidates {
        if let Some(t) = ray_sphere_hit(ray_origin, ray_direction, center, radius) {
            if best.map_or(true, |(_, best_t)| t < best_t) {
                best = Some((id, t));
            }
        }
    }
    best.map(|(id, _)| id)
}

fn pointer_ray(
    window_query: &Query<&Window, With<PrimaryWindow>>,
    camera_query: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Ray3d> {
    let window = window_query.get_single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = camera_query.get_single().ok()?;
    camera.viewport_to_world(camera_transform, cursor).ok()
}

/// Raycast bodies first, then constellation segments, publishing hover changes.
fn pointer_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    pickables: Query<(&Pickable, &GlobalTransform)>,
    constellations: Query<(&ConstellationLines, &GlobalTransform)>,
    mode: Res<State<ViewMode>>,
    settings: Res<ViewSettings>,
    hovered: Res<HoveredBody>,
    mut hovered_constellation: ResMut<HoveredConstellation>,
    mut hover_events: EventWriter<HoverChanged>,
    mut contexts: EguiContexts,
) {
    let over_ui = contexts
        .ctx_mut().ok()
        .is_some_and(|ctx| ctx.wants_pointer_input());

    let ray = if over_ui {
        None
    } else {
        pointer_ray(&window_query, &camera_query)
    };

    let Some(ray) = ray else {
        if hovered.id.is_some() {
            hover_events.send(HoverChanged(None));
        }
        hovered_constellation.id = None;
        return;
    };

    let origin = ray.origin;
    let direction = *ray.direction;

    let hit = pick_closest(
        origin,
        direction,
        pickables
            .iter()
            .map(|(pickable, transform)| (pickable.id, transform.translation(), pickable.radius)),
    );

    // Dedup: publish only on change so consumers see edges, not levels.
    if hit != hovered.id {
        hover_events.send(HoverChanged(hit));
    }

    // Constellation lines are a fallback target, never competing with bodies.
    let mut constellation_hit = None;
    if hit.is_none() && *mode.get() == ViewMode::Sky && settings.show_constellations {
        'outer: for (lines, transform) in constellations.iter() {
            for &(a, b) in lines.segments.iter() {
                let a = transform.transform_point(a);
                let b = transform.transform_point(b);
                if ray_segment_distance(origin, direction, a, b) < SEGMENT_PICK_DISTANCE {
                    constellation_hit = Some(lines.id);
                    break 'outer;
                }
            }
        }
    }
    hovered_constellation.id = constellation_hit;
}

/// Left-drag orbits the active view. Keeps tracking through egui overlap once
/// a drag has started.
fn pointer_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mode: Res<State<ViewMode>>,
    mut settings: ResMut<ViewSettings>,
    mut tracker: ResMut<DragTracker>,
    mut contexts: EguiContexts,
) {
    if mouse.just_pressed(MouseButton::Left) && !tracker.active {
        let over_ui = contexts
            .ctx_mut().ok()
            .is_some_and(|ctx| ctx.wants_pointer_input());
        if !over_ui {
            tracker.active = true;
            tracker.travel = 0.0;
        }
    }

    if tracker.active && mouse.pressed(MouseButton::Left) {
        let delta = mouse_motion.delta;
        tracker.travel += delta.length();
        if tracker.travel > CLICK_SLOP {
            settings
                .control_mut(*mode.get())
                .orientation
                .apply_drag(delta);
        }
    }

    if mouse.just_released(MouseButton::Left) {
        tracker.active = false;
    }
}

/// A press-and-release without meaningful travel selects the body under the
/// pointer.
fn pointer_click(
    mouse: Res<ButtonInput<MouseButton>>,
    tracker: Res<DragTracker>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    pickables: Query<(&Pickable, &GlobalTransform)>,
    mut select_events: EventWriter<BodySelected>,
    mut contexts: EguiContexts,
) {
    if !mouse.just_released(MouseButton::Left) || tracker.travel > CLICK_SLOP {
        return;
    }
    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_pointer_input() {
            return;
        }
    }
    let Some(ray) = pointer_ray(&window_query, &camera_query) else {
        return;
    };
    let hit = pick_closest(
        ray.origin,
        *ray.direction,
        pickables
            .iter()
            .map(|(pickable, transform)| (pickable.id, transform.translation(), pickable.radius)),
    );
    if let Some(id) = hit {
        select_events.send(BodySelected {
            id,
            origin: SelectOrigin::Scene,
        });
    }
}

/// Single writer folding hover/select events into the shared resources.
fn apply_events(
    mut hover_events: EventReader<HoverChanged>,
    mut select_events: EventReader<BodySelected>,
    mut hovered: ResMut<HoveredBody>,
    mut selected: ResMut<SelectedBody>,
    mut focus: ResMut<FocusState>,
) {
    for HoverChanged(id) in hover_events.read() {
        hovered.id = *id;
    }
    for event in select_events.read() {
        selected.id = event.id;
        if event.origin == SelectOrigin::Scene {
            focus.open = true;
        }
    }
}

/// Cursor shape for the current pointer state. `None` leaves egui's default.
pub fn hover_cursor(
    dragging: bool,
    body: Option<&str>,
    constellation: Option<&str>,
) -> Option<egui::CursorIcon> {
    if dragging {
        Some(egui::CursorIcon::Grabbing)
    } else if body.is_some() || constellation.is_some() {
        Some(egui::CursorIcon::PointingHand)
    } else {
        None
    }
}

fn update_cursor(
    tracker: Res<DragTracker>,
    hovered: Res<HoveredBody>,
    hovered_constellation: Res<HoveredConstellation>,
    mut contexts: EguiContexts,
) {
    let dragging = tracker.active && tracker.travel > CLICK_SLOP;
    let Some(cursor) = hover_cursor(dragging, hovered.id, hovered_constellation.id) else {
        return;
    };
    if let Some(ctx) = contexts.ctx_mut().ok() {
        ctx.set_cursor_icon(cursor);
    }
}

fn escape_closes_focus(keys: Res<ButtonInput<KeyCode>>, mut focus: ResMut<FocusState>) {
    if focus.open && keys.just_pressed(KeyCode::Escape) {
        focus.open = false;
    }
}
