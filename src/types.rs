//! Shared view-state types and smoothing helpers for the dashboard.

use bevy::prelude::*;

/// Minimum zoom level (furthest out).
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level (closest in).
pub const MAX_ZOOM: f32 = 8.0;

/// Default zoom level.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom increment for the +/- controls.
pub const ZOOM_STEP: f32 = 0.3;

/// Zoom speed multiplier for the scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Per-frame blend factor for scene rotation and camera distance.
///
/// Deliberately not delta-time corrected: convergence speed tracks the actual
/// frame rate, matching the original dashboard's feel.
pub const SCENE_SMOOTHING: f32 = 0.05;

/// Per-frame blend factor for hover glow/opacity transitions.
pub const HOVER_SMOOTHING: f32 = 0.1;

/// Per-frame blend factor for hover scale pop.
pub const SCALE_SMOOTHING: f32 = 0.15;

/// Frame ordering for the scene systems: orientation/zoom smoothing settles
/// first, then per-object animation reads the result.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    Smoothing,
    Animate,
}

/// Which visualization the main surface is showing.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Solar-system orrery view.
    #[default]
    Solar,
    /// Deep-sky star map view.
    Sky,
}

impl ViewMode {
    /// Camera field of view for this surface, in radians.
    pub fn fov(self) -> f32 {
        match self {
            ViewMode::Solar => 45f32.to_radians(),
            ViewMode::Sky => 60f32.to_radians(),
        }
    }

    /// Camera distance from the origin at zoom = 1.0.
    pub fn base_distance(self) -> f32 {
        match self {
            ViewMode::Solar => 1200.0,
            ViewMode::Sky => 1500.0,
        }
    }
}

/// Desired scene tilt, in degrees. The rig approaches this smoothly; the UI
/// never writes rotation onto the scene directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Yaw around the vertical axis, wrapped to [-180, 180].
    pub rotation: f32,
    /// Tilt above the ecliptic, clamped to [0, 90].
    pub inclination: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            inclination: 45.0,
        }
    }
}

impl Orientation {
    /// Apply a drag delta in screen pixels, wrapping and clamping.
    pub fn apply_drag(&mut self, delta: Vec2) {
        self.rotation = wrap_degrees(self.rotation + delta.x * 0.5);
        self.inclination = (self.inclination - delta.y * 0.3).clamp(0.0, 90.0);
    }
}

/// Orientation and zoom targets for one view surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewControl {
    pub orientation: Orientation,
    pub zoom_level: f32,
}

impl ViewControl {
    fn new() -> Self {
        Self {
            orientation: Orientation::default(),
            zoom_level: DEFAULT_ZOOM,
        }
    }

    /// Current zoom, clamped into the valid range.
    pub fn zoom(&self) -> f32 {
        self.zoom_level.clamp(MIN_ZOOM, MAX_ZOOM)
    }

    /// Adjust zoom by a signed amount, clamping.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom_level = (self.zoom_level + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Scale zoom by a factor (scroll wheel), clamping.
    pub fn zoom_scale(&mut self, factor: f32) {
        self.zoom_level = (self.zoom_level * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Restore the default orientation and zoom.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Resource holding per-view orientation/zoom targets and the layer toggles
/// shared between both views. Each view keeps its own control state.
#[derive(Resource, Debug, Clone)]
pub struct ViewSettings {
    pub solar: ViewControl,
    pub sky: ViewControl,
    pub show_grid: bool,
    pub show_milky_way: bool,
    pub show_constellations: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            solar: ViewControl::new(),
            sky: ViewControl::new(),
            show_grid: false,
            show_milky_way: true,
            show_constellations: true,
        }
    }
}

impl ViewSettings {
    pub fn control(&self, mode: ViewMode) -> &ViewControl {
        match mode {
            ViewMode::Solar => &self.solar,
            ViewMode::Sky => &self.sky,
        }
    }

    pub fn control_mut(&mut self, mode: ViewMode) -> &mut ViewControl {
        match mode {
            ViewMode::Solar => &mut self.solar,
            ViewMode::Sky => &mut self.sky,
        }
    }
}

/// Move `current` a fixed fraction of the way toward `target`.
///
/// Exponential smoothing with a constant per-frame blend factor. With
/// 0 < k < 1 the error shrinks strictly every call until it converges.
pub fn approach(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

/// Wrap an angle in degrees to the [-180, 180] range.
pub fn wrap_degrees(mut degrees: f32) -> f32 {
    while degrees > 180.0 {
        degrees -= 360.0;
    }
    while degrees < -180.0 {
        degrees += 360.0;
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_converges_monotonically() {
        let target = 10.0f32;
        let mut current = 0.0f32;
        let mut error = (target - current).abs();

        for _ in 0..200 {
            current = approach(current, target, SCENE_SMOOTHING);
            let next_error = (target - current).abs();
            assert!(next_error < error, "error must strictly decrease");
            error = next_error;
        }
        assert!(error < 1e-3);
    }

    #[test]
    fn approach_is_stable_at_target() {
        assert_eq!(approach(5.0, 5.0, 0.1), 5.0);
    }

    #[test]
    fn wrap_degrees_range() {
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(45.0), 45.0);
        let wrapped = wrap_degrees(540.0);
        assert!((-180.0..=180.0).contains(&wrapped));
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut control = ViewControl::new();
        for _ in 0..100 {
            control.zoom_by(ZOOM_STEP);
        }
        assert_eq!(control.zoom(), MAX_ZOOM);

        for _ in 0..100 {
            control.zoom_by(-ZOOM_STEP);
        }
        assert_eq!(control.zoom(), MIN_ZOOM);

        control.zoom_scale(1000.0);
        assert_eq!(control.zoom(), MAX_ZOOM);
    }

    #[test]
    fn drag_clamps_inclination() {
        let mut orientation = Orientation::default();
        orientation.apply_drag(Vec2::new(0.0, 10_000.0));
        assert_eq!(orientation.inclination, 0.0);
        orientation.apply_drag(Vec2::new(0.0, -10_000.0));
        assert_eq!(orientation.inclination, 90.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut control = ViewControl::new();
        control.zoom_by(2.0);
        control.orientation.apply_drag(Vec2::new(100.0, -40.0));
        control.reset();
        assert_eq!(control.zoom(), DEFAULT_ZOOM);
        assert_eq!(control.orientation, Orientation::default());
    }
}
