//! Scene builders for the two view surfaces, plus shared scatter helpers.

pub mod sky;
pub mod solar;

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::Rng;

use crate::interaction::{HoveredBody, Pickable};
use crate::types::{SceneSet, ViewSettings, approach, HOVER_SMOOTHING, SCALE_SMOOTHING};

/// Registers both scene builders plus the animation systems they share.
pub struct ViewsPlugin;

impl Plugin for ViewsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((solar::SolarViewPlugin, sky::SkyViewPlugin))
            .add_systems(Update, (animate_hover, toggle_layers).in_set(SceneSet::Animate));
    }
}

/// Per-body hover animation state and material handles. Used by both views;
/// the targets differ per body, the easing does not.
#[derive(Component)]
pub struct BodyVisual {
    pub base_color: Color,
    pub hover_scale: f32,
    pub idle_emissive: f32,
    pub hover_emissive: f32,
    pub emissive: f32,
    pub glow: Handle<StandardMaterial>,
    pub idle_glow_alpha: f32,
    pub hover_glow_alpha: f32,
    pub glow_alpha: f32,
    pub idle_ring_alpha: f32,
    pub hover_ring_alpha: f32,
    pub ring_alpha: f32,
}

/// Tag for the coordinate-grid layer, toggled from the control panel.
#[derive(Component)]
pub struct GridLayer;

/// Tag for the milky-way wash layer.
#[derive(Component)]
pub struct MilkyWayLayer;

/// Ease scale, emissive, and glow toward hover targets.
fn animate_hover(
    hovered: Res<HoveredBody>,
    mut bodies: Query<(
        &Pickable,
        &mut BodyVisual,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (pickable, mut visual, mut transform, material) in bodies.iter_mut() {
        let is_hovered = hovered.id == Some(pickable.id);

        let scale_target = if is_hovered { visual.hover_scale } else { 1.0 };
        let next_scale = approach(transform.scale.x, scale_target, SCALE_SMOOTHING);
        transform.scale = Vec3::splat(next_scale);

        let emissive_target = if is_hovered {
            visual.hover_emissive
        } else {
            visual.idle_emissive
        };
        visual.emissive = approach(visual.emissive, emissive_target, HOVER_SMOOTHING);
        if let Some(material) = materials.get_mut(&material.0) {
            material.emissive = visual.base_color.to_linear() * visual.emissive;
        }

        let glow_target = if is_hovered {
            visual.hover_glow_alpha
        } else {
            visual.idle_glow_alpha
        };
        visual.glow_alpha = approach(visual.glow_alpha, glow_target, HOVER_SMOOTHING);
        let glow_handle = visual.glow.clone();
        if let Some(glow) = materials.get_mut(&glow_handle) {
            glow.base_color = visual.base_color.with_alpha(visual.glow_alpha);
        }

        let ring_target = if is_hovered {
            visual.hover_ring_alpha
        } else {
            visual.idle_ring_alpha
        };
        visual.ring_alpha = approach(visual.ring_alpha, ring_target, HOVER_SMOOTHING);
    }
}

/// Apply the layer toggles to tagged entities in whichever view is active.
///
/// Runs unconditionally so layer entities spawned by a scene rebuild pick up
/// the current toggle state on their first frame.
pub fn toggle_layers(
    settings: Res<ViewSettings>,
    mut grid_query: Query<&mut Visibility, (With<GridLayer>, Without<MilkyWayLayer>)>,
    mut milky_query: Query<&mut Visibility, With<MilkyWayLayer>>,
) {
    for mut visibility in grid_query.iter_mut() {
        visibility.set_if_neq(if settings.show_grid {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
    for mut visibility in milky_query.iter_mut() {
        visibility.set_if_neq(if settings.show_milky_way {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

/// Build a point-list mesh from pre-scattered positions.
pub fn point_cloud_mesh(points: Vec<Vec3>) -> Mesh {
    let positions: Vec<[f32; 3]> = points.into_iter().map(|p| p.to_array()).collect();
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

/// Unlit translucent material for point clouds and glow shells.
pub fn cloud_material(color: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(opacity),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Scatter points uniformly over a spherical shell between two radii.
///
/// Uses the cos-latitude trick (`cos phi = 2u - 1`) so density is even over
/// the sphere rather than bunching at the poles.
pub fn shell_points(rng: &mut impl Rng, count: usize, radius_min: f32, radius_max: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let theta = rng.gen_range(0.0..std::f32::consts::TAU);
            let cos_phi: f32 = rng.gen_range(-1.0..1.0f32);
            let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
            let r = rng.gen_range(radius_min..=radius_max);
            Vec3::new(
                r * sin_phi * theta.cos(),
                r * cos_phi,
                r * sin_phi * theta.sin(),
            )
        })
        .collect()
}

/// Scatter points in a flat annulus with a little vertical jitter, for
/// asteroid and Kuiper belts.
pub fn belt_points(
    rng: &mut impl Rng,
    count: usize,
    radius_min: f32,
    radius_max: f32,
    thickness: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = rng.gen_range(radius_min..=radius_max);
            let y = (rng.gen_range(0.0..1.0f32) - 0.5) * thickness;
            Vec3::new(r * angle.cos(), y, r * angle.sin())
        })
        .collect()
}

/// Scatter points in a flattened disc band, for the milky-way wash.
pub fn disc_band_points(
    rng: &mut impl Rng,
    count: usize,
    radius_min: f32,
    radius_max: f32,
    half_height: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = rng.gen_range(radius_min..=radius_max);
            let y = rng.gen_range(-half_height..=half_height);
            Vec3::new(r * angle.cos(), y, r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_points_stay_in_radius_band() {
        let mut rng = rand::thread_rng();
        for point in shell_points(&mut rng, 500, 100.0, 120.0) {
            let r = point.length();
            assert!((99.9..=120.1).contains(&r), "radius {r} out of band");
        }
    }

    #[test]
    fn belt_points_stay_in_annulus() {
        let mut rng = rand::thread_rng();
        for point in belt_points(&mut rng, 500, 360.0, 440.0, 8.0) {
            let planar = Vec2::new(point.x, point.z).length();
            assert!((359.9..=440.1).contains(&planar), "radius {planar}");
            assert!(point.y.abs() <= 4.01, "thickness {}", point.y);
        }
    }

    #[test]
    fn point_cloud_mesh_keeps_all_points() {
        let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let mesh = point_cloud_mesh(points);
        assert_eq!(mesh.count_vertices(), 3);
    }
}
