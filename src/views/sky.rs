//! Deep-sky star map: named stars on a celestial sphere, constellation
//! figures, grid and milky-way layers, and hover-faded labels.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use rand::Rng;
use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::engine::{MainCamera, SceneObject, SceneRig};
use crate::interaction::{HoveredBody, HoveredConstellation, Pickable};
use crate::types::{SceneSet, ViewMode, ViewSettings, approach, HOVER_SMOOTHING};
use crate::views::{
    cloud_material, point_cloud_mesh, shell_points, BodyVisual, GridLayer, MilkyWayLayer,
};

/// Radius of the sphere named stars sit on.
const STAR_SPHERE_RADIUS: f32 = 2500.0;

/// Radius of the RA/Dec reference grid.
const GRID_RADIUS: f32 = 3000.0;

/// Distance of the N/S/E/W cardinal markers.
const CARDINAL_DISTANCE: f32 = 3200.0;

const BASE_FPS: f32 = 60.0;

/// Slow ambient rotation, radians per second around local Y.
#[derive(Component)]
pub struct SkySpin(pub f32);

/// Hover-faded name label attached to a star marker.
#[derive(Component)]
pub struct StarLabel {
    pub text: String,
    pub alpha: f32,
}

/// One constellation's line figure, in rig-local coordinates.
///
/// Built from catalog connections; pairs naming unknown stars are dropped
/// here without complaint.
#[derive(Component)]
pub struct ConstellationLines {
    pub id: &'static str,
    pub segments: Vec<(Vec3, Vec3)>,
    pub anchor: Vec3,
    pub alpha: f32,
}

pub struct SkyViewPlugin;

impl Plugin for SkyViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewMode::Sky), spawn_sky_scene)
            .add_systems(
                Update,
                (ambient_spin, fade_star_labels, fade_constellations, draw_constellations, draw_sky_grid)
                    .in_set(SceneSet::Animate)
                    .run_if(in_state(ViewMode::Sky)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                draw_sky_labels.run_if(in_state(ViewMode::Sky)),
            );
    }
}

/// Place a catalog layout position on the celestial sphere.
///
/// Treats `y` as declination-like degrees from the pole and `x` as right
/// ascension. Values outside [-90, 90] wrap around the sphere, which the
/// catalog uses freely for composition.
pub fn star_position(layout: Vec2) -> Vec3 {
    let phi = (90.0 - layout.y).to_radians();
    let theta = layout.x.to_radians();
    Vec3::new(
        STAR_SPHERE_RADIUS * phi.sin() * theta.cos(),
        STAR_SPHERE_RADIUS * phi.cos(),
        STAR_SPHERE_RADIUS * phi.sin() * theta.sin(),
    )
}

/// Build the line segments for one constellation, skipping pairs whose
/// endpoints are missing from the placement map.
pub fn constellation_segments(
    connections: &[(&str, &str)],
    placements: &HashMap<&str, Vec3>,
) -> Vec<(Vec3, Vec3)> {
    connections
        .iter()
        .filter_map(|(a, b)| {
            let a = placements.get(a)?;
            let b = placements.get(b)?;
            Some((*a, *b))
        })
        .collect()
}

fn spawn_sky_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<Catalog>,
    rig_query: Query<Entity, With<SceneRig>>,
) {
    let Ok(rig) = rig_query.get_single() else {
        return;
    };
    let mut rng = rand::thread_rng();

    let mut placements: HashMap<&str, Vec3> = HashMap::new();
    for star in catalog.stars {
        placements.insert(star.id, star_position(star.position));
    }

    commands.entity(rig).with_children(|parent| {
        // Distant backdrop, spinning almost imperceptibly.
        parent.spawn((
            SceneObject,
            SkySpin(0.000_05 * BASE_FPS),
            Mesh3d(meshes.add(point_cloud_mesh(shell_points(&mut rng, 15_000, 8000.0, 8000.0)))),
            MeshMaterial3d(materials.add(cloud_material(Color::WHITE, 0.3))),
            Transform::default(),
        ));

        // Milky-way band, tilted off the equator.
        let milky_points: Vec<Vec3> = (0..4000)
            .map(|_| {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let drift = (rng.gen_range(0.0..1.0f32) - 0.5) * 400.0;
                Vec3::new(
                    3500.0 * angle.cos() + drift,
                    (rng.gen_range(0.0..1.0f32) - 0.5) * 600.0,
                    3500.0 * angle.sin() + drift,
                )
            })
            .collect();
        parent.spawn((
            SceneObject,
            MilkyWayLayer,
            SkySpin(0.000_1 * BASE_FPS),
            Mesh3d(meshes.add(point_cloud_mesh(milky_points))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.3, 0.5, 0.8).with_alpha(0.15),
                unlit: true,
                alpha_mode: AlphaMode::Add,
                ..default()
            })),
            Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::PI * 0.15)),
        ));

        // Named stars with glow shells and fading labels.
        for star in catalog.stars {
            let position = placements[star.id];
            let size = star.kind.sky_size();
            let color = super::solar::body_color(star.colors[0]);
            let glow_material = materials.add(StandardMaterial {
                base_color: color.with_alpha(0.2),
                unlit: true,
                alpha_mode: AlphaMode::Add,
                ..default()
            });

            parent
                .spawn((
                    SceneObject,
                    Mesh3d(meshes.add(Sphere::new(size))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: color,
                        emissive: color.to_linear(),
                        unlit: true,
                        ..default()
                    })),
                    Transform::from_translation(position),
                    Pickable {
                        id: star.id,
                        radius: size * 3.0,
                    },
                    StarLabel {
                        text: star.name.to_lowercase(),
                        alpha: 0.0,
                    },
                    BodyVisual {
                        base_color: color,
                        hover_scale: 2.5,
                        idle_emissive: 1.0,
                        hover_emissive: 1.5,
                        emissive: 1.0,
                        glow: glow_material.clone(),
                        idle_glow_alpha: 0.2,
                        hover_glow_alpha: 0.8,
                        glow_alpha: 0.2,
                        idle_ring_alpha: 0.0,
                        hover_ring_alpha: 0.0,
                        ring_alpha: 0.0,
                    },
                ))
                .with_children(|star_parent| {
                    star_parent.spawn((
                        Mesh3d(meshes.add(Sphere::new(size * 3.0))),
                        MeshMaterial3d(glow_material),
                        Transform::default(),
                    ));
                });
        }

        // Constellation figures. The gizmo pass draws them; the entity holds
        // the geometry and hover fade.
        for constellation in catalog.constellations {
            let segments = constellation_segments(constellation.connections, &placements);
            let anchor = constellation
                .connections
                .first()
                .and_then(|(a, _)| placements.get(a))
                .map(|p| *p * 1.1)
                .unwrap_or(Vec3::ZERO);
            parent.spawn((
                SceneObject,
                ConstellationLines {
                    id: constellation.id,
                    segments,
                    anchor,
                    alpha: 0.3,
                },
                Transform::default(),
                Visibility::default(),
            ));
        }

        // Tag entity so the grid toggle has something to flip even though the
        // grid itself is gizmo-drawn.
        parent.spawn((SceneObject, GridLayer, Transform::default(), Visibility::default()));
    });
}

fn ambient_spin(time: Res<Time>, mut spinners: Query<(&SkySpin, &mut Transform)>) {
    for (spin, mut transform) in spinners.iter_mut() {
        transform.rotate_local_y(spin.0 * time.delta_secs());
    }
}

fn fade_star_labels(hovered: Res<HoveredBody>, mut labels: Query<(&Pickable, &mut StarLabel)>) {
    for (pickable, mut label) in labels.iter_mut() {
        let target = if hovered.id == Some(pickable.id) { 1.0 } else { 0.0 };
        label.alpha = approach(label.alpha, target, HOVER_SMOOTHING);
    }
}

fn fade_constellations(
    hovered: Res<HoveredConstellation>,
    mut figures: Query<&mut ConstellationLines>,
) {
    for mut figure in figures.iter_mut() {
        let target = if hovered.id == Some(figure.id) { 1.0 } else { 0.3 };
        figure.alpha = approach(figure.alpha, target, HOVER_SMOOTHING);
    }
}

/// Draw constellation figures each frame, in world space via each figure's
/// transform.
fn draw_constellations(
    mut gizmos: Gizmos,
    settings: Res<ViewSettings>,
    figures: Query<(&ConstellationLines, &GlobalTransform)>,
) {
    if !settings.show_constellations {
        return;
    }
    let base = Color::srgb_u8(0x4d, 0xee, 0xea);
    for (figure, transform) in figures.iter() {
        let color = base.with_alpha(figure.alpha);
        for &(a, b) in &figure.segments {
            gizmos.line(transform.transform_point(a), transform.transform_point(b), color);
        }
    }
}

/// RA/Dec reference sphere: 24 meridians and 17 parallels.
fn draw_sky_grid(
    mut gizmos: Gizmos,
    settings: Res<ViewSettings>,
    rig_query: Query<&GlobalTransform, With<SceneRig>>,
) {
    if !settings.show_grid {
        return;
    }
    let Ok(rig) = rig_query.get_single() else {
        return;
    };
    let color = Color::srgb_u8(0x4d, 0xee, 0xea).with_alpha(0.1);

    for i in 0..24 {
        let angle = i as f32 / 24.0 * std::f32::consts::TAU;
        let points: Vec<Vec3> = (0..=64)
            .map(|j| {
                let phi = j as f32 / 64.0 * std::f32::consts::PI;
                rig.transform_point(Vec3::new(
                    GRID_RADIUS * phi.sin() * angle.cos(),
                    GRID_RADIUS * phi.cos(),
                    GRID_RADIUS * phi.sin() * angle.sin(),
                ))
            })
            .collect();
        gizmos.linestrip(points, color);
    }

    for i in -8i32..=8 {
        let phi = (i + 9) as f32 / 18.0 * std::f32::consts::PI;
        let points: Vec<Vec3> = (0..=64)
            .map(|j| {
                let theta = j as f32 / 64.0 * std::f32::consts::TAU;
                rig.transform_point(Vec3::new(
                    GRID_RADIUS * phi.sin() * theta.cos(),
                    GRID_RADIUS * phi.cos(),
                    GRID_RADIUS * phi.sin() * theta.sin(),
                ))
            })
            .collect();
        gizmos.linestrip(points, color);
    }
}

/// Screen-space labels: star names on hover, cardinal markers, and the
/// hovered constellation's name.
fn draw_sky_labels(
    mut contexts: EguiContexts,
    settings: Res<ViewSettings>,
    hovered_constellation: Res<HoveredConstellation>,
    catalog: Res<Catalog>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    rig_query: Query<&GlobalTransform, With<SceneRig>>,
    stars: Query<(&StarLabel, &GlobalTransform)>,
    figures: Query<(&ConstellationLines, &GlobalTransform)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Ok(rig) = rig_query.get_single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("sky_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            // Cardinal markers ride the rig so they track orientation.
            let cardinals = [
                ("N", Vec3::new(0.0, 0.0, -CARDINAL_DISTANCE)),
                ("S", Vec3::new(0.0, 0.0, CARDINAL_DISTANCE)),
                ("E", Vec3::new(CARDINAL_DISTANCE, 0.0, 0.0)),
                ("W", Vec3::new(-CARDINAL_DISTANCE, 0.0, 0.0)),
            ];
            for (text, local) in cardinals {
                let world = rig.transform_point(local);
                let Ok(screen) = camera.world_to_viewport(camera_transform, world) else {
                    continue;
                };
                painter.text(
                    egui::pos2(screen.x, screen.y),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::monospace(22.0),
                    egui::Color32::from_rgba_unmultiplied(0x4d, 0xee, 0xea, 153),
                );
            }

            for (label, transform) in stars.iter() {
                if label.alpha < 0.02 {
                    continue;
                }
                let Ok(screen) = camera.world_to_viewport(camera_transform, transform.translation())
                else {
                    continue;
                };
                let alpha = (label.alpha * 255.0) as u8;
                painter.text(
                    egui::pos2(screen.x + 18.0, screen.y - 10.0),
                    egui::Align2::LEFT_CENTER,
                    &label.text,
                    egui::FontId::proportional(15.0),
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
                );
            }

            if settings.show_constellations {
                if let Some(id) = hovered_constellation.id {
                    for (figure, transform) in figures.iter() {
                        if figure.id != id {
                            continue;
                        }
                        let name = catalog
                            .constellation(figure.id)
                            .map(|c| c.name.to_uppercase())
                            .unwrap_or_default();
                        let world = transform.transform_point(figure.anchor);
                        if let Ok(screen) = camera.world_to_viewport(camera_transform, world) {
                            painter.text(
                                egui::pos2(screen.x, screen.y),
                                egui::Align2::CENTER_CENTER,
                                name,
                                egui::FontId::proportional(20.0),
                                egui::Color32::from_rgba_unmultiplied(0x4d, 0xee, 0xea, 204),
                            );
                        }
                    }
                }
            }
        });
}
