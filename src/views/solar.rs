//! Solar-system orrery: stylized orbits, belts, and hover glow.
//!
//! Layout is decorative. Orbit radii and speeds are tuned for composition on
//! screen, not scaled from real ephemerides.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::Catalog;
use crate::engine::{SceneObject, SceneRig};
use crate::interaction::Pickable;
use crate::types::{SceneSet, ViewMode, ViewSettings};
use crate::views::{
    belt_points, cloud_material, disc_band_points, point_cloud_mesh, shell_points, BodyVisual,
    MilkyWayLayer,
};

const SUN_RADIUS: f32 = 35.0;
const SUN_GLOW_RADIUS: f32 = 45.0;

/// Reference frame rate the original per-frame speeds were tuned against.
const BASE_FPS: f32 = 60.0;

/// A planet on its decorative circular orbit.
#[derive(Component)]
pub struct Planet {
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub angle: f32,
}

/// Constant self-rotation, radians per second.
#[derive(Component)]
pub struct Spin(pub f32);

pub struct SolarViewPlugin;

impl Plugin for SolarViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewMode::Solar), spawn_solar_scene)
            .add_systems(
                Update,
                (animate_orbits, spin_bodies, draw_orbit_rings, draw_solar_grid)
                    .in_set(SceneSet::Animate)
                    .run_if(in_state(ViewMode::Solar)),
            );
    }
}

/// Orbit radius for the nth planet out from the Sun (Mercury is 0).
pub fn orbit_radius(index: usize) -> f32 {
    match index {
        0..=3 => (index as f32 + 1.0) * 70.0 + 60.0,
        4 => 400.0,
        _ => (index as f32 - 4.0) * 120.0 + 550.0,
    }
}

/// Rendered sphere radius for the nth planet.
pub fn planet_size(index: usize) -> f32 {
    12.0 + index as f32 * 2.0
}

/// Angular speed in radians per second; outer planets crawl.
pub fn angular_speed(index: usize) -> f32 {
    0.3 / orbit_radius(index) * BASE_FPS
}

pub(crate) fn body_color(hex: &str) -> Color {
    crate::theme::parse_hex(hex)
        .map(|c| {
            let [r, g, b, _] = c.to_array();
            Color::srgb_u8(r, g, b)
        })
        .unwrap_or(Color::WHITE)
}

fn spawn_solar_scene(
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

    commands.entity(rig).with_children(|parent| {
        // Sun with its glow shell.
        let sun = catalog.sun();
        let sun_color = body_color(sun.colors[0]);
        let glow_material = materials.add(StandardMaterial {
            base_color: sun_color.with_alpha(0.3),
            emissive: sun_color.to_linear() * 0.5,
            unlit: true,
            alpha_mode: AlphaMode::Add,
            ..default()
        });
        parent
            .spawn((
                SceneObject,
                Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: sun_color,
                    emissive: sun_color.to_linear() * 2.0,
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
                Pickable {
                    id: sun.id,
                    radius: SUN_RADIUS * 1.5,
                },
                Spin(0.005 * BASE_FPS),
                BodyVisual {
                    base_color: sun_color,
                    hover_scale: 1.2,
                    idle_emissive: 2.0,
                    hover_emissive: 2.5,
                    emissive: 2.0,
                    glow: glow_material.clone(),
                    idle_glow_alpha: 0.3,
                    hover_glow_alpha: 0.6,
                    glow_alpha: 0.3,
                    idle_ring_alpha: 0.0,
                    hover_ring_alpha: 0.0,
                    ring_alpha: 0.0,
                },
            ))
            .with_children(|sun_parent| {
                sun_parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(SUN_GLOW_RADIUS))),
                    MeshMaterial3d(glow_material),
                    Transform::default(),
                ));
            });

        // Planets.
        for (index, body) in catalog.solar_system.iter().skip(1).enumerate() {
            let size = planet_size(index);
            let radius = orbit_radius(index);
            let color = body_color(body.colors[0]);
            let glow_material = materials.add(StandardMaterial {
                base_color: color.with_alpha(0.08),
                unlit: true,
                alpha_mode: AlphaMode::Add,
                ..default()
            });
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);

            parent
                .spawn((
                    SceneObject,
                    Mesh3d(meshes.add(Sphere::new(size))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: color,
                        emissive: color.to_linear() * 1.2,
                        ..default()
                    })),
                    Transform::from_xyz(radius * angle.cos(), 0.0, radius * angle.sin()),
                    Pickable {
                        id: body.id,
                        radius: size * 1.5,
                    },
                    Planet {
                        orbit_radius: radius,
                        angular_speed: angular_speed(index),
                        angle,
                    },
                    Spin(0.01 * BASE_FPS),
                    BodyVisual {
                        base_color: color,
                        hover_scale: 1.5,
                        idle_emissive: 0.8,
                        hover_emissive: 2.5,
                        emissive: 1.2,
                        glow: glow_material.clone(),
                        idle_glow_alpha: 0.05,
                        hover_glow_alpha: 0.6,
                        glow_alpha: 0.08,
                        idle_ring_alpha: 0.1,
                        hover_ring_alpha: 0.5,
                        ring_alpha: 0.1,
                    },
                ))
                .with_children(|planet_parent| {
                    planet_parent.spawn((
                        Mesh3d(meshes.add(Sphere::new(size * 1.7))),
                        MeshMaterial3d(glow_material),
                        Transform::default(),
                    ));
                });
        }

        // Asteroid and Kuiper belts.
        parent.spawn((
            SceneObject,
            Mesh3d(meshes.add(point_cloud_mesh(belt_points(&mut rng, 2500, 360.0, 440.0, 8.0)))),
            MeshMaterial3d(materials.add(cloud_material(Color::srgb_u8(0x88, 0x88, 0x88), 0.6))),
            Transform::default(),
        ));
        parent.spawn((
            SceneObject,
            Mesh3d(meshes.add(point_cloud_mesh(belt_points(&mut rng, 4000, 900.0, 1200.0, 8.0)))),
            MeshMaterial3d(materials.add(cloud_material(Color::srgb_u8(0x44, 0x88, 0xff), 0.6))),
            Transform::default(),
        ));

        // Distant starfield and milky-way wash.
        parent.spawn((
            SceneObject,
            Mesh3d(meshes.add(point_cloud_mesh(shell_points(&mut rng, 8000, 9000.0, 9000.0)))),
            MeshMaterial3d(materials.add(cloud_material(Color::WHITE, 0.2))),
            Transform::default(),
        ));
        parent.spawn((
            SceneObject,
            MilkyWayLayer,
            Mesh3d(meshes.add(point_cloud_mesh(disc_band_points(
                &mut rng, 2000, 4000.0, 4500.0, 200.0,
            )))),
            MeshMaterial3d(materials.add(cloud_material(Color::srgb_u8(0x4d, 0x88, 0xff), 0.1))),
            Transform::default(),
        ));
    });
}

fn animate_orbits(time: Res<Time>, mut planets: Query<(&mut Planet, &mut Transform)>) {
    for (mut planet, mut transform) in planets.iter_mut() {
        planet.angle += planet.angular_speed * time.delta_secs();
        transform.translation.x = planet.orbit_radius * planet.angle.cos();
        transform.translation.z = planet.orbit_radius * planet.angle.sin();
    }
}

fn spin_bodies(time: Res<Time>, mut bodies: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in bodies.iter_mut() {
        transform.rotate_y(spin.0 * time.delta_secs());
    }
}

/// Orbit rings, drawn fresh each frame in rig space.
fn draw_orbit_rings(
    mut gizmos: Gizmos,
    rig_query: Query<&GlobalTransform, With<SceneRig>>,
    planets: Query<(&Planet, &BodyVisual)>,
) {
    let Ok(rig) = rig_query.get_single() else {
        return;
    };
    for (planet, visual) in planets.iter() {
        let color = visual.base_color.with_alpha(visual.ring_alpha);
        draw_rig_circle(&mut gizmos, rig, planet.orbit_radius, color);
    }
}

/// Faint concentric reference rings when the grid layer is on.
fn draw_solar_grid(
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
    let color = Color::srgb_u8(0x4d, 0xee, 0xea).with_alpha(0.02);
    let mut radius = 180.0;
    while radius <= 1500.0 {
        draw_rig_circle(&mut gizmos, rig, radius, color);
        radius += 120.0;
    }
}

pub(crate) fn draw_rig_circle(
    gizmos: &mut Gizmos,
    rig: &GlobalTransform,
    radius: f32,
    color: Color,
) {
    const SEGMENTS: u32 = 96;
    let points: Vec<Vec3> = (0..=SEGMENTS)
        .map(|i| {
            let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
            rig.transform_point(Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()))
        })
        .collect();
    gizmos.linestrip(points, color);
}
