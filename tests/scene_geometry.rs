//! Scene layout geometry: orbit spacing, sphere placement, scatter bounds.

use approx::assert_relative_eq;
use bevy::math::{Vec2, Vec3};
use std::collections::HashMap;

use astrodeck::catalog::{BodyKind, Catalog};
use astrodeck::views::sky::{constellation_segments, star_position};
use astrodeck::views::solar::{angular_speed, orbit_radius, planet_size};
use astrodeck::views::{belt_points, disc_band_points, shell_points};

#[test]
fn orbits_clear_the_sun_and_each_other() {
    let planet_count = Catalog::default().solar_system.len() - 1;
    let mut previous = 35.0; // Sun radius.
    for index in 0..planet_count {
        let radius = orbit_radius(index);
        assert!(
            radius > previous + planet_size(index),
            "orbit {index} at {radius} crowds {previous}"
        );
        previous = radius;
    }
}

#[test]
fn belts_sit_between_the_right_orbits() {
    // Asteroid belt between Mars (index 3) and Jupiter (index 5), with Ceres
    // (index 4) inside it.
    assert!(orbit_radius(3) < 360.0);
    assert!((360.0..=440.0).contains(&orbit_radius(4)));
    assert!(orbit_radius(5) > 440.0);

    // Kuiper belt outside Neptune (index 8).
    assert!(orbit_radius(8) > 900.0 || orbit_radius(9) > 900.0);
}

#[test]
fn orbital_period_scales_with_radius() {
    // Constant tangential speed: angular speed times radius is flat.
    let inner = angular_speed(0) * orbit_radius(0);
    let outer = angular_speed(9) * orbit_radius(9);
    assert_relative_eq!(inner, outer, epsilon = 1e-3);
}

#[test]
fn star_positions_are_unique_enough_to_pick() {
    // No two catalog stars may land close enough to fight over hover.
    let catalog = Catalog::default();
    let positions: Vec<(&str, Vec3)> = catalog
        .stars
        .iter()
        .map(|s| (s.id, star_position(s.position)))
        .collect();

    for (i, (id_a, a)) in positions.iter().enumerate() {
        for (id_b, b) in positions.iter().skip(i + 1) {
            let min_gap = BodyKind::System.sky_size() * 2.0;
            assert!(
                a.distance(*b) > min_gap,
                "{id_a} and {id_b} overlap at {a} / {b}"
            );
        }
    }
}

#[test]
fn antipodal_layout_positions_land_apart() {
    let east = star_position(Vec2::new(90.0, 0.0));
    let west = star_position(Vec2::new(-90.0, 0.0));
    assert_relative_eq!(east.distance(west), 5000.0, epsilon = 1.0);
}

#[test]
fn orion_figure_is_fully_connected() {
    let catalog = Catalog::default();
    let orion = catalog.constellation("orion").unwrap();

    let mut placements = HashMap::new();
    for star in catalog.stars {
        placements.insert(star.id, star_position(star.position));
    }
    let segments = constellation_segments(orion.connections, &placements);
    assert_eq!(segments.len(), 8);

    // Every segment endpoint lies on the star sphere.
    for (a, b) in segments {
        assert_relative_eq!(a.length(), 2500.0, epsilon = 1.0);
        assert_relative_eq!(b.length(), 2500.0, epsilon = 1.0);
    }
}

#[test]
fn scatter_helpers_respect_their_bounds() {
    let mut rng = rand::thread_rng();

    for point in shell_points(&mut rng, 1000, 8000.0, 8000.0) {
        assert_relative_eq!(point.length(), 8000.0, epsilon = 0.5);
    }

    for point in belt_points(&mut rng, 1000, 900.0, 1200.0, 8.0) {
        let planar = (point.x * point.x + point.z * point.z).sqrt();
        assert!((899.9..=1200.1).contains(&planar));
        assert!(point.y.abs() <= 4.01);
    }

    for point in disc_band_points(&mut rng, 1000, 4000.0, 4500.0, 200.0) {
        let planar = (point.x * point.x + point.z * point.z).sqrt();
        assert!((3999.9..=4500.1).contains(&planar));
        assert!(point.y.abs() <= 200.1);
    }
}
