//! Interaction model tests: raycast priority, hover dedup semantics, and the
//! search/distance service contracts.

use bevy::math::{Vec2, Vec3};

use astrodeck::catalog::Catalog;
use astrodeck::interaction::{pick_closest, ray_segment_distance, ray_sphere_hit};
use astrodeck::search::{display_distance, search};
use astrodeck::views::sky::star_position;

#[test]
fn bodies_win_over_lines_by_construction() {
    // The hover pass only consults segments when no sphere was hit, so a
    // sphere dead ahead must register even with a segment closer to the ray.
    let body_hit = pick_closest(
        Vec3::ZERO,
        Vec3::Z,
        [("mars", Vec3::new(0.0, 0.0, 200.0), 20.0)].into_iter(),
    );
    assert_eq!(body_hit, Some("mars"));

    let segment = (Vec3::new(-5.0, 0.0, 100.0), Vec3::new(5.0, 0.0, 100.0));
    let line_distance = ray_segment_distance(Vec3::ZERO, Vec3::Z, segment.0, segment.1);
    assert!(line_distance < 30.0, "segment would be hoverable on its own");
}

#[test]
fn grazing_ray_still_hits() {
    // Ray passing just inside the pick sphere's edge.
    let t = ray_sphere_hit(Vec3::ZERO, Vec3::Z, Vec3::new(9.9, 0.0, 100.0), 10.0);
    assert!(t.is_some());

    let miss = ray_sphere_hit(Vec3::ZERO, Vec3::Z, Vec3::new(10.1, 0.0, 100.0), 10.0);
    assert!(miss.is_none());
}

#[test]
fn hit_from_inside_the_sphere_reports_negative_range() {
    // Camera inside a glow shell: near intersection is behind the origin but
    // the body still counts as under the pointer.
    let t = ray_sphere_hit(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 10.0);
    assert!(t.is_some());
    assert!(t.unwrap() < 0.0);
}

#[test]
fn overlapping_pick_spheres_resolve_by_depth() {
    // A big far sphere must not shadow a small near one.
    let hit = pick_closest(
        Vec3::ZERO,
        Vec3::Z,
        [
            ("giant_far", Vec3::new(0.0, 0.0, 900.0), 120.0),
            ("small_near", Vec3::new(2.0, 0.0, 300.0), 15.0),
        ]
        .into_iter(),
    );
    assert_eq!(hit, Some("small_near"));
}

#[test]
fn search_covers_both_name_fields() {
    let catalog = Catalog::default();

    // Common name.
    assert!(search(&catalog, "Polaris").iter().any(|b| b.id == "polaris"));
    // Scientific name only.
    assert!(search(&catalog, "Messier").iter().any(|b| b.id == "andromeda_gal"));
    // No match.
    assert!(search(&catalog, "xyzzy").is_empty());
}

#[test]
fn search_spans_both_views() {
    let catalog = Catalog::default();
    let hits = search(&catalog, "a");
    let has_solar = hits.iter().any(|b| b.id == "mars");
    let has_sky = hits.iter().any(|b| b.id == "aldebaran");
    assert!(has_solar && has_sky, "one query searches the whole catalog");
}

#[test]
fn distance_readout_matches_layout_offsets() {
    let catalog = Catalog::default();
    let earth = catalog.earth();
    let mars = catalog.by_id("mars").unwrap();

    // Earth at x=2.0, Mars at x=2.8 in the layout.
    let expected = (2.8f32 - 2.0) * 149.6;
    let rendered = display_distance(mars, earth);
    assert_eq!(rendered, format!("{expected:.2}M KM"));
}

#[test]
fn distance_origin_marker_only_for_coincident_bodies() {
    let catalog = Catalog::default();
    let sun = catalog.sun();
    assert_eq!(display_distance(sun, sun), "EQUATORIAL_ORIGIN");

    // Polaris sits at x=0 like the Sun, but y differs.
    let polaris = catalog.by_id("polaris").unwrap();
    assert_ne!(display_distance(polaris, sun), "EQUATORIAL_ORIGIN");
}

#[test]
fn hover_lands_anywhere_along_long_figure_chords() {
    // The longest catalog chords span thousands of world units (Draco's
    // thuban-eltanin, Orion's betelgeuse-alnitak). A ray aimed straight
    // through any interior point of the chord must report zero distance,
    // including points far from either endpoint.
    let catalog = Catalog::default();
    let camera = Vec3::new(0.0, 0.0, 1500.0);

    for (from, to) in [("thuban", "eltanin"), ("betelgeuse", "alnitak")] {
        let a = star_position(catalog.by_id(from).unwrap().position);
        let b = star_position(catalog.by_id(to).unwrap().position);
        assert!(a.distance(b) > 3000.0, "{from}-{to} should be a long chord");

        for i in 0..=32 {
            let point = a.lerp(b, i as f32 / 32.0);
            let direction = (point - camera).normalize();
            let d = ray_segment_distance(camera, direction, a, b);
            assert!(d < 1.0, "{from}-{to} at t={}: distance {d}", i as f32 / 32.0);
        }
    }
}

#[test]
fn segment_distance_respects_endpoints() {
    // The ray misses the segment's span entirely; the nearest point is an
    // endpoint, not an interior projection.
    let a = Vec3::new(100.0, 0.0, 50.0);
    let b = Vec3::new(200.0, 0.0, 50.0);
    let d = ray_segment_distance(Vec3::ZERO, Vec3::Z, a, b);
    let endpoint_distance = Vec2::new(100.0, 0.0).length();
    assert!((d - endpoint_distance).abs() < 1.0, "got {d}");
}
