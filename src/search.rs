//! Catalog search and the Earth-relative distance readout.

use crate::catalog::{Catalog, CelestialBody};

/// Case-insensitive substring match over common and scientific names.
///
/// An empty or whitespace-only query matches nothing; the search panel shows
/// results only while the operator is typing.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'static CelestialBody> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .all()
        .filter(|body| {
            body.name.to_lowercase().contains(&needle)
                || body.scientific_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Kilometers per astronomical unit, in millions.
const M_KM_PER_AU: f32 = 149.6;

/// Decorative Earth-relative distance between two layout positions.
///
/// Treats the 2D layout offset as AU and converts to millions of km. This is
/// set dressing, not astronomy; the catalog's textual `distance` field is the
/// factual one.
pub fn display_distance(a: &CelestialBody, b: &CelestialBody) -> String {
    let au = a.position.distance(b.position);
    if au == 0.0 {
        "EQUATORIAL_ORIGIN".to_string()
    } else {
        format!("{:.2}M KM", au * M_KM_PER_AU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = Catalog::default();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   ").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::default();
        let lower = search(&catalog, "mars");
        let upper = search(&catalog, "MARS");
        assert_eq!(lower.len(), upper.len());
        assert!(lower.iter().any(|b| b.id == "mars"));
    }

    #[test]
    fn search_matches_scientific_name() {
        let catalog = Catalog::default();
        let hits = search(&catalog, "orionis");
        let ids: Vec<_> = hits.iter().map(|b| b.id).collect();
        for id in ["betelgeuse", "rigel", "bellatrix", "saiph", "alnitak", "alnilam", "mintaka"] {
            assert!(ids.contains(&id), "{id} should match `orionis`");
        }
    }

    #[test]
    fn search_finds_substrings() {
        let catalog = Catalog::default();
        let hits = search(&catalog, "nept");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "neptune");
    }

    #[test]
    fn distance_to_self_is_origin_marker() {
        let catalog = Catalog::default();
        let earth = catalog.earth();
        assert_eq!(display_distance(earth, earth), "EQUATORIAL_ORIGIN");
    }

    #[test]
    fn distance_formats_millions_of_km() {
        let catalog = Catalog::default();
        let earth = catalog.earth();
        let sun = catalog.sun();
        // Earth sits at x = 2.0 in the layout, the Sun at the origin.
        assert_eq!(display_distance(earth, sun), "299.20M KM");
    }

    #[test]
    fn distance_is_symmetric() {
        let catalog = Catalog::default();
        let a = catalog.by_id("mars").unwrap();
        let b = catalog.by_id("jupiter").unwrap();
        assert_eq!(display_distance(a, b), display_distance(b, a));
    }
}
