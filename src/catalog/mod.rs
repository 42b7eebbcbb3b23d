//! Static celestial catalog: bodies, constellations, and lookups.
//!
//! All domain data is hand-authored and baked into the binary; nothing here
//! is mutated after startup.

pub mod data;

use bevy::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

/// Closed set of body categories.
///
/// Rendering parameters that depend on the category live here as lookups
/// rather than scattered conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Planet,
    Star,
    System,
    Constellation,
}

impl BodyKind {
    /// Display label used by the UI panels.
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Planet => "PLANET",
            BodyKind::Star => "STAR",
            BodyKind::System => "SYSTEM",
            BodyKind::Constellation => "CONSTELLATION",
        }
    }

    /// Marker sphere radius on the sky map.
    pub fn sky_size(self) -> f32 {
        match self {
            BodyKind::System => 15.0,
            _ => 8.0,
        }
    }
}

/// Named scalar display strings for a body. Values are presentation-only and
/// never parsed back into numbers.
#[derive(Debug, Clone, Copy)]
pub struct BodyProperties {
    pub mass: &'static str,
    pub radius: &'static str,
    pub temperature: &'static str,
    pub gravity: &'static str,
    pub period: Option<&'static str>,
}

/// One immutable catalog record.
///
/// `position` is a 2D layout hint (solar-system bodies use it as an ordering
/// axis, sky objects as pseudo lon/lat); the scale is deliberately
/// inconsistent across the catalog and must not be treated as physical.
#[derive(Debug, Clone, Copy)]
pub struct CelestialBody {
    pub id: &'static str,
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub kind: BodyKind,
    pub distance: &'static str,
    pub description: &'static str,
    pub properties: BodyProperties,
    /// Accent color pair [primary, secondary] as `#rrggbb` hex strings.
    pub colors: [&'static str; 2],
    pub position: Vec2,
}

/// A constellation: line segments between named catalog stars.
#[derive(Debug, Clone, Copy)]
pub struct Constellation {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub astronomical_context: &'static str,
    /// Ordered (from, to) star-id pairs. Pairs referencing unknown ids are
    /// skipped at scene-build time without error.
    pub connections: &'static [(&'static str, &'static str)],
}

/// Catalog integrity problems found by [`Catalog::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate body id `{0}` in catalog")]
    DuplicateId(&'static str),
    #[error("constellation `{constellation}` references unknown star `{star}`")]
    DanglingConnection {
        constellation: &'static str,
        star: &'static str,
    },
}

/// The authoritative in-memory data set. Loaded once, never mutated.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Catalog {
    pub solar_system: &'static [CelestialBody],
    pub stars: &'static [CelestialBody],
    pub constellations: &'static [Constellation],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            solar_system: data::SOLAR_SYSTEM,
            stars: data::STARS,
            constellations: data::CONSTELLATIONS,
        }
    }
}

impl Catalog {
    /// All bodies, solar system first.
    pub fn all(&self) -> impl Iterator<Item = &'static CelestialBody> + '_ {
        self.solar_system.iter().chain(self.stars.iter())
    }

    /// Look up a body by its unique id.
    pub fn by_id(&self, id: &str) -> Option<&'static CelestialBody> {
        self.all().find(|b| b.id == id)
    }

    /// Look up a constellation by id.
    pub fn constellation(&self, id: &str) -> Option<&'static Constellation> {
        self.constellations.iter().find(|c| c.id == id)
    }

    /// The Sun; first solar-system record and the default selection.
    pub fn sun(&self) -> &'static CelestialBody {
        &self.solar_system[0]
    }

    /// Earth, the reference point for the distance readout.
    pub fn earth(&self) -> &'static CelestialBody {
        self.by_id("earth").unwrap_or_else(|| self.sun())
    }

    /// Check catalog integrity: unique ids and resolvable constellation
    /// endpoints. Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for body in self.all() {
            if !seen.insert(body.id) {
                problems.push(CatalogError::DuplicateId(body.id));
            }
        }

        let star_ids: HashSet<&str> = self.stars.iter().map(|s| s.id).collect();
        for constellation in self.constellations {
            for &(a, b) in constellation.connections {
                for star in [a, b] {
                    if !star_ids.contains(star) {
                        problems.push(CatalogError::DanglingConnection {
                            constellation: constellation.id,
                            star,
                        });
                    }
                }
            }
        }

        if problems.is_empty() { Ok(()) } else { Err(problems) }
    }
}

/// Startup diagnostic. Integrity problems are authoring mistakes, not runtime
/// failures; the scene builders skip bad segments regardless.
pub fn log_catalog_diagnostics(catalog: Res<Catalog>) {
    match catalog.validate() {
        Ok(()) => info!(
            "Catalog loaded: {} bodies, {} constellations",
            catalog.all().count(),
            catalog.constellations.len()
        ),
        Err(problems) => {
            for problem in problems {
                warn!("Catalog integrity: {problem}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn all_body_ids_are_unique() {
        let catalog = Catalog::default();
        let mut seen = HashSet::new();
        for body in catalog.all() {
            assert!(seen.insert(body.id), "duplicate id {}", body.id);
        }
    }

    #[test]
    fn lookups_find_anchors() {
        let catalog = Catalog::default();
        assert_eq!(catalog.sun().id, "sun");
        assert_eq!(catalog.earth().id, "earth");
        assert_eq!(catalog.by_id("betelgeuse").map(|b| b.name), Some("Betelgeuse"));
        assert!(catalog.by_id("nonexistent").is_none());
    }

    #[test]
    fn every_constellation_endpoint_resolves() {
        let catalog = Catalog::default();
        for constellation in catalog.constellations {
            for &(a, b) in constellation.connections {
                assert!(catalog.by_id(a).is_some(), "{a} missing");
                assert!(catalog.by_id(b).is_some(), "{b} missing");
            }
        }
    }

    #[test]
    fn validate_reports_dangling_connection() {
        static BROKEN: &[Constellation] = &[Constellation {
            id: "broken",
            name: "Broken",
            description: "",
            astronomical_context: "",
            connections: &[("polaris", "no_such_star")],
        }];
        let catalog = Catalog {
            constellations: BROKEN,
            ..Catalog::default()
        };
        let problems = catalog.validate().unwrap_err();
        assert_eq!(
            problems,
            vec![CatalogError::DanglingConnection {
                constellation: "broken",
                star: "no_such_star",
            }]
        );
    }

    #[test]
    fn kind_lookups() {
        assert_eq!(BodyKind::System.sky_size(), 15.0);
        assert_eq!(BodyKind::Star.sky_size(), 8.0);
        assert_eq!(BodyKind::Planet.label(), "PLANET");
    }
}
