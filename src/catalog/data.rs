//! Hand-authored catalog tables.
//!
//! Positions are layout hints: solar-system entries use `x` as an ordering
//! axis, deep-sky entries use (x, y) as pseudo longitude/latitude degrees.

use bevy::math::Vec2;

use super::{BodyKind, BodyProperties, CelestialBody, Constellation};

const fn props(
    mass: &'static str,
    radius: &'static str,
    temperature: &'static str,
    gravity: &'static str,
) -> BodyProperties {
    BodyProperties {
        mass,
        radius,
        temperature,
        gravity,
        period: None,
    }
}

const fn planet_props(
    mass: &'static str,
    radius: &'static str,
    temperature: &'static str,
    gravity: &'static str,
    period: &'static str,
) -> BodyProperties {
    BodyProperties {
        mass,
        radius,
        temperature,
        gravity,
        period: Some(period),
    }
}

pub static SOLAR_SYSTEM: &[CelestialBody] = &[
    CelestialBody {
        id: "sun",
        name: "Sun",
        scientific_name: "Sol",
        kind: BodyKind::Star,
        distance: "0 AU",
        description: "A G2-type main-sequence star containing 99.86% of the Solar System's total mass. Its nuclear fusion sustains all life on Earth.",
        properties: props("1.989 \u{d7} 10^30 kg", "696,340 km", "5,778 K", "274 m/s\u{b2}"),
        colors: ["#ffdd00", "#ff8800"],
        position: Vec2::new(0.0, 0.0),
    },
    CelestialBody {
        id: "mercury",
        name: "Mercury",
        scientific_name: "Mercurius",
        kind: BodyKind::Planet,
        distance: "0.39 AU",
        description: "The smallest and innermost planet. Closest to the Sun.",
        properties: planet_props("3.285 \u{d7} 10^23 kg", "2,439 km", "440 K", "3.7 m/s\u{b2}", "88 days"),
        colors: ["#b5a7a7", "#544f4f"],
        position: Vec2::new(1.0, 0.0),
    },
    CelestialBody {
        id: "venus",
        name: "Venus",
        scientific_name: "Venus",
        kind: BodyKind::Planet,
        distance: "0.72 AU",
        description: "Notable for its unusual retrograde (backward) spin and extreme runaway greenhouse effect.",
        properties: planet_props("4.867 \u{d7} 10^24 kg", "6,051 km", "737 K", "8.87 m/s\u{b2}", "225 days"),
        colors: ["#e3bb76", "#8f652b"],
        position: Vec2::new(1.5, 0.0),
    },
    CelestialBody {
        id: "earth",
        name: "Earth",
        scientific_name: "Terra",
        kind: BodyKind::Planet,
        distance: "1.00 AU",
        description: "A dynamic world of oceans and continents, and our home.",
        properties: planet_props("5.972 \u{d7} 10^24 kg", "6,371 km", "288 K", "9.81 m/s\u{b2}", "365 days"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(2.0, 0.0),
    },
    CelestialBody {
        id: "mars",
        name: "Mars",
        scientific_name: "Mars",
        kind: BodyKind::Planet,
        distance: "1.52 AU",
        description: "The Red Planet, marking the outer boundary of the inner system.",
        properties: planet_props("6.39 \u{d7} 10^23 kg", "3,389 km", "210 K", "3.71 m/s\u{b2}", "687 days"),
        colors: ["#ff4d4d", "#8b0000"],
        position: Vec2::new(2.8, 0.0),
    },
    CelestialBody {
        id: "ceres",
        name: "Ceres",
        scientific_name: "1 Ceres",
        kind: BodyKind::Planet,
        distance: "2.77 AU",
        description: "The largest object in the Asteroid Belt and its only dwarf planet.",
        properties: planet_props("9.39 \u{d7} 10^20 kg", "473 km", "168 K", "0.27 m/s\u{b2}", "4.6 years"),
        colors: ["#8a8a8a", "#444444"],
        position: Vec2::new(3.3, 0.0),
    },
    CelestialBody {
        id: "jupiter",
        name: "Jupiter",
        scientific_name: "Iuppiter",
        kind: BodyKind::Planet,
        distance: "5.20 AU",
        description: "A gas giant containing more than 70% of the total planetary mass of the entire system.",
        properties: planet_props("1.898 \u{d7} 10^27 kg", "69,911 km", "165 K", "24.79 m/s\u{b2}", "12 years"),
        colors: ["#d39c7e", "#7b4c3d"],
        position: Vec2::new(4.2, 0.0),
    },
    CelestialBody {
        id: "saturn",
        name: "Saturn",
        scientific_name: "Saturnus",
        kind: BodyKind::Planet,
        distance: "9.54 AU",
        description: "Famous for its extensive and spectacular ring system of ice and dust.",
        properties: planet_props("5.683 \u{d7} 10^26 kg", "58,232 km", "134 K", "10.44 m/s\u{b2}", "29 years"),
        colors: ["#f4d47a", "#b38f33"],
        position: Vec2::new(5.2, 0.0),
    },
    CelestialBody {
        id: "uranus",
        name: "Uranus",
        scientific_name: "Uranus",
        kind: BodyKind::Planet,
        distance: "19.22 AU",
        description: "An ice giant with an extreme axial tilt, causing it to spin on its side.",
        properties: planet_props("8.681 \u{d7} 10^25 kg", "25,362 km", "76 K", "8.69 m/s\u{b2}", "84 years"),
        colors: ["#b0e0e6", "#4682b4"],
        position: Vec2::new(6.2, 0.0),
    },
    CelestialBody {
        id: "neptune",
        name: "Neptune",
        scientific_name: "Neptunus",
        kind: BodyKind::Planet,
        distance: "30.06 AU",
        description: "The most distant ice giant, orbiting in the cold reaches of the outer system.",
        properties: planet_props("1.024 \u{d7} 10^26 kg", "24,622 km", "72 K", "11.15 m/s\u{b2}", "165 years"),
        colors: ["#4169e1", "#000080"],
        position: Vec2::new(7.2, 0.0),
    },
    CelestialBody {
        id: "pluto",
        name: "Pluto",
        scientific_name: "134340 Pluto",
        kind: BodyKind::Planet,
        distance: "39.48 AU",
        description: "Dwarf planet in the Kuiper Belt, a frozen relic from the system's formation.",
        properties: planet_props("1.303 \u{d7} 10^22 kg", "1,188 km", "44 K", "0.62 m/s\u{b2}", "248 years"),
        colors: ["#dcdcdc", "#696969"],
        position: Vec2::new(8.2, 0.0),
    },
];

pub static STARS: &[CelestialBody] = &[
    // Nearby and reference stars
    CelestialBody {
        id: "polaris",
        name: "Polaris",
        scientific_name: "Alpha Ursae Minoris",
        kind: BodyKind::Star,
        distance: "433 ly",
        description: "The North Star, a yellow supergiant serving as a stable navigation reference.",
        properties: props("5.4 Sol", "37.5 Sol", "6,015 K", "0.1 m/s\u{b2}"),
        colors: ["#fff4e8", "#ffd2a1"],
        position: Vec2::new(0.0, 900.0),
    },
    CelestialBody {
        id: "proxima",
        name: "Proxima Centauri",
        scientific_name: "Alpha Centauri C",
        kind: BodyKind::Star,
        distance: "4.24 ly",
        description: "The closest known star to the Sun. A low-mass red dwarf.",
        properties: props("0.12 Sol", "0.15 Sol", "3,042 K", "0.04 m/s\u{b2}"),
        colors: ["#ff6633", "#662200"],
        position: Vec2::new(-450.0, -250.0),
    },
    CelestialBody {
        id: "sirius",
        name: "Sirius",
        scientific_name: "Alpha Canis Majoris",
        kind: BodyKind::Star,
        distance: "8.6 ly",
        description: "The brightest star in Earth's night sky.",
        properties: props("2.02 Sol", "1.71 Sol", "9,940 K", "0.8 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(200.0, -450.0),
    },
    // Royal Family of Ethiopia (Cepheus, Cassiopeia, Andromeda, Cetus)
    CelestialBody {
        id: "alderamin",
        name: "Alderamin",
        scientific_name: "Alpha Cephei",
        kind: BodyKind::Star,
        distance: "49 ly",
        description: "Brightest star in Cepheus, the King.",
        properties: props("1.7 Sol", "2.3 Sol", "7,700 K", "0.8 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(-200.0, 700.0),
    },
    CelestialBody {
        id: "alfirk",
        name: "Alfirk",
        scientific_name: "Beta Cephei",
        kind: BodyKind::Star,
        distance: "595 ly",
        description: "Pulsating variable star in Cepheus.",
        properties: props("12 Sol", "9 Sol", "26,700 K", "4.2 m/s\u{b2}"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(-250.0, 750.0),
    },
    CelestialBody {
        id: "schedar",
        name: "Schedar",
        scientific_name: "Alpha Cassiopeiae",
        kind: BodyKind::Star,
        distance: "228 ly",
        description: "Brightest star in Cassiopeia, the Queen.",
        properties: props("4 Sol", "42 Sol", "4,500 K", "0.06 m/s\u{b2}"),
        colors: ["#ffdd00", "#ff8800"],
        position: Vec2::new(-600.0, 400.0),
    },
    CelestialBody {
        id: "caph",
        name: "Caph",
        scientific_name: "Beta Cassiopeiae",
        kind: BodyKind::Star,
        distance: "54 ly",
        description: "Yellow-white giant in Cassiopeia.",
        properties: props("1.9 Sol", "3.5 Sol", "6,700 K", "0.4 m/s\u{b2}"),
        colors: ["#ffffff", "#fff4e8"],
        position: Vec2::new(-650.0, 500.0),
    },
    CelestialBody {
        id: "gamma_cas",
        name: "Gamma Cassiopeiae",
        scientific_name: "Gamma Cassiopeiae",
        kind: BodyKind::Star,
        distance: "610 ly",
        description: "Variable star in the center of the Cassiopeia W.",
        properties: props("17 Sol", "10 Sol", "25,000 K", "4.8 m/s\u{b2}"),
        colors: ["#4deeea", "#ffffff"],
        position: Vec2::new(-550.0, 450.0),
    },
    CelestialBody {
        id: "ruchbah",
        name: "Ruchbah",
        scientific_name: "Delta Cassiopeiae",
        kind: BodyKind::Star,
        distance: "99 ly",
        description: "White subgiant in Cassiopeia.",
        properties: props("2.5 Sol", "3.9 Sol", "8,000 K", "0.4 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(-500.0, 380.0),
    },
    CelestialBody {
        id: "segin",
        name: "Segin",
        scientific_name: "Epsilon Cassiopeiae",
        kind: BodyKind::Star,
        distance: "440 ly",
        description: "Blue-white giant in Cassiopeia.",
        properties: props("9 Sol", "6 Sol", "15,000 K", "6.8 m/s\u{b2}"),
        colors: ["#aaddff", "#44aaff"],
        position: Vec2::new(-450.0, 420.0),
    },
    CelestialBody {
        id: "alpheratz",
        name: "Alpheratz",
        scientific_name: "Alpha Andromedae",
        kind: BodyKind::Star,
        distance: "97 ly",
        description: "Star connecting Andromeda and Pegasus.",
        properties: props("3.8 Sol", "2.7 Sol", "13,800 K", "1.4 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(-800.0, 300.0),
    },
    CelestialBody {
        id: "mirach",
        name: "Mirach",
        scientific_name: "Beta Andromedae",
        kind: BodyKind::Star,
        distance: "197 ly",
        description: "Cool red giant in Andromeda.",
        properties: props("2.4 Sol", "100 Sol", "3,800 K", "0.01 m/s\u{b2}"),
        colors: ["#ff8800", "#aa4400"],
        position: Vec2::new(-700.0, 250.0),
    },
    CelestialBody {
        id: "almach",
        name: "Almach",
        scientific_name: "Gamma Andromedae",
        kind: BodyKind::Star,
        distance: "350 ly",
        description: "Beautiful multiple star system.",
        properties: props("5.2 Sol", "80 Sol", "4,500 K", "0.02 m/s\u{b2}"),
        colors: ["#ffdd00", "#4deeea"],
        position: Vec2::new(-600.0, 200.0),
    },
    CelestialBody {
        id: "menkar",
        name: "Menkar",
        scientific_name: "Alpha Ceti",
        kind: BodyKind::Star,
        distance: "249 ly",
        description: "The \"nose\" of Cetus, the Sea Monster.",
        properties: props("2.3 Sol", "89 Sol", "3,700 K", "0.01 m/s\u{b2}"),
        colors: ["#ff8800", "#8b0000"],
        position: Vec2::new(500.0, -400.0),
    },
    CelestialBody {
        id: "deneb_kaitos",
        name: "Deneb Kaitos",
        scientific_name: "Beta Ceti",
        kind: BodyKind::Star,
        distance: "96 ly",
        description: "The \"tail\" of Cetus.",
        properties: props("2.8 Sol", "17 Sol", "4,800 K", "0.27 m/s\u{b2}"),
        colors: ["#ffdd00", "#ff8800"],
        position: Vec2::new(650.0, -500.0),
    },
    // Hercules and Draco
    CelestialBody {
        id: "ras_algethi",
        name: "Ras Algethi",
        scientific_name: "Alpha Herculis",
        kind: BodyKind::Star,
        distance: "360 ly",
        description: "The \"head of the kneeling man\" in Hercules.",
        properties: props("2.5 Sol", "400 Sol", "3,300 K", "0.005 m/s\u{b2}"),
        colors: ["#ff4400", "#aa2200"],
        position: Vec2::new(100.0, 350.0),
    },
    CelestialBody {
        id: "kornephoros",
        name: "Kornephoros",
        scientific_name: "Beta Herculis",
        kind: BodyKind::Star,
        distance: "139 ly",
        description: "Brightest star in Hercules.",
        properties: props("2.9 Sol", "20 Sol", "4,800 K", "0.19 m/s\u{b2}"),
        colors: ["#ffdd00", "#ff8800"],
        position: Vec2::new(150.0, 400.0),
    },
    CelestialBody {
        id: "thuban",
        name: "Thuban",
        scientific_name: "Alpha Draconis",
        kind: BodyKind::Star,
        distance: "303 ly",
        description: "The ancient pole star in Draco, the Dragon.",
        properties: props("2.8 Sol", "3.4 Sol", "9,500 K", "0.66 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(0.0, 700.0),
    },
    CelestialBody {
        id: "eltanin",
        name: "Eltanin",
        scientific_name: "Gamma Draconis",
        kind: BodyKind::Star,
        distance: "154 ly",
        description: "Brightest star in Draco.",
        properties: props("1.7 Sol", "48 Sol", "3,900 K", "0.02 m/s\u{b2}"),
        colors: ["#ff8800", "#aa4400"],
        position: Vec2::new(-100.0, 800.0),
    },
    // Zodiac
    CelestialBody {
        id: "hamal",
        name: "Hamal",
        scientific_name: "Alpha Arietis",
        kind: BodyKind::Star,
        distance: "66 ly",
        description: "Brightest star in Aries, the Ram.",
        properties: props("1.5 Sol", "14.9 Sol", "4,480 K", "0.18 m/s\u{b2}"),
        colors: ["#ffdd00", "#ff8800"],
        position: Vec2::new(-500.0, -100.0),
    },
    CelestialBody {
        id: "aldebaran",
        name: "Aldebaran",
        scientific_name: "Alpha Tauri",
        kind: BodyKind::Star,
        distance: "65 ly",
        description: "The \"eye of the bull\" in Taurus.",
        properties: props("1.16 Sol", "44 Sol", "3,900 K", "0.01 m/s\u{b2}"),
        colors: ["#ff8800", "#8b0000"],
        position: Vec2::new(300.0, -200.0),
    },
    CelestialBody {
        id: "zuben_el_jenubi",
        name: "Zuben El Jenubi",
        scientific_name: "Alpha Librae",
        kind: BodyKind::Star,
        distance: "75 ly",
        description: "The \"southern claw\" of the scales in Libra.",
        properties: props("2.1 Sol", "1.4 Sol", "8,100 K", "2.9 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(400.0, -600.0),
    },
    CelestialBody {
        id: "regulus",
        name: "Regulus",
        scientific_name: "Alpha Leonis",
        kind: BodyKind::Star,
        distance: "79 ly",
        description: "The \"heart of the lion\" in Leo.",
        properties: props("3.8 Sol", "3.1 Sol", "12,400 K", "1.1 m/s\u{b2}"),
        colors: ["#ffffff", "#4deeea"],
        position: Vec2::new(-300.0, -300.0),
    },
    CelestialBody {
        id: "denebola",
        name: "Denebola",
        scientific_name: "Beta Leonis",
        kind: BodyKind::Star,
        distance: "36 ly",
        description: "The \"tail of the lion\" in Leo.",
        properties: props("1.8 Sol", "1.7 Sol", "8,500 K", "1.7 m/s\u{b2}"),
        colors: ["#ffffff", "#aaddff"],
        position: Vec2::new(-400.0, -350.0),
    },
    // Orion
    CelestialBody {
        id: "betelgeuse",
        name: "Betelgeuse",
        scientific_name: "Alpha Orionis",
        kind: BodyKind::Star,
        distance: "642 ly",
        description: "Red supergiant in Orion.",
        properties: props("11.6 Sol", "887 Sol", "3,500 K", "0.0004 m/s\u{b2}"),
        colors: ["#ff4400", "#aa2200"],
        position: Vec2::new(300.0, 150.0),
    },
    CelestialBody {
        id: "rigel",
        name: "Rigel",
        scientific_name: "Beta Orionis",
        kind: BodyKind::Star,
        distance: "860 ly",
        description: "Blue supergiant in Orion.",
        properties: props("21 Sol", "78 Sol", "12,100 K", "0.09 m/s\u{b2}"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(450.0, -150.0),
    },
    CelestialBody {
        id: "bellatrix",
        name: "Bellatrix",
        scientific_name: "Gamma Orionis",
        kind: BodyKind::Star,
        distance: "250 ly",
        description: "Blue giant in Orion.",
        properties: props("8.4 Sol", "6 Sol", "22,000 K", "6.5 m/s\u{b2}"),
        colors: ["#aaddff", "#44aaff"],
        position: Vec2::new(200.0, 100.0),
    },
    CelestialBody {
        id: "saiph",
        name: "Saiph",
        scientific_name: "Kappa Orionis",
        kind: BodyKind::Star,
        distance: "650 ly",
        description: "Blue supergiant in Orion.",
        properties: props("15 Sol", "22 Sol", "26,500 K", "0.8 m/s\u{b2}"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(500.0, -100.0),
    },
    CelestialBody {
        id: "alnitak",
        name: "Alnitak",
        scientific_name: "Zeta Orionis",
        kind: BodyKind::Star,
        distance: "1260 ly",
        description: "Star in Orion's belt.",
        properties: props("33 Sol", "20 Sol", "29,500 K", "2.3 m/s\u{b2}"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(350.0, -20.0),
    },
    CelestialBody {
        id: "alnilam",
        name: "Alnilam",
        scientific_name: "Epsilon Orionis",
        kind: BodyKind::Star,
        distance: "2000 ly",
        description: "Star in Orion's belt.",
        properties: props("40 Sol", "32 Sol", "27,000 K", "1.1 m/s\u{b2}"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(380.0, -10.0),
    },
    CelestialBody {
        id: "mintaka",
        name: "Mintaka",
        scientific_name: "Delta Orionis",
        kind: BodyKind::Star,
        distance: "1200 ly",
        description: "Star in Orion's belt.",
        properties: props("24 Sol", "16 Sol", "29,500 K", "2.5 m/s\u{b2}"),
        colors: ["#4deeea", "#0077be"],
        position: Vec2::new(410.0, 0.0),
    },
    // Deep-sky systems
    CelestialBody {
        id: "trappist1",
        name: "TRAPPIST-1",
        scientific_name: "2MASS J23062928-0502285",
        kind: BodyKind::System,
        distance: "39.6 ly",
        description: "Ultra-cool dwarf star with seven Earth-sized exoplanets.",
        properties: props("0.089 Sol", "0.121 Sol", "2,566 K", "0.02 m/s\u{b2}"),
        colors: ["#ff3300", "#330000"],
        position: Vec2::new(750.0, 450.0),
    },
    CelestialBody {
        id: "andromeda_gal",
        name: "Andromeda Galaxy",
        scientific_name: "Messier 31",
        kind: BodyKind::System,
        distance: "2.537 Mly",
        description: "The nearest major galaxy to the Milky Way.",
        properties: props("1.23 \u{d7} 10^12 Sol", "110,000 ly", "VAR", "VAR"),
        colors: ["#aaddff", "#4400aa"],
        position: Vec2::new(-800.0, 700.0),
    },
];

pub static CONSTELLATIONS: &[Constellation] = &[
    Constellation {
        id: "cepheus",
        name: "Cepheus",
        description: "The King. Form resembles a house. Patriach of the Royal Family of Ethiopia.",
        astronomical_context: "A circumpolar constellation in the northern sky, containing the variable star Delta Cephei.",
        connections: &[
            ("alderamin", "alfirk"),
            ("alfirk", "polaris"),
            ("alderamin", "polaris"),
        ],
    },
    Constellation {
        id: "cassiopeia",
        name: "Cassiopeia",
        description: "The Queen. Famous W or M shape. Part of the Royal Family saga.",
        astronomical_context: "Located in the northern sky, easily found due to its distinct shape.",
        connections: &[
            ("caph", "schedar"),
            ("schedar", "gamma_cas"),
            ("gamma_cas", "ruchbah"),
            ("ruchbah", "segin"),
        ],
    },
    Constellation {
        id: "andromeda",
        name: "Andromeda",
        description: "The Chained Maiden. Daughter of Cepheus and Cassiopeia.",
        astronomical_context: "Home to the Andromeda Galaxy (M31), the closest spiral galaxy to us.",
        connections: &[("alpheratz", "mirach"), ("mirach", "almach")],
    },
    Constellation {
        id: "cetus",
        name: "Cetus",
        description: "The Whale / Sea Monster. Sent to devour Andromeda.",
        astronomical_context: "Large constellation in the southern sky, known for the variable star Mira.",
        connections: &[("menkar", "deneb_kaitos")],
    },
    Constellation {
        id: "hercules",
        name: "Hercules",
        description: "The Hero. Brandishing a massue, often depicted kneeling.",
        astronomical_context: "Large constellation containing the Great Globular Cluster (M13).",
        connections: &[("ras_algethi", "kornephoros")],
    },
    Constellation {
        id: "draco",
        name: "Draco",
        description: "The Dragon. Guardian of the Golden Apples in the Hesperides garden.",
        astronomical_context: "Sinuous constellation winding between Ursa Major and Ursa Minor.",
        connections: &[("thuban", "eltanin")],
    },
    Constellation {
        id: "leo",
        name: "Leo",
        description: "The Lion. Represents the Nemean Lion killed by Hercules.",
        astronomical_context: "Contains the bright Regulus and is one of the oldest recognized constellations.",
        connections: &[("regulus", "denebola")],
    },
    Constellation {
        id: "orion",
        name: "Orion",
        description: "The Hunter. One of the most recognizable constellations globally.",
        astronomical_context: "Crucible of star formation containing the Orion Nebula.",
        connections: &[
            ("betelgeuse", "bellatrix"),
            ("bellatrix", "mintaka"),
            ("mintaka", "alnilam"),
            ("alnilam", "alnitak"),
            ("alnitak", "saiph"),
            ("saiph", "rigel"),
            ("rigel", "mintaka"),
            ("betelgeuse", "alnitak"),
        ],
    },
    Constellation {
        id: "zodiac_group",
        name: "Zodiac Sector",
        description: "The Path of the Sun. Aries (Hamal), Taurus (Aldebaran), Libra (Zuben El Jenubi).",
        astronomical_context: "Constellations along the ecliptic, used for ancient calendars.",
        connections: &[
            ("hamal", "aldebaran"),
            ("aldebaran", "zuben_el_jenubi"),
        ],
    },
];
