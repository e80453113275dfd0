//! Static catalog of the ten major bodies.
//!
//! Provides identifiers, display facts for the info panel, and the search
//! used by the search overlay. All data is compile-time constant.

use bevy::prelude::*;

/// Identifier for a body in the catalog.
///
/// Declaration order matches the catalog table and is the order used by
/// search results and the guided tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl BodyId {
    /// All catalog bodies in declaration order.
    pub const ALL: [BodyId; 10] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
    ];

    /// The nine orbiting bodies (everything except the Sun).
    pub const PLANETS: [BodyId; 9] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        facts(self).name
    }

    /// Pluto gets a "(Dwarf)" qualifier on hover labels.
    pub fn is_dwarf(self) -> bool {
        self == BodyId::Pluto
    }
}

/// Static display facts for one body.
pub struct BodyFacts {
    pub name: &'static str,
    pub category: &'static str,
    pub diameter: &'static str,
    pub mass: &'static str,
    pub distance: &'static str,
    pub period: &'static str,
    pub moons: &'static str,
    pub temperature: &'static str,
    pub atmosphere: &'static str,
    pub fact: &'static str,
    /// Display color used for trails, search swatches, and the minimap.
    pub rgb: [u8; 3],
    /// Surface texture path under the asset root.
    pub texture: &'static str,
}

impl BodyFacts {
    /// Display color as a Bevy [`Color`].
    pub fn color(&self) -> Color {
        Color::srgb_u8(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Look up the facts record for a body.
pub fn facts(id: BodyId) -> &'static BodyFacts {
    match id {
        BodyId::Sun => &BodyFacts {
            name: "Sun",
            category: "G-type Main Sequence Star",
            diameter: "1,391,000 km",
            mass: "1.989 × 10³⁰ kg",
            distance: "0 (center)",
            period: "—",
            moons: "—",
            temperature: "5,500 °C (surface) / 15 million °C (core)",
            atmosphere: "Hydrogen (73%), Helium (25%)",
            fact: "The Sun contains 99.86% of the total mass of the solar system. \
                   Its core temperature reaches 15 million °C, and it converts about \
                   600 million tons of hydrogen into helium every second through \
                   nuclear fusion.",
            rgb: [255, 170, 0],
            texture: "images/earth.jpg",
        },
        BodyId::Mercury => &BodyFacts {
            name: "Mercury",
            category: "Terrestrial",
            diameter: "4,879 km",
            mass: "3.30 × 10²³ kg",
            distance: "57.9 million km",
            period: "88 days",
            moons: "0",
            temperature: "−173 to 427 °C",
            atmosphere: "Virtually none (thin exosphere of O₂, Na, H₂)",
            fact: "Mercury is the smallest planet in our solar system and the closest \
                   to the Sun. Despite being nearest to the Sun, it is not the hottest \
                   — Venus holds that record due to its greenhouse effect.",
            rgb: [181, 161, 142],
            texture: "images/mercury.jpg",
        },
        BodyId::Venus => &BodyFacts {
            name: "Venus",
            category: "Terrestrial",
            diameter: "12,104 km",
            mass: "4.87 × 10²⁴ kg",
            distance: "108.2 million km",
            period: "225 days",
            moons: "0",
            temperature: "462 °C (average)",
            atmosphere: "CO₂ (96.5%), N₂ (3.5%), sulfuric acid clouds",
            fact: "Venus rotates backwards compared to most planets, meaning the Sun \
                   rises in the west and sets in the east. A day on Venus is longer \
                   than its year.",
            rgb: [230, 200, 120],
            texture: "images/venus.jpg",
        },
        BodyId::Earth => &BodyFacts {
            name: "Earth",
            category: "Terrestrial",
            diameter: "12,756 km",
            mass: "5.97 × 10²⁴ kg",
            distance: "149.6 million km",
            period: "365.25 days",
            moons: "1",
            temperature: "15 °C (average)",
            atmosphere: "N₂ (78%), O₂ (21%), Ar (0.9%), CO₂ (0.04%)",
            fact: "Earth is the only known planet to harbor life. Its surface is 71% \
                   water, earning it the nickname \"The Blue Marble.\" It has a \
                   powerful magnetic field that shields it from solar wind.",
            rgb: [100, 150, 255],
            texture: "images/earth.jpg",
        },
        BodyId::Mars => &BodyFacts {
            name: "Mars",
            category: "Terrestrial",
            diameter: "6,792 km",
            mass: "6.42 × 10²³ kg",
            distance: "227.9 million km",
            period: "687 days",
            moons: "2",
            temperature: "−65 °C (average)",
            atmosphere: "CO₂ (95.3%), N₂ (2.7%), Ar (1.6%)",
            fact: "Mars is home to Olympus Mons, the tallest volcano in the solar \
                   system at 21.9 km high — nearly 2.5 times the height of Mount \
                   Everest. Its two moons, Phobos and Deimos, are likely captured \
                   asteroids.",
            rgb: [200, 100, 50],
            texture: "images/mars.jpg",
        },
        BodyId::Jupiter => &BodyFacts {
            name: "Jupiter",
            category: "Gas Giant",
            diameter: "142,984 km",
            mass: "1.90 × 10²⁷ kg",
            distance: "778.6 million km",
            period: "11.86 years",
            moons: "95",
            temperature: "−110 °C (cloud tops)",
            atmosphere: "H₂ (89.8%), He (10.2%), traces of CH₄, NH₃",
            fact: "Jupiter's Great Red Spot is a storm larger than Earth that has \
                   been raging for over 350 years. Jupiter acts as a cosmic vacuum \
                   cleaner, protecting inner planets by attracting asteroids with its \
                   massive gravity.",
            rgb: [200, 170, 120],
            texture: "images/jupiter.jpg",
        },
        BodyId::Saturn => &BodyFacts {
            name: "Saturn",
            category: "Gas Giant",
            diameter: "120,536 km",
            mass: "5.68 × 10²⁶ kg",
            distance: "1.43 billion km",
            period: "29.46 years",
            moons: "146",
            temperature: "−140 °C (cloud tops)",
            atmosphere: "H₂ (96.3%), He (3.25%), traces of CH₄, NH₃",
            fact: "Saturn's rings are made of ice and rock particles ranging from \
                   tiny grains to house-sized chunks. Despite its enormous size, \
                   Saturn is less dense than water — it would float in a bathtub \
                   large enough to hold it.",
            rgb: [210, 190, 140],
            texture: "images/saturn.jpg",
        },
        BodyId::Uranus => &BodyFacts {
            name: "Uranus",
            category: "Ice Giant",
            diameter: "51,118 km",
            mass: "8.68 × 10²⁵ kg",
            distance: "2.87 billion km",
            period: "84 years",
            moons: "28",
            temperature: "−195 °C (cloud tops)",
            atmosphere: "H₂ (82.5%), He (15.2%), CH₄ (2.3%)",
            fact: "Uranus rotates on its side with an axial tilt of 98°, likely due \
                   to a collision with an Earth-sized object long ago. This gives it \
                   the most extreme seasons of any planet.",
            rgb: [130, 200, 220],
            texture: "images/uranus.jpg",
        },
        BodyId::Neptune => &BodyFacts {
            name: "Neptune",
            category: "Ice Giant",
            diameter: "49,528 km",
            mass: "1.02 × 10²⁶ kg",
            distance: "4.50 billion km",
            period: "165 years",
            moons: "16",
            temperature: "−200 °C (cloud tops)",
            atmosphere: "H₂ (80%), He (19%), CH₄ (1.5%)",
            fact: "Neptune has the strongest sustained winds of any planet, reaching \
                   speeds of 2,100 km/h. It was the first planet located through \
                   mathematical prediction rather than direct observation.",
            rgb: [60, 100, 220],
            texture: "images/neptune.jpg",
        },
        BodyId::Pluto => &BodyFacts {
            name: "Pluto",
            category: "Dwarf Planet",
            diameter: "2,377 km",
            mass: "1.31 × 10²² kg",
            distance: "5.91 billion km",
            period: "248 years",
            moons: "5",
            temperature: "−230 °C (average)",
            atmosphere: "Thin: N₂, CH₄, CO (seasonally)",
            fact: "Pluto was reclassified as a dwarf planet in 2006. Its heart-shaped \
                   nitrogen glacier, Tombaugh Regio, is larger than Texas. Pluto and \
                   its largest moon Charon are tidally locked, always showing the \
                   same face to each other.",
            rgb: [180, 160, 140],
            texture: "images/pluto.jpg",
        },
    }
}

/// Case-insensitive substring search over body name and category.
///
/// An empty (or whitespace-only) query returns the full catalog. Results
/// come back in declaration order.
pub fn search(query: &str) -> Vec<BodyId> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return BodyId::ALL.to_vec();
    }

    BodyId::ALL
        .into_iter()
        .filter(|&id| {
            let f = facts(id);
            f.name.to_lowercase().contains(&q) || f.category.to_lowercase().contains(&q)
        })
        .collect()
}
