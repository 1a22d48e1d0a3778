//! Country pick groups offered by the dashboard, one multi-select per group.

use serde::{Deserialize, Serialize};
use std::fmt;

const AFRICA: &[&str] = &[
    "Algeria",
    "Burundi",
    "Cameroon",
    "Chad",
    "Congo, Dem. Rep.",
    "Congo, Rep.",
    "Cote d'Ivoire",
    "Egypt, Arab Rep.",
    "Ghana",
    "Ethiopia",
    "Madagascar",
    "Mali",
    "Morocco",
    "Niger",
    "Nigeria",
    "Senegal",
    "Sudan",
    "Rwanda",
    "South Africa",
    "Tunisia",
    "Uganda",
];

const ASIA: &[&str] = &[
    "Bangladesh",
    "Cambodia",
    "China",
    "India",
    "Indonesia",
    "Iran, Islamic Rep.",
    "Iraq",
    "Japan",
    "Korea, Rep.",
    "Kuwait",
    "Malaysia",
    "Pakistan",
    "Saudi Arabia",
    "Qatar",
    "Singapore",
    "Thailand",
    "United Arab Emirates",
    "Vietnam",
];

const EUROPE: &[&str] = &[
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Denmark",
    "Germany",
    "Greece",
    "Finland",
    "France",
    "Hungary",
    "Iceland",
    "Italy",
    "Netherlands",
    "Norway",
    "Spain",
    "Poland",
    "Portugal",
    "Russian Federation",
    "Turkey",
    "United Kingdom",
];

const NORTH_AMERICA: &[&str] = &["Canada", "Costa Rica", "Cuba", "Mexico", "United States"];

const SOUTH_AMERICA: &[&str] = &[
    "Argentina",
    "Bolivia",
    "Brazil",
    "Ecuador",
    "Paraguay",
    "Peru",
    "Uruguay",
    "Venezuela, RB",
];

const WORLD_REGIONS: &[&str] = &[
    "World",
    "Africa Eastern and Southern",
    "Africa Western and Central",
    "Arab World",
    "Central Europe and the Baltics",
    "East Asia & Pacific",
    "Euro area",
    "Europe & Central Asia",
    "European Union",
    "Latin America & Caribbean",
    "Middle East & North Africa",
    "North America",
    "Pacific island small states",
    "Small states",
    "South Asia",
    "Sub-Saharan Africa",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    WorldRegions,
}

impl Region {
    /// Pick groups in the order their selections are merged into the running selection.
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::WorldRegions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::WorldRegions => "World Regions",
        }
    }

    pub fn countries(self) -> &'static [&'static str] {
        match self {
            Region::Africa => AFRICA,
            Region::Asia => ASIA,
            Region::Europe => EUROPE,
            Region::NorthAmerica => NORTH_AMERICA,
            Region::SouthAmerica => SOUTH_AMERICA,
            Region::WorldRegions => WORLD_REGIONS,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
