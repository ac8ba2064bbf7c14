//! # Domain Model
//!
//! The catalog source is loosely shaped JSON. Everything downstream of the loader works on the
//! fixed schema defined here: enumerated care/water/growth values, a closed set of facet
//! families, and plain tag ids for the facet values themselves.
//!
//! Facet tag ids stay strings. The set of valid tags is data (the `filters` section of the
//! catalog), so a tag an item carries but no definition declares is kept and only warned about
//! at load time. Selections that name unknown tags simply match nothing.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PlantId = u32;

/// One of the four independently filterable attribute families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetFamily {
    Climate,
    Light,
    Soil,
    Traits,
}

impl FacetFamily {
    pub const ALL: [FacetFamily; 4] = [
        FacetFamily::Climate,
        FacetFamily::Light,
        FacetFamily::Soil,
        FacetFamily::Traits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetFamily::Climate => "climate",
            FacetFamily::Light => "light",
            FacetFamily::Soil => "soil",
            FacetFamily::Traits => "traits",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FacetFamily::Climate => "Climate",
            FacetFamily::Light => "Light",
            FacetFamily::Soil => "Soil",
            FacetFamily::Traits => "Traits",
        }
    }
}

impl fmt::Display for FacetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "climate" => Ok(FacetFamily::Climate),
            "light" => Ok(FacetFamily::Light),
            "soil" => Ok(FacetFamily::Soil),
            "traits" | "trait" => Ok(FacetFamily::Traits),
            other => Err(format!("Unknown facet family: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareLevel {
    Easy,
    Medium,
    Hard,
}

impl CareLevel {
    pub const ALL: [CareLevel; 3] = [CareLevel::Easy, CareLevel::Medium, CareLevel::Hard];

    /// The id used by the care-level selector and stored in the filter state.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Easy => "easy",
            CareLevel::Medium => "medium",
            CareLevel::Hard => "hard",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CareLevel::Easy => "🌿",
            CareLevel::Medium => "🌱",
            CareLevel::Hard => "🌵",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareLevel::Easy => "Easy Care",
            CareLevel::Medium => "Moderate Care",
            CareLevel::Hard => "Expert Care",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeeds {
    Low,
    #[serde(alias = "medium")]
    Moderate,
    High,
}

impl WaterNeeds {
    pub fn label(&self) -> &'static str {
        match self {
            WaterNeeds::Low => "Low",
            WaterNeeds::Moderate => "Moderate",
            WaterNeeds::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthRate {
    Slow,
    #[serde(alias = "medium")]
    Moderate,
    Fast,
}

impl GrowthRate {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthRate::Slow => "Slow",
            GrowthRate::Moderate => "Moderate",
            GrowthRate::Fast => "Fast",
        }
    }
}

/// A plant record as validated at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: PlantId,
    pub name: String,
    pub scientific_name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub climate: Vec<String>,
    #[serde(default)]
    pub light: Vec<String>,
    #[serde(default)]
    pub soil: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    pub care_level: CareLevel,
    pub water_needs: WaterNeeds,
    #[serde(default)]
    pub mature_height: String,
    pub growth_rate: GrowthRate,
    #[serde(default, deserialize_with = "non_empty")]
    pub flower_color: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub bloom_season: Option<String>,
    #[serde(default)]
    pub tips: String,
    #[serde(default)]
    pub image: String,
}

impl Item {
    /// Tags the item carries for the given facet family.
    pub fn tags(&self, family: FacetFamily) -> &[String] {
        match family {
            FacetFamily::Climate => &self.climate,
            FacetFamily::Light => &self.light,
            FacetFamily::Soil => &self.soil,
            FacetFamily::Traits => &self.traits,
        }
    }
}

// Sources write `""` or `null` for "no flowers"; both mean absent.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_family_parses_case_insensitively() {
        assert_eq!("Climate".parse::<FacetFamily>(), Ok(FacetFamily::Climate));
        assert_eq!(" soil ".parse::<FacetFamily>(), Ok(FacetFamily::Soil));
        assert_eq!("trait".parse::<FacetFamily>(), Ok(FacetFamily::Traits));
        assert!("colour".parse::<FacetFamily>().is_err());
    }

    #[test]
    fn item_deserializes_camel_case_and_drops_empty_optionals() {
        let json = r#"{
            "id": 7, "name": "Snake Plant", "scientificName": "Dracaena trifasciata",
            "category": "indoor", "description": "Tough.", "climate": ["tropical"],
            "light": ["low-light"], "soil": ["well-draining"], "traits": ["air-purifying"],
            "careLevel": "easy", "waterNeeds": "low", "matureHeight": "2-4 ft",
            "growthRate": "slow", "flowerColor": "", "bloomSeason": null,
            "tips": "Let it dry out.", "image": "https://example.com/snake.jpg"
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.scientific_name, "Dracaena trifasciata");
        assert_eq!(item.care_level, CareLevel::Easy);
        assert_eq!(item.flower_color, None);
        assert_eq!(item.bloom_season, None);
        assert_eq!(item.tags(FacetFamily::Light), ["low-light".to_string()]);
    }

    #[test]
    fn medium_is_accepted_for_water_and_growth() {
        let water: WaterNeeds = serde_json::from_str(r#""medium""#).unwrap();
        let growth: GrowthRate = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(water, WaterNeeds::Moderate);
        assert_eq!(growth, GrowthRate::Moderate);
    }

    #[test]
    fn unknown_care_level_is_rejected() {
        let result: Result<CareLevel, _> = serde_json::from_str(r#""impossible""#);
        assert!(result.is_err());
    }
}
