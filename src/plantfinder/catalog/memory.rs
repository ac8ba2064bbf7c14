use super::{Catalog, CatalogSource};
use crate::error::LoadError;

/// Serves a catalog held in memory, either as raw JSON or already built.
#[derive(Debug, Clone)]
pub enum InMemorySource {
    Json(String),
    Built(Catalog),
}

impl InMemorySource {
    pub fn json(document: impl Into<String>) -> Self {
        InMemorySource::Json(document.into())
    }
}

impl From<Catalog> for InMemorySource {
    fn from(catalog: Catalog) -> Self {
        InMemorySource::Built(catalog)
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Catalog, LoadError> {
        match self {
            InMemorySource::Json(doc) => Catalog::from_json(doc),
            InMemorySource::Built(catalog) => Ok(catalog.clone()),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        CareLevel, Category, FacetDefinition, FacetFamily, GrowthRate, Item, PlantId, WaterNeeds,
    };
    use std::collections::BTreeMap;

    /// A bare plant with no tags; tweak fields on the returned value.
    pub fn plant(id: PlantId, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            scientific_name: format!("{} scientifica", name),
            category: "misc".to_string(),
            description: format!("{} is a plant.", name),
            climate: Vec::new(),
            light: Vec::new(),
            soil: Vec::new(),
            traits: Vec::new(),
            care_level: CareLevel::Easy,
            water_needs: WaterNeeds::Moderate,
            mature_height: "1 ft".to_string(),
            growth_rate: GrowthRate::Moderate,
            flower_color: None,
            bloom_season: None,
            tips: String::new(),
            image: String::new(),
        }
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    pub fn aloe() -> Item {
        Item {
            category: "succulent".to_string(),
            climate: tags(&["arid"]),
            light: tags(&["full-sun"]),
            soil: tags(&["sandy"]),
            traits: tags(&["drought-tolerant"]),
            care_level: CareLevel::Easy,
            ..plant(1, "Aloe")
        }
    }

    pub fn fern() -> Item {
        Item {
            category: "tropical".to_string(),
            climate: tags(&["humid"]),
            light: tags(&["shade"]),
            soil: tags(&["loamy"]),
            traits: tags(&["air-purifying"]),
            care_level: CareLevel::Medium,
            ..plant(2, "Fern")
        }
    }

    pub struct CatalogFixture {
        items: Vec<Item>,
        facets: BTreeMap<FacetFamily, Vec<FacetDefinition>>,
        categories: Vec<Category>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                items: Vec::new(),
                facets: BTreeMap::new(),
                categories: Vec::new(),
            }
        }

        /// The two-plant catalog (Aloe, Fern) with matching facet and category definitions.
        pub fn aloe_and_fern() -> Self {
            Self::new()
                .with_item(aloe())
                .with_item(fern())
                .with_category("succulent", "Succulents", "🌵")
                .with_category("tropical", "Tropical", "🌴")
                .with_facet(FacetFamily::Climate, "arid", "Arid", "🏜️")
                .with_facet(FacetFamily::Climate, "humid", "Humid", "💦")
                .with_facet(FacetFamily::Light, "full-sun", "Full Sun", "☀️")
                .with_facet(FacetFamily::Light, "shade", "Shade", "🌥️")
                .with_facet(FacetFamily::Soil, "sandy", "Sandy", "🏖️")
                .with_facet(FacetFamily::Soil, "loamy", "Loamy", "🟫")
                .with_facet(FacetFamily::Traits, "drought-tolerant", "Drought Tolerant", "🐪")
                .with_facet(FacetFamily::Traits, "air-purifying", "Air Purifying", "🍃")
        }

        pub fn with_item(mut self, item: Item) -> Self {
            self.items.push(item);
            self
        }

        pub fn with_category(mut self, id: &str, name: &str, icon: &str) -> Self {
            self.categories.push(Category {
                id: id.to_string(),
                name: name.to_string(),
                icon: icon.to_string(),
            });
            self
        }

        pub fn with_facet(mut self, family: FacetFamily, id: &str, name: &str, icon: &str) -> Self {
            self.facets.entry(family).or_default().push(FacetDefinition {
                id: id.to_string(),
                name: name.to_string(),
                icon: icon.to_string(),
            });
            self
        }

        pub fn try_build(self) -> Result<Catalog, LoadError> {
            Catalog::new(self.items, self.facets, self.categories)
        }

        pub fn build(self) -> Catalog {
            self.try_build().unwrap()
        }
    }
}
