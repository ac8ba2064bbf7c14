//! # Catalog Store
//!
//! The catalog is the immutable dataset the whole session works over: the plant records, the
//! facet definitions for each [`FacetFamily`], and the category definitions. It is loaded once
//! through a [`CatalogSource`] and only ever borrowed afterwards.
//!
//! ## Sources
//!
//! - [`fs::FileSource`]: reads the JSON document from disk (production)
//! - [`memory::InMemorySource`]: serves a JSON string or a pre-built catalog (testing)
//!
//! ## Document Format
//!
//! ```text
//! {
//!   "plants":     [ { "id": 1, "name": ..., "careLevel": "easy", ... } ],
//!   "filters":    { "climate": [ {id, name, icon} ], "light": [...], "soil": [...], "traits": [...] },
//!   "categories": { "succulent": { "name": "Succulents", "icon": "🌵" } }
//! }
//! ```
//!
//! Category order in the document is kept; it is the order the category selector lists them in.
//! A plant's `image` may be an absolute URL or a relative path; anything else is shown as the
//! placeholder image.
//!
//! ## Validation
//!
//! Loading is where loosely typed input becomes the fixed schema in [`crate::model`]. Unknown
//! enum values and duplicate plant ids fail the load. Tags that no facet definition declares are
//! kept and logged, since they are harmless to filtering.

use crate::error::LoadError;
use crate::model::{Category, FacetDefinition, FacetFamily, Item, PlantId};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

pub mod fs;
pub mod memory;

/// Anything that can produce the catalog. Called exactly once per session.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, LoadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    facets: BTreeMap<FacetFamily, Vec<FacetDefinition>>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate plant ids.
    pub fn new(
        items: Vec<Item>,
        facets: BTreeMap<FacetFamily, Vec<FacetDefinition>>,
        categories: Vec<Category>,
    ) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(LoadError::DuplicateId(item.id));
            }
        }

        let catalog = Self {
            items,
            facets,
            categories,
        };
        catalog.warn_undeclared_tags();
        Ok(catalog)
    }

    /// Parses and validates a catalog document.
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        let doc: CatalogDocument = serde_json::from_str(source)?;
        let facets = BTreeMap::from([
            (FacetFamily::Climate, doc.filters.climate),
            (FacetFamily::Light, doc.filters.light),
            (FacetFamily::Soil, doc.filters.soil),
            (FacetFamily::Traits, doc.filters.traits),
        ]);
        Self::new(doc.plants, facets, doc.categories)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: PlantId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn facets(&self, family: FacetFamily) -> &[FacetDefinition] {
        self.facets.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    fn warn_undeclared_tags(&self) {
        for family in FacetFamily::ALL {
            let declared = self.facets(family);
            if declared.is_empty() {
                continue;
            }
            for item in &self.items {
                for tag in item.tags(family) {
                    if !declared.iter().any(|d| &d.id == tag) {
                        tracing::warn!(
                            plant = item.id,
                            %family,
                            tag = tag.as_str(),
                            "plant carries a tag with no facet definition"
                        );
                    }
                }
            }
        }
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    plants: Vec<Item>,
    #[serde(default)]
    filters: FacetDocument,
    #[serde(default, deserialize_with = "ordered_categories")]
    categories: Vec<Category>,
}

#[derive(Deserialize, Default)]
struct FacetDocument {
    #[serde(default)]
    climate: Vec<FacetDefinition>,
    #[serde(default)]
    light: Vec<FacetDefinition>,
    #[serde(default)]
    soil: Vec<FacetDefinition>,
    #[serde(default)]
    traits: Vec<FacetDefinition>,
}

#[derive(Deserialize)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    icon: String,
}

// A plain map would lose the document order of the categories.
fn ordered_categories<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCategories;

    impl<'de> Visitor<'de> for OrderedCategories {
        type Value = Vec<Category>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of category id to {name, icon}")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut categories: Vec<Category> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, entry)) = map.next_entry::<String, CategoryEntry>()? {
                let category = Category {
                    id,
                    name: entry.name,
                    icon: entry.icon,
                };
                match categories.iter_mut().find(|c| c.id == category.id) {
                    Some(existing) => *existing = category,
                    None => categories.push(category),
                }
            }
            Ok(categories)
        }
    }

    deserializer.deserialize_map(OrderedCategories)
}
