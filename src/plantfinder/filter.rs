//! # Filter State
//!
//! The record of what the user currently has selected. It is owned by the interaction router
//! and mutated only through the methods here; the predicate engine borrows it read-only.
//!
//! Nothing is validated against the catalog. A chip id or category the catalog never declared
//! is stored like any other and simply matches no plant.

use crate::model::FacetFamily;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub climate: BTreeSet<String>,
    pub light: BTreeSet<String>,
    pub soil: BTreeSet<String>,
    pub traits: BTreeSet<String>,
    /// Stored as typed; matching lowercases both sides.
    pub search: String,
    /// Empty means any category.
    pub category: String,
    /// Empty means any care level.
    pub care_level: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, family: FacetFamily) -> &BTreeSet<String> {
        match family {
            FacetFamily::Climate => &self.climate,
            FacetFamily::Light => &self.light,
            FacetFamily::Soil => &self.soil,
            FacetFamily::Traits => &self.traits,
        }
    }

    fn selected_mut(&mut self, family: FacetFamily) -> &mut BTreeSet<String> {
        match family {
            FacetFamily::Climate => &mut self.climate,
            FacetFamily::Light => &mut self.light,
            FacetFamily::Soil => &mut self.soil,
            FacetFamily::Traits => &mut self.traits,
        }
    }

    pub fn is_selected(&self, family: FacetFamily, id: &str) -> bool {
        self.selected(family).contains(id)
    }

    /// Adds `id` to the family's selection, or removes it if already there.
    /// Returns whether the id is selected afterwards.
    pub fn toggle_facet(&mut self, family: FacetFamily, id: &str) -> bool {
        let set = self.selected_mut(family);
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_category(&mut self, id: impl Into<String>) {
        self.category = id.into();
    }

    pub fn set_care_level(&mut self, level: impl Into<String>) {
        self.care_level = level.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no constraint of any kind is active.
    pub fn is_unconstrained(&self) -> bool {
        FacetFamily::ALL
            .iter()
            .all(|family| self.selected(*family).is_empty())
            && self.search.is_empty()
            && self.category.is_empty()
            && self.care_level.is_empty()
    }
}
