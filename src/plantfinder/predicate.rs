//! # Predicate Engine
//!
//! Decides which plants survive the current [`FilterState`]. Constraints combine with AND across
//! families and OR within a facet family: picking "arid" and "humid" under climate shows plants
//! suited to either, while also picking "shade" under light requires shade on top of that.
//!
//! | Constraint | Passes when                                                        |
//! |------------|--------------------------------------------------------------------|
//! | facet      | nothing selected, or the plant shares at least one selected tag    |
//! | search     | empty, or a case-insensitive substring of name / scientific / desc |
//! | category   | empty, or exactly the plant's category id                          |
//! | care level | empty, or exactly the plant's care level id                        |
//!
//! Search is a plain substring test, no tokenizing or ranking.

use crate::filter::FilterState;
use crate::model::{FacetFamily, Item};

/// Returns the plants matching `state`, in their catalog order.
pub fn filter<'a>(items: &'a [Item], state: &FilterState) -> Vec<&'a Item> {
    let query = state.search.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, state, &query))
        .collect()
}

/// `query` is `state.search` already lowercased, so it is computed once per pass.
fn matches(item: &Item, state: &FilterState, query: &str) -> bool {
    FacetFamily::ALL
        .iter()
        .all(|family| facet_matches(item, state, *family))
        && search_matches(item, query)
        && (state.category.is_empty() || item.category == state.category)
        && (state.care_level.is_empty() || item.care_level.as_str() == state.care_level)
}

fn facet_matches(item: &Item, state: &FilterState, family: FacetFamily) -> bool {
    let selected = state.selected(family);
    selected.is_empty() || item.tags(family).iter().any(|tag| selected.contains(tag))
}

fn search_matches(item: &Item, query: &str) -> bool {
    query.is_empty()
        || item.name.to_lowercase().contains(query)
        || item.scientific_name.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
}
