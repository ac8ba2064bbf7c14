//! # View Models
//!
//! Everything the presentation layer draws is computed here as plain serializable data, and
//! handed to a [`RenderSink`]. The sink decides how it looks (the binary renders templates to
//! a terminal); this module decides what is shown.
//!
//! Views are rebuilt from scratch on every render. Given the same catalog, matches and filter
//! state they come out identical, so a sink that fully replaces its output on each call is
//! idempotent.
//!
//! Display rules:
//! - count label is pluralized (`1 plant`, `0 plants`, `5 plants`)
//! - header reads `All Plants` only when no constraint at all is active
//! - category badges fall back to the raw category id when the catalog has no definition
//! - image references that are empty or malformed become the placeholder image; absolute URLs
//!   and relative paths are kept
//! - cards preview at most two light tags and one trait tag

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::model::{CareLevel, FacetFamily, Item, PlantId};
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1459411552884-841db9b3cc2a?w=400";
pub const NOT_AVAILABLE: &str = "N/A";
pub const LIST_DELIMITER: &str = ", ";

const PREVIEW_LIGHT_TAGS: usize = 2;
const PREVIEW_TRAIT_TAGS: usize = 1;

/// Presentation side of the session. Each call replaces what the previous one drew.
pub trait RenderSink {
    fn render_controls(&mut self, controls: &ControlsView);
    fn render_results(&mut self, results: &ResultsView);
    fn show_detail(&mut self, detail: &DetailView);
    fn hide_detail(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Display-width budget for card descriptions.
    pub description_width: usize,
    pub placeholder_image: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            description_width: 100,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: PlantId,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image: String,
    pub category: BadgeView,
    pub care: BadgeView,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub header: String,
    pub count_label: String,
    pub empty: bool,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: PlantId,
    pub name: String,
    pub scientific_name: String,
    pub image: String,
    pub category: BadgeView,
    pub care: BadgeView,
    pub water: BadgeView,
    pub description: String,
    pub height: String,
    pub growth_rate: String,
    pub flower_color: String,
    pub bloom_season: String,
    pub climate: String,
    pub light: String,
    pub soil: String,
    pub traits: Vec<String>,
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetGroupView {
    pub family: FacetFamily,
    pub heading: String,
    pub chips: Vec<ChipView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The filter panel: chips, the search box and both selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub facets: Vec<FacetGroupView>,
    pub search: String,
    pub categories: Vec<OptionView>,
    pub care_levels: Vec<OptionView>,
    /// Label of the selected category, or the raw value when it matches no option.
    pub category_label: String,
    pub care_label: String,
}

/// Current values of the free-form inputs, which can run ahead of the filter state (the
/// search box updates per keystroke, the filter only after the debounce).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputValues {
    pub search: String,
    pub category: String,
    pub care_level: String,
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 plant".to_string()
    } else {
        format!("{} plants", count)
    }
}

pub fn header_label(state: &FilterState) -> &'static str {
    if state.is_unconstrained() {
        "All Plants"
    } else {
        "Matching Plants"
    }
}

pub fn results_view(
    catalog: &Catalog,
    matching: &[&Item],
    state: &FilterState,
    options: &ViewOptions,
) -> ResultsView {
    ResultsView {
        header: header_label(state).to_string(),
        count_label: count_label(matching.len()),
        empty: matching.is_empty(),
        cards: matching
            .iter()
            .map(|item| card_view(catalog, item, options))
            .collect(),
    }
}

pub fn card_view(catalog: &Catalog, item: &Item, options: &ViewOptions) -> CardView {
    let tags = item
        .light
        .iter()
        .take(PREVIEW_LIGHT_TAGS)
        .chain(item.traits.iter().take(PREVIEW_TRAIT_TAGS))
        .cloned()
        .collect();

    CardView {
        id: item.id,
        name: item.name.clone(),
        scientific_name: item.scientific_name.clone(),
        description: truncate_to_width(&item.description, options.description_width),
        image: image_or_placeholder(&item.image, &options.placeholder_image),
        category: category_badge(catalog, &item.category),
        care: care_badge(item.care_level),
        tags,
    }
}

pub fn detail_view(catalog: &Catalog, item: &Item, options: &ViewOptions) -> DetailView {
    DetailView {
        id: item.id,
        name: item.name.clone(),
        scientific_name: item.scientific_name.clone(),
        image: image_or_placeholder(&item.image, &options.placeholder_image),
        category: category_badge(catalog, &item.category),
        care: care_badge(item.care_level),
        water: BadgeView {
            icon: "💧".to_string(),
            label: format!("{} Water", item.water_needs.label()),
        },
        description: item.description.clone(),
        height: item.mature_height.clone(),
        growth_rate: item.growth_rate.label().to_string(),
        flower_color: or_not_available(item.flower_color.as_deref()),
        bloom_season: or_not_available(item.bloom_season.as_deref()),
        climate: item.climate.join(LIST_DELIMITER),
        light: item.light.join(LIST_DELIMITER),
        soil: item.soil.join(LIST_DELIMITER),
        traits: item.traits.clone(),
        tips: item.tips.clone(),
    }
}

pub fn controls_view(catalog: &Catalog, state: &FilterState, inputs: &InputValues) -> ControlsView {
    let facets = FacetFamily::ALL
        .iter()
        .map(|family| FacetGroupView {
            family: *family,
            heading: family.heading().to_string(),
            chips: catalog
                .facets(*family)
                .iter()
                .map(|def| ChipView {
                    id: def.id.clone(),
                    name: def.name.clone(),
                    icon: def.icon.clone(),
                    active: state.is_selected(*family, &def.id),
                })
                .collect(),
        })
        .collect();

    let mut categories = vec![OptionView {
        value: String::new(),
        label: "All Categories".to_string(),
        selected: inputs.category.is_empty(),
    }];
    categories.extend(catalog.categories().iter().map(|c| OptionView {
        value: c.id.clone(),
        label: format!("{} {}", c.icon, c.name).trim().to_string(),
        selected: inputs.category == c.id,
    }));

    let mut care_levels = vec![OptionView {
        value: String::new(),
        label: "All Care Levels".to_string(),
        selected: inputs.care_level.is_empty(),
    }];
    care_levels.extend(CareLevel::ALL.iter().map(|level| OptionView {
        value: level.as_str().to_string(),
        label: capitalize(level.as_str()),
        selected: inputs.care_level == level.as_str(),
    }));

    ControlsView {
        facets,
        search: inputs.search.clone(),
        category_label: selected_label(&categories, &inputs.category),
        care_label: selected_label(&care_levels, &inputs.care_level),
        categories,
        care_levels,
    }
}

fn selected_label(options: &[OptionView], raw: &str) -> String {
    options
        .iter()
        .find(|option| option.selected)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| raw.to_string())
}

pub fn category_badge(catalog: &Catalog, category: &str) -> BadgeView {
    match catalog.category(category) {
        Some(def) => BadgeView {
            icon: def.icon.clone(),
            label: def.name.clone(),
        },
        None => BadgeView {
            icon: String::new(),
            label: category.to_string(),
        },
    }
}

pub fn care_badge(level: CareLevel) -> BadgeView {
    BadgeView {
        icon: level.glyph().to_string(),
        label: level.label().to_string(),
    }
}

/// Keeps `reference` if it is an absolute URL or a relative path, otherwise substitutes the
/// placeholder. Relative paths resolve against wherever the catalog is served from.
pub fn image_or_placeholder(reference: &str, placeholder: &str) -> String {
    let reference = reference.trim();
    if reference.is_empty() || reference.contains(char::is_whitespace) {
        return placeholder.to_string();
    }
    match url::Url::parse(reference) {
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => reference.to_string(),
        Err(_) => placeholder.to_string(),
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cuts `s` to at most `max_width` display columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    let mut result = result.trim_end().to_string();
    result.push('…');
    result
}

#[cfg(any(test, feature = "test_utils"))]
pub mod recording {
    use super::*;

    /// What a [`RecordingSink`] was asked to do, in order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum SinkCall {
        Controls(ControlsView),
        Results(ResultsView),
        ShowDetail(DetailView),
        HideDetail,
    }

    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub calls: Vec<SinkCall>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn results(&self) -> Vec<&ResultsView> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    SinkCall::Results(r) => Some(r),
                    _ => None,
                })
                .collect()
        }

        pub fn last_results(&self) -> Option<&ResultsView> {
            self.results().last().copied()
        }

        pub fn last_controls(&self) -> Option<&ControlsView> {
            self.calls.iter().rev().find_map(|c| match c {
                SinkCall::Controls(v) => Some(v),
                _ => None,
            })
        }

        pub fn clear(&mut self) {
            self.calls.clear();
        }
    }

    impl RenderSink for RecordingSink {
        fn render_controls(&mut self, controls: &ControlsView) {
            self.calls.push(SinkCall::Controls(controls.clone()));
        }

        fn render_results(&mut self, results: &ResultsView) {
            self.calls.push(SinkCall::Results(results.clone()));
        }

        fn show_detail(&mut self, detail: &DetailView) {
            self.calls.push(SinkCall::ShowDetail(detail.clone()));
        }

        fn hide_detail(&mut self) {
            self.calls.push(SinkCall::HideDetail);
        }
    }
}
