//! # Interaction Router
//!
//! Turns discrete user actions into filter-state mutations and redraws. Every action maps to
//! exactly one mutation and one render, with two exceptions:
//!
//! - **Search input** is debounced. The search box value updates at once, but the filter only
//!   picks it up after the input has been quiet for the configured period. A new keystroke
//!   supersedes the pending one, so a burst of typing costs a single re-filter and redraw.
//! - **Item selection and dismissal** never touch the filter state; they drive the
//!   [`DetailOverlay`].
//!
//! The router owns the [`FilterState`]. It borrows the catalog and the sink per call, and takes
//! the current time as an argument, so its behaviour is fully deterministic under test.

use crate::catalog::Catalog;
use crate::debounce::Debouncer;
use crate::filter::FilterState;
use crate::model::{FacetFamily, PlantId};
use crate::overlay::{DetailOverlay, DismissSignal};
use crate::predicate::filter;
use crate::view::{controls_view, detail_view, results_view, InputValues, RenderSink, ViewOptions};
use std::time::{Duration, Instant};

/// A discrete user action, as reported by the input transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleChip { family: FacetFamily, id: String },
    SearchInput(String),
    SelectCategory(String),
    SelectCareLevel(String),
    ClearAll,
    /// Carries the raw id from the activated card; it may not be a valid id at all.
    SelectItem(String),
    Dismiss(DismissSignal),
}

#[derive(Debug)]
pub struct Router {
    state: FilterState,
    inputs: InputValues,
    search: Debouncer<String>,
    overlay: DetailOverlay,
    options: ViewOptions,
}

impl Router {
    pub fn new(search_quiet: Duration, options: ViewOptions) -> Self {
        Self {
            state: FilterState::new(),
            inputs: InputValues::default(),
            search: Debouncer::new(search_quiet),
            overlay: DetailOverlay::new(),
            options,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn inputs(&self) -> &InputValues {
        &self.inputs
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    /// When the pending search (if any) is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Draws the controls and the results for the current state.
    pub fn render_all<S: RenderSink>(&self, catalog: &Catalog, sink: &mut S) {
        self.render_controls(catalog, sink);
        self.render_results(catalog, sink);
    }

    pub fn handle<S: RenderSink>(
        &mut self,
        catalog: &Catalog,
        sink: &mut S,
        event: Event,
        now: Instant,
    ) {
        tracing::debug!(?event, "handling event");
        match event {
            Event::ToggleChip { family, id } => {
                let active = self.state.toggle_facet(family, &id);
                tracing::trace!(%family, id = id.as_str(), active, "chip toggled");
                self.render_all(catalog, sink);
            }
            Event::SearchInput(text) => {
                self.inputs.search = text.clone();
                self.search.schedule(text, now);
            }
            Event::SelectCategory(id) => {
                self.inputs.category = id.clone();
                self.state.set_category(id);
                self.render_all(catalog, sink);
            }
            Event::SelectCareLevel(level) => {
                self.inputs.care_level = level.clone();
                self.state.set_care_level(level);
                self.render_all(catalog, sink);
            }
            Event::ClearAll => {
                self.state.clear();
                self.inputs = InputValues::default();
                self.search.cancel();
                self.render_all(catalog, sink);
            }
            Event::SelectItem(raw) => self.open_item(catalog, sink, &raw),
            Event::Dismiss(signal) => {
                if self.overlay.dismiss(signal) {
                    sink.hide_detail();
                }
            }
        }
    }

    /// Applies the pending search once its quiet period has elapsed.
    pub fn tick<S: RenderSink>(&mut self, catalog: &Catalog, sink: &mut S, now: Instant) {
        if let Some(text) = self.search.poll(now) {
            self.apply_search(catalog, sink, text);
        }
    }

    /// Applies the pending search immediately, if there is one.
    pub fn flush<S: RenderSink>(&mut self, catalog: &Catalog, sink: &mut S) {
        if let Some(text) = self.search.flush() {
            self.apply_search(catalog, sink, text);
        }
    }

    fn apply_search<S: RenderSink>(&mut self, catalog: &Catalog, sink: &mut S, text: String) {
        tracing::debug!(query = text.as_str(), "search applied");
        self.state.set_search(text);
        self.render_all(catalog, sink);
    }

    fn open_item<S: RenderSink>(&mut self, catalog: &Catalog, sink: &mut S, raw: &str) {
        let Some(id) = parse_plant_id(raw) else {
            tracing::debug!(raw, "ignoring selection without a usable plant id");
            return;
        };
        match self.overlay.open(catalog, id) {
            Some(item) => sink.show_detail(&detail_view(catalog, item, &self.options)),
            None => tracing::debug!(id, "no plant with this id"),
        }
    }

    fn render_controls<S: RenderSink>(&self, catalog: &Catalog, sink: &mut S) {
        sink.render_controls(&controls_view(catalog, &self.state, &self.inputs));
    }

    fn render_results<S: RenderSink>(&self, catalog: &Catalog, sink: &mut S) {
        let matching = filter(catalog.items(), &self.state);
        tracing::trace!(matching = matching.len(), "rendering results");
        sink.render_results(&results_view(catalog, &matching, &self.state, &self.options));
    }
}

fn parse_plant_id(raw: &str) -> Option<PlantId> {
    raw.trim().parse().ok()
}
