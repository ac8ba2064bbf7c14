//! # Rendering
//!
//! The terminal implementation of [`RenderSink`]. View models from the library are rendered
//! through the templates in [`super::templates`], with styles from [`super::styles`] applied by
//! a `style` filter (or skipped when color is off).
//!
//! Every render prints the complete view, so redrawing with the same data prints the same text.
//! While the detail overlay is open the results are not reprinted; closing it brings the last
//! results back, the way a modal reveals the page behind it.

use super::styles::{Theme, FINDER_THEME};
use super::templates;
use minijinja::{Environment, Error, Value};
use plantfinder::error::Result;
use plantfinder::view::{ControlsView, DetailView, RenderSink, ResultsView};
use serde::Serialize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const HELP_COLUMN: usize = 22;

/// A minijinja environment with every template and the `style` filter registered.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(theme: &Theme, use_color: bool) -> std::result::Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);

        let theme = theme.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });

        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> std::result::Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

#[derive(Serialize)]
struct HelpEntry {
    usage: &'static str,
    padding: String,
    about: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<HelpEntry>,
}

#[derive(Serialize)]
struct HintData<'a> {
    line: &'a str,
}

const HELP_ENTRIES: [(&str, &str); 11] = [
    ("climate <id>", "Toggle a climate chip"),
    ("light <id>", "Toggle a light chip"),
    ("soil <id>", "Toggle a soil chip"),
    ("traits <id>", "Toggle a trait chip"),
    ("search <text>", "Search names and descriptions (also /text)"),
    ("category [id]", "Pick a category, empty for all"),
    ("care [level]", "Pick easy, medium or hard, empty for all"),
    ("clear", "Reset every filter"),
    ("open <id>", "Show a plant's details"),
    ("close | esc", "Close the details"),
    ("quit", "Leave"),
];

pub struct TerminalSink<W: Write> {
    out: W,
    renderer: TemplateRenderer,
    last_results: Option<String>,
    detail_open: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, use_color: bool) -> Result<Self> {
        Ok(Self {
            out,
            renderer: TemplateRenderer::new(&FINDER_THEME, use_color)?,
            last_results: None,
            detail_open: false,
        })
    }

    pub fn help(&mut self) {
        let entries = HELP_ENTRIES
            .iter()
            .map(|&(usage, about)| HelpEntry {
                usage,
                padding: " ".repeat(HELP_COLUMN.saturating_sub(usage.width()).max(1)),
                about,
            })
            .collect();
        let text = self.render("help", &HelpData { entries });
        self.emit(&text);
    }

    pub fn hint(&mut self, line: &str) {
        let text = self.render("hint", &HintData { line });
        self.emit(&text);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.renderer
            .render(name, data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    fn emit(&mut self, text: &str) {
        let written = writeln!(self.out, "{}", text.trim_end()).and_then(|_| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render_controls(&mut self, controls: &ControlsView) {
        let text = self.render("controls", controls);
        self.emit(&text);
    }

    fn render_results(&mut self, results: &ResultsView) {
        let text = self.render("results", results);
        if !self.detail_open {
            self.emit(&text);
        }
        self.last_results = Some(text);
    }

    fn show_detail(&mut self, detail: &DetailView) {
        self.detail_open = true;
        let text = self.render("detail", detail);
        self.emit(&text);
    }

    fn hide_detail(&mut self) {
        self.detail_open = false;
        if let Some(text) = self.last_results.clone() {
            self.emit(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantfinder::catalog::Catalog;
    use plantfinder::filter::FilterState;
    use plantfinder::model::FacetFamily;
    use plantfinder::predicate::filter;
    use plantfinder::view::{controls_view, detail_view, results_view, InputValues, ViewOptions};

    const CATALOG: &str = r#"{
        "plants": [
            {"id": 1, "name": "Aloe", "scientificName": "Aloe vera", "category": "succulent",
             "description": "Soothing gel in thick leaves.", "climate": ["arid"], "light": ["full-sun"],
             "soil": ["sandy"], "traits": ["drought-tolerant"], "careLevel": "easy",
             "waterNeeds": "moderate", "matureHeight": "1-2 ft", "growthRate": "slow",
             "tips": "Let the soil dry out.", "image": ""},
            {"id": 2, "name": "Fern", "scientificName": "Nephrolepis exaltata", "category": "tropical",
             "climate": ["humid"], "light": ["shade"], "soil": ["loamy"], "traits": ["air-purifying"],
             "careLevel": "medium", "waterNeeds": "high", "growthRate": "moderate"}
        ],
        "filters": {
            "climate": [{"id": "arid", "name": "Arid", "icon": "🏜️"}, {"id": "humid", "name": "Humid", "icon": "💦"}],
            "soil": [{"id": "sandy", "name": "Sandy", "icon": "🏖️"}, {"id": "loamy", "name": "Loamy", "icon": "🟫"}]
        },
        "categories": {
            "succulent": {"name": "Succulents", "icon": "🌵"},
            "tropical": {"name": "Tropical", "icon": "🌴"}
        }
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json(CATALOG).unwrap()
    }

    fn sink() -> TerminalSink<Vec<u8>> {
        TerminalSink::new(Vec::new(), false).unwrap()
    }

    fn output(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    fn render_results_for(state: &FilterState) -> String {
        let catalog = catalog();
        let matching = filter(catalog.items(), state);
        let view = results_view(&catalog, &matching, state, &ViewOptions::default());
        let mut sink = sink();
        sink.render_results(&view);
        output(sink)
    }

    #[test]
    fn all_templates_compile() {
        assert!(TemplateRenderer::new(&FINDER_THEME, false).is_ok());
        assert!(TemplateRenderer::new(&FINDER_THEME, true).is_ok());
    }

    #[test]
    fn results_list_cards() {
        let out = render_results_for(&FilterState::new());
        assert!(out.starts_with("All Plants (2 plants)"));
        assert!(out.contains("#1 Aloe"));
        assert!(out.contains("🌵 Succulents"));
        assert!(out.contains("🌿 Easy Care"));
        assert!(out.contains("[full-sun] [drought-tolerant]"));
        assert!(out.contains("#2 Fern"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn results_empty_state() {
        let mut state = FilterState::new();
        state.set_care_level("hard");
        let out = render_results_for(&state);
        assert!(out.starts_with("Matching Plants (0 plants)"));
        assert!(out.contains("No plants match"));
        assert!(!out.contains("#1"));
    }

    #[test]
    fn results_render_identically_twice() {
        let mut state = FilterState::new();
        state.toggle_facet(FacetFamily::Climate, "arid");
        assert_eq!(render_results_for(&state), render_results_for(&state));
    }

    #[test]
    fn detail_shows_every_section() {
        let catalog = catalog();
        let view = detail_view(&catalog, catalog.item(1).unwrap(), &ViewOptions::default());
        let mut sink = sink();
        sink.show_detail(&view);
        let out = output(sink);

        assert!(out.contains("Aloe"));
        assert!(out.contains("Plant Details"));
        assert!(out.contains("N/A"));
        assert!(out.contains("💧 Moderate Water"));
        assert!(out.contains("[drought-tolerant]"));
        assert!(out.contains("Growing Tips"));
        assert!(out.contains(plantfinder::view::PLACEHOLDER_IMAGE));
    }

    #[test]
    fn results_are_held_back_while_detail_is_open() {
        let catalog = catalog();
        let state = FilterState::new();
        let matching = filter(catalog.items(), &state);
        let results = results_view(&catalog, &matching, &state, &ViewOptions::default());

        let mut sink = sink();
        sink.show_detail(&detail_view(&catalog, catalog.item(1).unwrap(), &ViewOptions::default()));
        sink.render_results(&results);
        assert_eq!(output_len_of(&sink, "All Plants"), 0);

        sink.hide_detail();
        assert_eq!(output_len_of(&sink, "All Plants"), 1);
    }

    fn output_len_of(sink: &TerminalSink<Vec<u8>>, needle: &str) -> usize {
        String::from_utf8_lossy(&sink.out).matches(needle).count()
    }

    #[test]
    fn controls_mark_active_chips() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.toggle_facet(FacetFamily::Soil, "sandy");
        let view = controls_view(&catalog, &state, &InputValues::default());

        let mut sink = sink();
        sink.render_controls(&view);
        let out = output(sink);

        assert!(out.contains("Soil:"));
        assert!(out.contains("● 🏖️ Sandy (soil sandy)"));
        assert!(out.contains("○ 🟫 Loamy (soil loamy)"));
        assert!(out.contains("Category: All Categories"));
        assert!(out.contains("Care: All Care Levels"));
        assert!(out.contains("Search: -"));
    }

    #[test]
    fn help_and_hint() {
        let mut sink = sink();
        sink.help();
        sink.hint("dance");
        let out = output(sink);
        assert!(out.contains("climate <id>"));
        assert!(out.contains("Unknown action: dance"));
    }
}
