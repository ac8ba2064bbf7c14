use console::{Color, Style};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text styled with a name the theme does not know, to make template typos visible.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles available to templates through the `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text`, or returns it unchanged when color is off. Unknown names get the
    /// missing-style indicator either way.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static FINDER_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("header", Style::new().bold().green())
        .add("count", Style::new().dim())
        .add("empty", Style::new().yellow().italic())
        .add("card_id", Style::new().yellow())
        .add("card_name", Style::new().bold())
        .add("scientific", Style::new().italic().dim())
        .add("badge", Style::new().cyan())
        .add("care", Style::new().green())
        .add("tag", Style::new().fg(Color::Color256(108)))
        .add("detail_name", Style::new().bold().underlined())
        .add("section", Style::new().bold())
        .add("label", Style::new().dim())
        .add("rule", Style::new().dim())
        .add("dim", Style::new().dim())
        .add("facet_heading", Style::new().bold())
        .add("chip", Style::new())
        .add("chip_active", Style::new().bold().green())
        .add("warning", Style::new().yellow())
});
