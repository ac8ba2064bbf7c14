//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/`, one file per
//! view, included here as string constants.
//!
//! Conventions:
//!
//! 1. The environment runs with `trim_blocks`, so a newline right after a block tag is
//!    dropped. Where a line ends in a block tag and a line break is wanted, the template leaves
//!    an extra blank line.
//! 2. Style choices that depend on data are computed once with `{% set %}` and then passed to
//!    the `style` filter, rather than repeating `if` branches around every styled span.
//! 3. Width math and label formatting happen in Rust; templates only lay things out.

pub const RESULTS_TEMPLATE: &str = include_str!("templates/results.jinja");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.jinja");
pub const CONTROLS_TEMPLATE: &str = include_str!("templates/controls.jinja");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.jinja");
pub const HINT_TEMPLATE: &str = include_str!("templates/hint.jinja");

/// (registered name, source) for every template the renderer loads.
pub const ALL: [(&str, &str); 5] = [
    ("results", RESULTS_TEMPLATE),
    ("detail", DETAIL_TEMPLATE),
    ("controls", CONTROLS_TEMPLATE),
    ("help", HELP_TEMPLATE),
    ("hint", HINT_TEMPLATE),
];
