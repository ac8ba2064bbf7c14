//! Line-oriented input transport: one user action per line.

use plantfinder::model::FacetFamily;
use plantfinder::overlay::DismissSignal;
use plantfinder::router::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Event),
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Nothing;
    }
    if let Some(query) = line.strip_prefix('/') {
        return Action::Dispatch(Event::SearchInput(query.to_string()));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let event = match word.to_lowercase().as_str() {
        "climate" | "light" | "soil" | "traits" | "trait" => {
            if rest.is_empty() {
                return Action::Unknown(line.to_string());
            }
            let Ok(family) = word.parse::<FacetFamily>() else {
                return Action::Unknown(line.to_string());
            };
            Event::ToggleChip {
                family,
                id: rest.to_string(),
            }
        }
        "search" => Event::SearchInput(rest.to_string()),
        "category" | "cat" => Event::SelectCategory(rest.to_string()),
        "care" => Event::SelectCareLevel(rest.to_lowercase()),
        "clear" => Event::ClearAll,
        "open" => Event::SelectItem(rest.to_string()),
        "close" => Event::Dismiss(DismissSignal::CloseControl),
        "esc" | "escape" => Event::Dismiss(DismissSignal::Escape),
        "backdrop" => Event::Dismiss(DismissSignal::Backdrop),
        "help" | "?" => return Action::Help,
        "quit" | "exit" | "q" => return Action::Quit,
        _ => return Action::Unknown(line.to_string()),
    };
    Action::Dispatch(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> Event {
        match parse_line(line) {
            Action::Dispatch(event) => event,
            other => panic!("expected an event for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn chips() {
        assert_eq!(
            event("climate arid"),
            Event::ToggleChip {
                family: FacetFamily::Climate,
                id: "arid".into()
            }
        );
        assert_eq!(
            event("Traits   air-purifying "),
            Event::ToggleChip {
                family: FacetFamily::Traits,
                id: "air-purifying".into()
            }
        );
        assert_eq!(parse_line("soil"), Action::Unknown("soil".into()));
    }

    #[test]
    fn search_forms() {
        assert_eq!(event("/Desert Rose"), Event::SearchInput("Desert Rose".into()));
        assert_eq!(event("search  rose"), Event::SearchInput("rose".into()));
        assert_eq!(event("search"), Event::SearchInput(String::new()));
    }

    #[test]
    fn selectors_allow_empty_values() {
        assert_eq!(event("category"), Event::SelectCategory(String::new()));
        assert_eq!(event("cat tropical"), Event::SelectCategory("tropical".into()));
        assert_eq!(event("care Hard"), Event::SelectCareLevel("hard".into()));
    }

    #[test]
    fn overlay_actions() {
        assert_eq!(event("open 12"), Event::SelectItem("12".into()));
        assert_eq!(event("open"), Event::SelectItem(String::new()));
        assert_eq!(event("esc"), Event::Dismiss(DismissSignal::Escape));
        assert_eq!(event("close"), Event::Dismiss(DismissSignal::CloseControl));
        assert_eq!(event("backdrop"), Event::Dismiss(DismissSignal::Backdrop));
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_line("   "), Action::Nothing);
        assert_eq!(parse_line("help"), Action::Help);
        assert_eq!(parse_line("quit"), Action::Quit);
        assert_eq!(parse_line("dance"), Action::Unknown("dance".into()));
        assert_eq!(event("clear"), Event::ClearAll);
    }
}
