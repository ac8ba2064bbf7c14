//! Detail overlay state.
//!
//! ```text
//!            open(known id)
//!   Closed ─────────────────▶ Open(id)
//!     ▲  ▲                      │
//!     │  └──── close() ◀────────┘   (backdrop, close control, escape)
//!     └─ open(unknown id): no-op
//! ```
//!
//! Background scrolling is locked exactly while the overlay is open.

use crate::catalog::Catalog;
use crate::model::{Item, PlantId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(PlantId),
}

/// The ways a user can ask the overlay to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSignal {
    Backdrop,
    CloseControl,
    Escape,
}

#[derive(Debug, Default)]
pub struct DetailOverlay {
    state: OverlayState,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Opens on the plant with `id`. Returns the plant, or `None` (and leaves the state alone)
    /// when the catalog has no such plant.
    pub fn open<'a>(&mut self, catalog: &'a Catalog, id: PlantId) -> Option<&'a Item> {
        let item = catalog.item(id)?;
        self.state = OverlayState::Open(id);
        Some(item)
    }

    /// Returns whether the overlay was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = OverlayState::Closed;
        was_open
    }

    pub fn dismiss(&mut self, signal: DismissSignal) -> bool {
        tracing::trace!(?signal, open = self.is_open(), "overlay dismissal");
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::CatalogFixture;

    #[test]
    fn open_known_id() {
        let catalog = CatalogFixture::aloe_and_fern().build();
        let mut overlay = DetailOverlay::new();

        let item = overlay.open(&catalog, 2).unwrap();
        assert_eq!(item.name, "Fern");
        assert_eq!(overlay.state(), OverlayState::Open(2));
        assert!(overlay.scroll_locked());
    }

    #[test]
    fn open_unknown_id_stays_closed() {
        let catalog = CatalogFixture::aloe_and_fern().build();
        let mut overlay = DetailOverlay::new();

        assert!(overlay.open(&catalog, 99).is_none());
        assert_eq!(overlay.state(), OverlayState::Closed);
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn unknown_id_while_open_keeps_current_plant() {
        let catalog = CatalogFixture::aloe_and_fern().build();
        let mut overlay = DetailOverlay::new();
        overlay.open(&catalog, 1);
        overlay.open(&catalog, 99);
        assert_eq!(overlay.state(), OverlayState::Open(1));
    }

    #[test]
    fn close_is_idempotent() {
        let catalog = CatalogFixture::aloe_and_fern().build();
        let mut overlay = DetailOverlay::new();
        overlay.open(&catalog, 1);

        assert!(overlay.close());
        assert!(!overlay.close());
        assert_eq!(overlay.state(), OverlayState::Closed);
    }

    #[test]
    fn every_dismiss_signal_closes() {
        let catalog = CatalogFixture::aloe_and_fern().build();
        for signal in [
            DismissSignal::Backdrop,
            DismissSignal::CloseControl,
            DismissSignal::Escape,
        ] {
            let mut overlay = DetailOverlay::new();
            overlay.open(&catalog, 1);
            assert!(overlay.dismiss(signal));
            assert!(!overlay.is_open());
        }
    }
}
