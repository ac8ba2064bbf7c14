//! # Session
//!
//! The session is the entry point for every front end: it owns the loaded catalog, the
//! [`Router`] (and through it the filter state) and the [`RenderSink`].
//!
//! ## Lifecycle
//!
//! 1. [`Session::start`] loads the catalog exactly once from a [`CatalogSource`].
//! 2. On success it renders the controls and the unfiltered results.
//! 3. The front end feeds [`Event`]s through [`Session::dispatch`] and calls
//!    [`Session::tick`] so debounced input can fire.
//!
//! ## Load Failure
//!
//! A failed load is logged and leaves the session **inert**: nothing is rendered, and every
//! later event or tick is ignored. There is no retry and no partial render.

use crate::catalog::{Catalog, CatalogSource};
use crate::config::FinderConfig;
use crate::error::LoadError;
use crate::router::{Event, Router};
use crate::view::RenderSink;
use std::time::Instant;

pub struct Session<S: RenderSink> {
    catalog: Option<Catalog>,
    router: Router,
    sink: S,
    load_error: Option<LoadError>,
}

impl<S: RenderSink> Session<S> {
    pub fn start<C: CatalogSource>(source: &C, sink: S, config: &FinderConfig) -> Self {
        let router = Router::new(config.search_debounce(), config.view_options());
        let mut session = match source.load() {
            Ok(catalog) => Self {
                catalog: Some(catalog),
                router,
                sink,
                load_error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to load plant catalog");
                Self {
                    catalog: None,
                    router,
                    sink,
                    load_error: Some(e),
                }
            }
        };

        if let Some(catalog) = &session.catalog {
            session.router.render_all(catalog, &mut session.sink);
        }
        session
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn dispatch(&mut self, event: Event, now: Instant) {
        match &self.catalog {
            Some(catalog) => self.router.handle(catalog, &mut self.sink, event, now),
            None => tracing::trace!(?event, "ignored: catalog not loaded"),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(catalog) = &self.catalog {
            self.router.tick(catalog, &mut self.sink, now);
        }
    }

    /// Fires pending debounced input right away. Used when the input source closes.
    pub fn flush(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.router.flush(catalog, &mut self.sink);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.catalog.as_ref().and(self.router.next_deadline())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
