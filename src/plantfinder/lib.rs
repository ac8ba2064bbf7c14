//! # Plant Finder Architecture
//!
//! Plant Finder is a **faceted catalog browser library**. The terminal client shipped with it is
//! one front end; the core knows nothing about terminals, stdin or stdout.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front End (cli/, wired by main.rs)                          │
//! │  - Reads user actions, turns them into `Event`s              │
//! │  - Implements `RenderSink` (templates → terminal)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) + Router (router.rs)                   │
//! │  - Loads the catalog once, stays inert if that fails         │
//! │  - Maps each event to one state mutation and one render      │
//! │  - Debounces search input                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter.rs, predicate.rs, view.rs, overlay.rs)         │
//! │  - Pure functions over the catalog and the filter state      │
//! │  - Produces serializable view models, never output           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog/)                                          │
//! │  - `CatalogSource` trait                                     │
//! │  - FileSource (production), InMemorySource (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Filtering Semantics
//!
//! OR within a facet family, AND across families and the other constraints. See
//! [`predicate`] for the full table.
//!
//! ## Testing Strategy
//!
//! 1. **Core** modules carry unit tests for their rules.
//! 2. **Router / Session** are tested with [`view::recording::RecordingSink`] and explicit
//!    timestamps, so debounce behaviour is checked without sleeping.
//! 3. **CLI**: template output is unit tested; the binary is driven end to end from `tests/`.
//!
//! ## Module Overview
//!
//! - [`session`]: bootstrap and ownership root
//! - [`router`]: user actions → state mutations → renders
//! - [`filter`]: the filter state and its mutation API
//! - [`predicate`]: which plants match
//! - [`view`]: view models and the `RenderSink` seam
//! - [`overlay`]: detail overlay state machine
//! - [`debounce`]: single-slot debouncer
//! - [`catalog`]: loading and lookup of the immutable dataset
//! - [`model`]: plant, category and facet types
//! - [`config`]: session settings
//! - [`error`]: error types

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod model;
pub mod overlay;
pub mod predicate;
pub mod router;
pub mod session;
pub mod view;
