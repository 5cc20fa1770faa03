//! # climatrack
//!
//! Web application that accepts a geographic coordinate pair, fetches current
//! conditions from a third-party weather timeline API, stores the snapshot,
//! and displays it back.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML form)
//!     │
//!     ├── Router + Handlers (api/)
//!     │
//!     ├── TimelineClient (timeline/) ──► weather timeline API
//!     │
//!     └── WeatherStore (persistence/) ──► PostgreSQL
//! ```
//!
//! Composition is purely request-scoped: submission runs router → fetcher →
//! store, viewing runs router → store. No component depends on another's
//! internal state.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod timeline;
