//! # Biblia - Portuguese Bible Reader and Proxy
//!
//! A small full-stack application: a thin proxy server relaying passages
//! from an upstream Bible provider, and a terminal client rendering the
//! Portuguese Bible text.
//!
//! ## Architecture
//!
//! The client side follows a Model-View-ViewModel split:
//!
//! ```text
//! ┌─────────────┐   renders    ┌────────────────┐    fetches   ┌──────────────┐
//! │    Views    │◄─────────────│ BibleViewModel │◄─────────────│ BibleService │
//! │             │              │                │              │              │
//! │ - page      │              │ - loading      │              │ - reqwest    │
//! │ - viewer    │              │ - text         │              │ - upstream   │
//! └─────────────┘              │ - error        │              │   provider   │
//!                              └────────────────┘              └──────────────┘
//! ```
//!
//! The server side is independent of the client: an axum router exposing
//! `GET /api/bible/portuguese`, which forwards to the same upstream provider
//! and relays its JSON response.

pub mod client;
pub mod cmd_args;
pub mod config;
pub mod models;
pub mod server;

// Re-export main types for easy access
pub use client::{BibleService, BibleViewModel, Route};
pub use config::Config;
pub use models::{BibleBook, BibleResponse, BibleTranslation, BibleVerse, FetchBibleParams, Language};
