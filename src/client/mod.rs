//! # Client Layer
//!
//! The browser-equivalent side of the application: a data-access service, a
//! view model holding loading/text/error state, pure render functions, and a
//! single-route router.

pub mod api;
pub mod router;
pub mod view_model;
pub mod views;

// Re-export core types
pub use api::{BibleService, FetchOutcome};
pub use router::Route;
pub use view_model::BibleViewModel;
