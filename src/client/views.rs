//! # Bible Views
//!
//! Pure render functions over view-model state. Exactly one of the three
//! viewer states (loading, error, content) is rendered at a time. Output is
//! terminal text, so fetched content is inert however it is marked up.

use crate::client::view_model::BibleViewModel;

/// Heading shared by the page and the viewer
pub const PAGE_TITLE: &str = "Bíblia em Português";

/// Render the viewer block for the current view-model state
pub fn render_viewer(view_model: &BibleViewModel) -> String {
    if view_model.is_loading() {
        return "Loading...".to_string();
    }

    if let Some(error) = view_model.error() {
        return format!("Error loading Bible text: {error}");
    }

    let text = view_model.text().unwrap_or("");
    format!("{PAGE_TITLE}\n\n{text}")
}

/// Render the full page: heading plus the viewer block
pub fn render_page(view_model: &BibleViewModel) -> String {
    format!("=== {PAGE_TITLE} ===\n\n{}", render_viewer(view_model))
}
