//! Helper utilities for the app layer
//!
//! Pure formatting functions; nothing here touches `State`.

pub mod formatting;

pub use formatting::{
    DESCRIPTION_PREVIEW_LINES, description_preview, format_count, truncate_path_smart,
};
