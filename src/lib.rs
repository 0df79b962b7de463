//! GlassTube - a glassy video portal demo
//!
//! A desktop mock of a video-sharing site: home and trending feeds, a watch
//! page with comments, sign-in and an admin-only upload dialog. All data is
//! in memory and resets on restart.
//!
//! # Architecture
//!
//! - [`core`] - Catalog, filtering, reactions, sessions and the [`Portal`] controller
//! - [`validators`] - Input validation and sanitization
//! - [`config`] - UI preference persistence
//! - [`theme`] - Color palettes
//! - [`utils`] - Utility functions (XDG directories, etc.)

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod theme;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::catalog::{Catalog, Category, ContentItem};
pub use core::error::{Error, Result};
pub use core::filter::{Section, filter_catalog};
pub use core::portal::Portal;
pub use core::reaction::{ReactionKind, toggle};
