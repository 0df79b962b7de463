//! Message handlers organized by domain
//!
//! Each submodule owns one slice of `State::update`; the portal does the
//! domain work and handlers only move UI state around it.

pub mod catalog;
pub mod comments;
pub mod reactions;
pub mod session;
pub mod settings;
pub mod ui_state;
pub mod upload;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use catalog::*;
pub(crate) use comments::*;
pub(crate) use reactions::*;
pub(crate) use session::*;
pub(crate) use settings::*;
pub(crate) use ui_state::*;
pub(crate) use upload::*;
