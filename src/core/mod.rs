//! Core video portal functionality
//!
//! Everything here is UI-agnostic and shared by the GUI and the CLI:
//!
//! - [`catalog`]: Content items, the seeded demo catalog and JSON loading
//! - [`filter`]: Sidebar sections and the search filter
//! - [`reaction`]: Like/dislike/save state per viewer
//! - [`session`]: Roles and the signed-in viewer
//! - [`directory`]: Credential lookup contract and the mock directory
//! - [`comments`]: Per-video comment threads
//! - [`upload`]: Upload drafts and their validation
//! - [`notify`]: Toast notification contract
//! - [`portal`]: Controller tying the above together
//! - [`error`]: Error types

pub mod catalog;
pub mod comments;
pub mod directory;
pub mod error;
pub mod filter;
pub mod notify;
pub mod portal;
pub mod reaction;
pub mod session;
pub mod upload;

#[cfg(test)]
pub mod test_helpers;
