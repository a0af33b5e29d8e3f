//! Dev-notes domain models and business logic
//!
//! This module contains the core board data structures and their
//! implementations, split into submodules:
//! - `entry`: a single categorized note/task
//! - `entry_type`: the fixed category registry with display colors
//! - `board`: the ordered entry store and its operations
//! - `views`: filtered views and finished-counter reconciliation
//! - `serde_impl`: serialization/deserialization of the board

mod board;
mod entry;
mod entry_type;
mod serde_impl;
mod views;

// Re-export all public types
pub use board::{BoardError, NoteBoard};
pub use entry::{Entry, local_date_today};
pub use entry_type::{EntryType, Rgb, TypeRegistry};
pub use views::{EntryFilter, EntryView};
