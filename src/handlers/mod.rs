//! MCP tool handlers for the dev-notes server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler family is in a separate file for better organization.

pub mod add_entry;
pub mod delete_entry;
pub mod list;
pub mod set_finished;
pub mod update;
