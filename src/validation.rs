//! Validation helper functions for the dev-notes MCP server
//!
//! This module contains validation logic for filter parameters, entry type
//! names, and entry indices, mapping domain failures to MCP parameter
//! errors.

use crate::notes::{EntryFilter, NoteBoard, TypeRegistry};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a filter parameter against the registry
///
/// Accepts "all" (any case) or a registered category name. An unknown name
/// is rejected here with the list of valid options, rather than silently
/// matching nothing, because a tool caller almost certainly mistyped.
pub fn parse_filter(registry: &TypeRegistry, filter_str: &str) -> McpResult<EntryFilter> {
    let filter: EntryFilter = filter_str
        .parse()
        .map_err(|e: String| invalid_params(e))?;

    if let EntryFilter::Type(ref name) = filter
        && registry.find(name).is_none()
    {
        return Err(invalid_params(format!(
            "Invalid filter '{}'. Use 'all' or one of: {}",
            name,
            registry.names().join(", ")
        )));
    }

    Ok(filter)
}

/// Validate an entry type name against the registry
pub fn parse_entry_type(registry: &TypeRegistry, type_str: &str) -> McpResult<String> {
    match registry.find(type_str.trim()) {
        Some(entry_type) => Ok(entry_type.name.clone()),
        None => Err(invalid_params(format!(
            "Invalid entry type '{}'. Valid types: {}",
            type_str,
            registry.names().join(", ")
        ))),
    }
}

/// Validate an entry index against the board
pub fn check_entry_index(board: &NoteBoard, index: usize) -> McpResult<usize> {
    if index < board.entries().len() {
        Ok(index)
    } else {
        Err(invalid_params(format!(
            "Entry index {} out of range: the board has {} entries. Use list() to see indices.",
            index,
            board.entries().len()
        )))
    }
}
