//! Formatting helper functions for the dev-notes MCP server
//!
//! This module renders board views and the category catalog as text. The
//! layout follows the classic notes window: active entries first, a
//! placeholder when there are none, then the finished section and the
//! finished count.

use crate::notes::{EntryFilter, EntryView, TypeRegistry};

/// Format a filtered board view into a display string
///
/// # Arguments
/// * `view` - The partitioned view to render
/// * `filter` - The filter that produced it (shown in the header)
/// * `finished_count` - The board-wide finished counter
pub fn format_view(view: &EntryView<'_>, filter: &EntryFilter, finished_count: u32) -> String {
    let filter_label = match filter {
        EntryFilter::All => "All types".to_string(),
        EntryFilter::Type(name) => name.clone(),
    };

    let mut result = format!("Filter: {}\n\n", filter_label);

    if view.active.is_empty() {
        result.push_str("No entries\n");
    } else {
        for (index, entry) in &view.active {
            result.push_str(&format!("[{}] ({}) {}\n", index, entry.entry_type, entry.content));
        }
    }

    if !view.finished.is_empty() {
        result.push_str("\nFinished entries:\n");
        for (index, entry) in &view.finished {
            result.push_str(&format!("[{}] ({}) {}\n", index, entry.entry_type, entry.content));
        }
    }

    result.push_str(&format!("\nFinished: {}\n", finished_count));
    result
}

/// Format the category catalog for selector display
///
/// Lists each category with its ordinal and active/finished hex colors.
pub fn format_entry_types(registry: &TypeRegistry) -> String {
    let mut result = format!("{} entry type(s):\n\n", registry.len());
    for entry_type in registry.iter() {
        result.push_str(&format!(
            "{}. {} (active: {}, finished: {})\n",
            entry_type.ordinal,
            entry_type.name,
            entry_type.color.to_hex(),
            entry_type.finished_color.to_hex()
        ));
    }
    result
}
