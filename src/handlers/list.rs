//! List and entry-type catalog handlers for the dev-notes MCP server

use crate::DevNotesHandler;
use crate::formatting;
use crate::notes::EntryFilter;
use crate::validation;
use mcp_attr::Result as McpResult;

impl DevNotesHandler {
    /// Handles list/filter operations: runs the reconciliation pass once
    /// over the whole board, then renders the filtered view.
    pub async fn handle_list(&self, filter: Option<String>) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();

        let filter = match filter {
            Some(ref filter_str) => validation::parse_filter(data.registry(), filter_str)?,
            None => EntryFilter::All,
        };

        // One global pass per evaluation tick, independent of the filter
        let finished_count = data.reconcile();

        let view = data.view(&filter);
        Ok(formatting::format_view(&view, &filter, finished_count))
    }

    /// Lists the category catalog with ordinals and display colors.
    pub async fn handle_entry_types(&self) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        Ok(formatting::format_entry_types(data.registry()))
    }
}
