//! Delete handler for the dev-notes MCP server

use crate::DevNotesHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DevNotesHandler {
    /// Removes an entry from the board.
    ///
    /// The board adjusts its finished counter for counted entries on
    /// removal, so no extra reconciliation pass is needed here.
    pub async fn handle_delete_entry(&self, index: u32) -> McpResult<String> {
        let index = index as usize;
        let mut data = self.data.lock().unwrap();

        validation::check_entry_index(&data, index)?;

        let removed = match data.remove_entry(index) {
            Ok(entry) => entry,
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };

        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Delete entry {}", index)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Entry {} deleted: ({}) {}",
            index, removed.entry_type, removed.content
        ))
    }
}
