//! Completion-toggle handler for the dev-notes MCP server

use crate::DevNotesHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DevNotesHandler {
    /// Sets an entry's completion flag, then reconciles the finished
    /// counter in a single global pass before persisting.
    pub async fn handle_set_finished(&self, index: u32, finished: bool) -> McpResult<String> {
        let index = index as usize;
        let mut data = self.data.lock().unwrap();

        validation::check_entry_index(&data, index)?;

        if let Err(e) = data.set_finished(index, finished) {
            drop(data);
            bail_public!(_, "{}", e);
        }

        let finished_count = data.reconcile();
        drop(data);

        let message = if finished {
            format!("Finish entry {}", index)
        } else {
            format!("Reopen entry {}", index)
        };
        if let Err(e) = self.save_data_with_message(&message) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Entry {} {}. Finished entries: {}",
            index,
            if finished { "marked finished" } else { "reopened" },
            finished_count
        ))
    }
}
