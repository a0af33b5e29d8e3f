//! Entry edit handlers for the dev-notes MCP server

use crate::DevNotesHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DevNotesHandler {
    /// Reassigns an entry to a different category.
    pub async fn handle_set_entry_type(&self, index: u32, entry_type: String) -> McpResult<String> {
        let index = index as usize;
        let mut data = self.data.lock().unwrap();

        let type_name = validation::parse_entry_type(data.registry(), &entry_type)?;
        validation::check_entry_index(&data, index)?;

        if let Err(e) = data.set_entry_type(index, &type_name) {
            drop(data);
            bail_public!(_, "{}", e);
        }

        drop(data);

        if let Err(e) =
            self.save_data_with_message(&format!("Recategorize entry {} as {}", index, type_name))
        {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Entry {} recategorized as {}", index, type_name))
    }

    /// Edits an entry's title and/or content in place.
    pub async fn handle_update_entry(
        &self,
        index: u32,
        title: Option<String>,
        content: Option<String>,
    ) -> McpResult<String> {
        if title.is_none() && content.is_none() {
            bail_public!(_, "Nothing to update: provide a title, content, or both.");
        }
        if let Some(ref content) = content
            && content.trim().is_empty()
        {
            bail_public!(_, "Entry content cannot be empty. Delete the entry instead.");
        }

        let index = index as usize;
        let mut data = self.data.lock().unwrap();

        validation::check_entry_index(&data, index)?;

        if let Err(e) = data.update_entry(index, title.as_deref(), content.as_deref()) {
            drop(data);
            bail_public!(_, "{}", e);
        }

        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Edit entry {}", index)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Entry {} updated", index))
    }
}
