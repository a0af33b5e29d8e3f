//! Add-entry handler for the dev-notes MCP server

use crate::DevNotesHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DevNotesHandler {
    /// Appends a new unfinished entry of the given category.
    ///
    /// The board itself accepts empty content; rejecting it is this
    /// handler's policy, the same guard the original creation button had.
    pub async fn handle_add_entry(
        &self,
        entry_type: String,
        title: Option<String>,
        content: String,
    ) -> McpResult<String> {
        if content.trim().is_empty() {
            bail_public!(_, "Entry content cannot be empty. Provide some text for the entry.");
        }

        let mut data = self.data.lock().unwrap();

        let type_name = validation::parse_entry_type(data.registry(), &entry_type)?;

        let index = match data.add_entry(&type_name, title.as_deref().unwrap_or(""), &content) {
            Ok(index) => index,
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };

        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Add {} entry", type_name)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Entry created at index {} (type: {})",
            index, type_name
        ))
    }
}
