//! Dev-Notes MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! categorized TODO / dev-notes board: free-text entries tagged with one of
//! nine built-in categories, toggled between active and finished, persisted
//! to a TOML file with optional Git-based version control.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `DevNotesHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `notes` module - Board, entries, categories, views
//! - **Persistence Layer**: `storage` module - File-based TOML storage with Git sync
//!
//! # Example
//!
//! ```no_run
//! use devnotes_mcp::DevNotesHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = DevNotesHandler::new("notes.toml", false)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

mod git_ops;
mod handlers;
mod notes;
mod storage;

pub mod formatting;
pub mod validation;

use anyhow::Result;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use notes::{BoardError, Entry, EntryFilter, EntryType, EntryView, NoteBoard, Rgb, TypeRegistry, local_date_today};
pub use storage::Storage;

/// MCP Server handler for the dev-notes board
///
/// Provides an MCP interface to the board: adding, listing, toggling,
/// recategorizing, editing, and deleting entries. Every change is persisted
/// to a TOML file and optionally committed to Git; pending commits are
/// pushed on shutdown.
pub struct DevNotesHandler {
    pub(crate) data: Mutex<NoteBoard>,
    pub(crate) storage: Storage,
}

impl DevNotesHandler {
    /// Create a new dev-notes server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the notes data file (TOML format)
    /// * `sync_git` - Enable automatic Git synchronization
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use devnotes_mcp::DevNotesHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = DevNotesHandler::new("notes.toml", false)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, sync_git: bool) -> Result<Self> {
        let storage = Storage::new(storage_path, sync_git);
        let data = Mutex::new(storage.load()?);
        Ok(Self { data, storage })
    }

    /// Save board data with a custom commit message
    fn save_data_with_message(&self, message: &str) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save_with_message(&data, message)?;
        Ok(())
    }
}

impl Drop for DevNotesHandler {
    fn drop(&mut self) {
        // Unconditional flush on shutdown, then push if sync is enabled
        if let Ok(data) = self.data.lock() {
            if let Err(e) = self.storage.save_with_message(&data, "Save notes on shutdown") {
                eprintln!("Warning: Shutdown save failed: {}", e);
            }
        }
        if let Err(e) = self.storage.shutdown() {
            eprintln!("Warning: Shutdown git sync failed: {}", e);
        }
    }
}

/// Dev-notes board server: a categorized TODO list for development notes.
///
/// Entries are free-text notes tagged with one of nine categories (TODO, Note,
/// Bug, Backlog, Optimization, Observation, Request, Suggestion, In Progress)
/// and toggled between active and finished. The board keeps a running count of
/// finished entries and can be filtered by category.
///
/// Entries are addressed by their board index as shown by list().
#[mcp_server]
impl McpServer for DevNotesHandler {
    /// **Capture**: Add a new entry to the board. Entries start unfinished.
    /// **Types**: TODO, Note, Bug, Backlog, Optimization, Observation, Request, Suggestion, In Progress.
    #[tool]
    async fn add_entry(
        &self,
        /// Entry type: one of the nine category names
        entry_type: String,
        /// Optional short title (stored, not rendered in list output)
        title: Option<String>,
        /// Free-text content of the entry (must not be empty)
        content: String,
    ) -> McpResult<String> {
        self.handle_add_entry(entry_type, title, content).await
    }

    /// **Review**: List entries, split into active and finished sections, with the finished count.
    /// **Filter**: Pass a category name to narrow the view; omit or use "all" for every entry.
    #[tool]
    async fn list(
        &self,
        /// Filter: "all" or a category name (e.g., "Bug"). Empty=all.
        filter: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(filter).await
    }

    /// **Catalog**: List the nine entry categories with their ordinals and display colors.
    #[tool]
    async fn entry_types(&self) -> McpResult<String> {
        self.handle_entry_types().await
    }

    /// **Toggle**: Mark an entry finished or reopen it. The finished counter is reconciled and persisted.
    #[tool]
    async fn set_finished(
        &self,
        /// Board index of the entry, as shown by list()
        index: u32,
        /// true to finish, false to reopen
        finished: bool,
    ) -> McpResult<String> {
        self.handle_set_finished(index, finished).await
    }

    /// **Recategorize**: Move an entry to a different category.
    #[tool]
    async fn set_entry_type(
        &self,
        /// Board index of the entry, as shown by list()
        index: u32,
        /// New entry type: one of the nine category names
        entry_type: String,
    ) -> McpResult<String> {
        self.handle_set_entry_type(index, entry_type).await
    }

    /// **Edit**: Update an entry's title and/or content in place.
    #[tool]
    async fn update_entry(
        &self,
        /// Board index of the entry, as shown by list()
        index: u32,
        /// New title (optional)
        title: Option<String>,
        /// New content (optional, must not be empty when provided)
        content: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_entry(index, title, content).await
    }

    /// **Delete**: Remove an entry from the board permanently.
    #[tool]
    async fn delete_entry(
        &self,
        /// Board index of the entry, as shown by list()
        index: u32,
    ) -> McpResult<String> {
        self.handle_delete_entry(index).await
    }
}
