use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::git_ops::GitOps;
use crate::notes::NoteBoard;

/// File-based TOML storage for the notes board, with optional Git sync
///
/// Saves are best-effort flushes: the file is written, and when sync is
/// enabled the change is committed. Accumulated commits are pushed once on
/// shutdown. There are no retry semantics.
pub struct Storage {
    file_path: PathBuf,
    git_ops: GitOps,
    sync_git: bool,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git_ops = GitOps::new(&file_path);
        Self {
            file_path,
            git_ops,
            sync_git,
        }
    }

    /// Load the board from disk, or return a fresh one if no file exists yet
    pub fn load(&self) -> Result<NoteBoard> {
        if !self.file_path.exists() {
            return Ok(NoteBoard::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let board: NoteBoard = toml::from_str(&content)?;
        Ok(board)
    }

    /// Save the board with a default commit message
    pub fn save(&self, board: &NoteBoard) -> Result<()> {
        self.save_with_message(board, "Update notes")
    }

    /// Save the board and, when sync is enabled, commit with the message
    pub fn save_with_message(&self, board: &NoteBoard, message: &str) -> Result<()> {
        let content = toml::to_string_pretty(board)?;
        fs::write(&self.file_path, content)?;

        if self.sync_git {
            self.git_ops.commit(&self.file_path, message)?;
        }

        Ok(())
    }

    /// Final flush on shutdown: push pending commits when sync is enabled
    pub fn shutdown(&self) -> Result<()> {
        if self.sync_git && self.git_ops.is_git_managed() {
            self.git_ops.push()?;
        }
        Ok(())
    }
}
