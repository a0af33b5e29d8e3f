use anyhow::{Context, Result};
use git2::{Repository, Signature, Time};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Git operations for automatic version control of the notes file
///
/// Every save commits the data file; shutdown pushes the accumulated
/// commits. All operations are no-ops when the file is not inside a Git
/// working tree.
pub struct GitOps {
    repo: Option<Arc<Mutex<Repository>>>,
}

impl GitOps {
    /// Detect whether the data file lives inside a Git repository
    pub fn new(file_path: &Path) -> Self {
        let file_dir = if file_path.is_file() {
            file_path.parent().unwrap_or(file_path).to_path_buf()
        } else {
            file_path.to_path_buf()
        };

        let repo = Repository::discover(&file_dir)
            .ok()
            .map(|r| Arc::new(Mutex::new(r)));
        Self { repo }
    }

    /// Check if the file is under Git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Commit the data file with the given message
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        let repo = match &self.repo {
            Some(r) => r.lock().unwrap(),
            None => return Ok(()), // Not a git repo, skip
        };

        let repo_workdir = repo
            .workdir()
            .context("Repository has no working directory")?;
        let relative_path = file_path
            .strip_prefix(repo_workdir)
            .context("File is not in repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None, // Initial commit
        };

        let signature = Self::get_signature(&repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(())
    }

    /// Push the current branch to origin
    pub fn push(&self) -> Result<()> {
        let repo = match &self.repo {
            Some(r) => r.lock().unwrap(),
            None => return Ok(()), // Not a git repo, skip
        };

        let head = repo.head().context("Failed to get HEAD")?;
        let branch_name = head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string();

        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;

        let refspec = format!("refs/heads/{}", branch_name);
        remote.push(&[&refspec], None)?;

        Ok(())
    }

    /// Get or create a git signature for commits
    fn get_signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "Dev Notes MCP".to_string());

        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "devnotes-mcp@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Fallback to a fixed time if now() fails (e.g., on some CI systems)
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        (temp_dir, repo)
    }

    #[test]
    fn test_non_git_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.toml");

        let git_ops = GitOps::new(&file_path);
        assert!(!git_ops.is_git_managed());
    }

    #[test]
    fn test_git_managed_directory() {
        let (temp_dir, _repo) = setup_test_repo();

        let file_path = temp_dir.path().join("notes.toml");
        fs::write(&file_path, "format_version = 1").unwrap();

        let git_ops = GitOps::new(&file_path);
        assert!(git_ops.is_git_managed());
    }

    #[test]
    fn test_commit_creates_commit() {
        let (temp_dir, repo) = setup_test_repo();

        let file_path = temp_dir.path().join("notes.toml");
        fs::write(&file_path, "format_version = 1").unwrap();

        let git_ops = GitOps::new(&file_path);
        let result = git_ops.commit(&file_path, "Add TODO entry");
        assert!(result.is_ok(), "commit failed: {:?}", result.err());

        let head = repo.head().unwrap();
        let commit = repo.find_commit(head.target().unwrap()).unwrap();
        assert_eq!(commit.message().unwrap(), "Add TODO entry");
    }

    #[test]
    fn test_commit_outside_repo_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.toml");
        fs::write(&file_path, "format_version = 1").unwrap();

        let git_ops = GitOps::new(&file_path);
        assert!(git_ops.commit(&file_path, "no repo").is_ok());
        assert!(git_ops.push().is_ok());
    }
}
