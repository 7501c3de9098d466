//! Version control and code review commands.
//!
//! Every `git` and `gh` invocation goes through [`RepoClient`], so the
//! scaffolding flow can run against a fake in tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::CommandError;

/// Kind of commit to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Empty commit with the given message.
    Empty { message: String },
    /// Amend the previous commit, keeping its message.
    Amend,
}

/// Capability to drive the repository's version control and review tools.
///
/// Each operation returns the captured standard output.
pub trait RepoClient {
    /// Verify the review CLI is installed and authenticated.
    fn check_auth(&self) -> Result<String, CommandError>;

    fn create_branch(&self, branch: &str) -> Result<String, CommandError>;

    fn stage(&self, paths: &[&Path]) -> Result<String, CommandError>;

    fn commit(&self, commit: &Commit) -> Result<String, CommandError>;

    fn push(&self, remote: &str, branch: &str, force: bool) -> Result<String, CommandError>;

    /// Open a pull request for the current branch, filled from its commits.
    fn create_pull_request(&self) -> Result<String, CommandError>;

    fn edit_pull_request(&self, number: &str, body: &str) -> Result<String, CommandError>;
}

/// [`RepoClient`] backed by the `git` and `gh` executables.
#[derive(Debug, Clone)]
pub struct ShellClient {
    root: PathBuf,
}

impl ShellClient {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = format!("{} {}", program, args.join(" "));
        debug!(command = %command, "Running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn git(&self, args: &[&str]) -> Result<String, CommandError> {
        self.run("git", args)
    }

    fn gh(&self, args: &[&str]) -> Result<String, CommandError> {
        self.run("gh", args)
    }
}

impl RepoClient for ShellClient {
    fn check_auth(&self) -> Result<String, CommandError> {
        self.gh(&["auth", "status"])
    }

    fn create_branch(&self, branch: &str) -> Result<String, CommandError> {
        self.git(&["checkout", "-b", branch])
    }

    fn stage(&self, paths: &[&Path]) -> Result<String, CommandError> {
        let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.git(&args)
    }

    fn commit(&self, commit: &Commit) -> Result<String, CommandError> {
        match commit {
            Commit::Empty { message } => {
                self.git(&["commit", "--allow-empty", "-m", message.as_str()])
            }
            Commit::Amend => self.git(&["commit", "--amend", "--no-edit"]),
        }
    }

    fn push(&self, remote: &str, branch: &str, force: bool) -> Result<String, CommandError> {
        if force {
            self.git(&["push", remote, branch, "-f"])
        } else {
            self.git(&["push", remote, branch])
        }
    }

    fn create_pull_request(&self) -> Result<String, CommandError> {
        self.gh(&["pr", "create", "--fill"])
    }

    fn edit_pull_request(&self, number: &str, body: &str) -> Result<String, CommandError> {
        self.gh(&["pr", "edit", number, "--body", body])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let temp = tempfile::TempDir::new().unwrap();
        let client = ShellClient::new(temp.path());

        let err = client
            .run("rfc-tools-no-such-program", &["--version"])
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[test]
    fn test_failed_command() {
        let temp = tempfile::TempDir::new().unwrap();
        let client = ShellClient::new(temp.path());

        // Not a git repository
        match client.git(&["rev-parse", "--abbrev-ref", "HEAD"]) {
            Err(CommandError::Failed { command, .. }) => {
                assert_eq!(command, "git rev-parse --abbrev-ref HEAD");
            }
            // git missing from the test environment
            Err(CommandError::Spawn { .. }) => {}
            Ok(out) => panic!("expected failure, got {:?}", out),
        }
    }
}
