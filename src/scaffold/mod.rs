//! New RFC scaffolding.
//!
//! Creates a branch, a pull request and a new RFC document from the
//! repository template.

pub mod create;
pub mod prompt;
pub mod repo;
pub mod slug;
pub mod template;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use create::{create_rfc, CreatedRfc};
pub use prompt::prompt_request;
pub use repo::{Commit, RepoClient, ShellClient};
pub use slug::slugify;

/// RFC category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    Feature,
    Decision,
    Informational,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Feature,
        Category::Decision,
        Category::Informational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Feature => "feature",
            Category::Decision => "decision",
            Category::Informational => "informational",
        }
    }

    /// Category for a numbered menu choice (`1`, `2` or `3`).
    pub fn from_choice(choice: &str) -> Result<Self, Error> {
        match choice.trim() {
            "1" => Ok(Category::Feature),
            "2" => Ok(Category::Decision),
            "3" => Ok(Category::Informational),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// Input gathered for a new RFC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfcRequest {
    /// Human title, also used as the pull request title.
    pub name: String,
    pub category: Category,
}
