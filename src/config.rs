//! Repository configuration.
//!
//! Handles loading the optional `rfcs.toml` at the repository root. Every
//! field has a default, so a repository without the file behaves as the
//! conventional `README.md` + `text/` layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Name of the config file looked up in the repository root.
pub const CONFIG_FILE: &str = "rfcs.toml";

/// Repository configuration stored in `rfcs.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Locations of the index, content documents and template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Index document aggregating links to every RFC.
    #[serde(default = "default_index")]
    pub index: String,

    /// Directory holding the RFC documents.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Extension (without dot) of RFC documents.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Template used for new RFCs.
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            index: default_index(),
            content_dir: default_content_dir(),
            extension: default_extension(),
            template: default_template(),
        }
    }
}

/// Where branches are pushed and where pull requests live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    /// `owner/repo` slug of the hosted repository.
    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: default_remote_name(),
            repository: default_repository(),
        }
    }
}

fn default_index() -> String {
    "README.md".to_string()
}

fn default_content_dir() -> String {
    "text".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_template() -> String {
    "0000-template.md".to_string()
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_repository() -> String {
    "getsentry/rfcs".to_string()
}

impl Config {
    /// Get the config file path for a repository.
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load config from a repository root, falling back to defaults.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path,
            message: e.to_string(),
        })
    }
}

/// Config resolved against a repository root.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub index: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
    /// Content directory as it appears in index links, e.g. `text`.
    pub content_dir_name: String,
    pub extension: String,
    pub remote: RemoteConfig,
}

impl Layout {
    pub fn new(root: &Path, config: &Config) -> Self {
        let content_dir_name = config.paths.content_dir.trim_end_matches('/').to_string();
        Self {
            root: root.to_path_buf(),
            index: root.join(&config.paths.index),
            content_dir: root.join(&content_dir_name),
            template: root.join(&config.paths.template),
            content_dir_name,
            extension: config.paths.extension.trim_start_matches('.').to_string(),
            remote: config.remote.clone(),
        }
    }

    /// Load `rfcs.toml` from `root` and resolve it.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let config = Config::load(root)?;
        Ok(Self::new(root, &config))
    }

    /// Prefix a link target must carry to refer to a content document.
    pub fn link_prefix(&self) -> String {
        format!("{}/", self.content_dir_name)
    }

    /// Index file name without extension, used in report wording.
    pub fn index_label(&self) -> String {
        self.index
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "index".to_string())
    }

    /// Path of an RFC as written in links, e.g. `text/0001-foo.md`.
    pub fn document_link(&self, key: &str) -> String {
        format!("{}{}", self.link_prefix(), key)
    }
}
