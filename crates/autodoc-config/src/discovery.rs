//! Config file discovery.

use std::path::{Path, PathBuf};

use crate::config::EngineConfig;
use crate::error::{ConfigError, Result};

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &["autodoc.toml", ".autodocrc.json"];

/// Finds and loads the config file of a project directory.
///
/// # Example
///
/// ```no_run
/// use autodoc_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load_or_default().unwrap();
/// assert!(config.chunking.max_chunk_size > 0);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// First existing config file in the root directory.
    ///
    /// Searches `autodoc.toml`, then `.autodocrc.json`.
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load the discovered config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the root has no config file.
    pub fn load(&self) -> Result<EngineConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        EngineConfig::load(Some(&path))
    }

    /// Load the discovered config file, or defaults plus environment overrides
    /// when there is none.
    pub fn load_or_default(&self) -> Result<EngineConfig> {
        let found = self.find();
        if found.is_none() {
            tracing::debug!(root = %self.root.display(), "no config file, using defaults");
        }
        EngineConfig::load(found.as_deref())
    }
}
