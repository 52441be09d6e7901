//! Engine configuration and its layered loading.

use std::fs;
use std::path::Path;

use autodoc_chunk::ChunkOptions;
use autodoc_graph::ResolveOptions;
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Prefix of environment variables that override configuration values.
///
/// Nested keys are separated by a double underscore, e.g.
/// `AUTODOC_CHUNKING__MAX_CHUNK_SIZE=2000`.
pub const ENV_PREFIX: &str = "AUTODOC_";

/// Log level names accepted in `settings.log_level`.
pub const LOG_LEVELS: &[&str] = &[
    "silent", "off", "error", "warn", "warning", "info", "debug", "trace",
];

/// Configuration for one analysis engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How relative imports are matched to input files.
    pub resolve: ResolveOptions,
    /// Chunk extraction limits.
    pub chunking: ChunkOptions,
    /// Runtime settings.
    pub settings: Settings,
}

/// Runtime knobs that do not change analysis results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level used when the engine installs logging itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Worker threads for parsing and chunking. `None` uses the global pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_jobs: Option<usize>,
}

/// File formats a config file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl EngineConfig {
    /// Build the layered figment: defaults, then the optional file, then
    /// `AUTODOC_*` environment variables.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            let format = ConfigFormat::from_path(path)?;
            let content = fs::read_to_string(path)?;
            figment = match format {
                ConfigFormat::Toml => figment.merge(Toml::string(&content)),
                ConfigFormat::Json => figment.merge(Json::string(&content)),
            };
            tracing::debug!(path = %path.display(), ?format, "merged config file");
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load and validate configuration.
    ///
    /// Priority: environment variables > config file > defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or has an unsupported extension, if a
    /// value has the wrong type, or if [`validate`](Self::validate) rejects
    /// the result.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(file)?.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chunk_size == 0 {
            return Err(ConfigError::invalid(
                "chunking.max_chunk_size",
                "must be greater than zero",
            ));
        }

        if let Some(pos) = self.resolve.extensions.iter().position(|ext| ext.trim().is_empty()) {
            return Err(ConfigError::invalid(
                format!("resolve.extensions[{pos}]"),
                "extension entries must not be empty",
            ));
        }

        if self.settings.parallel_jobs == Some(0) {
            return Err(ConfigError::invalid(
                "settings.parallel_jobs",
                "must be at least 1, or omitted to use all cores",
            ));
        }

        if let Some(level) = &self.settings.log_level {
            if !LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
                return Err(ConfigError::invalid(
                    "settings.log_level",
                    format!("unknown level '{level}', expected one of {}", LOG_LEVELS.join(", ")),
                ));
            }
        }

        Ok(())
    }

    /// Render the configuration as a TOML document, suitable for writing an
    /// `autodoc.toml` starter file.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| ConfigError::invalid("configuration", err.to_string()))
    }
}
