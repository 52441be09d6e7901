//! # autodoc-config
//!
//! Configuration for the autodoc analysis engine.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! `autodoc.toml` or `.autodocrc.json` file, then `AUTODOC_*` environment
//! variables. The loaded [`EngineConfig`] is validated before it is returned.

pub mod config;
pub mod discovery;
pub mod error;

pub use config::{ConfigFormat, ENV_PREFIX, EngineConfig, LOG_LEVELS, Settings};
pub use discovery::{CONFIG_FILE_NAMES, ConfigDiscovery};
pub use error::{ConfigError, Result};

pub use autodoc_chunk::ChunkOptions;
pub use autodoc_graph::ResolveOptions;
