//! # autodoc
//!
//! Structural analysis engine for JavaScript/TypeScript projects.
//!
//! Given the text of a project's files, autodoc extracts each file's imports,
//! classes and functions, links files into a dependency graph through their
//! relative imports, and cuts the sources into class, function and module
//! chunks. The results feed documentation generation: per-file
//! [`FileSummary`] records describe what a file declares and how it relates
//! to the rest of the project, and chunks supply the code itself.
//!
//! The engine does no I/O of its own. Callers load files, hand them over as
//! [`SourceFile`] values and get an [`Analysis`] back.
//!
//! ## Crates
//!
//! - [`parser`]: structural parsing (`autodoc-parser`)
//! - [`graph`]: dependency graph (`autodoc-graph`)
//! - [`chunk`]: chunk extraction (`autodoc-chunk`)
//! - [`config`]: layered configuration (`autodoc-config`)
//!
//! ## Logging
//!
//! Every crate emits `tracing` events. Enable the `logging` feature (on by
//! default) for [`logging::init_logging`] and friends, or install your own
//! subscriber.

pub mod analysis;
pub mod engine;
pub mod error;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

pub use analysis::{Analysis, ClassSummary, FileChunks, FileSummary, ParseFailure, SourceFile};
pub use engine::Engine;
pub use error::{Error, Result};

#[cfg(feature = "logging")]
pub use logging::{LogLevel, init_logging, init_logging_from_env, init_logging_from_settings};

pub use autodoc_chunk::{ChunkExtractor, ChunkKind, ChunkOptions, CodeChunk};
pub use autodoc_config::{ConfigDiscovery, ConfigError, EngineConfig, Settings};
pub use autodoc_graph::{DependencyGraph, FileId, FileNode, ResolveOptions};
pub use autodoc_parser::{
    ParseError, ParsedClass, ParsedFile, ParsedFunction, ParsedImport, SourceParser, SourceRange,
};

pub use autodoc_chunk as chunk;
pub use autodoc_config as config;
pub use autodoc_graph as graph;
pub use autodoc_parser as parser;
