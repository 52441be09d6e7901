//! Top-level error type.

use autodoc_config::ConfigError;
use autodoc_parser::ParseError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the [`Engine`](crate::Engine).
///
/// Corpus analysis never fails as a whole; parse errors only reach callers
/// through [`Engine::parse_one`](crate::Engine::parse_one).
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(code(autodoc::config))]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(autodoc::invalid_config))]
    InvalidConfig(String),
}
