use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast_visit::Visit;
use oxc_parser::{Parser, ParserReturn};
use oxc_span::SourceType;

use crate::error::{ParseError, Result};
use crate::model::ParsedFile;
use crate::visitor::StructureCollector;

/// Extensions that get structural analysis.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Extracts imports, classes and functions from JavaScript / TypeScript sources using OXC.
///
/// The parser holds no state between calls, so one value can be shared freely
/// across threads and parsing distinct files in parallel is always safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceParser;

impl SourceParser {
    pub fn new() -> Self {
        Self
    }

    /// Whether `path` has an extension this parser understands.
    pub fn supports(path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
    }

    /// Parse `content` into a [`ParsedFile`] recorded under `path`.
    ///
    /// The syntax flavor is inferred from the extension of `path`; unknown
    /// extensions are parsed as TypeScript modules.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] if the parser reports any diagnostic.
    pub fn parse_file(&self, content: &str, path: impl AsRef<Path>) -> Result<ParsedFile> {
        let path = path.as_ref();
        let source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::ts());

        let allocator = Allocator::default();
        let ParserReturn {
            program,
            errors,
            panicked,
            ..
        } = Parser::new(&allocator, content, source_type).parse();

        if panicked || !errors.is_empty() {
            let mut diagnostics: Vec<String> = errors.iter().map(ToString::to_string).collect();
            if diagnostics.is_empty() {
                diagnostics.push("parser aborted".to_string());
            }
            tracing::debug!(
                path = %path.display(),
                errors = diagnostics.len(),
                "source failed to parse"
            );
            return Err(ParseError::syntax(path, &diagnostics));
        }

        let mut collector = StructureCollector::new(content, ParsedFile::new(path));
        collector.visit_program(&program);
        let parsed = collector.finish();

        tracing::trace!(
            path = %path.display(),
            imports = parsed.imports.len(),
            classes = parsed.classes.len(),
            functions = parsed.functions.len(),
            "parsed source structure"
        );

        Ok(parsed)
    }
}
