//! # autodoc-parser
//!
//! Structural parsing for JavaScript/TypeScript sources.
//!
//! Given the text of one file, [`SourceParser::parse_file`] produces a
//! [`ParsedFile`]: the file's imports, class declarations (with method names)
//! and functions (declarations plus function/arrow expressions bound to
//! variables), each carrying the byte [`SourceRange`] it occupies.
//!
//! Parsing is pure: no I/O, no shared state. Distinct files can be parsed on
//! separate threads.
//!
//! ```rust
//! use autodoc_parser::SourceParser;
//!
//! let source = "import { readFile } from 'fs';\nexport default class { foo() {} }\n";
//! let parsed = SourceParser::new().parse_file(source, "src/store.ts").unwrap();
//!
//! assert_eq!(parsed.imports[0].specifiers, ["readFile"]);
//! assert_eq!(parsed.classes[0].name, "AnonymousClass");
//! assert_eq!(parsed.classes[0].methods, ["foo"]);
//! assert!(parsed.classes[0].is_exported);
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod range;
mod visitor;

pub use error::{ParseError, Result};
pub use model::{
    ANONYMOUS_CLASS, ANONYMOUS_FUNCTION, PLACEHOLDER_PARAM, ParsedClass, ParsedFile,
    ParsedFunction, ParsedImport, is_relative_specifier,
};
pub use parser::{SUPPORTED_EXTENSIONS, SourceParser};
pub use range::SourceRange;
