//! # autodoc-chunk
//!
//! Splits a parsed JavaScript/TypeScript file into named pieces of source
//! text: one chunk per class, one per function, or a single module chunk when
//! the file declares neither.
//!
//! ```rust
//! use autodoc_chunk::{ChunkExtractor, ChunkKind};
//! use autodoc_parser::SourceParser;
//!
//! let source = "export class Cart { add() {} }\nfunction total() {}\n";
//! let parsed = SourceParser::new().parse_file(source, "src/cart.ts").unwrap();
//! let chunks = ChunkExtractor::default().chunk(&parsed, source);
//!
//! assert_eq!(chunks[0].kind, ChunkKind::Class);
//! assert_eq!(chunks[0].content, "export class Cart { add() {} }");
//! assert_eq!(chunks[1].name, "total");
//! ```

pub mod extractor;
pub mod model;

pub use extractor::{ChunkExtractor, in_source_order};
pub use model::{ChunkKind, ChunkOptions, CodeChunk};
