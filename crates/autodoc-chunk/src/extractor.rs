use std::path::Path;

use autodoc_parser::{ParsedFile, SourceRange};

use crate::model::{ChunkKind, ChunkOptions, CodeChunk};

/// Cuts parsed files into chunks.
///
/// Classes come first, then functions, each in the order the parser recorded
/// them. Files without either get a single module chunk holding the start of
/// the file.
#[derive(Debug, Clone, Default)]
pub struct ChunkExtractor {
    options: ChunkOptions,
}

impl ChunkExtractor {
    pub fn new(options: ChunkOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ChunkOptions {
        &self.options
    }

    /// Chunk `parsed` using `raw`, the text it was parsed from.
    ///
    /// A range that does not fit `raw` produces a chunk with empty content
    /// rather than a panic.
    pub fn chunk(&self, parsed: &ParsedFile, raw: &str) -> Vec<CodeChunk> {
        if parsed.is_structurally_empty() {
            return vec![self.fallback(&parsed.path, raw)];
        }

        let classes = parsed.classes.iter().map(|class| {
            self.cut(ChunkKind::Class, &class.name, class.range, parsed, raw)
        });
        let functions = parsed.functions.iter().map(|function| {
            self.cut(ChunkKind::Function, &function.name, function.range, parsed, raw)
        });

        let chunks: Vec<CodeChunk> = classes.chain(functions).collect();
        tracing::trace!(
            path = %parsed.path.display(),
            chunks = chunks.len(),
            "chunked file"
        );
        chunks
    }

    /// The module chunk for `raw`: its first `max_chunk_size` characters,
    /// named after `path`.
    ///
    /// Used for structurally empty files and for files that could not be
    /// parsed at all.
    pub fn fallback(&self, path: impl AsRef<Path>, raw: &str) -> CodeChunk {
        let prefix = char_prefix(raw, self.options.max_chunk_size);
        let end = u32::try_from(prefix.len()).unwrap_or(u32::MAX);

        CodeChunk::new(
            ChunkKind::Module,
            path.as_ref().display().to_string(),
            prefix,
            SourceRange::new(0, end),
        )
    }

    fn cut(
        &self,
        kind: ChunkKind,
        name: &str,
        range: SourceRange,
        parsed: &ParsedFile,
        raw: &str,
    ) -> CodeChunk {
        let content = range.slice(raw).unwrap_or_else(|| {
            tracing::warn!(
                path = %parsed.path.display(),
                %kind,
                name,
                %range,
                raw_len = raw.len(),
                "chunk range does not fit source text"
            );
            ""
        });
        CodeChunk::new(kind, name, content, range)
    }
}

/// Reorder chunks by where they start in the file.
///
/// The sort is stable, so a class and the functions nested in it keep the
/// class first.
pub fn in_source_order(chunks: &mut [CodeChunk]) {
    chunks.sort_by_key(|chunk| chunk.range.start);
}

/// Longest prefix of `text` holding at most `max_chars` characters.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_prefix_counts_characters_not_bytes() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 0), "");
        assert_eq!(char_prefix("", 5), "");
    }

    #[test]
    fn fallback_range_covers_prefix_bytes() {
        let extractor = ChunkExtractor::new(ChunkOptions { max_chunk_size: 3 });
        let chunk = extractor.fallback("src/notes.ts", "ééé-tail");

        assert_eq!(chunk.kind, ChunkKind::Module);
        assert_eq!(chunk.name, "src/notes.ts");
        assert_eq!(chunk.content, "ééé");
        assert_eq!(chunk.range, SourceRange::new(0, 6));
    }

    #[test]
    fn mismatched_source_yields_empty_content() {
        let mut parsed = ParsedFile::new("src/a.ts");
        parsed.functions.push(autodoc_parser::ParsedFunction {
            name: "far".into(),
            params: Vec::new(),
            is_async: false,
            is_exported: false,
            range: SourceRange::new(10, 40),
        });

        let chunks = ChunkExtractor::default().chunk(&parsed, "short");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "");
        assert_eq!(chunks[0].range, SourceRange::new(10, 40));
    }
}
