//! Corpus-level orchestration: parse, link, chunk.

use std::path::Path;

use autodoc_chunk::ChunkExtractor;
use autodoc_config::{ConfigDiscovery, EngineConfig};
use autodoc_graph::DependencyGraph;
use autodoc_parser::{ParseError, ParsedFile, SourceParser};
use rayon::prelude::*;

use crate::analysis::{Analysis, FileChunks, ParseFailure, SourceFile};
use crate::error::{Error, Result};

/// Outcome of the parse phase for one input file.
enum Parsed {
    Structured(ParsedFile),
    Unsupported,
    Failed(ParseError),
}

/// Runs the analysis pipeline over a set of in-memory source files.
///
/// Files are parsed in parallel, the dependency graph is built once every
/// parse has finished, and chunks are cut in parallel against the parsed
/// records. Files that fail to parse, or whose extension is not a script
/// extension, still contribute a module chunk.
///
/// ```rust
/// use autodoc::{Engine, SourceFile};
///
/// let engine = Engine::default();
/// let analysis = engine.analyze(&[
///     SourceFile::new("/p/a.ts", "import { b } from './b';\nexport class A { run() {} }"),
///     SourceFile::new("/p/b.ts", "export const b = () => 1;"),
/// ]);
///
/// let summary = analysis.summary("/p/a.ts").unwrap();
/// assert_eq!(summary.classes[0].methods, ["run"]);
/// assert_eq!(summary.dependencies, [std::path::PathBuf::from("/p/b.ts")]);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    parser: SourceParser,
    chunker: ChunkExtractor,
    pool: Option<rayon::ThreadPool>,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            chunker: ChunkExtractor::new(config.chunking),
            config,
            parser: SourceParser::new(),
            pool: None,
        }
    }
}

impl Engine {
    /// Create an engine from validated configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate, or if a dedicated thread
    /// pool was requested and could not be started.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let pool = config
            .settings
            .parallel_jobs
            .map(|jobs| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .thread_name(|idx| format!("autodoc-worker-{idx}"))
                    .build()
                    .map_err(|err| Error::InvalidConfig(format!("thread pool: {err}")))
            })
            .transpose()?;

        Ok(Self {
            chunker: ChunkExtractor::new(config.chunking),
            config,
            parser: SourceParser::new(),
            pool,
        })
    }

    /// Create an engine from the config file found in `root`, falling back to
    /// defaults when there is none. Environment overrides apply either way.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigDiscovery::new(root).load_or_default()?;
        Self::new(config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse a single file.
    pub fn parse_one(&self, file: &SourceFile) -> Result<ParsedFile> {
        Ok(self.parser.parse_file(&file.content, &file.path)?)
    }

    /// Analyze `files` as one project.
    ///
    /// Never fails: files that do not parse are reported in
    /// [`Analysis::failures`] and chunked as plain modules.
    pub fn analyze(&self, files: &[SourceFile]) -> Analysis {
        match &self.pool {
            Some(pool) => pool.install(|| self.run(files)),
            None => self.run(files),
        }
    }

    fn run(&self, files: &[SourceFile]) -> Analysis {
        let outcomes: Vec<Parsed> = files.par_iter().map(|file| self.parse(file)).collect();

        let mut parsed = Vec::new();
        let mut failures = Vec::new();
        // Index into `parsed` for each input file that produced a record.
        let mut slots = Vec::with_capacity(files.len());

        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Parsed::Structured(record) => {
                    slots.push(Some(parsed.len()));
                    parsed.push(record);
                }
                Parsed::Unsupported => slots.push(None),
                Parsed::Failed(error) => {
                    tracing::warn!(
                        path = %file.path.display(),
                        error = %error,
                        "skipping structural analysis for file"
                    );
                    failures.push(ParseFailure {
                        path: file.path.clone(),
                        error,
                    });
                    slots.push(None);
                }
            }
        }

        let graph = DependencyGraph::build(&parsed, &self.config.resolve);

        let chunks: Vec<FileChunks> = files
            .par_iter()
            .zip(slots.par_iter())
            .map(|(file, slot)| {
                let chunks = match slot {
                    Some(idx) => self.chunker.chunk(&parsed[*idx], &file.content),
                    None => vec![self.chunker.fallback(&file.path, &file.content)],
                };
                FileChunks {
                    path: file.path.clone(),
                    chunks,
                }
            })
            .collect();

        tracing::debug!(
            files = files.len(),
            parsed = parsed.len(),
            failed = failures.len(),
            chunks = chunks.iter().map(|file| file.chunks.len()).sum::<usize>(),
            "analysis complete"
        );

        Analysis::new(parsed, graph, chunks, failures)
    }

    fn parse(&self, file: &SourceFile) -> Parsed {
        if !SourceParser::supports(&file.path) {
            tracing::trace!(path = %file.path.display(), "unsupported extension, module chunk only");
            return Parsed::Unsupported;
        }
        match self.parser.parse_file(&file.content, &file.path) {
            Ok(record) => Parsed::Structured(record),
            Err(error) => Parsed::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.chunking.max_chunk_size = 0;
        assert!(matches!(Engine::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn dedicated_pool_produces_same_analysis() {
        let mut config = EngineConfig::default();
        config.settings.parallel_jobs = Some(2);
        let pooled = Engine::new(config).unwrap();

        let files = [
            SourceFile::new("src/a.ts", "import './b';\nexport function a() {}"),
            SourceFile::new("src/b.ts", "export class B { m() {} }"),
        ];
        let expected = Engine::default().analyze(&files);
        let actual = pooled.analyze(&files);

        assert_eq!(actual.parsed_files(), expected.parsed_files());
        assert_eq!(actual.all_chunks(), expected.all_chunks());
    }
}
