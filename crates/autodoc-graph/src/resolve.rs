//! Lexical resolution of relative import specifiers.
//!
//! Nothing here touches the filesystem. A specifier resolves only when it
//! names one of the files the graph was built from, either exactly or after
//! appending one of the configured suffixes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Normalize a path lexically: `.` segments dropped, `..` folded into its
/// parent. Relative paths stay relative.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().clean()
}

/// The path a relative specifier points at before any suffix is tried.
///
/// The specifier is joined onto the importer's directory and normalized.
pub fn candidate_path(importer: &Path, specifier: &str) -> PathBuf {
    let dir = importer.parent().unwrap_or_else(|| Path::new(""));
    dir.join(specifier).clean()
}

/// Every path a specifier could resolve to, in priority order: the bare
/// candidate first, then the candidate with each suffix appended.
pub fn candidates(importer: &Path, specifier: &str, extensions: &[String]) -> Vec<PathBuf> {
    let base = candidate_path(importer, specifier);

    let mut out = Vec::with_capacity(extensions.len() + 1);
    for ext in extensions {
        let mut raw = OsString::from(base.as_os_str());
        raw.push(ext);
        out.push(PathBuf::from(raw).clean());
    }
    out.insert(0, base);
    out
}

/// Resolve `specifier` imported from `importer` against the known files.
///
/// `lookup` maps a normalized path to the value stored for it, typically a
/// node id. Returns the first candidate `lookup` accepts.
pub fn resolve_relative<T>(
    importer: &Path,
    specifier: &str,
    extensions: &[String],
    lookup: impl Fn(&Path) -> Option<T>,
) -> Option<T> {
    candidates(importer, specifier, extensions)
        .iter()
        .find_map(|candidate| lookup(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ResolveOptions;

    #[test]
    fn candidate_joins_importer_directory() {
        assert_eq!(
            candidate_path(Path::new("/p/a.ts"), "./b"),
            PathBuf::from("/p/b")
        );
        assert_eq!(
            candidate_path(Path::new("/p/nested/a.ts"), "../shared/util"),
            PathBuf::from("/p/shared/util")
        );
    }

    #[test]
    fn candidate_for_top_level_relative_file() {
        assert_eq!(candidate_path(Path::new("a.ts"), "./b"), PathBuf::from("b"));
    }

    #[test]
    fn candidates_follow_extension_order() {
        let options = ResolveOptions::default();
        let candidates = candidates(Path::new("/p/a.ts"), "./utils", &options.extensions);

        let expected: Vec<PathBuf> = [
            "/p/utils",
            "/p/utils.ts",
            "/p/utils.js",
            "/p/utils.tsx",
            "/p/utils.jsx",
            "/p/utils/index.ts",
            "/p/utils/index.js",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn resolve_takes_first_known_candidate() {
        let known = [PathBuf::from("/p/b.js"), PathBuf::from("/p/b/index.ts")];
        let options = ResolveOptions::default();

        let hit = resolve_relative(Path::new("/p/a.ts"), "./b", &options.extensions, |path| {
            known.iter().position(|k| k == path)
        });
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(normalize("src/./lib/../index.ts"), PathBuf::from("src/index.ts"));
    }
}
