use std::path::Path;

use autodoc_graph::{DependencyGraph, ResolveOptions};
use autodoc_parser::{ParsedFile, SourceParser};

fn parse_all(files: &[(&str, &str)]) -> Vec<ParsedFile> {
    let parser = SourceParser::new();
    files
        .iter()
        .map(|(path, source)| parser.parse_file(source, path).unwrap())
        .collect()
}

fn build(files: &[(&str, &str)]) -> DependencyGraph {
    DependencyGraph::build(&parse_all(files), &ResolveOptions::default())
}

#[test]
fn resolves_relative_import_with_extension() {
    let graph = build(&[
        ("/p/a.ts", "import { b } from './b';"),
        ("/p/b.ts", "export const b = () => 1;"),
    ]);

    assert_eq!(graph.dependencies("/p/a.ts"), [Path::new("/p/b.ts")]);
    assert_eq!(graph.dependents("/p/b.ts"), [Path::new("/p/a.ts")]);
    assert!(graph.dependencies("/p/b.ts").is_empty());
}

#[test]
fn bare_specifiers_never_become_nodes() {
    let graph = build(&[(
        "/p/a.ts",
        "import React from 'react';\nimport { join } from 'node:path';",
    )]);

    assert_eq!(graph.len(), 1);
    assert!(graph.dependencies("/p/a.ts").is_empty());
    assert!(!graph.contains("react"));
    assert!(!graph.contains("/p/react"));
}

#[test]
fn unresolved_relative_import_adds_no_edge() {
    let graph = build(&[("/p/a.ts", "import './missing';")]);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn repeated_imports_keep_forward_duplicates_only() {
    let graph = build(&[
        (
            "/p/a.ts",
            "import { x } from './b';\nimport { y } from './b.ts';",
        ),
        ("/p/b.ts", "export function x() {}\nexport function y() {}"),
    ]);

    assert_eq!(
        graph.dependencies("/p/a.ts"),
        [Path::new("/p/b.ts"), Path::new("/p/b.ts")]
    );
    assert_eq!(graph.dependents("/p/b.ts"), [Path::new("/p/a.ts")]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn directory_imports_resolve_to_index_files() {
    let graph = build(&[
        ("/p/app.ts", "import { util } from './utils';"),
        ("/p/utils/index.ts", "export const util = () => {};"),
    ]);

    assert_eq!(
        graph.dependencies("/p/app.ts"),
        [Path::new("/p/utils/index.ts")]
    );
}

#[test]
fn extension_order_decides_between_candidates() {
    let graph = build(&[
        ("/p/a.ts", "import './b';"),
        ("/p/b.js", "export function fromJs() {}"),
        ("/p/b.ts", "export function fromTs() {}"),
        ("/p/b/index.ts", "export function fromIndex() {}"),
    ]);

    assert_eq!(graph.dependencies("/p/a.ts"), [Path::new("/p/b.ts")]);
    assert!(graph.dependents("/p/b.js").is_empty());
    assert!(graph.dependents("/p/b/index.ts").is_empty());
}

#[test]
fn custom_extensions_replace_the_defaults() {
    let files = parse_all(&[
        ("/p/a.ts", "import './b';"),
        ("/p/b.ts", ""),
        ("/p/b.mjs", ""),
    ]);
    let graph = DependencyGraph::build(&files, &ResolveOptions::with_extensions([".mjs"]));

    assert_eq!(graph.dependencies("/p/a.ts"), [Path::new("/p/b.mjs")]);
}

#[test]
fn parent_directory_specifiers_are_normalized() {
    let graph = build(&[
        ("/p/features/login/view.ts", "import { api } from '../../shared/api';"),
        ("/p/shared/api.ts", "export const api = {};"),
    ]);

    assert_eq!(
        graph.dependencies("/p/features/login/view.ts"),
        [Path::new("/p/shared/api.ts")]
    );
}

#[test]
fn cycles_are_represented_in_both_directions() {
    let graph = build(&[
        ("/p/a.ts", "import './b';"),
        ("/p/b.ts", "import './a';"),
    ]);

    assert_eq!(graph.dependencies("/p/a.ts"), [Path::new("/p/b.ts")]);
    assert_eq!(graph.dependencies("/p/b.ts"), [Path::new("/p/a.ts")]);
    assert_eq!(graph.dependents("/p/a.ts"), [Path::new("/p/b.ts")]);
    assert_eq!(graph.dependents("/p/b.ts"), [Path::new("/p/a.ts")]);
}

#[test]
fn query_paths_are_normalized() {
    let graph = build(&[
        ("src/a.ts", "import './b';"),
        ("src/b.ts", ""),
    ]);

    assert_eq!(graph.dependencies("src/./a.ts"), [Path::new("src/b.ts")]);
    assert_eq!(graph.dependents("src/lib/../b.ts"), [Path::new("src/a.ts")]);
    assert!(graph.dependencies("/elsewhere.ts").is_empty());
}

#[test]
fn nodes_keep_input_order() {
    let graph = build(&[("/p/z.ts", ""), ("/p/a.ts", ""), ("/p/m.ts", "")]);
    let paths: Vec<&Path> = graph.nodes().map(|node| node.path.as_path()).collect();
    assert_eq!(
        paths,
        [Path::new("/p/z.ts"), Path::new("/p/a.ts"), Path::new("/p/m.ts")]
    );
}

#[test]
fn serializes_nodes_with_camel_case_edges() {
    let graph = build(&[("/p/a.ts", "import './b';"), ("/p/b.ts", "")]);
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["nodes"][0]["imports"], serde_json::json!([1]));
    assert_eq!(json["nodes"][1]["importedBy"], serde_json::json!([0]));
}
