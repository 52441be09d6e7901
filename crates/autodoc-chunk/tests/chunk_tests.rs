use autodoc_chunk::{ChunkExtractor, ChunkKind, ChunkOptions, CodeChunk, in_source_order};
use autodoc_parser::SourceParser;
use proptest::prelude::*;

fn chunk(source: &str, path: &str) -> Vec<CodeChunk> {
    let parsed = SourceParser::new().parse_file(source, path).unwrap();
    ChunkExtractor::default().chunk(&parsed, source)
}

#[test]
fn classes_come_before_functions() {
    let source = r#"function boot() {}
export class Router {
    navigate(to) {}
}
export const handle = (req) => req;
"#;
    let chunks = chunk(source, "src/router.ts");

    let summary: Vec<(ChunkKind, &str)> = chunks
        .iter()
        .map(|chunk| (chunk.kind, chunk.name.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (ChunkKind::Class, "Router"),
            (ChunkKind::Function, "boot"),
            (ChunkKind::Function, "handle"),
        ]
    );

    assert_eq!(chunks[1].content, "function boot() {}");
    assert_eq!(chunks[2].content, "export const handle = (req) => req;");
}

#[test]
fn content_matches_the_recorded_range() {
    let source = "export default class { foo() {} }\nasync function later() {}\n";
    for chunk in chunk(source, "src/mixed.ts") {
        assert_eq!(Some(chunk.content.as_str()), chunk.range.slice(source));
    }
}

#[test]
fn structurally_empty_file_gets_one_module_chunk() {
    let source = "export const x = 1;";
    let chunks = chunk(source, "src/x.ts");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].kind, ChunkKind::Module);
    assert_eq!(chunks[0].name, "src/x.ts");
    assert_eq!(chunks[0].content, source);
}

#[test]
fn module_chunk_is_capped_at_the_character_budget() {
    let source = format!("// {}\nexport const big = 1;\n", "ü".repeat(5000));
    let chunks = chunk(&source, "src/big.ts");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content.chars().count(), 4000);
    assert!(source.starts_with(&chunks[0].content));
    assert_eq!(chunks[0].range.end as usize, chunks[0].content.len());
}

#[test]
fn custom_budget_is_honored() {
    let source = "const value = 'abcdef';";
    let parsed = SourceParser::new().parse_file(source, "src/v.ts").unwrap();
    let chunks = ChunkExtractor::new(ChunkOptions { max_chunk_size: 5 }).chunk(&parsed, source);

    assert_eq!(chunks[0].content, "const");
}

#[test]
fn in_source_order_sorts_by_start() {
    let source = "function first() {}\nclass Second {}\nconst third = () => {};\n";
    let mut chunks = chunk(source, "src/order.ts");
    assert_eq!(chunks[0].name, "Second");

    in_source_order(&mut chunks);
    let names: Vec<&str> = chunks.iter().map(|chunk| chunk.name.as_str()).collect();
    assert_eq!(names, ["first", "Second", "third"]);
}

#[test]
fn chunks_serialize_kind_as_lowercase_type() {
    let chunks = chunk("class A {}", "src/a.ts");
    let json = serde_json::to_value(&chunks[0]).unwrap();

    assert_eq!(json["type"], "class");
    assert!(json.get("kind").is_none());
    assert_eq!(json["name"], "A");
    assert_eq!(json["content"], "class A {}");
    assert_eq!(json["range"]["start"], 0);
}

const SNIPPETS: &[&str] = &[
    "import { a } from './local';",
    "export class Service { start() {} get ready() { return true; } }",
    "class Internal { constructor() {} run(x, ...rest) {} }",
    "function helper(a, { b }) { return a; }",
    "export async function fetchAll(url) {}",
    "const arrow = async (x) => x;",
    "export const fn = function (y) {};",
    "export default class { render() { function nested() {} } }",
    "let value = 42;",
    "const label = 'héllo wörld';",
];

fn source_strategy() -> impl Strategy<Value = String> {
    prop::sample::subsequence(SNIPPETS.to_vec(), 0..SNIPPETS.len())
        .prop_map(|parts| parts.join("\n"))
}

proptest! {
    /// Class and function chunks hold exactly the text at their range, and a
    /// file with neither gets the single module chunk.
    #[test]
    fn prop_chunk_content_matches_range(source in source_strategy()) {
        let parsed = SourceParser::new().parse_file(&source, "src/gen.ts").unwrap();
        let chunks = ChunkExtractor::default().chunk(&parsed, &source);

        if parsed.is_structurally_empty() {
            prop_assert_eq!(chunks.len(), 1);
            prop_assert_eq!(chunks[0].kind, ChunkKind::Module);
            prop_assert!(source.starts_with(&chunks[0].content));
        } else {
            prop_assert_eq!(chunks.len(), parsed.classes.len() + parsed.functions.len());
            for chunk in &chunks {
                prop_assert_ne!(chunk.kind, ChunkKind::Module);
                prop_assert_eq!(chunk.range.slice(&source), Some(chunk.content.as_str()));
            }
        }
    }

    /// The module chunk is always a prefix of the input within the budget.
    #[test]
    fn prop_fallback_is_bounded_prefix(raw in "\\PC{0,300}", budget in 0usize..200) {
        let extractor = ChunkExtractor::new(ChunkOptions { max_chunk_size: budget });
        let chunk = extractor.fallback("src/any.ts", &raw);

        prop_assert!(raw.starts_with(&chunk.content));
        prop_assert!(chunk.content.chars().count() <= budget);
        prop_assert_eq!(chunk.range.slice(&raw), Some(chunk.content.as_str()));
    }
}
