//! Shared test helpers for tool handler tests.

use super::*;
use crate::semantic::{query_fn, QueryError, UnconfiguredBackend};
use crate::{Chunk, FileStatus};

/// The two-file snapshot used across handler tests.
pub(crate) fn sample_files() -> Vec<RepoFile> {
    vec![
        RepoFile::completed("b.ts", "foo\nbar"),
        RepoFile::completed("a.ts", "baz"),
    ]
}

/// A small mixed-status repository.
pub(crate) fn repo_files() -> Vec<RepoFile> {
    vec![
        RepoFile::completed(
            "src/main.rs",
            "use std::io;\n\nfn main() {\n    let config = load_config();\n    run(config);\n}\n",
        ),
        RepoFile::completed(
            "src/config.rs",
            "pub struct Config {\n    pub verbose: bool,\n}\n\npub fn load_config() -> Config {\n    Config { verbose: false }\n}\n",
        ),
        RepoFile::completed("docs/README.md", "# Project\r\n\r\nRun with `cargo run`.\r\n"),
        RepoFile::completed("docs/empty.md", ""),
        RepoFile::new("docs/pending.md", FileStatus::Pending, None),
        RepoFile::new("src/broken.rs", FileStatus::Error, Some("fn load_config() {}".to_string())),
    ]
}

pub(crate) fn make_catalog(files: Vec<RepoFile>) -> ToolCatalog {
    ToolCatalog::new(files, UnconfiguredBackend, ToolConfig::default())
}

pub(crate) fn make_catalog_with_config(files: Vec<RepoFile>, config: ToolConfig) -> ToolCatalog {
    ToolCatalog::new(files, UnconfiguredBackend, config)
}

/// Catalog whose backend returns `chunks` for every query.
pub(crate) fn make_catalog_with_chunks(chunks: Vec<Chunk>) -> ToolCatalog {
    let backend = query_fn(move |_query: String, _top_k: usize| {
        let chunks = chunks.clone();
        async move { Ok::<_, QueryError>(chunks) }
    });
    ToolCatalog::new(repo_files(), backend, ToolConfig::default())
}

/// Catalog whose backend always fails with `message`.
pub(crate) fn make_catalog_with_failing_backend(message: &'static str) -> ToolCatalog {
    let backend = query_fn(move |_query: String, _top_k: usize| async move {
        Err::<Vec<Chunk>, QueryError>(message.into())
    });
    ToolCatalog::new(repo_files(), backend, ToolConfig::default())
}

pub(crate) fn chunk(file: &str, text: &str, similarity: Option<f32>) -> Chunk {
    Chunk {
        file: RepoFile::completed(file, ""),
        text: text.to_string(),
        similarity,
    }
}

/// Parse an error payload and return its message.
pub(crate) fn error_message(result: &ToolCallResult) -> String {
    assert!(result.is_error, "expected error payload, got: {}", result.text());
    let payload: Value = serde_json::from_str(result.text()).expect("error payload is JSON");
    payload["error"].as_str().expect("error field is a string").to_string()
}
