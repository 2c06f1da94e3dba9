//! Adapter over the external semantic (embedding) search backend.
//!
//! The backend is supplied by the host; this crate never embeds or ranks.
//! [`run_query`] converts its success or failure into the shape the
//! `repository_search` tool formats.

use std::future::Future;

use async_trait::async_trait;
use tracing::warn;

use crate::error::ToolError;
use crate::Chunk;

/// Error type returned by backends. Only its display text is kept.
pub type QueryError = Box<dyn std::error::Error + Send + Sync>;

/// A semantic search backend: `query_chunks(query, top_k)`.
#[async_trait]
pub trait ChunkQuery: Send + Sync {
    async fn query_chunks(&self, query: &str, top_k: usize) -> Result<Vec<Chunk>, QueryError>;
}

/// Backend built from an async closure. See [`query_fn`].
pub struct FnQuery<F>(F);

/// Wrap an async closure `(query, top_k) -> Result<Vec<Chunk>, QueryError>` as a backend.
///
/// ```
/// use repo_tools::{query_fn, Chunk, QueryError, RepoFile};
///
/// let backend = query_fn(|query: String, _top_k: usize| async move {
///     Ok::<_, QueryError>(vec![Chunk {
///         file: RepoFile::completed("a.md", ""),
///         text: query,
///         similarity: None,
///     }])
/// });
/// # let _ = backend;
/// ```
pub fn query_fn<F, Fut>(f: F) -> FnQuery<F>
where
    F: Fn(String, usize) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Chunk>, QueryError>> + Send + 'static,
{
    FnQuery(f)
}

#[async_trait]
impl<F, Fut> ChunkQuery for FnQuery<F>
where
    F: Fn(String, usize) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Chunk>, QueryError>> + Send + 'static,
{
    async fn query_chunks(&self, query: &str, top_k: usize) -> Result<Vec<Chunk>, QueryError> {
        (self.0)(query.to_string(), top_k).await
    }
}

/// Backend for hosts without a semantic index. Every query fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredBackend;

#[async_trait]
impl ChunkQuery for UnconfiguredBackend {
    async fn query_chunks(&self, _query: &str, _top_k: usize) -> Result<Vec<Chunk>, QueryError> {
        Err("no semantic index configured".into())
    }
}

/// Await the backend once. Failures become [`ToolError::Upstream`]; no retry.
pub async fn run_query(
    backend: &dyn ChunkQuery,
    query: &str,
    top_k: usize,
) -> Result<Vec<Chunk>, ToolError> {
    backend.query_chunks(query, top_k).await.map_err(|e| {
        warn!(query = %query, error = %e, "Semantic query failed");
        ToolError::Upstream(e.to_string())
    })
}
