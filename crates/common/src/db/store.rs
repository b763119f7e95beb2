//! Storage abstraction the HTTP layer is written against

use crate::db::models::{Footnote, Paper};
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Insertable paper fields; the storage layer assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPaper {
    pub title: String,
    pub author: String,
}

/// Insertable footnote fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFootnote {
    pub note: String,
    pub paper_id: i32,
}

/// Trait for the papers/footnotes store
///
/// Every method maps to exactly one query. Lookups by id return all
/// matching rows, an empty vector when nothing matches.
#[async_trait]
pub trait PublicationStore: Send + Sync {
    /// All papers
    async fn list_papers(&self) -> Result<Vec<Paper>>;

    /// Papers whose id equals `id`
    async fn find_papers_by_id(&self, id: i32) -> Result<Vec<Paper>>;

    /// All footnotes
    async fn list_footnotes(&self) -> Result<Vec<Footnote>>;

    /// Footnotes whose paper_id equals `paper_id`
    async fn find_footnotes_by_paper_id(&self, paper_id: i32) -> Result<Vec<Footnote>>;

    /// Insert a paper, returning the generated id
    async fn insert_paper(&self, paper: NewPaper) -> Result<i32>;

    /// Insert a footnote, returning the generated id
    async fn insert_footnote(&self, footnote: NewFootnote) -> Result<i32>;

    /// Check connectivity
    async fn ping(&self) -> Result<()>;
}
