//! Repository pattern for database operations
//!
//! Each method issues a single query against the pool; failures surface
//! as `AppError::Database` carrying the driver's message.

use crate::db::models::*;
use crate::db::store::{NewFootnote, NewPaper, PublicationStore};
use crate::db::DbPool;
use crate::errors::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

/// Repository for data access operations
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.pool.conn()
    }
}

#[async_trait]
impl PublicationStore for Repository {
    // ========================================================================
    // Paper Operations
    // ========================================================================

    async fn list_papers(&self) -> Result<Vec<Paper>> {
        PaperEntity::find()
            .order_by_asc(PaperColumn::Id)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn find_papers_by_id(&self, id: i32) -> Result<Vec<Paper>> {
        PaperEntity::find()
            .filter(PaperColumn::Id.eq(id))
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn insert_paper(&self, paper: NewPaper) -> Result<i32> {
        let model = PaperActiveModel {
            title: Set(paper.title),
            author: Set(paper.author),
            ..Default::default()
        };

        let result = PaperEntity::insert(model).exec(self.conn()).await?;
        Ok(result.last_insert_id)
    }

    // ========================================================================
    // Footnote Operations
    // ========================================================================

    async fn list_footnotes(&self) -> Result<Vec<Footnote>> {
        FootnoteEntity::find()
            .order_by_asc(FootnoteColumn::Id)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn find_footnotes_by_paper_id(&self, paper_id: i32) -> Result<Vec<Footnote>> {
        FootnoteEntity::find()
            .filter(FootnoteColumn::PaperId.eq(paper_id))
            .order_by_asc(FootnoteColumn::Id)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn insert_footnote(&self, footnote: NewFootnote) -> Result<i32> {
        let model = FootnoteActiveModel {
            note: Set(footnote.note),
            paper_id: Set(footnote.paper_id),
            ..Default::default()
        };

        let result = FootnoteEntity::insert(model).exec(self.conn()).await?;
        Ok(result.last_insert_id)
    }

    // ========================================================================
    // Health Check
    // ========================================================================

    async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn paper(id: i32, title: &str, author: &str) -> Paper {
        let now = chrono::Utc::now().into();
        Paper {
            id,
            title: title.to_string(),
            author: author.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn footnote(id: i32, note: &str, paper_id: i32) -> Footnote {
        let now = chrono::Utc::now().into();
        Footnote {
            id,
            note: note.to_string(),
            paper_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn repo(db: MockDatabase) -> Repository {
        Repository::new(DbPool::from_connection(db.into_connection()))
    }

    #[tokio::test]
    async fn test_list_papers() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![paper(1, "Fooo", "Bob"), paper(2, "Blarg", "Poop")]]),
        );

        let papers = repo.list_papers().await.unwrap();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Fooo");
        assert_eq!(papers[1].author, "Poop");
    }

    #[tokio::test]
    async fn test_find_papers_by_id_empty() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<Paper>::new()]),
        );

        let papers = repo.find_papers_by_id(10).await.unwrap();
        assert!(papers.is_empty());
    }

    #[tokio::test]
    async fn test_find_footnotes_by_paper_id() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![footnote(1, "Lorem", 1), footnote(2, "Dolor", 1)]]),
        );

        let footnotes = repo.find_footnotes_by_paper_id(1).await.unwrap();
        assert_eq!(footnotes.len(), 2);
        assert!(footnotes.iter().all(|f| f.paper_id == 1));
    }

    #[tokio::test]
    async fn test_insert_paper_returns_generated_id() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![paper(2, "Blarg", "Poop")]]),
        );

        let id = repo
            .insert_paper(NewPaper {
                title: "Blarg".into(),
                author: "Poop".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 2);
    }

    #[tokio::test]
    async fn test_insert_footnote_returns_generated_id() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![footnote(3, "Meus Culpam", 2)]]),
        );

        let id = repo
            .insert_footnote(NewFootnote {
                note: "Meus Culpam".into(),
                paper_id: 2,
            })
            .await
            .unwrap();
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_database_error() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection reset".into())]),
        );

        let err = repo.list_footnotes().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }]),
        );

        assert!(repo.ping().await.is_ok());
    }
}
