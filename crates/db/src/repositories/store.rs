use async_trait::async_trait;
use quizz_core::types::{DbId, Fields};

use crate::models::Resource;

/// Store operations for one resource.
///
/// Reads return plain rows (`None` / empty `Vec` when nothing matches, never
/// an error). Writes report whether at least one row was affected, so a
/// missing id and an update that changed nothing are indistinguishable.
/// Store errors are returned as-is.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// All rows, ordered by id.
    async fn list(&self) -> Result<Vec<R>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<R>, sqlx::Error>;

    /// Single row whose `column` equals `key`.
    async fn find_by_key(&self, column: &'static str, key: &str)
        -> Result<Option<R>, sqlx::Error>;

    /// Rows whose integer `column` equals `value`, ordered by id.
    async fn list_by(&self, column: &'static str, value: DbId) -> Result<Vec<R>, sqlx::Error>;

    async fn create(&self, fields: &Fields) -> Result<bool, sqlx::Error>;

    async fn update(&self, id: DbId, fields: &Fields) -> Result<bool, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}
