//! Validation and business rules shared by every resource.

use std::sync::Arc;

use quizz_core::error::{CoreError, Mutation};
use quizz_core::resource::{Filter, KeyLookup, ResourceDescriptor};
use quizz_core::types::{DbId, Fields};
use quizz_core::validation::{check_required, ensure_no_id, ensure_valid_id};
use quizz_db::models::Resource;
use quizz_db::repositories::{CrudRepo, ResourceStore};
use quizz_db::DbPool;

/// Error returned by [`ResourceService`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain rule rejected the request.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed. `message` is the resource's fixed wording for the
    /// operation; the underlying error is kept as the source.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// CRUD service for one resource.
///
/// Owns no state beyond its store handle, so clones are cheap and every
/// request sees the database as the only source of truth.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn ResourceStore<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { store }
    }

    /// Service backed by the PostgreSQL repository.
    pub fn postgres(pool: DbPool) -> Self {
        Self::new(Arc::new(CrudRepo::<R>::new(pool)))
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        R::descriptor()
    }

    /// Every row. An empty table yields an empty list, never an error.
    pub async fn get_all(&self) -> Result<Vec<R>, ServiceError> {
        let d = R::descriptor();
        self.store
            .list()
            .await
            .map_err(|e| store_error(d, d.store_messages.list, e))
    }

    /// A single row, or [`CoreError::NotFound`] when the id has no row.
    pub async fn get_by_id(&self, id: DbId) -> Result<R, ServiceError> {
        let d = R::descriptor();
        let row = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| store_error(d, d.store_messages.get, e))?;

        row.ok_or_else(|| {
            tracing::debug!(entity = d.entity, id, "Entity not found");
            CoreError::NotFound { entity: d.entity }.into()
        })
    }

    /// A single row by secondary key, or [`CoreError::NotFound`].
    pub async fn get_by_key(&self, lookup: &KeyLookup, key: &str) -> Result<R, ServiceError> {
        let d = R::descriptor();
        let row = self
            .store
            .find_by_key(lookup.column, key)
            .await
            .map_err(|e| store_error(d, lookup.store_failed, e))?;

        row.ok_or_else(|| {
            tracing::debug!(entity = d.entity, column = lookup.column, key, "Entity not found");
            CoreError::NotFound { entity: d.entity }.into()
        })
    }

    /// Rows matching `filter`. No match yields an empty list.
    pub async fn list_by(&self, filter: &Filter, value: DbId) -> Result<Vec<R>, ServiceError> {
        let d = R::descriptor();
        self.store
            .list_by(filter.column, value)
            .await
            .map_err(|e| store_error(d, filter.store_failed, e))
    }

    /// Validate the required fields, then insert `fields` verbatim.
    ///
    /// Validation happens before the store is touched. A payload carrying
    /// `id` is rejected so the store keeps assigning ids.
    pub async fn create(&self, fields: &Fields) -> Result<(), ServiceError> {
        let d = R::descriptor();
        if let Err(err) = check_required(d, fields).and_then(|()| ensure_no_id(d, fields)) {
            tracing::warn!(entity = d.entity, error = %err, "Rejected create payload");
            return Err(err.into());
        }

        let created = self
            .store
            .create(fields)
            .await
            .map_err(|e| store_error(d, d.store_messages.create, e))?;
        applied(d, created, Mutation::Create)
    }

    /// Update the row `id` with `fields`. Field contents are not validated,
    /// but the payload may not change the id itself.
    pub async fn update(&self, id: DbId, fields: &Fields) -> Result<(), ServiceError> {
        let d = R::descriptor();
        ensure_valid_id(d.entity, id)?;
        if let Err(err) = ensure_no_id(d, fields) {
            tracing::warn!(entity = d.entity, id, error = %err, "Rejected update payload");
            return Err(err.into());
        }

        let updated = self
            .store
            .update(id, fields)
            .await
            .map_err(|e| store_error(d, d.store_messages.update, e))?;
        applied(d, updated, Mutation::Update)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ServiceError> {
        let d = R::descriptor();
        ensure_valid_id(d.entity, id)?;

        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|e| store_error(d, d.store_messages.delete, e))?;
        applied(d, deleted, Mutation::Delete)
    }
}

fn store_error(d: &ResourceDescriptor, message: &'static str, source: sqlx::Error) -> ServiceError {
    tracing::error!(entity = d.entity, error = %source, "{message}");
    ServiceError::Store { message, source }
}

fn applied(d: &ResourceDescriptor, affected: bool, mutation: Mutation) -> Result<(), ServiceError> {
    if affected {
        return Ok(());
    }
    tracing::warn!(entity = d.entity, %mutation, "Write affected no rows");
    Err(CoreError::NotApplied {
        entity: d.entity,
        mutation,
    }
    .into())
}
