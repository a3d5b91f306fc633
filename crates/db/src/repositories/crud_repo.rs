//! Generic repository over any table described by a [`ResourceDescriptor`].

use std::marker::PhantomData;

use async_trait::async_trait;
use quizz_core::resource::ResourceDescriptor;
use quizz_core::types::{DbId, Fields};
use serde_json::Value;
use sqlx::PgPool;

use super::store::ResourceStore;
use crate::models::Resource;

/// Provides CRUD operations for the table behind `R`.
///
/// Write payloads are passed through verbatim: every key becomes a quoted
/// column identifier and every value a bound parameter. Keys that are not
/// columns are not filtered out here; the database rejects them.
pub struct CrudRepo<R> {
    pool: PgPool,
    _row: PhantomData<fn() -> R>,
}

impl<R> Clone for CrudRepo<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _row: PhantomData,
        }
    }
}

impl<R: Resource> CrudRepo<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _row: PhantomData,
        }
    }

    async fn execute(&self, statement: Statement, id: Option<DbId>) -> Result<bool, sqlx::Error> {
        let mut query = sqlx::query(&statement.sql);
        for param in statement.params {
            query = query.bind(param);
        }
        if let Some(id) = id {
            query = query.bind(id);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for CrudRepo<R> {
    async fn list(&self) -> Result<Vec<R>, sqlx::Error> {
        sqlx::query_as::<_, R>(&select_all(R::descriptor()))
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<R>, sqlx::Error> {
        let d = R::descriptor();
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            d.select_list(),
            quote_ident(d.table)
        );
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_key(
        &self,
        column: &'static str,
        key: &str,
    ) -> Result<Option<R>, sqlx::Error> {
        let d = R::descriptor();
        let query = format!(
            "SELECT {} FROM {} WHERE {} = {} LIMIT 1",
            d.select_list(),
            quote_ident(d.table),
            quote_ident(column),
            placeholder(d, column, 1)
        );
        sqlx::query_as::<_, R>(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by(&self, column: &'static str, value: DbId) -> Result<Vec<R>, sqlx::Error> {
        let d = R::descriptor();
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1 ORDER BY id",
            d.select_list(),
            quote_ident(d.table),
            quote_ident(column)
        );
        sqlx::query_as::<_, R>(&query)
            .bind(value)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, fields: &Fields) -> Result<bool, sqlx::Error> {
        let d = R::descriptor();
        let Some(statement) = insert_statement(d, fields) else {
            return Ok(false);
        };
        tracing::debug!(table = d.table, columns = fields.len(), "Inserting row");
        self.execute(statement, None).await
    }

    async fn update(&self, id: DbId, fields: &Fields) -> Result<bool, sqlx::Error> {
        let d = R::descriptor();
        let Some(statement) = update_statement(d, fields) else {
            return Ok(false);
        };
        tracing::debug!(table = d.table, id, columns = fields.len(), "Updating row");
        self.execute(statement, Some(id)).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1",
            quote_ident(R::descriptor().table)
        );
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Statement building
// ---------------------------------------------------------------------------

/// SQL text plus its text-encoded parameters, in placeholder order.
#[derive(Debug, PartialEq)]
struct Statement {
    sql: String,
    params: Vec<Option<String>>,
}

/// Double-quote an identifier, doubling any embedded quote.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `$n`, cast to the column's SQL type when the column is known.
fn placeholder(d: &ResourceDescriptor, column: &str, index: usize) -> String {
    match d.column(column) {
        Some(c) => format!("${index}::{}", c.kind.sql_type()),
        None => format!("${index}"),
    }
}

/// Text form of a JSON value; `null` binds SQL `NULL`.
fn param_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn select_all(d: &ResourceDescriptor) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY id",
        d.select_list(),
        quote_ident(d.table)
    )
}

fn insert_statement(d: &ResourceDescriptor, fields: &Fields) -> Option<Statement> {
    if fields.is_empty() {
        return None;
    }

    let mut columns = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    let mut params = Vec::with_capacity(fields.len());
    for (index, (name, value)) in fields.iter().enumerate() {
        columns.push(quote_ident(name));
        values.push(placeholder(d, name, index + 1));
        params.push(param_text(value));
    }

    Some(Statement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(d.table),
            columns.join(", "),
            values.join(", ")
        ),
        params,
    })
}

/// The row id is bound after the field parameters, as `$<fields + 1>`.
fn update_statement(d: &ResourceDescriptor, fields: &Fields) -> Option<Statement> {
    if fields.is_empty() {
        return None;
    }

    let mut assignments = Vec::with_capacity(fields.len());
    let mut params = Vec::with_capacity(fields.len());
    for (index, (name, value)) in fields.iter().enumerate() {
        assignments.push(format!(
            "{} = {}",
            quote_ident(name),
            placeholder(d, name, index + 1)
        ));
        params.push(param_text(value));
    }

    Some(Statement {
        sql: format!(
            "UPDATE {} SET {} WHERE id = ${}",
            quote_ident(d.table),
            assignments.join(", "),
            fields.len() + 1
        ),
        params,
    })
}
