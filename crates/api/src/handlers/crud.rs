//! Generic handlers shared by every resource router.
//!
//! Each handler parses the path and body, calls one service method and maps
//! the outcome to a status code using the resource's message catalog:
//!
//! ```text
//! list / filtered list   200 array
//! get                    200 object | 404 not found
//! create                 201 created | 400 rejected (validation, no row)
//! update / delete        200 done    | 400 rejected (no row)
//! non-numeric id         400 invalid id, service not called
//! store failure          500 fixed message, cause logged only
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quizz_core::error::CoreError;
use quizz_core::resource::{Filter, KeyLookup};
use quizz_core::types::{DbId, Fields};
use quizz_core::validation::parse_id;
use quizz_db::models::Resource;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::services::{ResourceService, ServiceError};

/// Messages for the two non-success outcomes of one operation.
struct Outcome {
    /// 400 when a domain rule rejected the request.
    rejected: &'static str,
    /// 500 when the store failed.
    failed: &'static str,
}

/// Map a service error to the HTTP error for one operation.
fn map_error<R: Resource>(err: ServiceError, outcome: Outcome) -> AppError {
    let m = &R::descriptor().messages;
    match err {
        ServiceError::Core(CoreError::NotFound { .. }) => AppError::NotFound(m.not_found.into()),
        ServiceError::Core(CoreError::InvalidId { .. }) => {
            AppError::BadRequest(m.invalid_id.into())
        }
        ServiceError::Core(CoreError::Validation(_) | CoreError::NotApplied { .. }) => {
            AppError::BadRequest(outcome.rejected.into())
        }
        ServiceError::Store { .. } => {
            tracing::error!(
                entity = R::descriptor().entity,
                error = %err,
                "Request failed, responding 500"
            );
            AppError::Internal(outcome.failed.into())
        }
    }
}

/// Raw path parameter. An undecodable segment (e.g. `%FF`) answers 400 with
/// `invalid` like any other malformed id.
fn path_param(
    path: Result<Path<String>, PathRejection>,
    invalid: &'static str,
) -> AppResult<String> {
    match path {
        Ok(Path(raw)) => Ok(raw),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable path parameter");
            Err(AppError::BadRequest(invalid.into()))
        }
    }
}

fn parse_path_id(
    path: Result<Path<String>, PathRejection>,
    invalid: &'static str,
) -> AppResult<DbId> {
    let raw = path_param(path, invalid)?;
    parse_id(&raw).ok_or_else(|| AppError::BadRequest(invalid.into()))
}

/// Unwrap a JSON object body, answering 400 with `rejected` when the body
/// is missing, not JSON, or not an object.
fn body_fields(
    body: Result<Json<Fields>, JsonRejection>,
    entity: &'static str,
    rejected: &'static str,
) -> AppResult<Fields> {
    match body {
        Ok(Json(fields)) => Ok(fields),
        Err(rejection) => {
            tracing::warn!(entity, error = %rejection, "Unreadable request body");
            Err(AppError::BadRequest(rejected.into()))
        }
    }
}

/// GET /{resource}
pub async fn list<R: Resource>(
    State(service): State<ResourceService<R>>,
) -> AppResult<Json<Vec<R>>> {
    let m = &R::descriptor().messages;
    let rows = service.get_all().await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: m.list_failed,
                failed: m.list_failed,
            },
        )
    })?;
    Ok(Json(rows))
}

/// GET /{resource}/{id}
pub async fn get_by_id<R: Resource>(
    State(service): State<ResourceService<R>>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<R>> {
    let m = &R::descriptor().messages;
    let id = parse_path_id(path, m.invalid_id)?;

    let row = service.get_by_id(id).await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: m.get_failed,
                failed: m.get_failed,
            },
        )
    })?;
    Ok(Json(row))
}

/// GET /{resource}/{segment}/{key}, e.g. `/departements/number/75`.
pub async fn get_by_key<R: Resource>(
    service: ResourceService<R>,
    lookup: &'static KeyLookup,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<R>> {
    let m = &R::descriptor().messages;
    let key = path_param(path, lookup.invalid_key)?;
    if key.trim().is_empty() {
        return Err(AppError::BadRequest(lookup.invalid_key.into()));
    }

    let row = service.get_by_key(lookup, &key).await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: m.get_failed,
                failed: m.get_failed,
            },
        )
    })?;
    Ok(Json(row))
}

/// GET /{resource}/{segment}/{id}, e.g. `/answers/quizz/3`.
pub async fn list_by<R: Resource>(
    service: ResourceService<R>,
    filter: &'static Filter,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<R>>> {
    let id = parse_path_id(path, filter.invalid_id)?;

    let rows = service.list_by(filter, id).await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: filter.failed,
                failed: filter.failed,
            },
        )
    })?;
    Ok(Json(rows))
}

/// POST /{resource}
pub async fn create<R: Resource>(
    State(service): State<ResourceService<R>>,
    body: Result<Json<Fields>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let d = R::descriptor();
    let m = &d.messages;
    let fields = body_fields(body, d.entity, m.create_rejected)?;

    service.create(&fields).await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: m.create_rejected,
                failed: m.create_failed,
            },
        )
    })?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(m.created))))
}

/// PUT /{resource}/{id}
pub async fn update<R: Resource>(
    State(service): State<ResourceService<R>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Fields>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let d = R::descriptor();
    let m = &d.messages;
    let id = parse_path_id(path, m.invalid_id)?;
    let fields = body_fields(body, d.entity, m.update_rejected)?;

    service.update(id, &fields).await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: m.update_rejected,
                failed: m.update_failed,
            },
        )
    })?;
    Ok(Json(MessageResponse::new(m.updated)))
}

/// DELETE /{resource}/{id}
pub async fn delete<R: Resource>(
    State(service): State<ResourceService<R>>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let m = &R::descriptor().messages;
    let id = parse_path_id(path, m.invalid_id)?;

    service.delete(id).await.map_err(|e| {
        map_error::<R>(
            e,
            Outcome {
                rejected: m.delete_rejected,
                failed: m.delete_failed,
            },
        )
    })?;
    Ok(Json(MessageResponse::new(m.deleted)))
}
