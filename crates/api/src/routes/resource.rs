//! Router builder shared by every resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use quizz_db::models::Resource;

use crate::handlers::crud;
use crate::services::ResourceService;

/// Routes for one resource, to be nested under its path prefix.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{segment}/{id}    -> list_by     (one per descriptor filter)
/// GET    /{segment}/{key}   -> get_by_key  (descriptor lookup, if any)
/// ```
///
/// The returned router already carries its service as state, so it can be
/// nested into a router of any state type.
pub fn router<R: Resource, S>(service: ResourceService<R>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let d = R::descriptor();

    let mut router: Router<ResourceService<R>> = Router::new()
        .route("/", get(crud::list::<R>).post(crud::create::<R>))
        .route(
            "/{id}",
            get(crud::get_by_id::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        );

    for filter in d.filters {
        router = router.route(
            &format!("/{}/{{id}}", filter.segment),
            get(
                move |State(service): State<ResourceService<R>>,
                      path: Result<Path<String>, PathRejection>| {
                    crud::list_by(service, filter, path)
                },
            ),
        );
    }

    if let Some(lookup) = d.lookup.as_ref() {
        router = router.route(
            &format!("/{}/{{key}}", lookup.segment),
            get(
                move |State(service): State<ResourceService<R>>,
                      path: Result<Path<String>, PathRejection>| {
                    crud::get_by_key(service, lookup, path)
                },
            ),
        );
    }

    router.with_state(service)
}
