pub mod health;
pub mod resource;

use axum::Router;

use crate::services::Services;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                 list, create
/// /users/{id}                            get, update, delete
///
/// /quizzes                               list, create
/// /quizzes/{id}                          get, update, delete
/// /quizzes/user/{userId}                 quizzes authored by a user
/// /quizzes/departement/{departementId}   quizzes of a departement
///
/// /questions                             list, create
/// /questions/{id}                        get, update, delete
/// /questions/quizz/{id}                  questions of a quiz
///
/// /answers                               list, create
/// /answers/{id}                          get, update, delete
/// /answers/quizz/{id}                    answers of a quiz
/// /answers/question/{id}                 answers of a question
///
/// /characters                            list, create
/// /characters/{id}                       get, update, delete
///
/// /organisations                         list, create
/// /organisations/{id}                    get, update, delete
///
/// /departements                          list, create
/// /departements/{id}                     get, update, delete
/// /departements/number/{number}          lookup by departement number
///
/// /save-quizz                            list, create
/// /save-quizz/{id}                       get, update, delete
/// ```
pub fn api_routes(services: &Services) -> Router<AppState> {
    Router::new()
        .nest("/users", resource::router(services.users.clone()))
        .nest("/quizzes", resource::router(services.quizzes.clone()))
        .nest("/questions", resource::router(services.questions.clone()))
        .nest("/answers", resource::router(services.answers.clone()))
        .nest("/characters", resource::router(services.characters.clone()))
        .nest(
            "/organisations",
            resource::router(services.organisations.clone()),
        )
        .nest(
            "/departements",
            resource::router(services.departements.clone()),
        )
        .nest("/save-quizz", resource::router(services.save_quizz.clone()))
}
