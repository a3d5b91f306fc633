//! User account model.

use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::USERS;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
    /// Separate password for the children's side of the app.
    pub password_kids: String,
    pub email: String,
}

impl Resource for User {
    fn descriptor() -> &'static ResourceDescriptor {
        &USERS
    }
}
