use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::QUIZZES;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `quizz` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Quizz {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Author of the quiz.
    pub id_user: Option<DbId>,
    pub id_departement: Option<DbId>,
}

impl Resource for Quizz {
    fn descriptor() -> &'static ResourceDescriptor {
        &QUIZZES
    }
}
