use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::ANSWERS;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `answers` table.
///
/// `id_quizz` duplicates the question's quiz so that all answers of a quiz
/// can be listed without a join.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: DbId,
    pub answer: Option<String>,
    pub is_correct: Option<bool>,
    pub id_quizz: Option<DbId>,
    pub id_question: Option<DbId>,
}

impl Resource for Answer {
    fn descriptor() -> &'static ResourceDescriptor {
        &ANSWERS
    }
}
