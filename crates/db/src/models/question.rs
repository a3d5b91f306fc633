use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::QUESTIONS;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `questions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: DbId,
    pub question: Option<String>,
    pub id_quizz: Option<DbId>,
}

impl Resource for Question {
    fn descriptor() -> &'static ResourceDescriptor {
        &QUESTIONS
    }
}
