//! Saved quiz progress.

use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::SAVE_QUIZZ;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `save_quizz` table: where a user stopped in a quiz and
/// which character they were playing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SaveQuizz {
    pub id: DbId,
    pub id_user: DbId,
    pub id_quizz: DbId,
    pub id_character: DbId,
    /// Last question reached, `None` before the first answer.
    pub id_question: Option<DbId>,
}

impl Resource for SaveQuizz {
    fn descriptor() -> &'static ResourceDescriptor {
        &SAVE_QUIZZ
    }
}
