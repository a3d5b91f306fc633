//! Quiz character (mascot) model.

use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::CHARACTERS;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    /// Spelled `id_quiz` (single z) in the schema, unlike every other table.
    pub id_quiz: DbId,
}

impl Resource for Character {
    fn descriptor() -> &'static ResourceDescriptor {
        &CHARACTERS
    }
}
