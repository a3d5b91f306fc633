use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::ORGANISATIONS;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `organisations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Organisation {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub about_us: String,
}

impl Resource for Organisation {
    fn descriptor() -> &'static ResourceDescriptor {
        &ORGANISATIONS
    }
}
