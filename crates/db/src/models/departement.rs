use quizz_core::resource::ResourceDescriptor;
use quizz_core::resources::DEPARTEMENTS;
use quizz_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A row from the `departement` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Departement {
    pub id: DbId,
    pub name: Option<String>,
    /// Administrative number, kept as text (`"2A"`, `"75"`).
    pub departement_number: Option<String>,
}

impl Resource for Departement {
    fn descriptor() -> &'static ResourceDescriptor {
        &DEPARTEMENTS
    }
}
