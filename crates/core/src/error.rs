use crate::types::DbId;

/// The write operation a [`CoreError::NotApplied`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity}")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid {entity} id: {id}")]
    InvalidId { entity: &'static str, id: DbId },

    #[error("{entity} {mutation} affected no rows")]
    NotApplied {
        entity: &'static str,
        mutation: Mutation,
    },
}
