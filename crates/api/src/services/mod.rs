//! Service layer: one [`ResourceService`] per resource.

pub mod resource_service;

pub use resource_service::{ResourceService, ServiceError};

use quizz_db::models::{
    Answer, Character, Departement, Organisation, Question, Quizz, SaveQuizz, User,
};
use quizz_db::DbPool;

/// The full set of resource services, built once at startup.
#[derive(Clone)]
pub struct Services {
    pub users: ResourceService<User>,
    pub quizzes: ResourceService<Quizz>,
    pub questions: ResourceService<Question>,
    pub answers: ResourceService<Answer>,
    pub characters: ResourceService<Character>,
    pub organisations: ResourceService<Organisation>,
    pub departements: ResourceService<Departement>,
    pub save_quizz: ResourceService<SaveQuizz>,
}

impl Services {
    /// Services backed by PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: &DbPool) -> Self {
        Self {
            users: ResourceService::postgres(pool.clone()),
            quizzes: ResourceService::postgres(pool.clone()),
            questions: ResourceService::postgres(pool.clone()),
            answers: ResourceService::postgres(pool.clone()),
            characters: ResourceService::postgres(pool.clone()),
            organisations: ResourceService::postgres(pool.clone()),
            departements: ResourceService::postgres(pool.clone()),
            save_quizz: ResourceService::postgres(pool.clone()),
        }
    }
}
