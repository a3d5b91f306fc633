//! Row models, one per resource.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! columns listed in the resource's descriptor, and binds the two together
//! through [`Resource`]. Create and update payloads are not typed: they are
//! forwarded to the store as [`quizz_core::types::Fields`].

use quizz_core::resource::ResourceDescriptor;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

pub mod answer;
pub mod character;
pub mod departement;
pub mod organisation;
pub mod question;
pub mod quizz;
pub mod save_quizz;
pub mod user;

pub use answer::Answer;
pub use character::Character;
pub use departement::Departement;
pub use organisation::Organisation;
pub use question::Question;
pub use quizz::Quizz;
pub use save_quizz::SaveQuizz;
pub use user::User;

/// A row type served by the generic CRUD stack.
pub trait Resource:
    for<'r> FromRow<'r, PgRow> + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    fn descriptor() -> &'static ResourceDescriptor;
}
