//! Repository layer.
//!
//! [`ResourceStore`] is the seam the service layer depends on;
//! [`CrudRepo`] is its PostgreSQL implementation, one instance per resource.

pub mod crud_repo;
pub mod store;

pub use crud_repo::CrudRepo;
pub use store::ResourceStore;
