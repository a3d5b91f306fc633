//! Domain building blocks shared by the repository, service and HTTP layers.
//!
//! Nothing in this crate performs I/O. Resources are described as static
//! data ([`resource::ResourceDescriptor`]) so that a single generic CRUD
//! implementation can serve every table.

pub mod error;
pub mod resource;
pub mod resources;
pub mod types;
pub mod validation;
