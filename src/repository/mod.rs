//! Repository pattern over an in-memory collection
//!
//! One trait, one generic implementation. Entities are shared handles so
//! removal can be done by identity rather than by id.

pub mod entity;
pub mod store;

pub use entity::{Entity, EntityId, Identifiable};
pub use store::{InMemoryRepository, Repository};
