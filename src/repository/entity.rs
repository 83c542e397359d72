//! Entity records

use serde::{Deserialize, Serialize};

/// Entity ID type - caller assigned, not checked for uniqueness
pub type EntityId = i32;

/// Anything a repository can hold
pub trait Identifiable {
    fn id(&self) -> EntityId;
}

/// Sample entity with a name payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Identifiable for Entity {
    fn id(&self) -> EntityId {
        self.id
    }
}
