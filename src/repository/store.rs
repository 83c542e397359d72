//! Repository trait and its in-memory implementation

use std::rc::Rc;

use tracing::{debug, trace};

use super::{EntityId, Identifiable};

/// Capability set every repository exposes
pub trait Repository<T: Identifiable> {
    /// First entity in store order with the given id
    fn get_by_id(&self, id: EntityId) -> Option<Rc<T>>;

    /// Point-in-time copy of every entity, in insertion order
    fn get_all(&self) -> Vec<Rc<T>>;

    /// Entities matching `predicate`, ordered by ascending id
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<Rc<T>>;

    /// Append an entity. Ids are not checked for uniqueness.
    fn add(&mut self, entity: Rc<T>);

    /// Remove this exact entity. Returns `false` when it was not stored.
    fn remove(&mut self, entity: &Rc<T>) -> bool;
}

/// Ordered, `Vec`-backed repository
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    entities: Vec<Rc<T>>,
}

impl<T: Identifiable> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    /// Wrap an existing collection, keeping its order
    pub fn with_entities(entities: Vec<Rc<T>>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Identifiable> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> FromIterator<Rc<T>> for InMemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        Self::with_entities(iter.into_iter().collect())
    }
}

impl<T: Identifiable> Repository<T> for InMemoryRepository<T> {
    fn get_by_id(&self, id: EntityId) -> Option<Rc<T>> {
        self.entities
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
    }

    fn get_all(&self) -> Vec<Rc<T>> {
        self.entities.clone()
    }

    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<Rc<T>> {
        let mut matches: Vec<Rc<T>> = self
            .entities
            .iter()
            .filter(|&entity| predicate(entity))
            .cloned()
            .collect();
        // stable: equal ids stay in insertion order
        matches.sort_by_key(|entity| entity.id());
        trace!(
            scanned = self.entities.len(),
            matched = matches.len(),
            "find"
        );
        matches
    }

    fn add(&mut self, entity: Rc<T>) {
        debug!(id = entity.id(), "entity added");
        self.entities.push(entity);
    }

    fn remove(&mut self, entity: &Rc<T>) -> bool {
        match self
            .entities
            .iter()
            .position(|stored| Rc::ptr_eq(stored, entity))
        {
            Some(index) => {
                self.entities.remove(index);
                debug!(id = entity.id(), "entity removed");
                true
            }
            None => {
                trace!(id = entity.id(), "remove skipped, entity not stored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Entity;

    fn ids(entities: &[Rc<Entity>]) -> Vec<EntityId> {
        entities.iter().map(|entity| entity.id).collect()
    }

    fn repository_with(ids: &[EntityId]) -> InMemoryRepository<Entity> {
        ids.iter()
            .map(|&id| Rc::new(Entity::new(id, format!("entity-{id}"))))
            .collect()
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let repository = repository_with(&[5, 1, 3]);
        assert_eq!(ids(&repository.get_all()), vec![5, 1, 3]);
        assert_eq!(repository.len(), 3);
    }

    #[test]
    fn test_find_orders_by_id() {
        let repository = repository_with(&[5, 1, 3]);
        let all = repository.find(&|_| true);
        assert_eq!(ids(&all), vec![1, 3, 5]);

        let above_two = repository.find(&|entity| entity.id > 2);
        assert_eq!(ids(&above_two), vec![3, 5]);
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let repository = repository_with(&[1, 2]);
        assert!(repository.get_by_id(3).is_none());
        assert!(InMemoryRepository::<Entity>::new().get_by_id(0).is_none());
    }

    #[test]
    fn test_get_by_id_returns_first_duplicate() {
        let mut repository: InMemoryRepository<Entity> = InMemoryRepository::new();
        repository.add(Rc::new(Entity::new(4, "first")));
        repository.add(Rc::new(Entity::new(4, "second")));

        let found = repository.get_by_id(4).unwrap();
        assert_eq!(found.name, "first");
        assert_eq!(repository.len(), 2);
    }

    #[test]
    fn test_remove_is_by_identity() {
        let mut repository: InMemoryRepository<Entity> = InMemoryRepository::new();
        let stored = Rc::new(Entity::new(9, "nine"));
        repository.add(Rc::clone(&stored));

        // equal value, different allocation
        let lookalike = Rc::new(Entity::new(9, "nine"));
        assert!(!repository.remove(&lookalike));
        assert_eq!(repository.len(), 1);

        assert!(repository.remove(&stored));
        assert!(repository.get_by_id(9).is_none());
        assert!(repository.is_empty());

        assert!(!repository.remove(&stored));
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let mut repository = repository_with(&[1, 2]);
        let before = repository.get_all();
        repository.add(Rc::new(Entity::new(3, "three")));
        assert_eq!(before.len(), 2);
        assert_eq!(repository.get_all().len(), 3);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut repository: Box<dyn Repository<Entity>> =
            Box::new(InMemoryRepository::<Entity>::new());
        repository.add(Rc::new(Entity::new(1, "one")));
        assert_eq!(repository.get_all().len(), 1);
    }
}
