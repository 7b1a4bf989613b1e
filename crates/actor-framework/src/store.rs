//! # Entity Store
//!
//! The ordered collection a `ResourceActor` owns. Entities are kept in insertion order and
//! looked up by a linear scan over their ids.

use crate::entity::ActorEntity;

/// Insertion-ordered collection of entities with unique ids.
#[derive(Debug, Clone)]
pub struct EntityStore<T: ActorEntity> {
    items: Vec<T>,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Appends `item` at the end.
    ///
    /// # Errors
    /// Hands the item back untouched if an entity with the same id is already stored.
    pub fn insert(&mut self, item: T) -> Result<(), T> {
        if self.contains(item.id()) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the entity with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.position(id).map(|index| self.items.remove(index))
    }

    /// Copies of every entity matching `query`, in insertion order.
    pub fn filter(&self, query: &T::Query) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| item.matches(query))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
