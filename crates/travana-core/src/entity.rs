//! Core Entity Trait
//!
//! Every remote entity carries a unique id; slices keep them in an
//! [`EntityMap`] keyed by that id.

use std::collections::HashMap;
use std::hash::Hash;

/// Basic contract for all remote entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Normalized id -> entity mapping that remembers insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMap<T: Entity> {
    order: Vec<T::Id>,
    by_id: HashMap<T::Id, T>,
}

impl<T: Entity> Default for EntityMap<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T: Entity> EntityMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection, keeping the order of `entities`
    pub fn replace_all(&mut self, entities: impl IntoIterator<Item = T>) {
        self.clear();
        for entity in entities {
            self.upsert(entity);
        }
    }

    /// Insert a new entity at the end, or replace an existing one in place
    pub fn upsert(&mut self, entity: T) {
        let id = entity.id().clone();
        if self.by_id.insert(id.clone(), entity).is_none() {
            self.order.push(id);
        }
    }

    /// Replace an entity only if it is already present.
    /// Returns whether anything changed.
    pub fn update(&mut self, entity: T) -> bool {
        match self.by_id.get_mut(entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.by_id.contains_key(id)
    }

    /// Entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Owned copy in insertion order, for views
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.by_id.clear();
    }
}

impl<T: Entity> FromIterator<T> for EntityMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        map.replace_all(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: &'static str,
    }

    impl Entity for Note {
        type Id = String;
        fn id(&self) -> &String {
            &self.id
        }
    }

    fn note(id: &str, body: &'static str) -> Note {
        Note { id: id.to_string(), body }
    }

    #[test]
    fn test_upsert_keeps_first_position() {
        let mut map = EntityMap::new();
        map.upsert(note("a", "one"));
        map.upsert(note("b", "two"));
        map.upsert(note("a", "uno"));

        let bodies: Vec<_> = map.iter().map(|n| n.body).collect();
        assert_eq!(bodies, vec!["uno", "two"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_update_ignores_unknown_ids() {
        let mut map: EntityMap<Note> = [note("a", "one")].into_iter().collect();

        assert!(!map.update(note("z", "ghost")));
        assert!(map.update(note("a", "changed")));
        assert_eq!(map.get(&"a".to_string()).map(|n| n.body), Some("changed"));
        assert!(!map.contains(&"z".to_string()));
    }

    #[test]
    fn test_replace_all_drops_previous_entries() {
        let mut map: EntityMap<Note> = [note("a", "one"), note("b", "two")].into_iter().collect();
        map.replace_all(vec![note("c", "three")]);

        assert_eq!(map.len(), 1);
        assert!(map.get(&"a".to_string()).is_none());
    }
}
