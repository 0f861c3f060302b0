//! Per-entity component storage.
//!
//! Each entity owns one [`EntityRecord`]: a map from component name to a
//! type-erased state. The concrete type is recovered at the call site through
//! the caller's [`Component`] impl.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ecs_component::Component;

/// A type-erased component state.
pub type State = Box<dyn Any + Send + Sync>;

/// The set of (component name → state) pairs attached to one entity.
///
/// Names are unique within a record.
#[derive(Default)]
pub struct EntityRecord {
    components: HashMap<&'static str, State>,
}

impl EntityRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a component with `name` is attached.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Number of attached components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` if no component is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Names of all attached components, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.components.keys().copied()
    }

    /// Attach `state` unless `C::NAME` is already present.
    ///
    /// Returns `false`, leaving the record untouched, if the name was taken.
    pub fn insert_new<C: Component>(&mut self, state: C) -> bool {
        match self.components.entry(C::NAME) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Box::new(state));
                true
            }
        }
    }

    /// Attach `state`, overwriting whatever was stored under `C::NAME`.
    ///
    /// Returns `true` if an existing state was replaced.
    pub fn insert<C: Component>(&mut self, state: C) -> bool {
        self.components.insert(C::NAME, Box::new(state)).is_some()
    }

    /// Detach and return the state stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<State> {
        self.components.remove(name)
    }

    /// The type-erased state stored under `name`.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.components.get(name).map(|state| &**state)
    }

    /// The type-erased state stored under `name`, mutably.
    pub fn state_mut(&mut self, name: &str) -> Option<&mut (dyn Any + Send + Sync)> {
        self.components.get_mut(name).map(|state| &mut **state)
    }

    /// Mutable access to every attached state at once.
    ///
    /// The yielded references are disjoint, which is what lets a view hand
    /// out several `&mut` component states from the same entity.
    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (&'static str, &mut (dyn Any + Send + Sync))> {
        self.components
            .iter_mut()
            .map(|(name, state)| (*name, &mut **state))
    }
}

impl std::fmt::Debug for EntityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.components.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tag(u32);

    impl Component for Tag {
        const NAME: &'static str = "tag";
    }

    #[test]
    fn test_insert_new_does_not_overwrite() {
        let mut record = EntityRecord::new();
        assert!(record.insert_new(Tag(1)));
        assert!(!record.insert_new(Tag(2)));
        let state = record.state("tag").unwrap();
        assert_eq!(state.downcast_ref::<Tag>(), Some(&Tag(1)));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = EntityRecord::new();
        assert!(!record.insert(Tag(1)));
        assert!(record.insert(Tag(2)));
        assert_eq!(record.len(), 1);
        let state = record.state("tag").unwrap();
        assert_eq!(state.downcast_ref::<Tag>(), Some(&Tag(2)));
    }

    #[test]
    fn test_remove() {
        let mut record = EntityRecord::new();
        record.insert(Tag(1));
        assert!(record.remove("tag").is_some());
        assert!(record.remove("tag").is_none());
        assert!(record.is_empty());
    }

    #[test]
    fn test_debug_lists_names() {
        let mut record = EntityRecord::new();
        record.insert(Tag(1));
        assert_eq!(format!("{record:?}"), "{\"tag\"}");
    }
}
