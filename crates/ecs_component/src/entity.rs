//! Entity handles and the allocator that mints them.

use serde::{Deserialize, Serialize};

/// Handle to one entity in a registry.
///
/// Carries nothing but its id. Everything an entity "is" lives in the
/// components attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out entity ids in increasing order, starting at 1.
///
/// Ids are never handed out twice, so a handle kept after its entity was
/// destroyed can't refer to a later one.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn allocate(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        entity
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_display() {
        assert_eq!(Entity(7).to_string(), "Entity(7)");
    }

    #[test]
    fn test_allocator_counts_up_from_one() {
        let mut alloc = EntityAllocator::new();
        let ids: Vec<u64> = (0..3).map(|_| alloc.allocate().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_allocator_never_repeats() {
        let mut alloc = EntityAllocator::default();
        let mut seen = std::collections::HashSet::new();
        assert!((0..100).all(|_| seen.insert(alloc.allocate())));
    }

    #[test]
    fn test_entity_serializes_as_plain_number() {
        let json = serde_json::to_string(&Entity(999)).unwrap();
        assert_eq!(json, "999");
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Entity(999));
    }
}
