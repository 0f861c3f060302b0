//! The entity registry.
//!
//! [`EntityRegistry`] is the sole owner of all entity and component data.
//! Every operation that takes an entity fails with
//! [`RegistryError::UnknownEntity`] when that entity does not exist, and all
//! checks run before anything is mutated.
//!
//! References handed out by [`EntityRegistry::get_mut`] and
//! [`EntityRegistry::view`] borrow the registry mutably, so they cannot
//! outlive a later `destroy`, `remove` or `emplace` on it.

use std::collections::HashMap;

use ecs_component::{Component, Entity, EntityAllocator};
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::record::EntityRecord;
use crate::view::View;

/// Entity storage with type-erased, name-keyed components.
#[derive(Debug)]
pub struct EntityRegistry {
    /// Entity ID allocator. IDs are never recycled.
    allocator: EntityAllocator,
    /// One record per live entity.
    entities: HashMap<Entity, EntityRecord>,
}

impl EntityRegistry {
    /// Create an empty registry with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry from a [`RegistryConfig`].
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            allocator: EntityAllocator::new(),
            entities: HashMap::with_capacity(config.initial_capacity),
        }
    }

    // -- Entity lifecycle --

    /// Create a new entity with no components.
    pub fn create(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.entities.insert(entity, EntityRecord::new());
        debug!(%entity, live = self.entities.len(), "entity created");
        entity
    }

    /// Destroy an entity together with every component attached to it.
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        let record = self
            .entities
            .remove(&entity)
            .ok_or(RegistryError::UnknownEntity(entity))?;
        debug!(%entity, components = record.len(), "entity destroyed");
        Ok(())
    }

    /// Returns `true` if the entity is live.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(&entity)
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    /// `true` if no entity is live.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All live entities, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys().copied()
    }

    // -- Component operations --

    /// Attach `state` to an entity.
    ///
    /// Fails with [`RegistryError::DuplicateComponent`] if the entity already
    /// carries `C`; use [`emplace_or_replace`](Self::emplace_or_replace) to
    /// overwrite.
    pub fn emplace<C: Component>(&mut self, entity: Entity, state: C) -> Result<()> {
        if !self.record_mut(entity)?.insert_new(state) {
            return Err(RegistryError::DuplicateComponent {
                entity,
                component: C::NAME.to_string(),
            });
        }
        trace!(%entity, component = C::NAME, "component emplaced");
        Ok(())
    }

    /// Attach `state` to an entity, replacing any existing `C`.
    pub fn emplace_or_replace<C: Component>(&mut self, entity: Entity, state: C) -> Result<()> {
        let replaced = self.record_mut(entity)?.insert(state);
        trace!(%entity, component = C::NAME, replaced, "component emplaced");
        Ok(())
    }

    /// Detach the component `name`.
    ///
    /// Fails with [`RegistryError::MissingComponent`] if it is not attached.
    pub fn remove(&mut self, entity: Entity, name: &str) -> Result<()> {
        if self.record_mut(entity)?.remove(name).is_none() {
            return Err(RegistryError::MissingComponent {
                entity,
                component: name.to_string(),
            });
        }
        trace!(%entity, component = name, "component removed");
        Ok(())
    }

    /// Detach the component `name` if it is attached.
    ///
    /// Returns whether anything was removed.
    pub fn remove_if_exists(&mut self, entity: Entity, name: &str) -> Result<bool> {
        let removed = self.record_mut(entity)?.remove(name).is_some();
        if removed {
            trace!(%entity, component = name, "component removed");
        }
        Ok(removed)
    }

    /// Detach `C` and hand its state back to the caller.
    pub fn take<C: Component>(&mut self, entity: Entity) -> Result<C> {
        let record = self.record_mut(entity)?;
        match record.state(C::NAME) {
            None => return Err(missing::<C>(entity)),
            Some(state) if !state.is::<C>() => return Err(mismatch::<C>(entity)),
            Some(_) => {}
        }
        let state = record
            .remove(C::NAME)
            .ok_or_else(|| missing::<C>(entity))?;
        let state = state.downcast::<C>().map_err(|_| mismatch::<C>(entity))?;
        trace!(%entity, component = C::NAME, "component taken");
        Ok(*state)
    }

    /// Remove the component `name` from every entity that has it.
    ///
    /// Returns how many entities lost it.
    pub fn clear(&mut self, name: &str) -> usize {
        let cleared = self
            .entities
            .values_mut()
            .filter_map(|record| record.remove(name))
            .count();
        debug!(component = name, cleared, "component cleared");
        cleared
    }

    // -- Lookup --

    /// Returns `true` if the entity carries the component `name`.
    pub fn has(&self, entity: Entity, name: &str) -> Result<bool> {
        Ok(self.record(entity)?.contains(name))
    }

    /// Returns `true` if the entity carries every component in `names`.
    ///
    /// An empty `names` is vacuously satisfied.
    pub fn all_of(&self, entity: Entity, names: &[&str]) -> Result<bool> {
        let record = self.record(entity)?;
        Ok(names.iter().all(|name| record.contains(name)))
    }

    /// Names of every component attached to the entity.
    pub fn component_names(&self, entity: Entity) -> Result<Vec<&'static str>> {
        Ok(self.record(entity)?.names().collect())
    }

    /// Borrow the entity's `C` state.
    pub fn get<C: Component>(&self, entity: Entity) -> Result<&C> {
        self.record(entity)?
            .state(C::NAME)
            .ok_or_else(|| missing::<C>(entity))?
            .downcast_ref::<C>()
            .ok_or_else(|| mismatch::<C>(entity))
    }

    /// Mutably borrow the entity's `C` state. Changes are made in place.
    pub fn get_mut<C: Component>(&mut self, entity: Entity) -> Result<&mut C> {
        self.record_mut(entity)?
            .state_mut(C::NAME)
            .ok_or_else(|| missing::<C>(entity))?
            .downcast_mut::<C>()
            .ok_or_else(|| mismatch::<C>(entity))
    }

    // -- Query --

    /// Every entity carrying all of `V`'s components, with mutable access to
    /// those states.
    ///
    /// This is a fresh scan on each call, not a live subscription. `V = ()`
    /// matches every entity, including ones with no components. A matching
    /// entity whose state under one of the names is another Rust type fails
    /// the whole view with `TypeMismatch`, the same as [`Self::get`].
    ///
    /// ```rust
    /// # use ecs_component::Component;
    /// # use ecs_registry::EntityRegistry;
    /// # struct Velocity { y: f32 }
    /// # struct Gravity { strength: f32 }
    /// # impl Component for Velocity { const NAME: &'static str = "velocity"; }
    /// # impl Component for Gravity { const NAME: &'static str = "gravity"; }
    /// # let mut registry = EntityRegistry::new();
    /// # let dt = 1.0;
    /// for (_entity, (velocity, gravity)) in registry.view::<(Velocity, Gravity)>()? {
    ///     velocity.y += gravity.strength * dt;
    /// }
    /// # Ok::<(), ecs_registry::RegistryError>(())
    /// ```
    pub fn view<V: View>(&mut self) -> Result<Vec<(Entity, V::Item<'_>)>> {
        let names = V::names();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(RegistryError::AliasedView(name.to_string()));
            }
        }

        self.entities
            .iter_mut()
            .filter_map(|(&entity, record)| match V::fetch(record) {
                Ok(Some(item)) => Some(Ok((entity, item))),
                Ok(None) => None,
                Err(mismatch) => Some(Err(RegistryError::TypeMismatch {
                    entity,
                    component: mismatch.component.to_string(),
                    expected: mismatch.expected,
                })),
            })
            .collect()
    }

    /// IDs of entities that carry every name in `with` and none in `without`.
    #[must_use]
    pub fn query(&self, with: &[&str], without: &[&str]) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|(_, record)| {
                with.iter().all(|name| record.contains(name))
                    && !without.iter().any(|name| record.contains(name))
            })
            .map(|(&entity, _)| entity)
            .collect()
    }

    fn record(&self, entity: Entity) -> Result<&EntityRecord> {
        self.entities
            .get(&entity)
            .ok_or(RegistryError::UnknownEntity(entity))
    }

    fn record_mut(&mut self, entity: Entity) -> Result<&mut EntityRecord> {
        self.entities
            .get_mut(&entity)
            .ok_or(RegistryError::UnknownEntity(entity))
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn missing<C: Component>(entity: Entity) -> RegistryError {
    RegistryError::MissingComponent {
        entity,
        component: C::NAME.to_string(),
    }
}

fn mismatch<C: Component>(entity: Entity) -> RegistryError {
    RegistryError::TypeMismatch {
        entity,
        component: C::NAME.to_string(),
        expected: std::any::type_name::<C>(),
    }
}
