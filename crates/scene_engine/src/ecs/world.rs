//! ECS World implementation
//!
//! The world owns every entity and all component data. Storage is one
//! insertion-ordered array per component type, so iteration order is stable
//! and can be reordered explicitly with [`World::sort_components_by`] for
//! render batching (drawables by shader, UI elements by z-index).

use super::{Component, Entity};
use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Per-type component storage: ordered entries plus an entity index
struct Storage<T: Component> {
    entries: Vec<(Entity, T)>,
    index: HashMap<Entity, usize>,
}

impl<T: Component> Storage<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, entity: Entity, component: T) {
        if let Some(&slot) = self.index.get(&entity) {
            self.entries[slot].1 = component;
        } else {
            self.index.insert(entity, self.entries.len());
            self.entries.push((entity, component));
        }
    }

    fn get(&self, entity: Entity) -> Option<&T> {
        self.index.get(&entity).map(|&slot| &self.entries[slot].1)
    }

    fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = *self.index.get(&entity)?;
        Some(&mut self.entries[slot].1)
    }

    fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.index.remove(&entity)?;
        let (_, component) = self.entries.remove(slot);
        for (_, later) in self.index.iter_mut().filter(|(_, s)| **s > slot) {
            *later -= 1;
        }
        Some(component)
    }

    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.entries.sort_by(|a, b| compare(&a.1, &b.1));
        for (slot, (entity, _)) in self.entries.iter().enumerate() {
            self.index.insert(*entity, slot);
        }
    }
}

/// Object-safe view over a typed storage, used for entity destruction
trait AnyStorage: Any {
    fn contains(&self, entity: Entity) -> bool;
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> AnyStorage for Storage<T> {
    fn contains(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity)
    }

    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// ECS World containing all entities and components
pub struct World {
    next_entity_id: u32,
    entities: Vec<Entity>,
    storages: HashMap<TypeId, Box<dyn AnyStorage>>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            next_entity_id: 0,
            entities: Vec::new(),
            storages: HashMap::new(),
        }
    }

    /// Create a new entity with a monotonic, never-reused id
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Destroy an entity, removing all attached components atomically
    ///
    /// Hierarchy cleanup (orphaning children) is the responsibility of
    /// [`hierarchy::destroy_entity`](crate::ecs::systems::hierarchy::destroy_entity),
    /// which calls through to this method.
    pub fn destroy_entity(&mut self, entity: Entity) {
        for storage in self.storages.values_mut() {
            storage.remove_entity(entity);
        }
        self.entities.retain(|e| *e != entity);
    }

    /// Check whether an entity is alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Get an iterator over all live entities in creation order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    fn storage<T: Component>(&self) -> Option<&Storage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<Storage<T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> &mut Storage<T> {
        self.storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Storage::<T>::new()))
            .as_any_mut()
            .downcast_mut::<Storage<T>>()
            .unwrap_or_else(|| unreachable!("storage registered under wrong TypeId"))
    }

    /// Add a component to an entity, replacing any existing component of that type
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        self.storage_mut::<T>().insert(entity, component);
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>()?.get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storage_mut::<T>().get_mut(entity)
    }

    /// Check whether an entity has a component of the given type
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.storage::<T>().is_some_and(|s| s.contains(entity))
    }

    /// Remove a component from an entity, returning it if present
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.storage_mut::<T>().remove(entity)
    }

    /// Iterate entities owning a `T`, in `T`'s storage order
    ///
    /// Valid for one pipeline pass: structural changes (entity or component
    /// creation/destruction) during iteration are unsupported.
    pub fn query<T: Component>(&self) -> impl Iterator<Item = Entity> + '_ {
        self.storage::<T>()
            .into_iter()
            .flat_map(|s| s.entries.iter().map(|(entity, _)| *entity))
    }

    /// Iterate entities owning both `A` and `B`, in `A`'s storage order
    pub fn query2<A: Component, B: Component>(&self) -> impl Iterator<Item = Entity> + '_ {
        self.query::<A>().filter(|e| self.has_component::<B>(*e))
    }

    /// Iterate entities owning `A`, `B`, and `C`, in `A`'s storage order
    pub fn query3<A: Component, B: Component, C: Component>(
        &self,
    ) -> impl Iterator<Item = Entity> + '_ {
        self.query2::<A, B>().filter(|e| self.has_component::<C>(*e))
    }

    /// Stable-sort `T`'s storage with a caller-supplied comparator
    ///
    /// Only affects the iteration order of queries whose first type is `T`.
    pub fn sort_components_by<T: Component, F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.storage_mut::<T>().sort_by(compare);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(i32);
    impl Component for Health {}

    struct Tag;
    impl Component for Tag {}

    #[test]
    fn test_entity_ids_monotonic_and_never_reused() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        assert!(b.id() > a.id());

        world.destroy_entity(a);
        let c = world.create_entity();
        assert!(c.id() > b.id());
        assert!(!world.is_alive(a));
    }

    #[test]
    fn test_add_component_replaces() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Health(10));
        world.add_component(e, Health(25));

        assert_eq!(world.get_component::<Health>(e).map(|h| h.0), Some(25));
        assert_eq!(world.query::<Health>().count(), 1);
    }

    #[test]
    fn test_destroy_removes_all_components() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Health(1));
        world.add_component(e, Tag);

        world.destroy_entity(e);
        assert!(!world.has_component::<Health>(e));
        assert!(!world.has_component::<Tag>(e));
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_query_conjunction() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Health(1));
        world.add_component(b, Health(2));
        world.add_component(b, Tag);

        let both: Vec<Entity> = world.query2::<Health, Tag>().collect();
        assert_eq!(both, vec![b]);
    }

    #[test]
    fn test_query_order_follows_insertion() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let c = world.create_entity();
        world.add_component(b, Health(2));
        world.add_component(a, Health(1));
        world.add_component(c, Health(3));

        let order: Vec<Entity> = world.query::<Health>().collect();
        assert_eq!(order, vec![b, a, c]);
    }

    #[test]
    fn test_sort_components_reorders_queries() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let c = world.create_entity();
        world.add_component(a, Health(3));
        world.add_component(b, Health(1));
        world.add_component(c, Health(2));

        world.sort_components_by::<Health, _>(|x, y| x.0.cmp(&y.0));
        let order: Vec<Entity> = world.query::<Health>().collect();
        assert_eq!(order, vec![b, c, a]);

        // Lookups still resolve after the reorder
        assert_eq!(world.get_component::<Health>(a).map(|h| h.0), Some(3));
    }

    #[test]
    fn test_remove_component_keeps_remaining_order() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let c = world.create_entity();
        world.add_component(a, Health(1));
        world.add_component(b, Health(2));
        world.add_component(c, Health(3));

        assert_eq!(world.remove_component::<Health>(b).map(|h| h.0), Some(2));
        let order: Vec<Entity> = world.query::<Health>().collect();
        assert_eq!(order, vec![a, c]);
        assert_eq!(world.get_component::<Health>(c).map(|h| h.0), Some(3));
    }
}
