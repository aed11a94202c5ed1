//! Entity-component storage: the single source of truth for entities,
//! their components, and the per-kind entity indices systems iterate.
//!
//! An [`Entity`] is identified by a sequential [`Eid`] that stays valid for
//! the life of the process; entities are never removed. For each
//! [`ComponentKind`] the storage keeps an index of every Eid currently
//! carrying that kind, in attachment order. Systems iterate those indices
//! and read or write component fields in place; only the attach operations
//! here mutate the indices themselves.

pub mod entity;

use rustc_hash::FxHashMap;

use crate::components::{Component, ComponentKind};
use crate::storage::entity::{Eid, Entity};

/// Owner of the entity list, the per-kind Eid indices, and the
/// current-camera designation.
#[derive(Debug, Default)]
pub struct EntityComponentStorage {
    entities: Vec<Entity>,
    kind_eids: [Vec<Eid>; ComponentKind::COUNT],
    names: FxHashMap<String, Eid>,
    camera_eid: Option<Eid>,
}

impl EntityComponentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with the next sequential Eid and attach the given
    /// components. Returns the new entity's Eid.
    ///
    /// # Panics
    ///
    /// Panics when the u16 identity space is exhausted.
    pub fn add_entity(&mut self, components: impl IntoIterator<Item = Component>) -> Eid {
        let eid = self.push_entity(None);
        self.add_components_to_entity(eid, components);
        eid
    }

    /// Like [`add_entity`], with a display name registered for
    /// [`lookup`].
    ///
    /// [`add_entity`]: EntityComponentStorage::add_entity
    /// [`lookup`]: EntityComponentStorage::lookup
    pub fn add_named_entity(
        &mut self,
        name: impl Into<String>,
        components: impl IntoIterator<Item = Component>,
    ) -> Eid {
        let eid = self.push_entity(Some(name.into()));
        self.add_components_to_entity(eid, components);
        eid
    }

    fn push_entity(&mut self, name: Option<String>) -> Eid {
        let next = self.entities.len();
        if next > Eid::MAX as usize {
            panic!("entity identity space exhausted: {next} entities already allocated");
        }
        let eid = next as Eid;
        if let Some(name) = &name {
            self.names.insert(name.clone(), eid);
        }
        self.entities.push(Entity::new(eid, name));
        eid
    }

    /// Attach components to an existing entity.
    ///
    /// A component whose kind is already present on the entity replaces the
    /// old instance in place; the Eid is appended to the kind's index only
    /// on first attachment, so re-attaching never duplicates an index entry.
    /// Attaching a Camera designates the entity as the current camera.
    pub fn add_components_to_entity(
        &mut self,
        eid: Eid,
        components: impl IntoIterator<Item = Component>,
    ) {
        for component in components {
            let kind = component.kind();
            if kind == ComponentKind::Camera {
                self.camera_eid = Some(eid);
            }
            let was_vacant = self.entities[eid as usize].insert(component);
            if was_vacant {
                self.kind_eids[kind.index()].push(eid);
            }
        }
    }

    /// Every Eid carrying the given kind, in attachment order.
    pub fn eids_with(&self, kind: ComponentKind) -> &[Eid] {
        &self.kind_eids[kind.index()]
    }

    /// The entity with the given Eid.
    ///
    /// # Panics
    ///
    /// Panics when `eid` was never allocated by this storage.
    pub fn entity(&self, eid: Eid) -> &Entity {
        &self.entities[eid as usize]
    }

    /// Mutable access to the entity with the given Eid.
    ///
    /// # Panics
    ///
    /// Panics when `eid` was never allocated by this storage.
    pub fn entity_mut(&mut self, eid: Eid) -> &mut Entity {
        &mut self.entities[eid as usize]
    }

    /// Attempt to fetch a component by Eid and kind.
    pub fn component(&self, eid: Eid, kind: ComponentKind) -> Option<&Component> {
        self.entities.get(eid as usize)?.component(kind)
    }

    /// Resolve a display name to an Eid.
    pub fn lookup(&self, name: &str) -> Option<Eid> {
        self.names.get(name).copied()
    }

    /// The entity currently designated as the camera, if any.
    pub fn camera_eid(&self) -> Option<Eid> {
        self.camera_eid
    }

    /// Total number of entities ever created.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
