use crate::components::camera::Camera;
use crate::components::collision::Collision;
use crate::components::health::Health;
use crate::components::movement::Movement;
use crate::components::position::Position;
use crate::components::render::Render;
use crate::components::{Component, ComponentKind};

/// Stable entity identity: assigned sequentially from 0, never reused.
pub type Eid = u16;

/// A game object: an [`Eid`], an optional display name, and one slot per
/// component kind.
///
/// All structural operations on an entity go through
/// [`EntityComponentStorage`]; systems only read and write component field
/// values in place via the typed accessors here.
///
/// [`EntityComponentStorage`]: crate::storage::EntityComponentStorage
#[derive(Debug, Clone)]
pub struct Entity {
    eid: Eid,
    name: Option<String>,
    slots: [Option<Component>; ComponentKind::COUNT],
}

impl Entity {
    pub(crate) fn new(eid: Eid, name: Option<String>) -> Self {
        Self {
            eid,
            name,
            slots: Default::default(),
        }
    }

    pub fn eid(&self) -> Eid {
        self.eid
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a component of the given kind is attached.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// The attached component of the given kind, if any.
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.slots[kind.index()].as_ref()
    }

    /// Set the slot for the component's kind, silently replacing any
    /// previous instance. Returns true when the slot was vacant.
    pub(crate) fn insert(&mut self, component: Component) -> bool {
        let slot = &mut self.slots[component.kind().index()];
        let was_vacant = slot.is_none();
        *slot = Some(component);
        was_vacant
    }

    pub fn position(&self) -> Option<&Position> {
        match self.component(ComponentKind::Position) {
            Some(Component::Position(c)) => Some(c),
            _ => None,
        }
    }

    pub fn position_mut(&mut self) -> Option<&mut Position> {
        match &mut self.slots[ComponentKind::Position.index()] {
            Some(Component::Position(c)) => Some(c),
            _ => None,
        }
    }

    pub fn movement(&self) -> Option<&Movement> {
        match self.component(ComponentKind::Movement) {
            Some(Component::Movement(c)) => Some(c),
            _ => None,
        }
    }

    pub fn movement_mut(&mut self) -> Option<&mut Movement> {
        match &mut self.slots[ComponentKind::Movement.index()] {
            Some(Component::Movement(c)) => Some(c),
            _ => None,
        }
    }

    pub fn render(&self) -> Option<&Render> {
        match self.component(ComponentKind::Render) {
            Some(Component::Render(c)) => Some(c),
            _ => None,
        }
    }

    pub fn render_mut(&mut self) -> Option<&mut Render> {
        match &mut self.slots[ComponentKind::Render.index()] {
            Some(Component::Render(c)) => Some(c),
            _ => None,
        }
    }

    pub fn camera(&self) -> Option<&Camera> {
        match self.component(ComponentKind::Camera) {
            Some(Component::Camera(c)) => Some(c),
            _ => None,
        }
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.slots[ComponentKind::Camera.index()] {
            Some(Component::Camera(c)) => Some(c),
            _ => None,
        }
    }

    pub fn collision(&self) -> Option<&Collision> {
        match self.component(ComponentKind::Collision) {
            Some(Component::Collision(c)) => Some(c),
            _ => None,
        }
    }

    pub fn collision_mut(&mut self) -> Option<&mut Collision> {
        match &mut self.slots[ComponentKind::Collision.index()] {
            Some(Component::Collision(c)) => Some(c),
            _ => None,
        }
    }

    pub fn health(&self) -> Option<&Health> {
        match self.component(ComponentKind::Health) {
            Some(Component::Health(c)) => Some(c),
            _ => None,
        }
    }

    pub fn health_mut(&mut self) -> Option<&mut Health> {
        match &mut self.slots[ComponentKind::Health.index()] {
            Some(Component::Health(c)) => Some(c),
            _ => None,
        }
    }
}
