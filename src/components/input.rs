/// Data-less tag marking the entity driven by the input system.
///
/// The input system acts on the first entity carrying this component; see
/// [`crate::systems::input`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputControlled;
