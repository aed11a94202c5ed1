//! Per-frame logical input snapshot.
//!
//! The external input device decides which physical keys map to which
//! logical direction; the core only consumes the resulting [`BoolState`]s.
//! Defaults are all-inactive.

/// Boolean key state for one logical action.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Fold the device's current "is down" reading into the state,
    /// deriving the edge flags from the previous frame.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Snapshot of the direction keys relevant to gameplay, refreshed once per
/// frame by the driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_right: BoolState,
}

impl InputState {
    /// Update all four direction states from the device readings.
    pub fn set_directions(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.maindirection_up.update(up);
        self.maindirection_down.update(down);
        self.maindirection_left.update(left);
        self.maindirection_right.update(right);
    }

    /// Whether any direction key is held.
    pub fn any_direction(&self) -> bool {
        self.maindirection_up.active
            || self.maindirection_down.active
            || self.maindirection_left.active
            || self.maindirection_right.active
    }
}
