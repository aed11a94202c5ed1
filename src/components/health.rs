/// Current and full hit points. Data-only; no system here consumes it, but
/// collision reactions are free to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub full: i32,
}

impl Health {
    /// Create a Health component at full hit points.
    pub fn new(full: i32) -> Self {
        Self {
            current: full,
            full,
        }
    }
}
