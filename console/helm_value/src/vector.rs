//! Three-component float vector.

use std::fmt;

/// A three-component `f32` vector, the console's only aggregate value type.
///
/// Literal form is `(x, y, z)`; `{x, y, z}` is accepted on input as an
/// alternate bracket style. Components are full Float values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
