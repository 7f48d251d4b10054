//! Quantised 2-D vectors.
//!
//! Positions and velocities travel as two `u16` values.  Each component is
//! clamped to `[-40, 40]` and mapped linearly onto `0..=65535`, so a vector is
//! always 4 bytes on the wire regardless of its value.

use serde::{Deserialize, Serialize};

/// Encoded size of one [`Vector2`] in bytes.
pub const VECTOR2_SIZE: usize = 4;

/// Lower bound of the representable range on each axis.
pub const RANGE_MIN: f32 = -40.0;

/// Upper bound of the representable range on each axis.
pub const RANGE_MAX: f32 = 40.0;

/// A position or velocity in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Appends the quantised x then y component, little-endian.
    pub fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&quantise(self.x).to_le_bytes());
        buf.extend_from_slice(&quantise(self.y).to_le_bytes());
    }
}

/// Maps `value` from `[RANGE_MIN, RANGE_MAX]` onto the full `u16` range.
///
/// NaN is treated as the range midpoint.
fn quantise(value: f32) -> u16 {
    let value = if value.is_nan() { 0.0 } else { value };
    let t = (value.clamp(RANGE_MIN, RANGE_MAX) - RANGE_MIN) / (RANGE_MAX - RANGE_MIN);
    (t * f32::from(u16::MAX)).round() as u16
}
