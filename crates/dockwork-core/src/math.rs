//! Math types re-exported from [`glam`].
//!
//! Docking works in whole screen units, so [`IVec2`] is the point type used
//! for pointer positions, polygon vertices and draw offsets. The float types
//! are re-exported for hosts that want to convert from their own event
//! coordinates.
//!
//! ```
//! use dockwork_core::math::{IVec2, manhattan_length};
//!
//! let origin = IVec2::new(10, 10);
//! let pointer = IVec2::new(13, 8);
//! assert_eq!(manhattan_length(pointer - origin), 5);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{IVec2, Vec2};

/// Sum of the absolute components of `v`.
#[inline]
pub fn manhattan_length(v: IVec2) -> i32 {
    v.abs().element_sum()
}

/// Round a float position to the nearest whole screen unit.
#[inline]
pub fn round_to_ivec2(v: Vec2) -> IVec2 {
    v.round().as_ivec2()
}
