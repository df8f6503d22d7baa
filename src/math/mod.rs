//! Matrix type and affine transform constructors
//!
//! Provides the column-major `Matrix4`, the chain multiply and the
//! translate/rotate/scale builders.

mod compose;
mod matrix;
mod transform;

pub use compose::multiply;
pub use matrix::{identity, unpack, Matrix4};
pub use transform::{rotate, rotation_x, rotation_y, rotation_z, scale, translate, Transform};

// Re-export commonly used glam types
pub use glam::{Mat4, Vec3, Vec4};
