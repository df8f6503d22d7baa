//! # mat4-transforms
//!
//! Column-major 4x4 matrices for a WebGPU/WebGL rendering pipeline.
//!
//! ## Features
//! - Identity, translation, scale and Euler rotation constructors
//! - Orthographic and perspective projections with validated clip volumes
//! - Right-handed look-at view matrices
//! - Left-to-right chain multiply that never touches its operands
//! - `bytemuck` casts for uniform buffer upload
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust
//! use mat4_transforms::{multiply, perspective, rotate, translate, view, Vec3};
//!
//! let projection = perspective(45.0, 16.0 / 9.0, 0.1, 100.0)?;
//! let camera = view(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let model = multiply(&[translate(1.0, 0.0, 0.0), rotate(0.0, 45.0, 0.0)])?;
//!
//! let mvp = multiply(&[projection, camera, model])?;
//! assert_eq!(mvp.as_slice().len(), 16);
//! # Ok::<(), mat4_transforms::MatrixError>(())
//! ```

pub mod error;
pub mod math;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{MatrixError, Result};
pub use math::{
    identity, multiply, rotate, rotation_x, rotation_y, rotation_z, scale, translate, unpack,
    Matrix4, Transform, Vec3,
};
pub use render::{
    orthographic, perspective, try_view, view, Camera, LookAt, Orthographic, Perspective, Uniforms,
};
