//! Rendering matrices module
//!
//! This module contains the projection and view constructors, the camera and the uniform block.

pub mod camera;
pub mod projection;
pub mod uniform;
pub mod view;

pub use camera::Camera;
pub use projection::{orthographic, perspective, Orthographic, Perspective};
pub use uniform::Uniforms;
pub use view::{try_view, view, LookAt};
