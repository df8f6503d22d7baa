//! Orthographic and perspective projection matrices
//!
//! Both produce right-handed, OpenGL-style clip space with `z` in `[-1, 1]`.

use crate::error::{MatrixError, Result};
use crate::math::Matrix4;
use std::f32::consts::PI;

/// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`
///
/// Fails with [`MatrixError::InvalidVolume`] when any extent is zero.
pub fn orthographic(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> Result<Matrix4> {
    let reason = if left == right {
        Some("left and right planes coincide")
    } else if top == bottom {
        Some("top and bottom planes coincide")
    } else if near == far {
        Some("near and far planes coincide")
    } else {
        None
    };
    if let Some(reason) = reason {
        log::debug!("rejected orthographic volume: {reason}");
        return Err(MatrixError::InvalidVolume { reason });
    }

    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Ok(Matrix4::from_cols_array([
        2.0 / width, 0.0, 0.0, 0.0, //
        0.0, 2.0 / height, 0.0, 0.0, //
        0.0, 0.0, -2.0 / depth, 0.0, //
        -(right + left) / width,
        -(top + bottom) / height,
        -(far + near) / depth,
        1.0,
    ]))
}

/// Perspective projection with a vertical field of view in degrees
///
/// Fails with [`MatrixError::InvalidVolume`] for a non-positive `fov`, zero
/// `aspect` or `near == far`, and with [`MatrixError::InvalidDistance`] when
/// either clip plane is not in front of the eye.
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Matrix4> {
    let reason = if fov <= 0.0 {
        Some("field of view must be positive")
    } else if near == far {
        Some("near and far planes coincide")
    } else if aspect == 0.0 {
        Some("aspect ratio is zero")
    } else {
        None
    };
    if let Some(reason) = reason {
        log::debug!("rejected perspective volume: {reason}");
        return Err(MatrixError::InvalidVolume { reason });
    }
    if near <= 0.0 || far <= 0.0 {
        log::debug!("rejected perspective clip distances near={near} far={far}");
        return Err(MatrixError::InvalidDistance { near, far });
    }

    let angle = fov * PI / 360.0;
    let ctg_angle = angle.cos() / angle.sin();
    let depth_value = 1.0 / (far - near);

    Ok(Matrix4::from_cols_array([
        ctg_angle / aspect, 0.0, 0.0, 0.0, //
        0.0, ctg_angle, 0.0, 0.0, //
        0.0, 0.0, -(far + near) * depth_value, -1.0, //
        0.0, 0.0, -2.0 * near * far * depth_value, 0.0,
    ]))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
            near: 0.0,
            far: 1.0,
        }
    }
}

impl Orthographic {
    /// Volume centred on the origin with the given width and height
    pub fn centered(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self {
            left: -width / 2.0,
            right: width / 2.0,
            top: height / 2.0,
            bottom: -height / 2.0,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Result<Matrix4> {
        orthographic(self.left, self.right, self.top, self.bottom, self.near, self.far)
    }
}

/// Perspective parameters; `fov` is the vertical field of view in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Perspective {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov, aspect, near, far }
    }

    /// Default parameters with the aspect ratio of a `width` x `height` viewport
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self::default().with_viewport(width, height)
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.aspect = width as f32 / height.max(1) as f32;
        self
    }

    pub fn matrix(&self) -> Result<Matrix4> {
        perspective(self.fov, self.aspect, self.near, self.far)
    }
}
