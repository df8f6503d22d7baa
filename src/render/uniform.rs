//! Per-draw uniform block
//!
//! Layout matches a WGSL `struct Uniforms { view_proj: mat4x4<f32>, model: mat4x4<f32> }`.

use super::camera::Camera;
use crate::error::Result;
use crate::math::Matrix4;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [f32; 16],
    pub model: [f32; 16],
}

impl Uniforms {
    pub fn new(camera: &Camera, model: &Matrix4) -> Result<Self> {
        Ok(Self {
            view_proj: camera.view_projection()?.to_cols_array(),
            model: model.to_cols_array(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::translate;

    #[test]
    fn test_layout_is_two_matrices() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 128);

        let camera = Camera::default();
        let model = translate(1.0, 2.0, 3.0);
        let uniforms = Uniforms::new(&camera, &model).unwrap();
        let bytes = uniforms.as_bytes();

        assert_eq!(&bytes[64..128], model.as_bytes());
        assert_eq!(&bytes[0..64], camera.view_projection().unwrap().as_bytes());
    }
}
