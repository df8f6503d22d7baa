use super::projection::Perspective;
use super::view::view;
use crate::error::Result;
use crate::math::{multiply, Matrix4};
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Perspective,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Perspective::default(),
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_matrix(&self) -> Matrix4 {
        view(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Result<Matrix4> {
        self.projection.matrix()
    }

    /// `projection · view`
    pub fn view_projection(&self) -> Result<Matrix4> {
        multiply(&[self.projection_matrix()?, self.view_matrix()])
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection.aspect = aspect;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.projection = self.projection.with_viewport(width, height);
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }
}
