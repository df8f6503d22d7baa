//! 4x4 matrix value type
//!
//! Elements are stored column-major: `[0..4]` is column 0, `[12..16]` is the
//! translation column. The layout is the one WebGPU and WebGL expect for
//! uniform data, so a `Matrix4` can be uploaded without reordering.

use crate::error::{MatrixError, Result};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use std::ops::{Index, Mul};

/// A 4x4 single-precision matrix in column-major order
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4 {
    elements: [f32; 16],
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::from_cols_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Create a matrix from 16 column-major elements
    #[inline]
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.elements
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Raw bytes for a uniform or constant buffer upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Element at `row`, `col` of the logical grid
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.elements[col * 4 + row]
    }

    /// Returns self × rhs
    ///
    /// Output element `4j + i` combines `self[i]`, `self[i + 4]`, `self[i + 8]`
    /// and `self[i + 12]` weighted by `rhs[4j..4j + 4]`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let l = &self.elements;
        let r = &rhs.elements;
        let mut out = [0.0f32; 16];

        for col in 0..4 {
            let base = col * 4;
            for i in 0..4 {
                out[base + i] = l[i] * r[base]
                    + l[i + 4] * r[base + 1]
                    + l[i + 8] * r[base + 2]
                    + l[i + 12] * r[base + 3];
            }
        }

        Self::from_cols_array(out)
    }

    /// Apply to the point `(x, y, z, 1)` without a perspective divide
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let m = &self.elements;
        Vec3::new(
            m[0] * point.x + m[4] * point.y + m[8] * point.z + m[12],
            m[1] * point.x + m[5] * point.y + m[9] * point.z + m[13],
            m[2] * point.x + m[6] * point.y + m[10] * point.z + m[14],
        )
    }

    /// Apply to the point `(x, y, z, 1)` and divide by the resulting `w`
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        let m = &self.elements;
        let w = m[3] * point.x + m[7] * point.y + m[11] * point.z + m[15];
        self.transform_point(point) / w
    }

    /// Apply to the direction `(x, y, z, 0)`, ignoring translation
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        let m = &self.elements;
        Vec3::new(
            m[0] * vector.x + m[4] * vector.y + m[8] * vector.z,
            m[1] * vector.x + m[5] * vector.y + m[9] * vector.z,
            m[2] * vector.x + m[6] * vector.y + m[10] * vector.z,
        )
    }

    /// True when the bottom row is `[0, 0, 0, 1]`
    pub fn is_affine(&self) -> bool {
        let m = &self.elements;
        m[3] == 0.0 && m[7] == 0.0 && m[11] == 0.0 && m[15] == 1.0
    }

    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|e| e.is_finite())
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// The 4x4 identity matrix
#[inline]
pub fn identity() -> Matrix4 {
    Matrix4::IDENTITY
}

/// View `16 * n` packed column-major values as `n` matrices without copying
pub fn unpack(packed: &[f32]) -> Result<&[Matrix4]> {
    bytemuck::try_cast_slice(packed).map_err(|_| MatrixError::PackedLength { len: packed.len() })
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: &Matrix4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(elements: [f32; 16]) -> Self {
        Self::from_cols_array(elements)
    }
}

impl From<Matrix4> for [f32; 16] {
    fn from(matrix: Matrix4) -> Self {
        matrix.elements
    }
}

impl From<Mat4> for Matrix4 {
    fn from(matrix: Mat4) -> Self {
        Self::from_cols_array(matrix.to_cols_array())
    }
}

impl From<Matrix4> for Mat4 {
    fn from(matrix: Matrix4) -> Self {
        Mat4::from_cols_array(&matrix.elements)
    }
}
