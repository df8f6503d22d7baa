use crate::error::{MatrixError, Result};
use crate::math::Matrix4;
use glam::Vec3;

// sin² of the smallest accepted angle between view direction and up
const PARALLEL_EPSILON: f32 = 1e-6;

/// Right-handed look-at view matrix
///
/// A zero-length view direction, or an `up` parallel to it, has no defined
/// basis and yields NaN entries. Use [`try_view`] to reject those inputs.
pub fn view(from: Vec3, at: Vec3, up: Vec3) -> Matrix4 {
    let m = build_view(from, at, up);
    if !m.is_finite() {
        log::warn!("degenerate view basis: from={from:?} at={at:?} up={up:?}");
    }
    m
}

/// Like [`view`], but fails with [`MatrixError::DegenerateBasis`] instead of
/// producing NaN entries.
pub fn try_view(from: Vec3, at: Vec3, up: Vec3) -> Result<Matrix4> {
    let forward = (at - from).normalize_or_zero();
    let up_dir = up.normalize_or_zero();
    if forward == Vec3::ZERO
        || up_dir == Vec3::ZERO
        || forward.cross(up_dir).length_squared() < PARALLEL_EPSILON
    {
        log::debug!("rejected view basis: from={from:?} at={at:?} up={up:?}");
        return Err(MatrixError::DegenerateBasis);
    }
    Ok(build_view(from, at, up))
}

fn build_view(from: Vec3, at: Vec3, up: Vec3) -> Matrix4 {
    let forward = (at - from).normalize();
    let right = forward.cross(up).normalize();
    let corrected_up = right.cross(forward);

    Matrix4::from_cols_array([
        right.x, corrected_up.x, -forward.x, 0.0, //
        right.y, corrected_up.y, -forward.y, 0.0, //
        right.z, corrected_up.z, -forward.z, 0.0, //
        -right.dot(from),
        -corrected_up.dot(from),
        forward.dot(from),
        1.0,
    ])
}

/// Eye position, target and up vector of a view matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    pub from: Vec3,
    pub at: Vec3,
    pub up: Vec3,
}

impl Default for LookAt {
    fn default() -> Self {
        Self {
            from: Vec3::ZERO,
            at: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

impl LookAt {
    pub fn new(from: Vec3, at: Vec3, up: Vec3) -> Self {
        Self { from, at, up }
    }

    pub fn matrix(&self) -> Matrix4 {
        view(self.from, self.at, self.up)
    }

    pub fn try_matrix(&self) -> Result<Matrix4> {
        try_view(self.from, self.at, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(LookAt::default().matrix(), Matrix4::IDENTITY);
        assert_eq!(view(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y), Matrix4::IDENTITY);
    }

    #[test]
    fn test_matches_glam_look_at() {
        let from = Vec3::new(3.0, 4.0, 5.0);
        let at = Vec3::new(-1.0, 0.5, 0.0);
        let up = Vec3::Y;
        let expected = Mat4::look_at_rh(from, at, up);
        assert!(view(from, at, up).approx_eq(&expected.into(), EPSILON));
    }

    #[test]
    fn test_eye_maps_to_origin() {
        let from = Vec3::new(0.0, 2.0, 5.0);
        let m = view(from, Vec3::ZERO, Vec3::Y);
        assert!(m.transform_point(from).abs_diff_eq(Vec3::ZERO, EPSILON));

        // target lies straight ahead, down -Z in eye space
        let target = m.transform_point(Vec3::ZERO);
        assert!(target.x.abs() < EPSILON && target.y.abs() < EPSILON);
        assert!((target.z + from.length()).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_inputs_produce_nan() {
        assert!(!view(Vec3::ONE, Vec3::ONE, Vec3::Y).is_finite());
        assert!(!view(Vec3::ZERO, Vec3::Y, Vec3::Y).is_finite());
    }

    #[test]
    fn test_try_view_rejects_degenerate_basis() {
        assert_eq!(try_view(Vec3::ONE, Vec3::ONE, Vec3::Y), Err(MatrixError::DegenerateBasis));
        assert_eq!(
            LookAt::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Vec3::Y).try_matrix(),
            Err(MatrixError::DegenerateBasis)
        );
        assert_eq!(
            try_view(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0), Vec3::ZERO),
            Err(MatrixError::DegenerateBasis)
        );
    }

    #[test]
    fn test_try_view_ignores_input_magnitude() {
        let near_target = Vec3::new(0.0, 0.0, -5e-4);
        let m = try_view(Vec3::ZERO, near_target, Vec3::Y).unwrap();
        assert!(m.approx_eq(&Matrix4::IDENTITY, EPSILON));
        assert_eq!(m, view(Vec3::ZERO, near_target, Vec3::Y));

        let short_up = Vec3::new(0.0, 1e-4, 0.0);
        let m = try_view(Vec3::ZERO, Vec3::NEG_Z, short_up).unwrap();
        assert!(m.approx_eq(&Matrix4::IDENTITY, EPSILON));
    }

    #[test]
    fn test_try_view_rejects_long_nearly_parallel_up() {
        let up = Vec3::new(0.0, 1.0, -1e6);
        assert_eq!(try_view(Vec3::ZERO, Vec3::NEG_Z, up), Err(MatrixError::DegenerateBasis));
    }

    #[test]
    fn test_try_view_accepts_valid_basis() {
        let look = LookAt::new(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(look.try_matrix().unwrap(), look.matrix());
    }
}
