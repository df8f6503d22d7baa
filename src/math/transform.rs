use super::matrix::Matrix4;
use glam::Vec3;

/// Translation by `(x, y, z)`
pub fn translate(x: f32, y: f32, z: f32) -> Matrix4 {
    Matrix4::from_cols_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        x, y, z, 1.0,
    ])
}

/// Non-uniform scale `diag(x, y, z, 1)`
pub fn scale(x: f32, y: f32, z: f32) -> Matrix4 {
    Matrix4::from_cols_array([
        x, 0.0, 0.0, 0.0, //
        0.0, y, 0.0, 0.0, //
        0.0, 0.0, z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Right-handed rotation about +X by `degrees`
pub fn rotation_x(degrees: f32) -> Matrix4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix4::from_cols_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Right-handed rotation about +Y by `degrees`
pub fn rotation_y(degrees: f32) -> Matrix4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix4::from_cols_array([
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Right-handed rotation about +Z by `degrees`
pub fn rotation_z(degrees: f32) -> Matrix4 {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix4::from_cols_array([
        c, s, 0.0, 0.0, //
        -s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Euler rotation in degrees, composed as `Rx · Ry · Rz`
///
/// Axes with a zero (or NaN) angle are skipped. The first present axis seeds
/// the result and later axes are multiplied onto it. With no axis present the
/// identity is returned.
pub fn rotate(x: f32, y: f32, z: f32) -> Matrix4 {
    let axes: [(f32, fn(f32) -> Matrix4); 3] = [(x, rotation_x), (y, rotation_y), (z, rotation_z)];

    let mut result: Option<Matrix4> = None;
    for (angle, elementary) in axes {
        if angle == 0.0 || angle.is_nan() {
            continue;
        }
        let rotation = elementary(angle);
        result = Some(match result {
            Some(acc) => acc.multiply(&rotation),
            None => rotation,
        });
    }

    result.unwrap_or(Matrix4::IDENTITY)
}

/// Translation, Euler rotation (degrees) and scale of an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_translation_rotation(translation: Vec3, rotation: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix `T · R · S`: scale first, then rotate, then translate
    pub fn to_matrix(&self) -> Matrix4 {
        let t = translate(self.translation.x, self.translation.y, self.translation.z);
        let r = rotate(self.rotation.x, self.rotation.y, self.rotation.z);
        let s = scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.to_matrix().transform_point(point)
    }

    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        let r = rotate(self.rotation.x, self.rotation.y, self.rotation.z);
        r.transform_vector(direction)
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation.lerp(other.rotation, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPSILON),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_translate_layout() {
        let m = translate(1.0, 2.0, 3.0);
        assert_eq!(&m.as_slice()[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert!(m.is_affine());
        assert_eq!(translate(0.0, 0.0, 0.0), Matrix4::IDENTITY);
    }

    #[test]
    fn test_scale_layout() {
        let m = scale(2.0, 3.0, 4.0);
        assert_eq!(m[0], 2.0);
        assert_eq!(m[5], 3.0);
        assert_eq!(m[10], 4.0);
        assert_eq!(m[15], 1.0);
        assert_vec_eq(m.transform_point(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_elementary_rotations_match_glam() {
        for degrees in [15.0f32, 90.0, -130.0] {
            let radians = degrees.to_radians();
            assert!(rotation_x(degrees).approx_eq(&Mat4::from_rotation_x(radians).into(), EPSILON));
            assert!(rotation_y(degrees).approx_eq(&Mat4::from_rotation_y(radians).into(), EPSILON));
            assert!(rotation_z(degrees).approx_eq(&Mat4::from_rotation_z(radians).into(), EPSILON));
        }
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let m = rotate(90.0, 0.0, 0.0);
        assert_vec_eq(m.transform_vector(Vec3::Y), Vec3::Z);
        assert_vec_eq(m.transform_vector(Vec3::Z), -Vec3::Y);
    }

    #[test]
    fn test_rotate_single_axis_is_elementary() {
        assert_eq!(rotate(0.0, 30.0, 0.0), rotation_y(30.0));
        assert_eq!(rotate(0.0, 0.0, -45.0), rotation_z(-45.0));
    }

    #[test]
    fn test_rotate_composes_x_then_y_then_z() {
        let (x, y, z) = (20.0f32, -35.0f32, 110.0f32);
        let expected = Mat4::from_rotation_x(x.to_radians())
            * Mat4::from_rotation_y(y.to_radians())
            * Mat4::from_rotation_z(z.to_radians());
        assert!(rotate(x, y, z).approx_eq(&expected.into(), EPSILON));

        let skip_y = rotation_x(x).multiply(&rotation_z(z));
        assert_eq!(rotate(x, 0.0, z), skip_y);
    }

    #[test]
    fn test_rotate_without_angles_is_identity() {
        assert_eq!(rotate(0.0, 0.0, 0.0), Matrix4::IDENTITY);
        assert_eq!(rotate(f32::NAN, 0.0, 0.0), Matrix4::IDENTITY);
    }

    #[test]
    fn test_rotate_is_affine() {
        assert!(rotate(10.0, 20.0, 30.0).is_affine());
    }

    #[test]
    fn test_transform_to_matrix_order() {
        let transform = Transform::new(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 90.0),
            Vec3::new(2.0, 1.0, 1.0),
        );
        // scale (1,0,0) -> (2,0,0), rotate -> (0,2,0), translate -> (5,2,0)
        assert_vec_eq(transform.transform_point(Vec3::X), Vec3::new(5.0, 2.0, 0.0));
        assert_vec_eq(transform.transform_direction(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_transform_identity() {
        assert_eq!(Transform::default().to_matrix(), Matrix4::IDENTITY);
        let moved = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(moved.to_matrix(), translate(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_lerp() {
        let a = Transform::IDENTITY;
        let b = Transform::from_translation_rotation(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 90.0, 0.0),
        )
        .with_scale(Vec3::splat(3.0));
        let mid = a.lerp(&b, 0.5);
        assert_vec_eq(mid.translation, Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(mid.rotation, Vec3::new(0.0, 45.0, 0.0));
        assert_vec_eq(mid.scale, Vec3::splat(2.0));
    }
}
