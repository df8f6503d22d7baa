//! WASM bindings - every constructor returns a `Float32Array` of 16 column-major values

use crate::error::MatrixError;
use crate::math::{self, Matrix4, Vec3};
use crate::render;
use wasm_bindgen::prelude::*;

fn to_js(err: MatrixError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_vec(matrix: Matrix4) -> Vec<f32> {
    matrix.to_cols_array().to_vec()
}

#[wasm_bindgen(js_name = identity)]
pub fn js_identity() -> Vec<f32> {
    to_vec(math::identity())
}

#[wasm_bindgen(js_name = orthographic)]
pub fn js_orthographic(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> Result<Vec<f32>, JsError> {
    render::orthographic(left, right, top, bottom, near, far)
        .map(to_vec)
        .map_err(to_js)
}

#[wasm_bindgen(js_name = perspective)]
pub fn js_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Vec<f32>, JsError> {
    render::perspective(fov, aspect, near, far).map(to_vec).map_err(to_js)
}

#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = view)]
pub fn js_view(
    from_x: f32,
    from_y: f32,
    from_z: f32,
    at_x: f32,
    at_y: f32,
    at_z: f32,
    up_x: f32,
    up_y: f32,
    up_z: f32,
) -> Vec<f32> {
    to_vec(render::view(
        Vec3::new(from_x, from_y, from_z),
        Vec3::new(at_x, at_y, at_z),
        Vec3::new(up_x, up_y, up_z),
    ))
}

#[wasm_bindgen(js_name = translate)]
pub fn js_translate(x: f32, y: f32, z: f32) -> Vec<f32> {
    to_vec(math::translate(x, y, z))
}

#[wasm_bindgen(js_name = scale)]
pub fn js_scale(x: f32, y: f32, z: f32) -> Vec<f32> {
    to_vec(math::scale(x, y, z))
}

#[wasm_bindgen(js_name = rotate)]
pub fn js_rotate(x: f32, y: f32, z: f32) -> Vec<f32> {
    to_vec(math::rotate(x, y, z))
}

/// Multiply matrices packed back to back in one array of `16 * n` values
#[wasm_bindgen(js_name = multiply)]
pub fn js_multiply(packed: &[f32]) -> Result<Vec<f32>, JsError> {
    let matrices = math::unpack(packed).map_err(to_js)?;
    math::multiply(matrices).map(to_vec).map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");
}
