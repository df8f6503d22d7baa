use glam::Vec3;
use mat4_transforms::{multiply, Camera, Matrix4, Transform, Uniforms};

fn format_matrix(matrix: &Matrix4) -> String {
    (0..4)
        .map(|row| {
            let cells: Vec<String> = (0..4)
                .map(|col| format!("{:>9.4}", matrix.get(row, col)))
                .collect();
            cells.join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    env_logger::init();

    let mut camera = Camera::default();
    camera.set_viewport(1280, 720);

    let model = Transform::new(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 45.0, 0.0),
        Vec3::splat(0.5),
    )
    .to_matrix();

    let view_proj = match camera.view_projection() {
        Ok(m) => m,
        Err(e) => {
            log::error!("Camera error: {}", e);
            return;
        }
    };

    let mvp = match multiply(&[view_proj, model]) {
        Ok(m) => m,
        Err(e) => {
            log::error!("Multiply error: {}", e);
            return;
        }
    };

    log::info!("view:\n{}", format_matrix(&camera.view_matrix()));
    log::info!("view-projection:\n{}", format_matrix(&view_proj));

    println!("model-view-projection:\n{}", format_matrix(&mvp));

    for corner in [Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)] {
        println!("{:?} -> ndc {:?}", corner, mvp.project_point(corner));
    }

    match Uniforms::new(&camera, &model) {
        Ok(uniforms) => log::info!("uniform block: {} bytes", uniforms.as_bytes().len()),
        Err(e) => log::error!("Uniform error: {}", e),
    }
}
