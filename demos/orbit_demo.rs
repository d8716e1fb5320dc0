//! Example walking a camera around an orbit
//!
//! Loads a camera from an inline TOML config, orbits it around the origin in
//! 30 degree steps and prints where it ends up each time.
//! Run with `RUST_LOG=debug` to see the camera's own logging.

use hearth_orient::{
    camera::{
        camera_position, camera_view_direction, init_camera_from_config, load_camera_config,
        log_camera_context, move_along, orbit_about_axis, rotate, disable_focus,
    },
    math::{quaternion_from_axis_angle, quaternion_to_euler_angles, vector},
};

const CONFIG: &str = r#"
initial_position = [5.0, 0.0, 0.0]
initial_focus = [0.0, 0.0, 0.0]
focus_enabled = true
"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Quaternion Camera Orbit Example");
    println!("===============================");

    let config = load_camera_config(CONFIG)?;
    let mut camera = init_camera_from_config(&config)?;

    let centroid = vector(0.0, 0.0, 0.0);
    let up = vector(0.0, 1.0, 0.0);
    let step = quaternion_from_axis_angle(&up, 30.0f32.to_radians())?;

    for i in 1..=12 {
        camera = orbit_about_axis(&camera, &centroid, &up, &step)?;
        let p = camera_position(&camera);
        let d = camera_view_direction(&camera);
        println!(
            "step {:2}: position ({:6.2}, {:6.2}, {:6.2})  looking ({:5.2}, {:5.2}, {:5.2})",
            i, p.x, p.y, p.z, d.x, d.y, d.z
        );
    }

    // Free-look: take over orientation explicitly and climb
    camera = disable_focus(&camera, &camera.rotation)?;
    camera = rotate(&camera, 10.0, 0.0, 45.0)?;
    camera = move_along(&camera, &up, 2.0)?;
    log_camera_context(&camera);

    let angles = quaternion_to_euler_angles(&camera.rotation);
    println!(
        "free-look: pitch {:.1}  roll {:.1}  yaw {:.1}",
        angles.pitch, angles.roll, angles.yaw
    );

    Ok(())
}
