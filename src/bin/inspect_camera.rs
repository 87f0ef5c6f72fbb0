use std::{error::Error, result::Result};

use bytemuck::{Pod, Zeroable};
use colored::Colorize;
use strum::IntoEnumIterator;

use glk_math::{Axis, Matrix4, Vector3};

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
struct CameraMatrices {
    view: Matrix4,
    proj: Matrix4,
}

fn cube_corners(half_extent: f32) -> impl Iterator<Item = Vector3> {
    (0..8).map(move |n| {
        let sign = |bit: u32| if n & bit == 0 { -half_extent } else { half_extent };
        Vector3::new(sign(1), sign(2), sign(4))
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let camera = CameraMatrices {
        view: Matrix4::look_at(
            Vector3::new(0.0, -10.0, 10.0),
            Vector3::origin(),
            Vector3::z_axis(),
        ),
        proj: Matrix4::perspective(std::f32::consts::FRAC_PI_3, 800.0 / 600.0, 1e-1, 1e2),
    };
    println!("{}\n{}\n", "view".bold(), camera.view);
    println!("{}\n{}\n", "proj".bold(), camera.proj);

    let view_proj = camera.view * camera.proj;
    let view_proj_inv = view_proj.inv()?;
    println!("{}\n{}\n", "view * proj".bold(), view_proj);
    println!(
        "Camera uniform block: {} bytes",
        bytemuck::bytes_of(&camera).len().to_string().cyan()
    );

    for corner in cube_corners(4.0) {
        let ndc = view_proj.project_point3(corner);
        let visible = [ndc.x, ndc.y, ndc.z].iter().all(|c| c.abs() <= 1.0);
        let status = if visible {
            "inside".green()
        } else {
            "outside".red()
        };
        let unprojected = view_proj_inv.project_point3(ndc);
        println!(
            "{} -> {} [{}] unprojected {}",
            corner, ndc, status, unprojected
        );
    }

    for axis in Axis::iter() {
        let header = format!("rotate {:?} by 90 degrees", axis);
        println!(
            "\n{}\n{}",
            header.bold(),
            Matrix4::rotate_about(axis, std::f32::consts::FRAC_PI_2)
        );
    }
    Ok(())
}
