//! Minimal walkthrough: sample a sphere, extract it, inspect the mesh

use anyhow::Result;
use isocrate_core::Point3f;
use isocrate_extraction::fields::sphere_volume;
use isocrate_extraction::marching_tetrahedra;

fn main() -> Result<()> {
    env_logger::init();

    // Signed distance, negative inside
    let volume = sphere_volume([32, 32, 32], Point3f::new(0.5, 0.5, 0.5), 0.4);
    let mesh = marching_tetrahedra(&volume, 0.0)?;

    println!("Sphere iso-surface");
    println!("  - Vertices:  {}", mesh.vertex_count());
    println!("  - Triangles: {}", mesh.triangle_count());

    let center = Point3f::new(0.5, 0.5, 0.5);
    let (sum, max_error) = mesh.vertices.iter().fold((0.0f32, 0.0f32), |(sum, max), v| {
        let error = ((v.position - center).norm() - 0.4).abs();
        (sum + error, max.max(error))
    });
    if !mesh.is_empty() {
        println!(
            "  - Radius error: mean {:.5}, max {:.5}",
            sum / mesh.vertex_count() as f32,
            max_error
        );
    }

    let outward = mesh
        .vertices
        .iter()
        .filter(|v| v.normal.dot(&(v.position - center)) > 0.0)
        .count();
    println!("  - Outward normals: {}/{}", outward, mesh.vertex_count());

    Ok(())
}
