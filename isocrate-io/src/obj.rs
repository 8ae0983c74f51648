//! OBJ format support

use crate::MeshWriter;
use isocrate_core::{Result, SurfaceMesh};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes Wavefront OBJ with positions, texture coordinates and normals.
///
/// Vertex `i` of the mesh provides `v`, `vt` and `vn` entry `i + 1`, so every
/// face corner is written as `a/a/a`.
pub struct ObjWriter;

impl ObjWriter {
    pub fn write_to<W: Write>(mesh: &SurfaceMesh, out: &mut W) -> Result<()> {
        writeln!(out, "# isocrate iso-surface")?;
        writeln!(out, "# {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count())?;

        for vertex in &mesh.vertices {
            let p = vertex.position;
            writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for vertex in &mesh.vertices {
            let t = vertex.texcoord;
            writeln!(out, "vt {} {}", t.x, t.y)?;
        }
        for vertex in &mesh.vertices {
            let n = vertex.normal;
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }

        Ok(())
    }
}

impl MeshWriter for ObjWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(mesh, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
