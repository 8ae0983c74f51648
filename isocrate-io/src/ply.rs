//! PLY format support

use crate::{MeshReader, MeshWriter};
use isocrate_core::{Error, MeshVertex, Point3f, Result, SurfaceMesh, Vector3f, DEFAULT_VERTEX_COLOR};
use ply_rs::{
    parser::Parser,
    ply::{
        Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
        ScalarType,
    },
    writer::Writer,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

const POSITION_PROPERTIES: [&str; 3] = ["x", "y", "z"];
const NORMAL_PROPERTIES: [&str; 3] = ["nx", "ny", "nz"];
const COLOR_PROPERTIES: [&str; 4] = ["red", "green", "blue", "alpha"];

pub struct PlyReader;
pub struct PlyWriter;

impl MeshReader for PlyReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader)?;

        let mut mesh = SurfaceMesh::new();

        if let Some(vertex_element) = ply.payload.get("vertex") {
            for vertex in vertex_element {
                let [x, y, z] = extract_vector(vertex, POSITION_PROPERTIES)?;
                let color = extract_color(vertex).unwrap_or(DEFAULT_VERTEX_COLOR);

                let mut mesh_vertex = MeshVertex::new(Point3f::new(x, y, z), color);
                if let Ok([nx, ny, nz]) = extract_vector(vertex, NORMAL_PROPERTIES) {
                    mesh_vertex.normal = Vector3f::new(nx, ny, nz);
                }
                mesh.vertices.push(mesh_vertex);
            }
        }

        if let Some(face_element) = ply.payload.get("face") {
            let vertex_count = mesh.vertices.len();
            for face in face_element {
                let indices = extract_face_indices(face)?;
                if indices.len() < 3 {
                    return Err(Error::InvalidData(format!(
                        "Face with {} vertices",
                        indices.len()
                    )));
                }
                if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                    return Err(Error::InvalidData(format!(
                        "Face index {} out of range for {} vertices",
                        bad, vertex_count
                    )));
                }

                // Fan-triangulate polygons
                for k in 1..indices.len() - 1 {
                    mesh.indices
                        .extend_from_slice(&[indices[0], indices[k], indices[k + 1]]);
                }
            }
        }

        Ok(mesh)
    }
}

impl MeshWriter for PlyWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let mut ply = Ply::<DefaultElement>::new();
        ply.header.encoding = Encoding::Ascii;
        ply.header.comments.push("isocrate iso-surface".to_string());

        let mut vertex_element = ElementDef::new("vertex".to_string());
        vertex_element.count = mesh.vertex_count();
        for name in POSITION_PROPERTIES.iter().chain(NORMAL_PROPERTIES.iter()) {
            vertex_element.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::Float),
            ));
        }
        for name in COLOR_PROPERTIES {
            vertex_element.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::UChar),
            ));
        }
        ply.header.elements.add(vertex_element);

        let mut face_element = ElementDef::new("face".to_string());
        face_element.count = mesh.triangle_count();
        face_element.properties.add(PropertyDef::new(
            "vertex_indices".to_string(),
            PropertyType::List(ScalarType::UChar, ScalarType::Int),
        ));
        ply.header.elements.add(face_element);

        let vertices = mesh
            .vertices
            .iter()
            .map(|vertex| {
                let mut element = DefaultElement::new();
                let values = vertex.position.iter().chain(vertex.normal.iter());
                for (name, &value) in POSITION_PROPERTIES.iter().chain(NORMAL_PROPERTIES.iter()).zip(values) {
                    element.insert(name.to_string(), Property::Float(value));
                }
                for (name, &channel) in COLOR_PROPERTIES.iter().zip(vertex.color.iter()) {
                    element.insert(name.to_string(), Property::UChar(color_to_byte(channel)));
                }
                element
            })
            .collect();
        ply.payload.insert("vertex".to_string(), vertices);

        let faces = mesh
            .triangles()
            .map(|triangle| {
                let mut element = DefaultElement::new();
                let indices = triangle.iter().map(|&i| i as i32).collect();
                element.insert("vertex_indices".to_string(), Property::ListInt(indices));
                element
            })
            .collect();
        ply.payload.insert("face".to_string(), faces);

        let writer_instance = Writer::new();
        writer_instance.write_ply(&mut writer, &mut ply)?;
        writer.flush()?;

        Ok(())
    }
}

fn color_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Extract a property value as f32 from a PLY element
fn extract_property_value(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

fn extract_vector(element: &DefaultElement, names: [&str; 3]) -> Result<[f32; 3]> {
    Ok([
        extract_property_value(element, names[0])?,
        extract_property_value(element, names[1])?,
        extract_property_value(element, names[2])?,
    ])
}

/// Read an RGB(A) color, either as bytes or as unit floats
fn extract_color(element: &DefaultElement) -> Option<[f32; 4]> {
    let mut color = [1.0; 4];
    for (i, name) in COLOR_PROPERTIES.iter().enumerate() {
        color[i] = match element.get(*name) {
            Some(Property::UChar(val)) => *val as f32 / 255.0,
            Some(Property::Float(val)) => *val,
            None if *name == "alpha" => 1.0,
            _ => return None,
        };
    }
    Some(color)
}

/// Extract face indices from a PLY face element
fn extract_face_indices(element: &DefaultElement) -> Result<Vec<u32>> {
    match element.get("vertex_indices").or_else(|| element.get("vertex_index")) {
        Some(Property::ListInt(indices)) => indices
            .iter()
            .map(|&idx| {
                u32::try_from(idx)
                    .map_err(|_| Error::InvalidData(format!("Negative face index {}", idx)))
            })
            .collect(),
        Some(Property::ListUInt(indices)) => Ok(indices.clone()),
        _ => Err(Error::InvalidData("Face indices not found".to_string())),
    }
}
