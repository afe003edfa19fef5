// glTF scene baking: flatten the document's node hierarchy into lit mesh
// primitives ready for GPU upload.
//
// Node transforms are applied to the vertex data up front; the renderer
// then only deals with one model matrix for the whole asset.

use anyhow::{anyhow, Result};
use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One drawable primitive: baked vertices, u32 indices, and the material's
/// base color factor (textures are not sampled; see DESIGN.md).
pub struct MeshPrimitive {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
}

/// The whole asset, flattened.
pub struct SceneMesh {
    pub primitives: Vec<MeshPrimitive>,
}

impl SceneMesh {
    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(|p| p.vertices.len()).sum()
    }
}

/// Bake the document's default scene against its resolved buffers.
///
/// `buffers` is indexed by glTF buffer index; `None` marks a buffer whose
/// fetch failed, which surfaces here as a read error for any primitive that
/// needs it.
pub fn bake_scene(doc: &gltf::Document, buffers: &[Option<Vec<u8>>]) -> Result<SceneMesh> {
    let scene = doc
        .default_scene()
        .or_else(|| doc.scenes().next())
        .ok_or_else(|| anyhow!("glTF document has no scene"))?;

    let mut mesh = SceneMesh {
        primitives: Vec::new(),
    };
    for node in scene.nodes() {
        bake_node(&node, Mat4::IDENTITY, buffers, &mut mesh)?;
    }
    if mesh.primitives.is_empty() {
        return Err(anyhow!("scene contains no triangle primitives"));
    }
    Ok(mesh)
}

fn bake_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[Option<Vec<u8>>],
    out: &mut SceneMesh,
) -> Result<()> {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;

    if let Some(gltf_mesh) = node.mesh() {
        for primitive in gltf_mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                return Err(anyhow!(
                    "unsupported primitive mode: {:?}",
                    primitive.mode()
                ));
            }
            out.primitives.push(bake_primitive(&primitive, world, buffers)?);
        }
    }
    for child in node.children() {
        bake_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn bake_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[Option<Vec<u8>>],
) -> Result<MeshPrimitive> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).and_then(|b| b.as_deref()));

    let positions: Vec<Vec3> = reader
        .read_positions()
        .ok_or_else(|| anyhow!("primitive is missing position data"))?
        .map(Vec3::from)
        .collect();

    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        // Non-indexed triangle soup: synthesize sequential indices
        None => (0..positions.len() as u32).collect(),
    };

    let normal_matrix = Mat3::from_mat4(world.inverse().transpose());
    let normals: Vec<Vec3> = match reader.read_normals() {
        Some(ns) => ns.map(Vec3::from).collect(),
        None => face_normals(&positions, &indices),
    };

    let vertices = positions
        .iter()
        .zip(normals.iter())
        .map(|(p, n)| MeshVertex {
            position: world.transform_point3(*p).to_array(),
            normal: (normal_matrix * *n).normalize_or_zero().to_array(),
        })
        .collect();

    let base_color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    Ok(MeshPrimitive {
        vertices,
        indices,
        base_color,
    })
}

/// Per-vertex normals accumulated from face cross products, for primitives
/// that ship without normal data.
fn face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| n.normalize_or(Vec3::Y))
        .collect()
}
