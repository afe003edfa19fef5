// Host-side tests for glTF scene baking against a tiny hand-built asset.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}

use mesh::*;

// One triangle, positions only, indexed with u16, node translated +1 in X.
const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0, "translation": [1.0, 0.0, 0.0] }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "indices": 1 }] }],
  "buffers": [{ "uri": "tri.bin", "byteLength": 42 }],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
    { "buffer": 0, "byteOffset": 36, "byteLength": 6 }
  ],
  "accessors": [
    {
      "bufferView": 0,
      "componentType": 5126,
      "count": 3,
      "type": "VEC3",
      "min": [0.0, 0.0, 0.0],
      "max": [1.0, 1.0, 0.0]
    },
    { "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }
  ]
}"#;

fn triangle_buffer() -> Vec<u8> {
    let positions: [f32; 9] = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    let indices: [u16; 3] = [0, 1, 2];
    let mut bytes = Vec::new();
    bytes.extend_from_slice(bytemuck::cast_slice(&positions));
    bytes.extend_from_slice(bytemuck::cast_slice(&indices));
    bytes
}

fn parse_document() -> gltf::Document {
    gltf::Gltf::from_slice(TRIANGLE_GLTF.as_bytes())
        .expect("test asset parses")
        .document
}

#[test]
fn bakes_node_transforms_into_vertices() {
    let doc = parse_document();
    let baked = bake_scene(&doc, &[Some(triangle_buffer())]).expect("bake succeeds");

    assert_eq!(baked.primitives.len(), 1);
    let prim = &baked.primitives[0];
    assert_eq!(prim.indices, vec![0, 1, 2]);
    assert_eq!(baked.vertex_count(), 3);

    // Node translation (+1 in X) applied to every position
    assert_eq!(prim.vertices[0].position, [1.0, 0.0, 0.0]);
    assert_eq!(prim.vertices[1].position, [2.0, 0.0, 0.0]);
    assert_eq!(prim.vertices[2].position, [1.0, 1.0, 0.0]);
}

#[test]
fn regenerates_missing_normals_from_faces() {
    let doc = parse_document();
    let baked = bake_scene(&doc, &[Some(triangle_buffer())]).expect("bake succeeds");

    // CCW triangle in the XY plane faces +Z
    for v in &baked.primitives[0].vertices {
        assert!((v.normal[0]).abs() < 1e-6);
        assert!((v.normal[1]).abs() < 1e-6);
        assert!((v.normal[2] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn default_material_is_opaque_white() {
    let doc = parse_document();
    let baked = bake_scene(&doc, &[Some(triangle_buffer())]).expect("bake succeeds");
    assert_eq!(baked.primitives[0].base_color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn missing_buffer_is_a_bake_error() {
    let doc = parse_document();
    assert!(bake_scene(&doc, &[None]).is_err());
}
