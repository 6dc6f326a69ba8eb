//! Built-in primitive meshes (ground, spheres).

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use shifter_core::RawVertexBuffer;

use crate::scene::MeshData;

const SPHERE_SEGMENTS: u32 = 12;
const SPHERE_RINGS: u32 = 8;

/// Square ground plane centered at the origin, facing up
pub fn ground(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width / 2.0, height / 2.0);
    MeshData::new(
        RawVertexBuffer::new(vec![
            Vec3::new(-hw, 0.0, -hh),
            Vec3::new(hw, 0.0, -hh),
            Vec3::new(hw, 0.0, hh),
            Vec3::new(-hw, 0.0, hh),
        ]),
        vec![0, 2, 1, 0, 3, 2],
    )
}

/// UV sphere centered at the local origin
pub fn sphere(diameter: f32) -> MeshData {
    let radius = diameter / 2.0;
    let mut positions = Vec::with_capacity(((SPHERE_RINGS + 1) * (SPHERE_SEGMENTS + 1)) as usize);

    for ring in 0..=SPHERE_RINGS {
        let phi = PI * ring as f32 / SPHERE_RINGS as f32;
        for segment in 0..=SPHERE_SEGMENTS {
            let theta = TAU * segment as f32 / SPHERE_SEGMENTS as f32;
            positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    let stride = SPHERE_SEGMENTS + 1;
    let mut indices = Vec::with_capacity((SPHERE_RINGS * SPHERE_SEGMENTS * 6) as usize);
    for ring in 0..SPHERE_RINGS {
        for segment in 0..SPHERE_SEGMENTS {
            let a = ring * stride + segment;
            let b = a + stride;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }

    MeshData::new(RawVertexBuffer::new(positions), indices)
}
