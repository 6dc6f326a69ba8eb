//! Prism extrusion
//!
//! Builds the renderable meshes for a ring: the flat preview shown after a
//! sketch is closed, and the vertical prism it turns into.
//!
//! Prism vertex layout for a ring of `n` points:
//! - `0..n`: top cap at local `y = 0`
//! - `n..2n`: bottom cap at local `y = -depth`
//! - `2n..6n`: four vertices per side quad (`top_i, top_j, bottom_i, bottom_j`)
//!
//! Every corner is therefore stored three times, once per adjacent face, so
//! faces can carry their own normals.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use shifter_core::{RawVertexBuffer, UP};

use crate::sketch::{PolygonRing, SketchError, SketchResult};
use crate::triangulate::Triangulator;

/// Default extrusion depth in scene units
pub const DEFAULT_EXTRUDE_DEPTH: f32 = 2.0;

/// A generated mesh with per-vertex normals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtrudedMesh {
    /// Local vertex positions, one per face corner
    pub positions: RawVertexBuffer,
    /// Per-vertex normals (same length as positions)
    pub normals: Vec<Vec3>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
}

impl ExtrudedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner positions of one triangle
    pub fn triangle(&self, triangle: usize) -> Option<[Vec3; 3]> {
        let tri = self.indices.get(triangle * 3..triangle * 3 + 3)?;
        Some([
            self.positions.get(tri[0] as usize)?,
            self.positions.get(tri[1] as usize)?,
            self.positions.get(tri[2] as usize)?,
        ])
    }

    /// Appends a triangle, flipping it if its normal faces away from `facing`
    fn push_oriented(&mut self, tri: [u32; 3], facing: Vec3) {
        let p = |i: u32| self.positions.positions()[i as usize];
        let normal = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        if normal.dot(facing) < 0.0 {
            self.indices.extend_from_slice(&[tri[0], tri[2], tri[1]]);
        } else {
            self.indices.extend_from_slice(&tri);
        }
    }
}

/// Flat polygon at local `y = 0`, facing up
pub fn flat_polygon(
    ring: &PolygonRing,
    triangulator: &dyn Triangulator,
) -> SketchResult<ExtrudedMesh> {
    let cap = triangulator.triangulate(&ring.footprint())?;

    let mut mesh = ExtrudedMesh {
        positions: RawVertexBuffer::new(ring.points().iter().map(|p| cap_point(*p, 0.0)).collect()),
        normals: vec![UP; ring.len()],
        indices: Vec::with_capacity(cap.len() * 3),
    };
    for tri in cap {
        mesh.push_oriented(tri, UP);
    }
    Ok(mesh)
}

/// Sweep a ring downward by `depth` into a closed prism.
///
/// The top cap lies at local `y = 0` and the bottom cap at `y = -depth`;
/// callers place the solid with a world translation.
pub fn extrude_prism(
    ring: &PolygonRing,
    depth: f32,
    triangulator: &dyn Triangulator,
) -> SketchResult<ExtrudedMesh> {
    if !(depth.is_finite() && depth > 0.0) {
        return Err(SketchError::InvalidDepth(depth));
    }

    let n = ring.len();
    let cap = triangulator.triangulate(&ring.footprint())?;
    let top: Vec<Vec3> = ring.points().iter().map(|p| cap_point(*p, 0.0)).collect();
    let bottom: Vec<Vec3> = ring.points().iter().map(|p| cap_point(*p, -depth)).collect();

    let mut positions = Vec::with_capacity(6 * n);
    let mut normals = Vec::with_capacity(6 * n);
    positions.extend_from_slice(&top);
    normals.extend(std::iter::repeat_n(UP, n));
    positions.extend_from_slice(&bottom);
    normals.extend(std::iter::repeat_n(-UP, n));

    // Outward side normal is edge x up for counter-clockwise rings
    let winding = if ring.signed_area2() >= 0.0 { 1.0 } else { -1.0 };
    let mut side_normals = Vec::with_capacity(n);
    for (i, j) in ring.edges() {
        let outward = ((top[j] - top[i]).cross(UP) * winding).normalize_or_zero();
        positions.extend_from_slice(&[top[i], top[j], bottom[i], bottom[j]]);
        normals.extend(std::iter::repeat_n(outward, 4));
        side_normals.push(outward);
    }

    let mut mesh = ExtrudedMesh {
        positions: RawVertexBuffer::new(positions),
        normals,
        indices: Vec::with_capacity((cap.len() * 2 + n * 2) * 3),
    };

    let n32 = n as u32;
    for tri in &cap {
        mesh.push_oriented(*tri, UP);
    }
    for tri in &cap {
        mesh.push_oriented(tri.map(|i| i + n32), -UP);
    }
    for (edge, outward) in side_normals.into_iter().enumerate() {
        let base = 2 * n32 + 4 * edge as u32;
        mesh.push_oriented([base, base + 2, base + 1], outward);
        mesh.push_oriented([base + 1, base + 2, base + 3], outward);
    }

    tracing::debug!(
        "Extruded ring {} ({} points) to depth {}: {} vertices, {} triangles",
        ring.id,
        n,
        depth,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Drop a ring point onto the cap plane at height `y`
fn cap_point(point: Vec3, y: f32) -> Vec3 {
    Vec3::new(point.x, y, point.z)
}
