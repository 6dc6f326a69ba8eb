//! Ray picking against scene meshes

use glam::{Mat4, Vec3};

use super::MeshData;

/// Closest hit of a ray against one mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshHit {
    /// Distance along the ray
    pub distance: f32,
    /// Index of the hit triangle
    pub face_id: usize,
}

/// Intersect a ray with a transformed mesh.
///
/// Tests the world-space AABB first, then every triangle.
pub fn ray_mesh_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    mesh: &MeshData,
    transform: &Mat4,
) -> Option<MeshHit> {
    let world = mesh.positions.world_positions(transform);
    let (world_min, world_max) = bounds(&world)?;

    // Early rejection; pad flat meshes so the slab test stays meaningful
    let pad = Vec3::splat(1e-4);
    ray_aabb_intersection(ray_origin, ray_dir, world_min - pad, world_max + pad)?;

    let mut closest: Option<MeshHit> = None;
    for (face_id, chunk) in mesh.indices.chunks_exact(3).enumerate() {
        let (Some(&v0), Some(&v1), Some(&v2)) = (
            world.get(chunk[0] as usize),
            world.get(chunk[1] as usize),
            world.get(chunk[2] as usize),
        ) else {
            continue;
        };

        if let Some(t) = ray_triangle_intersection(ray_origin, ray_dir, v0, v1, v2) {
            if closest.is_none_or(|hit| t < hit.distance) {
                closest = Some(MeshHit {
                    distance: t,
                    face_id,
                });
            }
        }
    }

    closest
}

fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

/// Ray-AABB (Axis-Aligned Bounding Box) intersection test
/// Returns the distance to intersection if hit, None otherwise
fn ray_aabb_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    bbox_min: Vec3,
    bbox_max: Vec3,
) -> Option<f32> {
    let inv_dir = ray_dir.recip();

    let t1 = (bbox_min - ray_origin) * inv_dir;
    let t2 = (bbox_max - ray_origin) * inv_dir;

    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Ray-triangle intersection using Möller–Trumbore algorithm
/// Returns the distance to intersection if hit, None otherwise
fn ray_triangle_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    if a.abs() < EPSILON {
        return None; // Ray is parallel to triangle
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    if t > EPSILON { Some(t) } else { None }
}
