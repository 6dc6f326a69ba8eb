//! Closed polygon rings

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MIN_RING_POINTS, SketchError, SketchResult};

/// A closed, ordered ring of ground points.
///
/// The closing edge from the last point back to the first is implicit.
/// Points keep their click order; duplicates and concave shapes are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonRing {
    /// Unique identifier
    pub id: Uuid,
    points: Vec<Vec3>,
}

impl PolygonRing {
    /// Create a ring from at least three points
    pub fn new(points: Vec<Vec3>) -> SketchResult<Self> {
        if points.len() < MIN_RING_POINTS {
            return Err(SketchError::InsufficientPoints {
                count: points.len(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            points,
        })
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a ring has at least three points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Footprint on the ground plane as (x, z) pairs
    pub fn footprint(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| Vec2::new(p.x, p.z)).collect()
    }

    /// Edges as (start, end) index pairs, closing edge included
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, (i + 1) % n))
    }

    /// Twice the footprint area, signed by winding about the up axis.
    ///
    /// Positive when the ring turns counter-clockwise seen from above
    /// (right-hand rule around +Y).
    pub fn signed_area2(&self) -> f32 {
        self.edges()
            .map(|(i, j)| {
                let (a, b) = (self.points[i], self.points[j]);
                (a.z - b.z) * (a.x + b.x)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PolygonRing {
        PolygonRing::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_ring_requires_three_points() {
        let err = PolygonRing::new(vec![Vec3::ZERO, Vec3::X]).unwrap_err();
        assert_eq!(err, SketchError::InsufficientPoints { count: 2 });
    }

    #[test]
    fn test_edges_wrap_around() {
        let edges: Vec<_> = square().edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_signed_area_orientation() {
        let ring = square();
        let area = ring.signed_area2();
        approx::assert_relative_eq!(area, 2.0);

        let reversed = PolygonRing::new(ring.points().iter().rev().copied().collect()).unwrap();
        approx::assert_relative_eq!(reversed.signed_area2(), -area);
    }

    #[test]
    fn test_footprint_uses_ground_axes() {
        let ring = PolygonRing::new(vec![
            Vec3::new(1.0, 5.0, 2.0),
            Vec3::new(3.0, 5.0, 4.0),
            Vec3::new(5.0, 5.0, 0.0),
        ])
        .unwrap();
        assert_eq!(ring.footprint()[0], Vec2::new(1.0, 2.0));
    }
}
