//! Ground-plane sketching
//!
//! Provides:
//! - [`SketchSession`]: the ordered points clicked so far
//! - [`PolygonRing`]: an immutable closed ring made from a finished session

mod ring;

pub use ring::*;

use glam::Vec3;
use thiserror::Error;
use uuid::Uuid;

/// Minimum number of points a closed ring needs
pub const MIN_RING_POINTS: usize = 3;

/// Sketch-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    #[error("At least {MIN_RING_POINTS} points are required to create a polygon, got {count}")]
    InsufficientPoints { count: usize },

    #[error("Triangulation failed: {0}")]
    Triangulation(String),

    #[error("Invalid extrusion depth: {0}")]
    InvalidDepth(f32),
}

/// Result type for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;

/// A clicked sketch point and the preview marker shown for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPoint {
    pub position: Vec3,
    /// Marker object in the viewport, if one was created
    pub marker: Option<Uuid>,
}

/// Points accumulated while drawing, in click order
#[derive(Debug, Clone, Default)]
pub struct SketchSession {
    points: Vec<SketchPoint>,
}

impl SketchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. There is no upper bound.
    pub fn push(&mut self, position: Vec3, marker: Option<Uuid>) {
        self.points.push(SketchPoint { position, marker });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SketchPoint] {
        &self.points
    }

    /// Positions in click order
    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Markers owned by the session
    pub fn markers(&self) -> Vec<Uuid> {
        self.points.iter().filter_map(|p| p.marker).collect()
    }

    /// Drop every point, returning the markers that must be disposed
    pub fn clear(&mut self) -> Vec<Uuid> {
        let markers = self.markers();
        self.points.clear();
        markers
    }

    /// Close the session into a ring.
    ///
    /// On success the session is emptied and the markers of the consumed
    /// points are returned alongside the ring. With fewer than
    /// [`MIN_RING_POINTS`] points the session is left exactly as it was.
    pub fn complete(&mut self) -> SketchResult<(PolygonRing, Vec<Uuid>)> {
        let ring = PolygonRing::new(self.positions())?;
        let markers = self.clear();
        Ok((ring, markers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_keeps_click_order() {
        let mut session = SketchSession::new();
        let clicks = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        for p in clicks {
            session.push(p, None);
        }

        let (ring, _) = session.complete().unwrap();
        assert_eq!(ring.points(), &clicks);
        assert!(session.is_empty());
    }

    #[test]
    fn test_complete_with_two_points_keeps_session() {
        let mut session = SketchSession::new();
        let marker = Uuid::new_v4();
        session.push(Vec3::ZERO, Some(marker));
        session.push(Vec3::X, None);

        let err = session.complete().unwrap_err();
        assert_eq!(err, SketchError::InsufficientPoints { count: 2 });
        assert_eq!(session.len(), 2);
        assert_eq!(session.markers(), vec![marker]);
    }

    #[test]
    fn test_complete_returns_markers_for_disposal() {
        let mut session = SketchSession::new();
        let markers: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for (i, m) in markers.iter().enumerate() {
            session.push(Vec3::new(i as f32, 0.0, (i * i) as f32), Some(*m));
        }

        let (_, disposed) = session.complete().unwrap();
        assert_eq!(disposed, markers);
    }

    #[test]
    fn test_clear_returns_markers() {
        let mut session = SketchSession::new();
        let marker = Uuid::new_v4();
        session.push(Vec3::ZERO, Some(marker));

        assert_eq!(session.clear(), vec![marker]);
        assert!(session.is_empty());
    }
}
