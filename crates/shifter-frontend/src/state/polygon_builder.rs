//! Polygon builder
//!
//! Collects clicked ground points while drawing and closes them into rings.

use glam::Vec3;
use shifter_cad::{PolygonRing, SketchResult, SketchSession};
use shifter_viewport::Viewport;
use uuid::Uuid;

/// Owns the in-progress sketch and its preview markers
#[derive(Debug, Default)]
pub struct PolygonBuilder {
    session: SketchSession,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    /// Number of uncommitted points
    pub fn len(&self) -> usize {
        self.session.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    /// Append a point and show a marker for it
    pub fn add_point(
        &mut self,
        viewport: &mut dyn Viewport,
        point: Vec3,
        marker_diameter: f32,
    ) -> Uuid {
        let marker = viewport.create_preview_marker(point, marker_diameter);
        self.session.push(point, Some(marker));
        tracing::debug!(
            "Sketch point {} at ({:.3}, {:.3}, {:.3})",
            self.session.len(),
            point.x,
            point.y,
            point.z
        );
        marker
    }

    /// Close the sketch into a ring and dispose the point markers.
    ///
    /// With fewer than three points nothing changes and the error is
    /// returned for the caller to report.
    pub fn complete_ring(&mut self, viewport: &mut dyn Viewport) -> SketchResult<PolygonRing> {
        let (ring, markers) = self.session.complete()?;
        dispose_markers(viewport, &markers);
        tracing::info!("Closed ring {} with {} points", ring.id, ring.len());
        Ok(ring)
    }

    /// Drop all uncommitted points, returning how many were discarded
    pub fn discard(&mut self, viewport: &mut dyn Viewport) -> usize {
        let count = self.session.len();
        let markers = self.session.clear();
        dispose_markers(viewport, &markers);
        if count > 0 {
            tracing::debug!("Discarded {} sketch points", count);
        }
        count
    }
}

fn dispose_markers(viewport: &mut dyn Viewport, markers: &[Uuid]) {
    for marker in markers {
        let disposed = viewport.dispose(*marker);
        debug_assert!(disposed, "sketch marker {marker} was already disposed");
        if !disposed {
            tracing::warn!("Sketch marker {} was already disposed", marker);
        }
    }
}
