//! Cap triangulation
//!
//! Ring rendering needs triangles; the sketch layer only knows an ordered
//! contour. Implementations of [`Triangulator`] bridge the two.

mod earcut;

pub use earcut::EarcutTriangulator;

use glam::Vec2;

use crate::sketch::SketchResult;

/// Triangulates a simple polygon contour.
///
/// Returned triangles index into the input contour. Winding of the returned
/// triangles is unspecified; callers orient them as needed.
pub trait Triangulator: Send + Sync {
    /// Get the name of this triangulator
    fn name(&self) -> &str;

    /// Triangulate a closed contour (closing edge implicit)
    fn triangulate(&self, contour: &[Vec2]) -> SketchResult<Vec<[u32; 3]>>;
}

/// Get the default triangulator
pub fn default_triangulator() -> Box<dyn Triangulator> {
    Box::new(EarcutTriangulator)
}
