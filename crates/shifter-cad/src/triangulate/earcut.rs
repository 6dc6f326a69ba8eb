//! Ear-clipping triangulation backed by `earcutr`

use glam::Vec2;

use super::Triangulator;
use crate::sketch::{SketchError, SketchResult};

/// Ear-clipping triangulator for simple (possibly concave) contours
#[derive(Debug, Default, Clone, Copy)]
pub struct EarcutTriangulator;

impl Triangulator for EarcutTriangulator {
    fn name(&self) -> &str {
        "earcut"
    }

    fn triangulate(&self, contour: &[Vec2]) -> SketchResult<Vec<[u32; 3]>> {
        if contour.len() < 3 {
            return Err(SketchError::Triangulation(format!(
                "contour has {} points",
                contour.len()
            )));
        }

        // Collinear contours enclose nothing
        if signed_area(contour).abs() <= f32::EPSILON {
            tracing::warn!("Contour of {} points has no area", contour.len());
            return Ok(Vec::new());
        }

        let data: Vec<f64> = contour
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect();

        let indices = earcutr::earcut(&data, &[], 2)
            .map_err(|e| SketchError::Triangulation(format!("{:?}", e)))?;

        if indices.is_empty() {
            tracing::warn!("Earcut produced no triangles for {} points", contour.len());
        }

        Ok(indices
            .chunks_exact(3)
            .map(|tri| [tri[0] as u32, tri[1] as u32, tri[2] as u32])
            .collect())
    }
}

/// Twice the signed area of a closed contour (shoelace)
fn signed_area(contour: &[Vec2]) -> f32 {
    contour
        .iter()
        .zip(contour.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum()
}
