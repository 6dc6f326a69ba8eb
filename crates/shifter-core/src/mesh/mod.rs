//! Raw vertex buffers and vertex grouping

mod grouping;

pub use grouping::{VertexGroup, VertexGroups, VertexKey, group_vertices};

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Mesh-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("Vertex index {index} out of range for buffer of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for mesh operations
pub type MeshResult<T> = Result<T, MeshError>;

/// Per-corner vertex positions of a solid, in local (model) space.
///
/// Multi-face solids duplicate a corner once per adjacent face, so the same
/// position usually appears several times. The buffer length is fixed at
/// creation: only coordinate values change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVertexBuffer {
    positions: Vec<Vec3>,
}

impl RawVertexBuffer {
    /// Wrap a list of local positions
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Build from flat `[x, y, z]` triples
    pub fn from_arrays(vertices: &[[f32; 3]]) -> Self {
        Self::new(vertices.iter().copied().map(Vec3::from).collect())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Local position of a raw vertex
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    /// All local positions in buffer order
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as flat arrays (for renderers that take `[f32; 3]`)
    pub fn to_arrays(&self) -> Vec<[f32; 3]> {
        self.positions.iter().map(|p| p.to_array()).collect()
    }

    /// Positions transformed to world space
    pub fn world_positions(&self, transform: &Mat4) -> Vec<Vec3> {
        self.positions
            .iter()
            .map(|p| transform.transform_point3(*p))
            .collect()
    }

    /// Add `delta` to every listed vertex.
    ///
    /// All indices are validated before anything is written, so a bad index
    /// leaves the buffer untouched.
    pub fn apply_delta(&mut self, indices: &[usize], delta: Vec3) -> MeshResult<()> {
        let len = self.positions.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(MeshError::IndexOutOfRange { index, len });
        }

        for &index in indices {
            self.positions[index] += delta;
        }
        Ok(())
    }

    /// Replace every position at once. The length must not change.
    pub fn overwrite(&mut self, positions: &[Vec3]) -> MeshResult<()> {
        if positions.len() != self.positions.len() {
            return Err(MeshError::LengthMismatch {
                expected: self.positions.len(),
                actual: positions.len(),
            });
        }
        self.positions.copy_from_slice(positions);
        Ok(())
    }
}

impl From<Vec<Vec3>> for RawVertexBuffer {
    fn from(positions: Vec<Vec3>) -> Self {
        Self::new(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> RawVertexBuffer {
        RawVertexBuffer::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_apply_delta_moves_only_listed_vertices() {
        let mut buf = buffer();
        buf.apply_delta(&[0, 2], Vec3::new(0.5, 1.0, 0.0)).unwrap();

        assert_eq!(buf.get(0), Some(Vec3::new(0.5, 1.0, 0.0)));
        assert_eq!(buf.get(1), Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(buf.get(2), Some(Vec3::new(0.5, 1.0, 0.0)));
    }

    #[test]
    fn test_apply_delta_rejects_bad_index_without_writing() {
        let mut buf = buffer();
        let err = buf.apply_delta(&[0, 7], Vec3::X).unwrap_err();

        assert_eq!(err, MeshError::IndexOutOfRange { index: 7, len: 3 });
        assert_eq!(buf, buffer());
    }

    #[test]
    fn test_overwrite_keeps_length_fixed() {
        let mut buf = buffer();
        assert!(buf.overwrite(&[Vec3::ZERO]).is_err());
        assert!(buf.overwrite(&[Vec3::ONE; 3]).is_ok());
        assert!(buf.positions().iter().all(|p| *p == Vec3::ONE));
    }

    #[test]
    fn test_world_positions_apply_transform() {
        let buf = buffer();
        let world = buf.world_positions(&Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)));
        assert_eq!(world[1], Vec3::new(1.0, 2.0, 0.0));
    }
}
