//! Scene object definition.

use glam::{Mat4, Vec3};
use shifter_cad::ExtrudedMesh;
use shifter_core::RawVertexBuffer;
use uuid::Uuid;

use crate::traits::{Material, ObjectKind};

/// Vertex positions and triangle indices of a scene object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Local positions
    pub positions: RawVertexBuffer,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(positions: RawVertexBuffer, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<ExtrudedMesh> for MeshData {
    fn from(mesh: ExtrudedMesh) -> Self {
        Self::new(mesh.positions, mesh.indices)
    }
}

/// A renderable object held by the headless scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Unique identifier for this object.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Interaction role.
    pub kind: ObjectKind,

    /// Geometry in local space.
    pub mesh: MeshData,

    /// World position (objects are never rotated or scaled).
    pub position: Vec3,

    /// Surface appearance.
    pub material: Material,

    /// Whether picking can hit this object.
    pub pickable: bool,
}

impl SceneObject {
    /// Creates a new object at the origin.
    pub fn new(name: impl Into<String>, kind: ObjectKind, mesh: MeshData) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            mesh,
            position: Vec3::ZERO,
            material: Material::default(),
            pickable: true,
        }
    }

    /// Sets the world position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Returns the local-to-world transform.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}
