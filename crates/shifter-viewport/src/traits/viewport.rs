//! Viewport trait definition.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use shifter_cad::{PolygonRing, SketchError};
use shifter_core::{MeshError, RawVertexBuffer};
use thiserror::Error;
use uuid::Uuid;

/// Error type for viewport operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("Object not found: {0}")]
    ObjectNotFound(Uuid),

    #[error("Geometry error: {0}")]
    Sketch(#[from] SketchError),

    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

/// Result type for viewport operations
pub type ViewportResult<T> = Result<T, ViewportError>;

/// What a scene object is, as far as interaction is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// The ground plane sketches are drawn on
    Ground,
    /// Sphere marking an uncommitted sketch point
    PreviewMarker,
    /// Flat polygon shown for a closed, not yet extruded ring
    Polygon,
    /// Extruded prism
    Solid,
    /// Draggable sphere standing for one logical vertex
    VertexHandle,
}

impl ObjectKind {
    /// Objects the move tool can pick up
    pub fn is_movable(&self) -> bool {
        matches!(self, ObjectKind::Solid | ObjectKind::Polygon)
    }

    /// Objects whose vertices can be edited
    pub fn is_editable(&self) -> bool {
        matches!(self, ObjectKind::Solid)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Ground => "ground",
            ObjectKind::PreviewMarker => "marker",
            ObjectKind::Polygon => "polygon",
            ObjectKind::Solid => "solid",
            ObjectKind::VertexHandle => "vertexcontrol",
        }
    }
}

/// Identity of a picked object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedObject {
    pub id: Uuid,
    pub kind: ObjectKind,
}

/// Result of a screen-space pick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickResult {
    /// World-space hit position
    pub point: Option<Vec3>,
    /// Index of the hit triangle on the picked object
    pub face_id: Option<usize>,
    /// The object that was hit
    pub object: Option<PickedObject>,
}

impl PickResult {
    /// A pick that hit nothing
    pub fn miss() -> Self {
        Self::default()
    }

    /// A pick that hit `object` at `point`
    pub fn hit_at(point: Vec3, face_id: usize, id: Uuid, kind: ObjectKind) -> Self {
        Self {
            point: Some(point),
            face_id: Some(face_id),
            object: Some(PickedObject { id, kind }),
        }
    }

    pub fn hit(&self) -> bool {
        self.face_id.is_some()
    }

    /// The picked object, unless the pick missed or landed on the ground
    pub fn non_ground(&self) -> Option<PickedObject> {
        self.object.filter(|o| o.kind != ObjectKind::Ground)
    }

    pub fn kind(&self) -> Option<ObjectKind> {
        self.object.map(|o| o.kind)
    }
}

/// Surface appearance of a scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Base color (RGBA)
    pub color: [f32; 4],
    /// Render the color as emissive (unlit)
    pub emissive: bool,
    /// Disable back-face culling and light both sides
    pub two_sided: bool,
}

impl Material {
    pub fn new(name: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            color,
            emissive: false,
            two_sided: false,
        }
    }

    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_two_sided(mut self, two_sided: bool) -> Self {
        self.two_sided = two_sided;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default", [0.8, 0.8, 0.8, 1.0])
    }
}

/// The 3D viewport the interaction core drives.
///
/// Implementations own every renderable object. The core only holds object
/// ids and must treat an id as dangling once [`Viewport::dispose`] was called
/// on it.
pub trait Viewport {
    /// Pick the closest object under a screen position
    fn pick(&self, screen_x: f32, screen_y: f32) -> PickResult;

    /// Create a small sphere marking a sketch point
    fn create_preview_marker(&mut self, at: Vec3, diameter: f32) -> Uuid;

    /// Create a draggable sphere for a vertex group
    fn create_vertex_handle(&mut self, at: Vec3, diameter: f32) -> Uuid;

    /// Build the flat polygon preview for a ring
    fn build_polygon(&mut self, ring: &PolygonRing) -> ViewportResult<Uuid>;

    /// Build a prism from a ring. The solid is created at the origin.
    fn extrude(&mut self, ring: &PolygonRing, depth: f32) -> ViewportResult<Uuid>;

    /// Destroy an object. Returns false if it did not exist.
    fn dispose(&mut self, id: Uuid) -> bool;

    /// Check whether an object is still alive
    fn exists(&self, id: Uuid) -> bool;

    /// Kind of a live object
    fn kind(&self, id: Uuid) -> Option<ObjectKind>;

    /// Local per-corner vertex positions of a mesh object
    fn raw_vertex_buffer(&self, id: Uuid) -> ViewportResult<RawVertexBuffer>;

    /// Replace the local vertex positions of a mesh object in one batch
    fn set_raw_vertex_buffer(&mut self, id: Uuid, buffer: &RawVertexBuffer)
    -> ViewportResult<()>;

    /// Local-to-world transform of an object
    fn world_transform(&self, id: Uuid) -> ViewportResult<Mat4>;

    /// Set an object's world position
    fn set_position(&mut self, id: Uuid, position: Vec3) -> ViewportResult<()>;

    /// Move an object by a world-space offset
    fn translate(&mut self, id: Uuid, delta: Vec3) -> ViewportResult<()>;

    /// Apply a material to an object
    fn set_material(&mut self, id: Uuid, material: Material) -> ViewportResult<()>;
}
