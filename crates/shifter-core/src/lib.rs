//! Shape Shifter core types
//!
//! Geometry primitives shared by the sketching, extrusion and vertex editing
//! layers:
//! - [`Point3`] coordinates
//! - [`RawVertexBuffer`] per-corner vertex storage of a solid
//! - [`VertexGroups`] exact-position merging of duplicated corners

pub mod mesh;

pub use mesh::*;

/// A 3D coordinate used for sketch points and vertex positions.
pub type Point3 = glam::Vec3;

/// World up axis. Sketches lie on the plane orthogonal to it.
pub const UP: glam::Vec3 = glam::Vec3::Y;
