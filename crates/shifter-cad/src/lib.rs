//! Sketch and extrusion layer
//!
//! Turns clicked ground points into closed polygon rings and rings into
//! prism meshes:
//! - [`sketch`]: in-progress sketch sessions and finished rings
//! - [`extrude`]: flat polygon and prism mesh builders
//! - [`triangulate`]: cap triangulation behind the [`Triangulator`] trait

pub mod extrude;
pub mod sketch;
pub mod triangulate;

pub use extrude::*;
pub use sketch::*;
pub use triangulate::*;
