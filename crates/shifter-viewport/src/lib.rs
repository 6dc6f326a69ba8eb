//! Shape Shifter viewport collaborators
//!
//! Rendering is an external concern; the interaction core only talks to the
//! traits defined here.
//!
//! - [`traits::Viewport`] - picking and creation/disposal of scene objects
//! - [`traits::DragBehavior`] - attachable pointer-drag manipulation
//! - [`scene::HeadlessScene`] - in-memory viewport with ray picking
//! - [`drag::PointerDrag`] - drag behavior keyed by target identity
//!
//! # Example
//!
//! ```ignore
//! use shifter_viewport::{HeadlessScene, Viewport};
//!
//! let mut scene = HeadlessScene::new();
//! let screen = scene.screen_point(glam::Vec3::ZERO).unwrap();
//! let pick = scene.pick(screen.x, screen.y);
//! assert!(pick.hit());
//! ```

pub mod camera;
pub mod drag;
pub mod primitives;
pub mod scene;
pub mod traits;

pub use camera::Camera;
pub use drag::PointerDrag;
pub use scene::{HeadlessScene, SceneObject};
pub use traits::*;
