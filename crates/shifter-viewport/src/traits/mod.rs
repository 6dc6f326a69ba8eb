//! Collaborator traits consumed by the interaction core.

mod drag_behavior;
mod viewport;

pub use drag_behavior::*;
pub use viewport::*;
