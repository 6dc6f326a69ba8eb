//! Interaction state
//!
//! Everything the pointer handlers mutate lives in [`InteractionState`]:
//! the mode flags and the four components that react to them.

mod mode_state;
mod move_controller;
mod polygon_builder;
mod solid_generator;
mod vertex_edit;

pub use mode_state::ModeState;
pub use move_controller::MoveController;
pub use polygon_builder::PolygonBuilder;
pub use solid_generator::{ExtrusionState, RingEntry, SolidGenerator};
pub use vertex_edit::{EditPhase, VertexEditEngine, VertexHandle};

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shifter_viewport::PickResult;
use uuid::Uuid;

use crate::config::InputConfig;

/// Interaction modes, one per toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Draw,
    Extrude,
    Move,
    EditVertices,
}

impl Mode {
    /// All modes in pointer-dispatch order
    pub const ALL: [Mode; 4] = [Mode::Draw, Mode::Extrude, Mode::Move, Mode::EditVertices];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Extrude => "Extrude",
            Mode::Move => "Move",
            Mode::EditVertices => "Move Vertices",
        }
    }
}

/// What a pointer button means to the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Add a sketch point, extrude, pick a target
    Primary,
    /// Close the sketch
    Secondary,
    Other,
}

impl PointerAction {
    pub fn from_button(button: u16, input: &InputConfig) -> Self {
        if button == input.primary_button {
            PointerAction::Primary
        } else if button == input.secondary_button {
            PointerAction::Secondary
        } else {
            PointerAction::Other
        }
    }
}

/// A pointer press together with what was under it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub button: u16,
    pub pick: PickResult,
}

impl PointerDown {
    pub fn new(button: u16, pick: PickResult) -> Self {
        Self { button, pick }
    }
}

/// Events fed into [`crate::actions::handle_action`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppAction {
    /// A toolbar button was pressed
    ToggleMode(Mode),
    /// A pointer button went down over the viewport
    PointerDown(PointerDown),
    /// A drag tick moved the pointer by `delta` (world space) over `target`
    DragDelta { target: Uuid, delta: Vec3 },
}

/// All mutable interaction state
#[derive(Debug, Default)]
pub struct InteractionState {
    pub modes: ModeState,
    pub sketch: PolygonBuilder,
    pub solids: SolidGenerator,
    pub mover: MoveController,
    pub vertex_edit: VertexEditEngine,
    /// Last message for the user, e.g. why a sketch could not be closed
    pub status_message: Option<String>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.modes.is_active(mode)
    }
}

/// Interaction state shared between the driver and collaborator callbacks
pub type SharedInteractionState = Arc<Mutex<InteractionState>>;

/// Create a new shared interaction state
pub fn create_shared_state() -> SharedInteractionState {
    Arc::new(Mutex::new(InteractionState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        let input = InputConfig::default();
        assert_eq!(PointerAction::from_button(0, &input), PointerAction::Primary);
        assert_eq!(PointerAction::from_button(2, &input), PointerAction::Secondary);
        assert_eq!(PointerAction::from_button(1, &input), PointerAction::Other);
    }

    #[test]
    fn test_new_state_has_no_active_mode() {
        let state = InteractionState::new();
        assert!(Mode::ALL.iter().all(|m| !state.is_active(*m)));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::EditVertices.label(), "Move Vertices");
        assert_eq!(Mode::ALL[0], Mode::Draw);
    }
}
