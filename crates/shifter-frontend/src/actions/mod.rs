//! Action handling
//!
//! Every UI or viewport event arrives as an [`AppAction`] and is applied to
//! the shared [`InteractionState`](crate::state::InteractionState) here.

mod drag;
mod modes;
mod pointer;

pub use drag::handle_drag_delta;
pub use modes::handle_toggle;
pub use pointer::handle_pointer_down;

use shifter_viewport::{DragBehavior, Viewport};

use crate::config::AppConfig;
use crate::state::{AppAction, Mode, SharedInteractionState};
use crate::ui::UiToggle;

/// Collaborators an action may touch
pub struct ActionContext<'a> {
    pub state: SharedInteractionState,
    pub viewport: &'a mut dyn Viewport,
    /// Drag behavior shared by movable objects
    pub move_drag: &'a mut dyn DragBehavior,
    /// Drag behavior shared by vertex handles
    pub handle_drag: &'a mut dyn DragBehavior,
    pub toolbar: &'a mut dyn UiToggle,
    pub config: &'a AppConfig,
}

/// Which mode handlers reacted to an action, in the order they ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerOutcome {
    pub handled: Vec<Mode>,
}

impl PointerOutcome {
    pub fn is_handled(&self) -> bool {
        !self.handled.is_empty()
    }

    pub fn handled_by(&self, mode: Mode) -> bool {
        self.handled.contains(&mode)
    }
}

/// Apply one action
pub fn handle_action(action: AppAction, ctx: &mut ActionContext) -> PointerOutcome {
    let shared = ctx.state.clone();
    let mut state = shared.lock();

    match action {
        AppAction::ToggleMode(mode) => {
            handle_toggle(&mut state, mode, ctx);
            PointerOutcome {
                handled: vec![mode],
            }
        }
        AppAction::PointerDown(down) => handle_pointer_down(&mut state, down, ctx),
        AppAction::DragDelta { target, delta } => handle_drag_delta(&mut state, target, delta, ctx),
    }
}
