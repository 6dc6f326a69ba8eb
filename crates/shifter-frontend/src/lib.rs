//! Shape Shifter interaction core
//!
//! Turns pointer events into sketching, extrusion, moving and vertex
//! editing. All state lives in an explicit [`state::InteractionState`] that
//! is handed to the action handlers together with the viewport collaborators
//! on every event.

pub mod actions;
pub mod config;
pub mod session;
pub mod state;
pub mod ui;

pub use actions::{ActionContext, PointerOutcome, handle_action};
pub use config::{AppConfig, ConfigManager, SharedConfig};
pub use session::{ScriptError, ScriptStep, Session, SessionSummary, load_script};
pub use state::{
    AppAction, InteractionState, Mode, PointerAction, PointerDown, SharedInteractionState,
};
pub use ui::{Toolbar, UiToggle};
