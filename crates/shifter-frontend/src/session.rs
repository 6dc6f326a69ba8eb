//! Headless sessions
//!
//! Drives the interaction core against a [`HeadlessScene`] from a list of
//! scripted steps. Used by the `shifter` binary and the scenario tests.

use std::fmt;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use shifter_viewport::{HeadlessScene, ObjectKind, PointerDrag, Viewport};
use thiserror::Error;
use uuid::Uuid;

use crate::actions::{ActionContext, PointerOutcome, handle_action};
use crate::config::AppConfig;
use crate::state::{AppAction, Mode, PointerDown, SharedInteractionState, create_shared_state};
use crate::ui::Toolbar;

/// Script loading errors
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// One scripted user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Press a toolbar button
    Toggle(Mode),
    /// Press a pointer button at a screen position
    Click { x: f32, y: f32, button: u16 },
    /// Press a pointer button over the projection of a world point
    ClickAt { at: Vec3, button: u16 },
    /// Drag whatever is under a screen position
    Drag { x: f32, y: f32, delta: Vec3 },
    /// Drag whatever is under the projection of a world point
    DragAt { at: Vec3, delta: Vec3 },
    /// Drag the n-th vertex handle of the edited solid
    DragHandle { handle: usize, delta: Vec3 },
}

/// Load a RON list of steps
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScriptError::Io(e.to_string()))?;
    ron::from_str(&content).map_err(|e| ScriptError::Parse(e.to_string()))
}

/// Draw a right triangle, extrude it and pull one corner outward
pub fn demo_script() -> Vec<ScriptStep> {
    let left = 0;
    let right = 2;
    vec![
        ScriptStep::Toggle(Mode::Draw),
        ScriptStep::ClickAt {
            at: Vec3::new(0.0, 0.0, 0.0),
            button: left,
        },
        ScriptStep::ClickAt {
            at: Vec3::new(2.0, 0.0, 0.0),
            button: left,
        },
        ScriptStep::ClickAt {
            at: Vec3::new(0.0, 0.0, 2.0),
            button: left,
        },
        ScriptStep::ClickAt {
            at: Vec3::new(3.0, 0.0, 3.0),
            button: right,
        },
        ScriptStep::Toggle(Mode::Draw),
        ScriptStep::Toggle(Mode::Extrude),
        ScriptStep::ClickAt {
            at: Vec3::new(0.5, 0.01, 0.5),
            button: left,
        },
        ScriptStep::Toggle(Mode::Extrude),
        ScriptStep::Toggle(Mode::EditVertices),
        ScriptStep::ClickAt {
            at: Vec3::new(0.5, 2.0, 0.5),
            button: left,
        },
        ScriptStep::DragHandle {
            handle: 0,
            delta: Vec3::new(-1.0, 0.0, 0.0),
        },
    ]
}

/// Snapshot of what a session has produced
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub rings: usize,
    pub pending_rings: usize,
    pub solids: usize,
    pub handles: usize,
    pub sketch_points: usize,
    pub active_modes: Vec<Mode>,
    pub status_message: Option<String>,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modes: Vec<&str> = self.active_modes.iter().map(|m| m.label()).collect();
        write!(
            f,
            "{} rings ({} pending), {} solids, {} handles, {} sketch points, modes [{}]",
            self.rings,
            self.pending_rings,
            self.solids,
            self.handles,
            self.sketch_points,
            modes.join(", ")
        )?;
        if let Some(message) = &self.status_message {
            write!(f, ", status: {}", message)?;
        }
        Ok(())
    }
}

/// A headless scene wired to the interaction core
pub struct Session {
    scene: HeadlessScene,
    move_drag: PointerDrag,
    handle_drag: PointerDrag,
    toolbar: Toolbar,
    state: SharedInteractionState,
    config: AppConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::new())
    }
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            scene: HeadlessScene::new(),
            // Moved objects stay on the ground plane
            move_drag: PointerDrag::on_plane(shifter_core::UP),
            handle_drag: PointerDrag::new(),
            toolbar: Toolbar::new(&config.ui),
            state: create_shared_state(),
            config,
        }
    }

    pub fn scene(&self) -> &HeadlessScene {
        &self.scene
    }

    pub fn state(&self) -> SharedInteractionState {
        self.state.clone()
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn move_drag(&self) -> &PointerDrag {
        &self.move_drag
    }

    pub fn handle_drag(&self) -> &PointerDrag {
        &self.handle_drag
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply an action to the interaction state
    pub fn dispatch(&mut self, action: AppAction) -> PointerOutcome {
        let mut ctx = ActionContext {
            state: self.state.clone(),
            viewport: &mut self.scene,
            move_drag: &mut self.move_drag,
            handle_drag: &mut self.handle_drag,
            toolbar: &mut self.toolbar,
            config: &self.config,
        };
        handle_action(action, &mut ctx)
    }

    pub fn toggle(&mut self, mode: Mode) -> PointerOutcome {
        let action = self.toolbar.press(mode);
        self.dispatch(action)
    }

    pub fn click(&mut self, x: f32, y: f32, button: u16) -> PointerOutcome {
        let pick = self.scene.pick(x, y);
        self.dispatch(AppAction::PointerDown(PointerDown::new(button, pick)))
    }

    pub fn click_at(&mut self, at: Vec3, button: u16) -> PointerOutcome {
        let pick = self.scene.pick_world(at);
        self.dispatch(AppAction::PointerDown(PointerDown::new(button, pick)))
    }

    /// Send one drag tick to an object
    pub fn drag_object(&mut self, target: Uuid, delta: Vec3) -> PointerOutcome {
        self.dispatch(AppAction::DragDelta { target, delta })
    }

    pub fn drag(&mut self, x: f32, y: f32, delta: Vec3) -> PointerOutcome {
        match self.scene.pick(x, y).object {
            Some(picked) => self.drag_object(picked.id, delta),
            None => PointerOutcome::default(),
        }
    }

    pub fn drag_at(&mut self, at: Vec3, delta: Vec3) -> PointerOutcome {
        match self.scene.pick_world(at).object {
            Some(picked) => self.drag_object(picked.id, delta),
            None => PointerOutcome::default(),
        }
    }

    pub fn drag_handle(&mut self, handle: usize, delta: Vec3) -> PointerOutcome {
        let id = self
            .state
            .lock()
            .vertex_edit
            .handles()
            .get(handle)
            .map(|h| h.id);
        match id {
            Some(id) => self.drag_object(id, delta),
            None => {
                tracing::warn!("No vertex handle {}", handle);
                PointerOutcome::default()
            }
        }
    }

    pub fn apply(&mut self, step: &ScriptStep) -> PointerOutcome {
        tracing::debug!("Script step {:?}", step);
        match *step {
            ScriptStep::Toggle(mode) => self.toggle(mode),
            ScriptStep::Click { x, y, button } => self.click(x, y, button),
            ScriptStep::ClickAt { at, button } => self.click_at(at, button),
            ScriptStep::Drag { x, y, delta } => self.drag(x, y, delta),
            ScriptStep::DragAt { at, delta } => self.drag_at(at, delta),
            ScriptStep::DragHandle { handle, delta } => self.drag_handle(handle, delta),
        }
    }

    /// Apply every step and summarize the result
    pub fn run(&mut self, steps: &[ScriptStep]) -> SessionSummary {
        for step in steps {
            self.apply(step);
        }
        self.summary()
    }

    pub fn summary(&self) -> SessionSummary {
        let state = self.state.lock();
        SessionSummary {
            rings: state.solids.ring_count(),
            pending_rings: state.solids.pending_count(),
            solids: self.scene.count(ObjectKind::Solid),
            handles: state.vertex_edit.handles().len(),
            sketch_points: state.sketch.len(),
            active_modes: state.modes.active_modes(),
            status_message: state.status_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_script_runs_to_an_edited_solid() {
        let mut session = Session::default();
        let summary = session.run(&demo_script());

        assert_eq!(summary.rings, 1);
        assert_eq!(summary.pending_rings, 0);
        assert_eq!(summary.solids, 1);
        assert_eq!(summary.handles, 6);
        assert_eq!(summary.active_modes, vec![Mode::EditVertices]);
        assert_eq!(summary.status_message, None);
    }

    #[test]
    fn test_script_parses_from_ron() {
        let text = r#"[
            Toggle(Draw),
            Click(x: 640.0, y: 360.0, button: 0),
            ClickAt(at: (1.0, 0.0, 2.0), button: 2),
            DragHandle(handle: 3, delta: (0.0, 1.0, 0.0)),
        ]"#;
        let steps: Vec<ScriptStep> = ron::from_str(text).unwrap();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], ScriptStep::Toggle(Mode::Draw));
        assert_eq!(
            steps[2],
            ScriptStep::ClickAt {
                at: Vec3::new(1.0, 0.0, 2.0),
                button: 2
            }
        );
    }

    #[test]
    fn test_load_missing_script() {
        let err = load_script(Path::new("/nonexistent/shifter/script.ron")).unwrap_err();
        assert!(matches!(err, ScriptError::Io(_)));
    }

    #[test]
    fn test_summary_display_mentions_status() {
        let mut session = Session::default();
        session.toggle(Mode::Draw);
        session.click_at(Vec3::new(1.0, 0.0, 1.0), 0);
        session.click_at(Vec3::new(2.0, 0.0, 1.0), 2);

        let summary = session.summary();
        assert_eq!(summary.sketch_points, 1);
        assert!(summary.to_string().contains("status: At least 3 points"));
    }
}
