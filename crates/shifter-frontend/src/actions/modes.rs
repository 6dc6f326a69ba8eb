//! Mode toggle handling

use tracing::info;

use crate::state::{InteractionState, Mode};

use super::ActionContext;

/// Flip a mode, run its enter/exit cleanup and recolor its button
pub fn handle_toggle(state: &mut InteractionState, mode: Mode, ctx: &mut ActionContext) {
    let active = state.modes.toggle(mode);

    match mode {
        Mode::Draw => {
            // Each drawing pass starts from an empty sketch
            state.sketch.discard(ctx.viewport);
        }
        Mode::Extrude => {}
        Mode::Move => {
            if !active {
                state.mover.release(ctx.move_drag);
            }
        }
        Mode::EditVertices => {
            if !active {
                state.vertex_edit.release(ctx.viewport, ctx.handle_drag);
            }
        }
    }

    ctx.toolbar.set_active(mode, active);
    info!(
        "{} mode {}",
        mode.label(),
        if active { "enabled" } else { "disabled" }
    );
}
