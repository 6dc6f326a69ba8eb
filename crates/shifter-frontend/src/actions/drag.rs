//! Drag delta handling

use glam::Vec3;
use tracing::warn;
use uuid::Uuid;

use crate::state::{InteractionState, Mode};

use super::{ActionContext, PointerOutcome};

/// Route one drag tick to whichever behavior owns `target`.
///
/// The move behavior is consulted first, then the vertex handle behavior.
/// Deltas for objects neither behavior is attached to are dropped.
pub fn handle_drag_delta(
    state: &mut InteractionState,
    target: Uuid,
    delta: Vec3,
    ctx: &mut ActionContext,
) -> PointerOutcome {
    let mut outcome = PointerOutcome::default();

    if let Some(delta) = ctx.move_drag.drag_delta(target, delta) {
        if let Err(e) = ctx.viewport.translate(target, delta) {
            warn!("Dropping move of {}: {}", target, e);
            state.mover.forget(target);
        } else {
            outcome.handled.push(Mode::Move);
        }
        return outcome;
    }

    if let Some(delta) = ctx.handle_drag.drag_delta(target, delta) {
        let moved = ctx
            .viewport
            .translate(target, delta)
            .and_then(|_| state.vertex_edit.apply_handle_delta(ctx.viewport, target, delta));
        match moved {
            Ok(true) => outcome.handled.push(Mode::EditVertices),
            Ok(false) => warn!("Handle {} has no vertex group", target),
            Err(e) => warn!("Dropping handle drag of {}: {}", target, e),
        }
    }

    outcome
}
