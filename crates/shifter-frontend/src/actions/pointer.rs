//! Pointer-down dispatch
//!
//! Handlers run in a fixed order: Draw, Extrude, Move, EditVertices. A
//! single press may be handled by several of them.

use glam::Vec3;
use shifter_viewport::{Material, PickResult};
use tracing::{debug, info, warn};

use crate::state::{InteractionState, Mode, PointerAction, PointerDown};

use super::{ActionContext, PointerOutcome};

/// Run every mode handler against a pointer press
pub fn handle_pointer_down(
    state: &mut InteractionState,
    down: PointerDown,
    ctx: &mut ActionContext,
) -> PointerOutcome {
    let action = PointerAction::from_button(down.button, &ctx.config.input);
    let pick = down.pick;
    let mut outcome = PointerOutcome::default();

    if handle_draw(state, action, &pick, ctx) {
        outcome.handled.push(Mode::Draw);
    }
    if handle_extrude(state, action, &pick, ctx) {
        outcome.handled.push(Mode::Extrude);
    }
    if handle_move(state, &pick, ctx) {
        outcome.handled.push(Mode::Move);
    }
    if handle_edit_vertices(state, action, &pick, ctx) {
        outcome.handled.push(Mode::EditVertices);
    }

    if !outcome.is_handled() {
        debug!("Pointer button {} ignored", down.button);
    }
    outcome
}

fn handle_draw(
    state: &mut InteractionState,
    action: PointerAction,
    pick: &PickResult,
    ctx: &mut ActionContext,
) -> bool {
    if !state.is_active(Mode::Draw) || !pick.hit() {
        return false;
    }

    match action {
        PointerAction::Primary => {
            let Some(point) = pick.point else {
                return false;
            };
            state
                .sketch
                .add_point(ctx.viewport, point, ctx.config.sketch.marker_diameter);
            true
        }
        PointerAction::Secondary => {
            let ring = match state.sketch.complete_ring(ctx.viewport) {
                Ok(ring) => ring,
                Err(e) => {
                    warn!("Cannot close sketch: {}", e);
                    state.status_message = Some(e.to_string());
                    return true;
                }
            };
            state.status_message = None;

            let sketch = &ctx.config.sketch;
            let preview = match ctx.viewport.build_polygon(&ring) {
                Ok(id) => {
                    let placed = ctx
                        .viewport
                        .set_position(id, Vec3::new(0.0, sketch.polygon_lift, 0.0))
                        .and_then(|_| {
                            ctx.viewport.set_material(
                                id,
                                Material::new("mat", sketch.polygon_color).with_emissive(true),
                            )
                        });
                    if let Err(e) = placed {
                        warn!("Failed to style polygon preview: {}", e);
                    }
                    Some(id)
                }
                Err(e) => {
                    warn!("Failed to build polygon preview for ring {}: {}", ring.id, e);
                    None
                }
            };

            let ring_id = state.solids.register(ring, preview);
            info!("Ring {} ready for extrusion", ring_id);
            true
        }
        PointerAction::Other => false,
    }
}

fn handle_extrude(
    state: &mut InteractionState,
    action: PointerAction,
    pick: &PickResult,
    ctx: &mut ActionContext,
) -> bool {
    if !state.is_active(Mode::Extrude)
        || action != PointerAction::Primary
        || pick.non_ground().is_none()
    {
        return false;
    }

    let extrude = &ctx.config.extrude;
    let material =
        Material::new("Extruded Mesh Material", extrude.color).with_two_sided(true);

    match state
        .solids
        .extrude_pending(ctx.viewport, extrude.depth, &material)
    {
        Ok(solids) => !solids.is_empty(),
        Err(e) => {
            warn!("Extrusion failed: {}", e);
            state.status_message = Some(e.to_string());
            true
        }
    }
}

fn handle_move(state: &mut InteractionState, pick: &PickResult, ctx: &mut ActionContext) -> bool {
    let active = state.is_active(Mode::Move);
    // An earlier handler may have disposed the picked preview
    let picked = pick.non_ground().filter(|p| ctx.viewport.exists(p.id));
    state.mover.on_pointer_down(active, picked, ctx.move_drag) && active
}

fn handle_edit_vertices(
    state: &mut InteractionState,
    action: PointerAction,
    pick: &PickResult,
    ctx: &mut ActionContext,
) -> bool {
    if !state.is_active(Mode::EditVertices) || action != PointerAction::Primary {
        return false;
    }
    let Some(picked) = pick
        .non_ground()
        .filter(|p| p.kind.is_editable() && ctx.viewport.exists(p.id))
    else {
        return false;
    };

    match state.vertex_edit.begin(
        ctx.viewport,
        ctx.handle_drag,
        picked.id,
        ctx.config.edit.handle_diameter,
    ) {
        Ok(_) => true,
        Err(e) => {
            warn!("Cannot edit vertices of {}: {}", picked.id, e);
            false
        }
    }
}
