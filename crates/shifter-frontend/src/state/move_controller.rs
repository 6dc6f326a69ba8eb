//! Move controller
//!
//! Hands the shared move drag behavior to whichever object was picked last.

use shifter_viewport::{DragBehavior, PickedObject};
use uuid::Uuid;

/// Tracks the object the move drag behavior is attached to
#[derive(Debug, Default)]
pub struct MoveController {
    active_target: Option<Uuid>,
}

impl MoveController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Object currently draggable in Move mode
    pub fn active_target(&self) -> Option<Uuid> {
        self.active_target
    }

    /// React to a pointer press.
    ///
    /// Only movable objects are considered. While Move is on the drag
    /// behavior moves to the picked object; while it is off the picked
    /// object loses it. Returns true when the press was consumed.
    pub fn on_pointer_down(
        &mut self,
        move_active: bool,
        picked: Option<PickedObject>,
        drag: &mut dyn DragBehavior,
    ) -> bool {
        let Some(picked) = picked.filter(|p| p.kind.is_movable()) else {
            return false;
        };

        if move_active {
            if let Some(previous) = self.active_target.filter(|t| *t != picked.id) {
                drag.detach(previous);
            }
            drag.attach(picked.id);
            self.active_target = Some(picked.id);
            tracing::debug!("Move target is now {} {}", picked.kind.name(), picked.id);
        } else {
            drag.detach(picked.id);
            if self.active_target == Some(picked.id) {
                self.active_target = None;
            }
        }
        true
    }

    /// Detach from the last target, e.g. when Move is switched off
    pub fn release(&mut self, drag: &mut dyn DragBehavior) {
        if let Some(target) = self.active_target.take() {
            drag.detach(target);
            tracing::debug!("Released move target {}", target);
        }
    }

    /// Forget a target that no longer exists
    pub fn forget(&mut self, target: Uuid) {
        if self.active_target == Some(target) {
            self.active_target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shifter_viewport::{ObjectKind, PointerDrag};

    fn solid() -> PickedObject {
        PickedObject {
            id: Uuid::new_v4(),
            kind: ObjectKind::Solid,
        }
    }

    #[test]
    fn test_retarget_detaches_previous() {
        let mut drag = PointerDrag::new();
        let mut mover = MoveController::new();
        let (a, b) = (solid(), solid());

        assert!(mover.on_pointer_down(true, Some(a), &mut drag));
        assert!(drag.is_attached(a.id));

        mover.on_pointer_down(true, Some(b), &mut drag);
        assert!(!drag.is_attached(a.id));
        assert!(drag.is_attached(b.id));
        assert_eq!(mover.active_target(), Some(b.id));
    }

    #[test]
    fn test_same_target_twice_stays_attached() {
        let mut drag = PointerDrag::new();
        let mut mover = MoveController::new();
        let a = solid();

        mover.on_pointer_down(true, Some(a), &mut drag);
        mover.on_pointer_down(true, Some(a), &mut drag);
        assert!(drag.is_attached(a.id));
        assert_eq!(drag.attached_count(), 1);
    }

    #[test]
    fn test_inactive_pick_detaches() {
        let mut drag = PointerDrag::new();
        let mut mover = MoveController::new();
        let a = solid();
        mover.on_pointer_down(true, Some(a), &mut drag);

        assert!(mover.on_pointer_down(false, Some(a), &mut drag));
        assert!(!drag.is_attached(a.id));
        assert_eq!(mover.active_target(), None);
    }

    #[test]
    fn test_ignores_ground_markers_and_misses() {
        let mut drag = PointerDrag::new();
        let mut mover = MoveController::new();
        for kind in [ObjectKind::Ground, ObjectKind::PreviewMarker, ObjectKind::VertexHandle] {
            let picked = PickedObject {
                id: Uuid::new_v4(),
                kind,
            };
            assert!(!mover.on_pointer_down(true, Some(picked), &mut drag));
        }
        assert!(!mover.on_pointer_down(true, None, &mut drag));
        assert_eq!(drag.attached_count(), 0);
    }

    #[test]
    fn test_release() {
        let mut drag = PointerDrag::new();
        let mut mover = MoveController::new();
        let a = solid();
        mover.on_pointer_down(true, Some(a), &mut drag);

        mover.release(&mut drag);
        assert!(!drag.is_attached(a.id));
        assert_eq!(mover.active_target(), None);
    }
}
