//! DragBehavior trait definition.

use glam::Vec3;
use uuid::Uuid;

/// Pointer-drag manipulation that can be attached to scene objects.
///
/// Attachment is keyed by target identity, so detaching works no matter
/// how many times the same target was attached before.
pub trait DragBehavior {
    /// Make `target` draggable
    fn attach(&mut self, target: Uuid);

    /// Stop dragging `target`. Detaching an unattached target is a no-op.
    fn detach(&mut self, target: Uuid);

    /// Check if `target` is currently draggable
    fn is_attached(&self, target: Uuid) -> bool;

    /// Translate raw pointer motion over `target` into the delta this
    /// behavior emits for it, or `None` when the target is not attached.
    fn drag_delta(&self, target: Uuid, pointer_delta: Vec3) -> Option<Vec3>;

    /// Detach everything
    fn detach_all(&mut self);
}
