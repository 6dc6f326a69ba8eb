//! Pointer drag behavior with target-keyed attachment.

use std::collections::HashSet;

use glam::Vec3;
use uuid::Uuid;

use crate::traits::DragBehavior;

/// A single drag behavior instance shared by any number of targets.
///
/// With a drag plane normal set, deltas are projected onto that plane
/// (e.g. `Vec3::Y` keeps moved solids on the ground).
#[derive(Debug, Clone)]
pub struct PointerDrag {
    drag_plane_normal: Option<Vec3>,
    /// Scale applied to raw pointer motion
    drag_delta_ratio: f32,
    attached: HashSet<Uuid>,
}

impl Default for PointerDrag {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDrag {
    /// Unconstrained drag
    pub fn new() -> Self {
        Self {
            drag_plane_normal: None,
            drag_delta_ratio: 1.0,
            attached: HashSet::new(),
        }
    }

    /// Drag constrained to the plane with the given normal
    pub fn on_plane(normal: Vec3) -> Self {
        Self {
            drag_plane_normal: Some(normal.normalize_or_zero()),
            ..Self::new()
        }
    }

    pub fn with_delta_ratio(mut self, ratio: f32) -> Self {
        self.drag_delta_ratio = ratio;
        self
    }

    pub fn drag_plane_normal(&self) -> Option<Vec3> {
        self.drag_plane_normal
    }

    /// Number of attached targets
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}

impl DragBehavior for PointerDrag {
    fn attach(&mut self, target: Uuid) {
        if self.attached.insert(target) {
            tracing::debug!("Drag behavior attached to {}", target);
        }
    }

    fn detach(&mut self, target: Uuid) {
        if self.attached.remove(&target) {
            tracing::debug!("Drag behavior detached from {}", target);
        }
    }

    fn is_attached(&self, target: Uuid) -> bool {
        self.attached.contains(&target)
    }

    fn drag_delta(&self, target: Uuid, pointer_delta: Vec3) -> Option<Vec3> {
        if !self.is_attached(target) {
            return None;
        }
        let delta = match self.drag_plane_normal {
            Some(normal) => pointer_delta - normal * pointer_delta.dot(normal),
            None => pointer_delta,
        };
        Some(delta * self.drag_delta_ratio)
    }

    fn detach_all(&mut self) {
        self.attached.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_is_keyed_by_target() {
        let mut drag = PointerDrag::new();
        let target = Uuid::new_v4();

        drag.attach(target);
        drag.attach(target);
        assert_eq!(drag.attached_count(), 1);

        drag.detach(target);
        assert!(!drag.is_attached(target));
    }

    #[test]
    fn test_unattached_target_emits_nothing() {
        let drag = PointerDrag::new();
        assert_eq!(drag.drag_delta(Uuid::new_v4(), Vec3::X), None);
    }

    #[test]
    fn test_plane_constraint_removes_normal_component() {
        let mut drag = PointerDrag::on_plane(Vec3::Y);
        let target = Uuid::new_v4();
        drag.attach(target);

        let delta = drag.drag_delta(target, Vec3::new(1.0, 3.0, -2.0)).unwrap();
        assert_eq!(delta, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_delta_ratio() {
        let mut drag = PointerDrag::new().with_delta_ratio(0.5);
        let target = Uuid::new_v4();
        drag.attach(target);
        assert_eq!(drag.drag_delta(target, Vec3::new(2.0, 0.0, 0.0)), Some(Vec3::X));
    }
}
