//! Vertex merge & edit engine
//!
//! Groups a solid's coincident raw vertices, shows one draggable handle per
//! group and writes handle drags back into the raw buffer.

use glam::Vec3;
use shifter_core::{RawVertexBuffer, VertexGroups, group_vertices};
use shifter_viewport::{DragBehavior, Viewport, ViewportResult};
use uuid::Uuid;

/// Where the engine is in its edit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// No solid targeted
    Idle,
    /// Handles are live for `target`
    Editing { target: Uuid },
}

/// A draggable sphere standing for one vertex group
#[derive(Debug, Clone, PartialEq)]
pub struct VertexHandle {
    pub id: Uuid,
    /// Index into the target's vertex groups
    pub group: usize,
    /// Raw buffer indices moved by this handle
    pub indices: Vec<usize>,
}

/// Retained editing state for at most one solid
#[derive(Debug, Default)]
pub struct VertexEditEngine {
    target: Option<Uuid>,
    buffer: RawVertexBuffer,
    groups: VertexGroups,
    handles: Vec<VertexHandle>,
}

impl VertexEditEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        match self.target {
            Some(target) => EditPhase::Editing { target },
            None => EditPhase::Idle,
        }
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn handles(&self) -> &[VertexHandle] {
        &self.handles
    }

    pub fn groups(&self) -> &VertexGroups {
        &self.groups
    }

    /// Working copy of the target's raw vertex buffer
    pub fn buffer(&self) -> &RawVertexBuffer {
        &self.buffer
    }

    pub fn handle(&self, id: Uuid) -> Option<&VertexHandle> {
        self.handles.iter().find(|h| h.id == id)
    }

    pub fn is_handle(&self, id: Uuid) -> bool {
        self.handle(id).is_some()
    }

    /// Start editing `solid`, replacing any previous target.
    ///
    /// Returns the number of handles created.
    pub fn begin(
        &mut self,
        viewport: &mut dyn Viewport,
        handle_drag: &mut dyn DragBehavior,
        solid: Uuid,
        handle_diameter: f32,
    ) -> ViewportResult<usize> {
        self.release(viewport, handle_drag);

        let buffer = viewport.raw_vertex_buffer(solid)?;
        let transform = viewport.world_transform(solid)?;
        let groups = group_vertices(&buffer);

        let mut handles = Vec::with_capacity(groups.len());
        for (index, group) in groups.iter().enumerate() {
            let id = viewport.create_vertex_handle(group.world_position(&transform), handle_diameter);
            handle_drag.attach(id);
            handles.push(VertexHandle {
                id,
                group: index,
                indices: group.indices.clone(),
            });
        }

        tracing::info!(
            "Editing solid {}: {} vertices in {} groups",
            solid,
            buffer.len(),
            groups.len()
        );

        self.target = Some(solid);
        self.buffer = buffer;
        self.groups = groups;
        self.handles = handles;
        Ok(self.handles.len())
    }

    /// Destroy every handle and drop the target. Returns how many handles
    /// were destroyed.
    pub fn release(
        &mut self,
        viewport: &mut dyn Viewport,
        handle_drag: &mut dyn DragBehavior,
    ) -> usize {
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            handle_drag.detach(handle.id);
            let disposed = viewport.dispose(handle.id);
            debug_assert!(disposed, "vertex handle {} was already disposed", handle.id);
            if !disposed {
                tracing::warn!("Vertex handle {} was already disposed", handle.id);
            }
        }
        if let Some(target) = self.target.take() {
            tracing::debug!("Stopped editing solid {} ({} handles)", target, count);
        }
        self.buffer = RawVertexBuffer::default();
        self.groups = VertexGroups::default();
        count
    }

    /// Move every raw vertex of a handle's group by `delta` and write the
    /// buffer back in one batch. Returns false if `handle` is not ours.
    pub fn apply_handle_delta(
        &mut self,
        viewport: &mut dyn Viewport,
        handle: Uuid,
        delta: Vec3,
    ) -> ViewportResult<bool> {
        let Some(target) = self.target else {
            return Ok(false);
        };
        let Some(handle) = self.handles.iter().find(|h| h.id == handle) else {
            return Ok(false);
        };

        self.buffer.apply_delta(&handle.indices, delta)?;
        viewport.set_raw_vertex_buffer(target, &self.buffer)?;
        tracing::trace!(
            "Moved group {} ({} vertices) by {:?}",
            handle.group,
            handle.indices.len(),
            delta
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shifter_cad::PolygonRing;
    use shifter_viewport::{HeadlessScene, ObjectKind, PointerDrag};

    fn scene_with_solid() -> (HeadlessScene, Uuid) {
        let mut scene = HeadlessScene::new();
        let ring = PolygonRing::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ])
        .unwrap();
        let solid = scene.extrude(&ring, 2.0).unwrap();
        scene.set_position(solid, Vec3::new(0.0, 2.0, 0.0)).unwrap();
        (scene, solid)
    }

    #[test]
    fn test_begin_creates_handle_per_group() {
        let (mut scene, solid) = scene_with_solid();
        let mut drag = PointerDrag::new();
        let mut engine = VertexEditEngine::new();

        let count = engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();

        assert_eq!(count, 6);
        assert_eq!(scene.count(ObjectKind::VertexHandle), 6);
        assert_eq!(drag.attached_count(), 6);
        assert_eq!(engine.phase(), EditPhase::Editing { target: solid });
    }

    #[test]
    fn test_handles_sit_at_world_positions() {
        let (mut scene, solid) = scene_with_solid();
        let mut drag = PointerDrag::new();
        let mut engine = VertexEditEngine::new();
        engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();

        // First group is the top-cap origin corner, raised by the solid's position
        let first = engine.handles()[0].id;
        assert_eq!(scene.get(first).unwrap().position, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_release_destroys_handles() {
        let (mut scene, solid) = scene_with_solid();
        let mut drag = PointerDrag::new();
        let mut engine = VertexEditEngine::new();
        engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();

        assert_eq!(engine.release(&mut scene, &mut drag), 6);
        assert_eq!(scene.count(ObjectKind::VertexHandle), 0);
        assert_eq!(drag.attached_count(), 0);
        assert_eq!(engine.phase(), EditPhase::Idle);
        assert!(engine.groups().is_empty());
    }

    #[test]
    fn test_retarget_replaces_handles() {
        let (mut scene, solid) = scene_with_solid();
        let mut drag = PointerDrag::new();
        let mut engine = VertexEditEngine::new();
        engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();
        let old: Vec<Uuid> = engine.handles().iter().map(|h| h.id).collect();

        engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();

        assert_eq!(scene.count(ObjectKind::VertexHandle), 6);
        assert!(old.iter().all(|id| !scene.exists(*id)));
    }

    #[test]
    fn test_delta_moves_only_the_group() {
        let (mut scene, solid) = scene_with_solid();
        let mut drag = PointerDrag::new();
        let mut engine = VertexEditEngine::new();
        engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();
        let before = scene.raw_vertex_buffer(solid).unwrap();
        let handle = engine.handles()[1].clone();

        let applied = engine
            .apply_handle_delta(&mut scene, handle.id, Vec3::X)
            .unwrap();
        assert!(applied);

        let after = scene.raw_vertex_buffer(solid).unwrap();
        for i in 0..before.len() {
            let expected = if handle.indices.contains(&i) {
                before.positions()[i] + Vec3::X
            } else {
                before.positions()[i]
            };
            assert_eq!(after.positions()[i], expected, "vertex {i}");
        }
    }

    #[test]
    fn test_delta_for_unknown_handle_is_ignored() {
        let (mut scene, solid) = scene_with_solid();
        let mut drag = PointerDrag::new();
        let mut engine = VertexEditEngine::new();
        engine.begin(&mut scene, &mut drag, solid, 0.25).unwrap();

        let applied = engine
            .apply_handle_delta(&mut scene, Uuid::new_v4(), Vec3::X)
            .unwrap();
        assert!(!applied);
    }
}
