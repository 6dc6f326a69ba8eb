//! Solid generator
//!
//! Tracks every closed ring and turns pending rings into prisms.

use glam::Vec3;
use shifter_cad::PolygonRing;
use shifter_viewport::{Material, Viewport, ViewportResult};
use uuid::Uuid;

/// Whether a ring has been turned into a solid yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrusionState {
    Pending,
    Extruded,
}

/// A closed ring and what was built from it
#[derive(Debug, Clone)]
pub struct RingEntry {
    pub ring: PolygonRing,
    pub state: ExtrusionState,
    /// Flat polygon shown until the ring is extruded
    pub preview: Option<Uuid>,
    /// Solid built from the ring
    pub solid: Option<Uuid>,
}

/// Owns the rings and the solids made from them
#[derive(Debug, Default)]
pub struct SolidGenerator {
    entries: Vec<RingEntry>,
}

impl SolidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly closed ring as pending
    pub fn register(&mut self, ring: PolygonRing, preview: Option<Uuid>) -> Uuid {
        let id = ring.id;
        self.entries.push(RingEntry {
            ring,
            state: ExtrusionState::Pending,
            preview,
            solid: None,
        });
        id
    }

    pub fn entries(&self) -> &[RingEntry] {
        &self.entries
    }

    pub fn entry(&self, ring_id: Uuid) -> Option<&RingEntry> {
        self.entries.iter().find(|e| e.ring.id == ring_id)
    }

    pub fn state(&self, ring_id: Uuid) -> Option<ExtrusionState> {
        self.entry(ring_id).map(|e| e.state)
    }

    pub fn ring_count(&self) -> usize {
        self.entries.len()
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.state == ExtrusionState::Pending)
            .count()
    }

    /// Ids of every solid built so far, in creation order
    pub fn solids(&self) -> Vec<Uuid> {
        self.entries.iter().filter_map(|e| e.solid).collect()
    }

    /// Extrude one ring.
    ///
    /// The solid is raised so its top cap sits at `depth` and the flat
    /// preview is disposed. Returns `None` when the ring was already
    /// extruded or is unknown.
    pub fn extrude(
        &mut self,
        viewport: &mut dyn Viewport,
        ring_id: Uuid,
        depth: f32,
        material: &Material,
    ) -> ViewportResult<Option<Uuid>> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.ring.id == ring_id) else {
            tracing::warn!("Extrude requested for unknown ring {}", ring_id);
            return Ok(None);
        };
        if entry.state == ExtrusionState::Extruded {
            tracing::debug!("Ring {} already extruded", ring_id);
            return Ok(None);
        }

        let solid = viewport.extrude(&entry.ring, depth)?;
        viewport.set_position(solid, Vec3::new(0.0, depth, 0.0))?;
        viewport.set_material(solid, material.clone())?;

        if let Some(preview) = entry.preview.take() {
            let disposed = viewport.dispose(preview);
            debug_assert!(disposed, "polygon preview {preview} was already disposed");
            if !disposed {
                tracing::warn!("Polygon preview {} was already disposed", preview);
            }
        }

        entry.state = ExtrusionState::Extruded;
        entry.solid = Some(solid);
        tracing::info!("Extruded ring {} into solid {}", ring_id, solid);
        Ok(Some(solid))
    }

    /// Extrude every pending ring, returning the new solids
    pub fn extrude_pending(
        &mut self,
        viewport: &mut dyn Viewport,
        depth: f32,
        material: &Material,
    ) -> ViewportResult<Vec<Uuid>> {
        let pending: Vec<Uuid> = self
            .entries
            .iter()
            .filter(|e| e.state == ExtrusionState::Pending)
            .map(|e| e.ring.id)
            .collect();

        let mut solids = Vec::with_capacity(pending.len());
        for ring_id in pending {
            if let Some(solid) = self.extrude(viewport, ring_id, depth, material)? {
                solids.push(solid);
            }
        }
        Ok(solids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use shifter_viewport::{HeadlessScene, ObjectKind};

    fn blue() -> Material {
        Material::new("Extruded Mesh Material", [0.0, 0.0, 1.0, 1.0]).with_two_sided(true)
    }

    fn square() -> PolygonRing {
        PolygonRing::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_extrude_places_solid_and_disposes_preview() {
        let mut scene = HeadlessScene::new();
        let ring = square();
        let preview = scene.build_polygon(&ring).unwrap();
        let mut solids = SolidGenerator::new();
        let ring_id = solids.register(ring, Some(preview));

        let solid = solids
            .extrude(&mut scene, ring_id, 2.0, &blue())
            .unwrap()
            .unwrap();

        assert_eq!(solids.state(ring_id), Some(ExtrusionState::Extruded));
        assert!(!scene.exists(preview));
        let object = scene.get(solid).unwrap();
        assert_eq!(object.kind, ObjectKind::Solid);
        assert_relative_eq!(object.position.y, 2.0);
        assert!(object.material.two_sided);
    }

    #[test]
    fn test_extrude_twice_builds_one_solid() {
        let mut scene = HeadlessScene::new();
        let mut solids = SolidGenerator::new();
        let ring_id = solids.register(square(), None);

        assert!(solids.extrude(&mut scene, ring_id, 2.0, &blue()).unwrap().is_some());
        assert!(solids.extrude(&mut scene, ring_id, 2.0, &blue()).unwrap().is_none());
        assert!(solids.extrude_pending(&mut scene, 2.0, &blue()).unwrap().is_empty());

        assert_eq!(scene.count(ObjectKind::Solid), 1);
        assert_eq!(solids.solids().len(), 1);
    }

    #[test]
    fn test_extrude_pending_handles_every_ring() {
        let mut scene = HeadlessScene::new();
        let mut solids = SolidGenerator::new();
        solids.register(square(), None);
        solids.register(square(), None);

        let built = solids.extrude_pending(&mut scene, 2.0, &blue()).unwrap();

        assert_eq!(built.len(), 2);
        assert_ne!(built[0], built[1]);
        assert_eq!(solids.pending_count(), 0);
    }

    #[test]
    fn test_unknown_ring_is_ignored() {
        let mut scene = HeadlessScene::new();
        let mut solids = SolidGenerator::new();
        let result = solids.extrude(&mut scene, Uuid::new_v4(), 2.0, &blue()).unwrap();
        assert!(result.is_none());
    }
}
