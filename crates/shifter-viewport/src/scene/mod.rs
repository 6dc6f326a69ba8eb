//! Headless scene
//!
//! An in-memory [`Viewport`] implementation: it keeps object geometry and
//! transforms, builds meshes through the CAD layer and answers picks by
//! casting camera rays against triangles. No GPU involved.

mod object;
mod picking;

pub use object::*;
pub use picking::{MeshHit, ray_mesh_intersection};

use std::collections::HashMap;

use glam::{Mat4, Vec2, Vec3};
use shifter_cad::{PolygonRing, Triangulator, default_triangulator, extrude_prism, flat_polygon};
use shifter_core::RawVertexBuffer;
use uuid::Uuid;

use crate::camera::Camera;
use crate::primitives;
use crate::traits::{Material, ObjectKind, PickResult, Viewport, ViewportError, ViewportResult};

/// Side length of the default ground plane
pub const GROUND_SIZE: f32 = 10.0;

/// Scene containing all objects, including the ground.
pub struct HeadlessScene {
    objects: HashMap<Uuid, SceneObject>,
    ground: Uuid,
    camera: Camera,
    triangulator: Box<dyn Triangulator>,
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessScene {
    /// Creates a scene with a 10x10 ground and the default camera.
    pub fn new() -> Self {
        Self::with_triangulator(default_triangulator())
    }

    /// Creates a scene using a specific cap triangulator.
    pub fn with_triangulator(triangulator: Box<dyn Triangulator>) -> Self {
        let ground = SceneObject::new(
            "ground",
            ObjectKind::Ground,
            primitives::ground(GROUND_SIZE, GROUND_SIZE),
        )
        .with_material(Material::new("groundMaterial", [40.0 / 255.0, 30.0 / 255.0, 0.0, 1.0]));
        let ground_id = ground.id;

        let mut objects = HashMap::new();
        objects.insert(ground_id, ground);

        tracing::debug!("Created headless scene with {} triangulator", triangulator.name());

        Self {
            objects,
            ground: ground_id,
            camera: Camera::default(),
            triangulator,
        }
    }

    pub fn ground_id(&self) -> Uuid {
        self.ground
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Gets an object by ID.
    pub fn get(&self, id: Uuid) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Returns the number of objects, ground included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Always false while the ground exists.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// IDs of every object of a kind
    pub fn objects_of_kind(&self, kind: ObjectKind) -> Vec<Uuid> {
        self.objects
            .values()
            .filter(|o| o.kind == kind)
            .map(|o| o.id)
            .collect()
    }

    /// Number of objects of a kind
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|o| o.kind == kind).count()
    }

    /// Pixel position of a world point
    pub fn screen_point(&self, world: Vec3) -> Option<Vec2> {
        self.camera.world_to_screen(world)
    }

    /// Pick whatever lies under the projection of a world point
    pub fn pick_world(&self, world: Vec3) -> PickResult {
        match self.screen_point(world) {
            Some(screen) => self.pick(screen.x, screen.y),
            None => PickResult::miss(),
        }
    }

    fn add(&mut self, object: SceneObject) -> Uuid {
        let id = object.id;
        tracing::debug!("Added {} '{}' ({})", object.kind.name(), object.name, id);
        self.objects.insert(id, object);
        id
    }

    fn object(&self, id: Uuid) -> ViewportResult<&SceneObject> {
        self.objects.get(&id).ok_or(ViewportError::ObjectNotFound(id))
    }

    fn object_mut(&mut self, id: Uuid) -> ViewportResult<&mut SceneObject> {
        self.objects
            .get_mut(&id)
            .ok_or(ViewportError::ObjectNotFound(id))
    }
}

impl Viewport for HeadlessScene {
    fn pick(&self, screen_x: f32, screen_y: f32) -> PickResult {
        let (ray_origin, ray_dir) = self.camera.screen_to_ray(screen_x, screen_y);

        let mut closest: Option<(&SceneObject, MeshHit)> = None;
        for object in self.objects.values().filter(|o| o.pickable) {
            let Some(hit) = ray_mesh_intersection(ray_origin, ray_dir, &object.mesh, &object.transform())
            else {
                continue;
            };
            if closest.is_none_or(|(_, best)| hit.distance < best.distance) {
                closest = Some((object, hit));
            }
        }

        match closest {
            Some((object, hit)) => PickResult::hit_at(
                ray_origin + ray_dir * hit.distance,
                hit.face_id,
                object.id,
                object.kind,
            ),
            None => PickResult::miss(),
        }
    }

    fn create_preview_marker(&mut self, at: Vec3, diameter: f32) -> Uuid {
        self.add(
            SceneObject::new("PlaceHolder", ObjectKind::PreviewMarker, primitives::sphere(diameter))
                .with_position(at),
        )
    }

    fn create_vertex_handle(&mut self, at: Vec3, diameter: f32) -> Uuid {
        self.add(
            SceneObject::new("vertexcontrol", ObjectKind::VertexHandle, primitives::sphere(diameter))
                .with_position(at),
        )
    }

    fn build_polygon(&mut self, ring: &PolygonRing) -> ViewportResult<Uuid> {
        let mesh = flat_polygon(ring, self.triangulator.as_ref())?;
        Ok(self.add(SceneObject::new("polygon", ObjectKind::Polygon, mesh.into())))
    }

    fn extrude(&mut self, ring: &PolygonRing, depth: f32) -> ViewportResult<Uuid> {
        let mesh = extrude_prism(ring, depth, self.triangulator.as_ref())?;
        Ok(self.add(SceneObject::new(
            "Extruded Mesh",
            ObjectKind::Solid,
            mesh.into(),
        )))
    }

    fn dispose(&mut self, id: Uuid) -> bool {
        match self.objects.remove(&id) {
            Some(object) => {
                tracing::debug!("Disposed {} ({})", object.kind.name(), id);
                true
            }
            None => false,
        }
    }

    fn exists(&self, id: Uuid) -> bool {
        self.objects.contains_key(&id)
    }

    fn kind(&self, id: Uuid) -> Option<ObjectKind> {
        self.objects.get(&id).map(|o| o.kind)
    }

    fn raw_vertex_buffer(&self, id: Uuid) -> ViewportResult<RawVertexBuffer> {
        Ok(self.object(id)?.mesh.positions.clone())
    }

    fn set_raw_vertex_buffer(
        &mut self,
        id: Uuid,
        buffer: &RawVertexBuffer,
    ) -> ViewportResult<()> {
        self.object_mut(id)?
            .mesh
            .positions
            .overwrite(buffer.positions())?;
        Ok(())
    }

    fn world_transform(&self, id: Uuid) -> ViewportResult<Mat4> {
        Ok(self.object(id)?.transform())
    }

    fn set_position(&mut self, id: Uuid, position: Vec3) -> ViewportResult<()> {
        self.object_mut(id)?.position = position;
        Ok(())
    }

    fn translate(&mut self, id: Uuid, delta: Vec3) -> ViewportResult<()> {
        self.object_mut(id)?.position += delta;
        Ok(())
    }

    fn set_material(&mut self, id: Uuid, material: Material) -> ViewportResult<()> {
        self.object_mut(id)?.material = material;
        Ok(())
    }
}
