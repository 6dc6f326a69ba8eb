//! Perspective camera used for screen-space picking.

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A look-at perspective camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in pixels
    pub width: f32,
    pub height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 15.0, -10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 0.8,
            near: 0.1,
            far: 1000.0,
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Camera {
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Resize the viewport
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Convert a pixel position (origin top-left) into a world-space ray.
    ///
    /// Returns the ray origin and normalized direction.
    pub fn screen_to_ray(&self, screen_x: f32, screen_y: f32) -> (Vec3, Vec3) {
        let ndc_x = 2.0 * screen_x / self.width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_y / self.height;

        let inv = self.view_projection().inverse();
        let near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        (near, (far - near).normalize())
    }

    /// Project a world point to pixel coordinates.
    ///
    /// Returns None if the point is behind the camera.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::default();
        let (origin, dir) = camera.screen_to_ray(camera.width / 2.0, camera.height / 2.0);
        let expected = (camera.target - camera.position).normalize();

        assert!((dir - expected).length() < 1e-4);
        assert!((origin - camera.position).length() < 1.0);
    }

    #[test]
    fn test_world_to_screen_round_trips_through_ray() {
        let camera = Camera::default();
        let point = Vec3::new(1.5, 0.0, 2.0);
        let screen = camera.world_to_screen(point).unwrap();
        let (origin, dir) = camera.screen_to_ray(screen.x, screen.y);

        // distance from point to ray
        let to_point = point - origin;
        let closest = origin + dir * to_point.dot(dir);
        assert!((closest - point).length() < 1e-3);
    }

    #[test]
    fn test_point_behind_camera() {
        let camera = Camera::default();
        assert!(camera.world_to_screen(Vec3::new(0.0, 30.0, -30.0)).is_none());
    }
}
