use glam::{Mat4, Quat, Vec3};
use winit::event::MouseScrollDelta;

/// Vertical field of view shared by rendering and picking.
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Fixed-target camera hovering over the grid plane.
///
/// The camera looks straight down -Z at the grid; scroll zooms toward and
/// away from it with spring smoothing. Rendering and picking both derive
/// their transforms from this one state, so hits always match pixels.
pub struct CameraController {
    pub center: Vec3,
    pub distance: f32,
    pub target_distance: f32,
    pub rotation: Quat,

    accumulated_scroll: f32,
    zoom_speed: f32,
    spring_stiffness: f32,
    spring_damping: f32,
}

impl CameraController {
    pub fn new(distance: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            distance,
            target_distance: distance,
            rotation: Quat::IDENTITY,
            accumulated_scroll: 0.0,
            zoom_speed: 0.15,
            spring_stiffness: 50.0,
            spring_damping: 0.9,
        }
    }

    /// Camera distance that frames a grid of the given world extents.
    pub fn framing_distance(extent_x: f32, extent_y: f32) -> f32 {
        let half = extent_x.max(extent_y) / 2.0;
        half / (FOV_Y / 2.0).tan() * 1.15
    }

    /// Current camera position in world space.
    pub fn position(&self) -> Vec3 {
        let offset = self.rotation * Vec3::new(0.0, 0.0, self.distance);
        self.center + offset
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let scroll_amount = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / 100.0) as f32,
        };
        self.accumulated_scroll += scroll_amount;
    }

    /// Apply accumulated zoom input (call once per frame).
    pub fn update(&mut self, dt: f32) {
        if self.accumulated_scroll.abs() > 0.001 {
            self.target_distance -= self.accumulated_scroll * self.zoom_speed * 10.0;
            self.target_distance = self.target_distance.clamp(0.5, Z_FAR * 0.5);
        }
        self.accumulated_scroll = 0.0;

        let distance_error = self.target_distance - self.distance;
        let velocity = distance_error * self.spring_stiffness * dt;
        self.distance += velocity * (1.0 - self.spring_damping);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position(),
            self.position() + self.rotation * Vec3::NEG_Z,
            self.rotation * Vec3::Y,
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR);
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_backs_away_along_positive_z() {
        let camera = CameraController::new(7.0);
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 7.0));
    }

    #[test]
    fn framing_distance_covers_the_larger_extent() {
        let d = CameraController::framing_distance(5.76, 5.76);
        // Half-extent 2.88 must fit inside the frustum at distance d.
        let visible_half = (FOV_Y / 2.0).tan() * d;
        assert!(visible_half > 2.88);
    }

    #[test]
    fn grid_center_projects_to_screen_center() {
        let camera = CameraController::new(7.0);
        let clip = camera.view_proj(1.0) * Vec3::ZERO.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }
}
