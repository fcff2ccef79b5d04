use crate::projection::{CameraError, MAX_FOV_DEGREES, MIN_FOV_DEGREES, Projection};
use crate::view::View;
use glam::{Mat4, Vec3};
use origins_common::{CameraSettings, MoveDirection, Viewport};

/// Pitch is held this far from straight up/down so the view never flips.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Mouse-look fly camera driven by yaw, pitch, and a zoomable field of view.
///
/// Yaw 0 looks down +X; the default yaw of -90 degrees looks down -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Radians.
    pub yaw: f32,
    /// Radians, kept within +/- [`PITCH_LIMIT_DEGREES`].
    pub pitch: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub speed: f32,
    /// Degrees of rotation per pixel of cursor motion.
    pub sensitivity: f32,
    pub boost_multiplier: f32,
    /// Zoom bounds, radians.
    pub min_fov: f32,
    pub max_fov: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

/// Zoom bounds in radians, ordered and inside the projectable range.
/// Non-finite bounds fall back to the defaults.
fn zoom_bounds(settings: &CameraSettings) -> (f32, f32) {
    let defaults = CameraSettings::default();
    let pick = |v: f32, fallback: f32| {
        let v = if v.is_finite() { v } else { fallback };
        v.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES)
    };
    let a = pick(settings.min_fov_degrees, defaults.min_fov_degrees);
    let b = pick(settings.max_fov_degrees, defaults.max_fov_degrees);
    if a > b {
        tracing::warn!("zoom bounds min={a} max={b} are inverted; swapping");
    }
    (a.min(b).to_radians(), a.max(b).to_radians())
}

impl FlyCamera {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let (min_fov, max_fov) = zoom_bounds(settings);
        let mut cam = Self {
            position: settings.position,
            yaw: settings.yaw_degrees.to_radians(),
            pitch: 0.0,
            fov: max_fov,
            speed: settings.speed,
            sensitivity: settings.sensitivity,
            boost_multiplier: settings.boost_multiplier,
            min_fov,
            max_fov,
        };
        cam.set_pitch(settings.pitch_degrees.to_radians());
        cam
    }

    pub fn with_fov_degrees(mut self, fov_degrees: f32) -> Self {
        if fov_degrees.is_nan() {
            tracing::warn!("ignoring NaN fov");
            return self;
        }
        self.fov = self.clamp_fov(fov_degrees.to_radians());
        self
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        self.pitch = pitch.clamp(-limit, limit);
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Apply a cursor offset in pixels. `dy` is positive when the cursor
    /// moves up the screen.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += (dx * self.sensitivity).to_radians();
        self.set_pitch(self.pitch + (dy * self.sensitivity).to_radians());
    }

    /// Scroll-wheel zoom: scrolling up narrows the field of view.
    pub fn zoom(&mut self, scroll_y: f32) {
        if scroll_y.is_nan() {
            return;
        }
        let fov = (self.fov.to_degrees() - scroll_y).to_radians();
        self.fov = self.clamp_fov(fov);
    }

    // max/min rather than clamp: the bounds are public and may be inverted.
    fn clamp_fov(&self, fov: f32) -> f32 {
        fov.max(self.min_fov).min(self.max_fov)
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    pub fn translate(&mut self, direction: MoveDirection, dt: f32, boosted: bool) {
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!("ignoring camera step with dt={dt}");
            return;
        }
        let mut velocity = self.speed * dt;
        if boosted {
            velocity *= self.boost_multiplier;
        }
        match direction {
            MoveDirection::Forward => self.position += self.forward() * velocity,
            MoveDirection::Backward => self.position -= self.forward() * velocity,
            MoveDirection::Left => self.position -= self.right() * velocity,
            MoveDirection::Right => self.position += self.right() * velocity,
            MoveDirection::Up => self.position.y += velocity,
            MoveDirection::Down => self.position.y -= velocity,
        }
    }

    pub fn move_forward(&mut self, dt: f32) {
        self.translate(MoveDirection::Forward, dt, false);
    }

    pub fn move_backward(&mut self, dt: f32) {
        self.translate(MoveDirection::Backward, dt, false);
    }

    pub fn move_left(&mut self, dt: f32) {
        self.translate(MoveDirection::Left, dt, false);
    }

    pub fn move_right(&mut self, dt: f32) {
        self.translate(MoveDirection::Right, dt, false);
    }

    /// Perspective for the current zoom level.
    pub fn projection(
        &self,
        viewport: Viewport,
        near: f32,
        far: f32,
    ) -> Result<Projection, CameraError> {
        Projection::new(self.fov_degrees(), viewport, near, far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        View::view_matrix(self)
    }
}

impl View for FlyCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        FlyCamera::forward(self)
    }

    fn up(&self) -> Vec3 {
        FlyCamera::up(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::view_projection;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, 1e-5), "{a} != {b}");
    }

    #[test]
    fn default_camera_faces_negative_z() {
        let cam = FlyCamera::default();
        assert_vec_eq(cam.forward(), Vec3::NEG_Z);
        assert_vec_eq(cam.right(), Vec3::X);
        assert_vec_eq(cam.up(), Vec3::Y);
        assert!((cam.fov_degrees() - 45.0).abs() < 1e-4);
    }

    #[test]
    fn basis_is_orthonormal_after_rotation() {
        let mut cam = FlyCamera::default();
        cam.rotate(137.0, -52.0);
        let (f, r, u) = (cam.forward(), cam.right(), cam.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(r.dot(u).abs() < 1e-5);
    }

    #[test]
    fn rotate_uses_degrees_per_pixel() {
        let mut cam = FlyCamera::default();
        cam.rotate(900.0, 0.0);
        // 900 px * 0.1 deg/px = 90 degrees of yaw: -Z turns to +X.
        assert_vec_eq(cam.forward(), Vec3::X);
    }

    #[test]
    fn positive_dy_looks_up() {
        let mut cam = FlyCamera::default();
        cam.rotate(0.0, 100.0);
        assert!(cam.forward().y > 0.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.rotate(0.0, 10_000.0);
        assert!((cam.pitch.to_degrees() - PITCH_LIMIT_DEGREES).abs() < 1e-3);
        cam.rotate(0.0, -50_000.0);
        assert!((cam.pitch.to_degrees() + PITCH_LIMIT_DEGREES).abs() < 1e-3);
        assert!(!cam.view_matrix().is_nan());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.zoom(10.0);
        assert!((cam.fov_degrees() - 35.0).abs() < 1e-3);
        cam.zoom(1000.0);
        assert!((cam.fov_degrees() - 1.0).abs() < 1e-3);
        cam.zoom(-1000.0);
        assert!((cam.fov_degrees() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn camera_movement() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        cam.move_forward(1.0);
        assert_vec_eq(cam.position, start + Vec3::NEG_Z * 2.5);
        cam.move_backward(1.0);
        assert_vec_eq(cam.position, start);
        cam.move_right(2.0);
        assert_vec_eq(cam.position, start + Vec3::X * 5.0);
        cam.move_left(2.0);
        assert_vec_eq(cam.position, start);
    }

    #[test]
    fn boost_and_vertical_moves() {
        let mut cam = FlyCamera::default();
        cam.translate(MoveDirection::Up, 1.0, true);
        assert!((cam.position.y - 10.0).abs() < 1e-5);
        cam.translate(MoveDirection::Down, 1.0, false);
        assert!((cam.position.y - 7.5).abs() < 1e-5);
    }

    #[test]
    fn bad_delta_time_is_ignored() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        cam.move_forward(-1.0);
        cam.move_forward(f32::NAN);
        assert_eq!(cam.position, start);
    }

    #[test]
    fn view_projection_maps_target_to_center() {
        let cam = FlyCamera::default();
        let proj = cam.projection(Viewport::default(), 0.1, 100.0).unwrap();
        let vp = view_projection(&cam, &proj);
        let clip = vp * (cam.position + cam.forward() * 5.0).extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn inverted_zoom_bounds_are_ordered() {
        let settings = CameraSettings {
            min_fov_degrees: 60.0,
            max_fov_degrees: 10.0,
            ..CameraSettings::default()
        };
        let mut cam = FlyCamera::from_settings(&settings).with_fov_degrees(45.0);
        assert!((cam.fov_degrees() - 45.0).abs() < 1e-3);
        cam.zoom(-100.0);
        assert!((cam.fov_degrees() - 60.0).abs() < 1e-3);
        cam.zoom(100.0);
        assert!((cam.fov_degrees() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn nan_zoom_bounds_fall_back_to_defaults() {
        let settings = CameraSettings {
            min_fov_degrees: f32::NAN,
            max_fov_degrees: f32::INFINITY,
            ..CameraSettings::default()
        };
        let mut cam = FlyCamera::from_settings(&settings).with_fov_degrees(45.0);
        assert!((cam.fov_degrees() - 45.0).abs() < 1e-3);
        cam.zoom(f32::NAN);
        cam.zoom(1000.0);
        assert!((cam.fov_degrees() - 1.0).abs() < 1e-3);
        let cam = cam.with_fov_degrees(f32::NAN);
        assert!(cam.fov.is_finite());
    }

    #[test]
    fn settings_pitch_is_clamped() {
        let settings = CameraSettings {
            pitch_degrees: 120.0,
            ..CameraSettings::default()
        };
        let cam = FlyCamera::from_settings(&settings);
        assert!((cam.pitch.to_degrees() - PITCH_LIMIT_DEGREES).abs() < 1e-3);
    }
}
