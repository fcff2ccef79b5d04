use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Framebuffer dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Zero dimensions (minimized window) count as 1, so
    /// the result is always finite and positive.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Apply a framebuffer-size change.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Perspective parameters as they appear in config files (degrees, not radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Starting pose and tuning for the fly camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees of rotation per pixel of cursor motion.
    pub sensitivity: f32,
    pub boost_multiplier: f32,
    pub min_fov_degrees: f32,
    pub max_fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            boost_multiplier: 4.0,
            min_fov_degrees: 1.0,
            max_fov_degrees: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_aspect() {
        let vp = Viewport::new(800, 600);
        assert!((vp.aspect() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn minimized_viewport_has_finite_aspect() {
        let vp = Viewport::new(800, 0);
        assert!(vp.is_empty());
        assert_eq!(vp.aspect(), 800.0);
        let vp = Viewport::new(0, 600);
        assert!(vp.aspect() > 0.0 && vp.aspect().is_finite());
        assert_eq!(Viewport::new(0, 0).aspect(), 1.0);
    }

    #[test]
    fn viewport_resize_and_center() {
        let mut vp = Viewport::default();
        vp.resize(1920, 1080);
        assert_eq!(vp, Viewport::new(1920, 1080));
        assert_eq!(vp.center(), (960.0, 540.0));
    }

    #[test]
    fn camera_settings_defaults_face_negative_z() {
        let s = CameraSettings::default();
        assert_eq!(s.yaw_degrees, -90.0);
        assert_eq!(s.position, Vec3::new(0.0, 0.0, 3.0));
        assert!(s.min_fov_degrees < s.max_fov_degrees);
    }
}
