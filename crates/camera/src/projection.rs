use glam::Mat4;
use origins_common::{ProjectionSettings, Viewport};

/// Smallest and largest field of view a projection will accept after clamping.
pub const MIN_FOV_DEGREES: f32 = 0.1;
pub const MAX_FOV_DEGREES: f32 = 179.9;

/// Errors from building camera matrices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("clip planes require 0 < near < far < inf, got near={near} far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("viewport has no area: {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Right-handed perspective with OpenGL clip depth (-1..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(
        fov_degrees: f32,
        viewport: Viewport,
        near: f32,
        far: f32,
    ) -> Result<Self, CameraError> {
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(CameraError::InvalidFov(fov_degrees));
        }
        if !(near > 0.0 && far > near && far.is_finite()) {
            return Err(CameraError::InvalidClipPlanes { near, far });
        }
        if viewport.is_empty() {
            return Err(CameraError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            fov_y: fov_degrees.to_radians(),
            aspect: viewport.aspect(),
            near,
            far,
        })
    }

    pub fn from_settings(
        settings: &ProjectionSettings,
        viewport: Viewport,
    ) -> Result<Self, CameraError> {
        Self::new(settings.fov_degrees, viewport, settings.near, settings.far)
    }

    /// Follow a framebuffer resize. An empty viewport (minimized window)
    /// keeps the previous aspect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            tracing::warn!(
                "keeping aspect {} for empty viewport {}x{}",
                self.aspect,
                viewport.width,
                viewport.height
            );
            return;
        }
        self.aspect = viewport.aspect();
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_y.to_degrees()
    }

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        if fov_degrees.is_nan() {
            tracing::warn!("ignoring NaN fov");
            return;
        }
        let clamped = fov_degrees.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES);
        if clamped != fov_degrees {
            tracing::warn!("fov {fov_degrees} clamped to {clamped}");
        }
        self.fov_y = clamped.to_radians();
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
}
