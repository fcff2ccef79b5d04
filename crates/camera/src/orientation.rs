use crate::projection::{CameraError, Projection};
use crate::uniform::CameraUniform;
use crate::view::View;
use glam::{Mat4, Quat, Vec3};
use origins_common::{MoveDirection, Viewport};

/// Pitch rotations that would bring the look direction closer than
/// 90 - this many degrees to `up` are dropped.
const MAX_TILT_DEGREES: f32 = 85.0;

/// Vector camera: an explicit look direction plus an up vector, with the
/// combined projection-view matrix cached by [`OrientationCamera::update_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationCamera {
    pub position: Vec3,
    orientation: Vec3,
    pub up: Vec3,
    viewport: Viewport,
    pub speed: f32,
    pub boost_speed: f32,
    /// Degrees of rotation for a cursor offset spanning the whole viewport.
    pub sensitivity: f32,
    matrix: Mat4,
}

impl OrientationCamera {
    pub fn new(viewport: Viewport, position: Vec3) -> Self {
        Self {
            position,
            orientation: Vec3::NEG_Z,
            up: Vec3::Y,
            viewport,
            speed: 0.1,
            boost_speed: 0.4,
            sensitivity: 100.0,
            matrix: Mat4::IDENTITY,
        }
    }

    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Point the camera along `direction`. Zero-length input, and directions
    /// tilted past the drag-look limit toward `up`, are ignored.
    pub fn set_orientation(&mut self, direction: Vec3) {
        match direction.try_normalize() {
            Some(dir) if self.within_tilt_limit(dir) => self.orientation = dir,
            _ => tracing::warn!("ignoring degenerate orientation {direction}"),
        }
    }

    fn within_tilt_limit(&self, dir: Vec3) -> bool {
        let tilt = (dir.angle_between(self.up) - 90.0_f32.to_radians()).abs();
        tilt <= MAX_TILT_DEGREES.to_radians()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Zero when `up` is degenerate or parallel to the look direction.
    fn side(&self) -> Vec3 {
        self.orientation.cross(self.up).try_normalize().unwrap_or(Vec3::ZERO)
    }

    /// Recompute and cache `projection * view`.
    pub fn update_matrix(
        &mut self,
        fov_degrees: f32,
        near: f32,
        far: f32,
    ) -> Result<(), CameraError> {
        let projection = Projection::new(fov_degrees, self.viewport, near, far)?;
        self.matrix = projection.matrix() * View::view_matrix(self);
        Ok(())
    }

    /// The matrix from the last [`update_matrix`](Self::update_matrix) call.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(self.matrix)
    }

    pub fn translate(&mut self, direction: MoveDirection, dt: f32, boosted: bool) {
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!("ignoring camera step with dt={dt}");
            return;
        }
        let step = if boosted { self.boost_speed } else { self.speed } * dt;
        match direction {
            MoveDirection::Forward => self.position += step * self.orientation,
            MoveDirection::Backward => self.position -= step * self.orientation,
            MoveDirection::Left => self.position -= step * self.side(),
            MoveDirection::Right => self.position += step * self.side(),
            MoveDirection::Up => self.position += step * self.up,
            MoveDirection::Down => self.position -= step * self.up,
        }
    }

    /// Turn toward the cursor, measured as an offset from the viewport center.
    /// The host re-centers the cursor after each call.
    pub fn drag_look(&mut self, cursor_x: f32, cursor_y: f32) {
        if self.viewport.is_empty() {
            return;
        }
        let w = self.viewport.width as f32;
        let h = self.viewport.height as f32;
        let rot_x = self.sensitivity * (cursor_y - h / 2.0) / h;
        let rot_y = self.sensitivity * (cursor_x - w / 2.0) / w;

        let side = self.side();
        if side != Vec3::ZERO {
            let tilted = Quat::from_axis_angle(side, (-rot_x).to_radians()) * self.orientation;
            if self.within_tilt_limit(tilted) {
                self.orientation = tilted.normalize();
            } else {
                tracing::debug!("dropping pitch rotation of {rot_x} degrees");
            }
        }

        if let Some(up) = self.up.try_normalize() {
            self.orientation =
                (Quat::from_axis_angle(up, (-rot_y).to_radians()) * self.orientation).normalize();
        }
    }
}

impl View for OrientationCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.orientation
    }

    fn up(&self) -> Vec3 {
        self.up
    }
}
