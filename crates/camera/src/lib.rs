//! Camera core: view and projection matrices for a first-person eye.
//!
//! Two camera models share the [`View`] trait:
//! - [`FlyCamera`]: yaw/pitch mouse-look with scroll zoom.
//! - [`OrientationCamera`]: explicit look vector, drag-to-look, cached matrix.
//!
//! # Invariants
//! - Look, right and up vectors are unit length and mutually orthogonal.
//! - Pitch never reaches the poles, so `look_at` never degenerates.
//! - Projections are only built from validated parameters.

mod fly;
mod orientation;
mod projection;
mod uniform;
mod view;

pub use fly::{FlyCamera, PITCH_LIMIT_DEGREES};
pub use orientation::OrientationCamera;
pub use projection::{CameraError, MAX_FOV_DEGREES, MIN_FOV_DEGREES, Projection};
pub use uniform::CameraUniform;
pub use view::{View, view_projection};

pub fn crate_info() -> &'static str {
    "origins-camera v0.1.0"
}
