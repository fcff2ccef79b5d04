//! Input layer: key bindings, per-frame input state, and the controller that
//! turns them into camera motion. Also replays recorded input scripts.
//!
//! # Invariants
//! - The host owns the window; this crate only sees plain key, cursor and scroll values.
//! - The first cursor sample after a reset never rotates the camera.
//! - A held quit binding ends the frame before any movement is applied.

pub mod controller;
pub mod script;
pub mod state;

pub use controller::{CameraController, Controllable, Flow};
pub use origins_common::{Action, Bindings, Key, MoveDirection};
pub use script::{InputScript, ReplayReport, ScriptError, ScriptFrame};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "origins-input v0.1.0"
}
