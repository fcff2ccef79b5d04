//! Shared vocabulary for the origins workspace: viewport and projection
//! settings, key/action bindings, and the on-disk configuration file.

pub mod config;
pub mod keys;
pub mod types;

pub use config::{ConfigError, Format, OriginsConfig};
pub use keys::{Action, Bindings, Key, MoveDirection, ParseKeyError};
pub use types::{CameraSettings, ProjectionSettings, Viewport};

pub fn crate_info() -> &'static str {
    "origins-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
