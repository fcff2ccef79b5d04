//! Recorded input for driving a camera without a window.
//!
//! ```yaml
//! frames:
//!   - dt: 0.016
//!     keys: [w, left_shift]
//!     repeat: 60
//!   - cursor: [500.0, 300.0]
//!     scroll: 2.0
//! ```

use crate::controller::{CameraController, Controllable, Flow};
use crate::state::InputState;
use origins_common::{Format, Key};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported script format: {0:?}")]
    UnsupportedFormat(String),
    #[error("frame {frame}: delta time must be finite and non-negative, got {dt}")]
    InvalidDelta { frame: usize, dt: f32 },
}

fn default_dt() -> f32 {
    1.0 / 60.0
}

fn default_repeat() -> u32 {
    1
}

/// One host frame: the keys held during it, plus optional cursor and scroll events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<[f32; 2]>,
    #[serde(default)]
    pub scroll: f32,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl Default for ScriptFrame {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            keys: Vec::new(),
            cursor: None,
            scroll: 0.0,
            repeat: default_repeat(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<ScriptFrame>,
}

/// Summary of a replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayReport {
    /// Frames actually applied, counting repeats.
    pub frames: u64,
    /// Sum of `dt` over applied frames, seconds.
    pub elapsed: f32,
    /// True if a quit key stopped the replay early.
    pub quit: bool,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let format = Format::from_path(path)
            .map_err(|_| ScriptError::UnsupportedFormat(path.display().to_string()))?;
        let text = std::fs::read_to_string(path)?;
        let script = Self::parse(&text, format)?;
        tracing::info!(
            "loaded input script {} ({} frames)",
            path.display(),
            script.frames.len()
        );
        Ok(script)
    }

    pub fn parse(text: &str, format: Format) -> Result<Self, ScriptError> {
        let script: Self = match format {
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Json => serde_json::from_str(text)?,
        };
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        for (i, frame) in self.frames.iter().enumerate() {
            if !frame.dt.is_finite() || frame.dt < 0.0 {
                return Err(ScriptError::InvalidDelta {
                    frame: i,
                    dt: frame.dt,
                });
            }
        }
        Ok(())
    }

    /// Total frames the script would apply if it ran to the end.
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    /// Feed every frame through `controller`. Keys a frame does not list are
    /// released before it runs. Stops at the first frame that requests quit.
    pub fn replay<C: Controllable>(
        &self,
        controller: &CameraController,
        camera: &mut C,
        input: &mut InputState,
    ) -> ReplayReport {
        let mut report = ReplayReport {
            frames: 0,
            elapsed: 0.0,
            quit: false,
        };

        for frame in &self.frames {
            for _ in 0..frame.repeat {
                input.release_all();
                for key in &frame.keys {
                    input.press(*key);
                }
                if let Some([x, y]) = frame.cursor {
                    input.cursor_moved(x, y);
                }
                if frame.scroll != 0.0 {
                    input.scroll(frame.scroll);
                }

                let flow = controller.update(camera, input, frame.dt);
                report.frames += 1;
                report.elapsed += frame.dt;
                if flow == Flow::Quit {
                    report.quit = true;
                    tracing::info!("replay stopped by quit after {} frames", report.frames);
                    return report;
                }
            }
        }

        tracing::debug!(
            "replayed {} frames over {:.3}s",
            report.frames,
            report.elapsed
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use origins_camera::FlyCamera;

    const WALK: &str = "
frames:
  - dt: 0.5
    keys: [W]
    repeat: 4
  - dt: 0.25
    keys: [d, left_shift]
";

    #[test]
    fn parse_yaml_with_defaults() {
        let script = InputScript::parse("frames:\n  - keys: [space]\n", Format::Yaml).unwrap();
        let frame = &script.frames[0];
        assert_eq!(frame.keys, vec![Key::Space]);
        assert_eq!(frame.repeat, 1);
        assert!((frame.dt - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn parse_json() {
        let text = r#"{"frames": [{"dt": 0.1, "cursor": [1.0, 2.0], "scroll": -1.0}]}"#;
        let script = InputScript::parse(text, Format::Json).unwrap();
        assert_eq!(script.frames[0].cursor, Some([1.0, 2.0]));
        assert_eq!(script.frames[0].scroll, -1.0);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = InputScript::parse("frames:\n  - keys: [tab]\n", Format::Yaml).unwrap_err();
        assert!(matches!(err, ScriptError::Yaml(_)));
        assert!(err.to_string().contains("tab"));
    }

    #[test]
    fn negative_dt_is_rejected() {
        let err = InputScript::parse("frames:\n  - {}\n  - dt: -1.0\n", Format::Yaml).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidDelta { frame: 1, .. }));
    }

    #[test]
    fn replay_walks_and_strafes() {
        let script = InputScript::parse(WALK, Format::Yaml).unwrap();
        assert_eq!(script.frame_count(), 5);

        let controller = CameraController::default();
        let mut cam = FlyCamera::default();
        let mut input = InputState::new();
        let report = script.replay(&controller, &mut cam, &mut input);

        assert_eq!(report.frames, 5);
        assert!((report.elapsed - 2.25).abs() < 1e-6);
        assert!(!report.quit);
        // 2s forward at 2.5 u/s, then 0.25s right at 10 u/s.
        assert!(cam.position.abs_diff_eq(Vec3::new(2.5, 0.0, -2.0), 1e-4));
        assert!(!input.is_held(Key::W));
    }

    #[test]
    fn replay_stops_on_quit() {
        let script = InputScript {
            frames: vec![
                ScriptFrame {
                    keys: vec![Key::W],
                    repeat: 3,
                    ..ScriptFrame::default()
                },
                ScriptFrame {
                    keys: vec![Key::Escape],
                    ..ScriptFrame::default()
                },
                ScriptFrame {
                    keys: vec![Key::W],
                    repeat: 100,
                    ..ScriptFrame::default()
                },
            ],
        };
        let controller = CameraController::default();
        let mut cam = FlyCamera::default();
        let report = script.replay(&controller, &mut cam, &mut InputState::new());
        assert!(report.quit);
        assert_eq!(report.frames, 4);
    }

    #[test]
    fn load_from_file() {
        let dir = std::env::temp_dir().join("origins_script_test_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("walk.yaml");
        std::fs::write(&path, WALK).unwrap();
        let script = InputScript::load(&path).unwrap();
        assert_eq!(script.frames.len(), 2);

        let bad = dir.join("walk.txt");
        std::fs::write(&bad, WALK).unwrap();
        assert!(matches!(
            InputScript::load(&bad),
            Err(ScriptError::UnsupportedFormat(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
