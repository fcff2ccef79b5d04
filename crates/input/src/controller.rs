use crate::state::InputState;
use glam::Vec2;
use origins_camera::{FlyCamera, OrientationCamera};
use origins_common::{Action, Bindings, MoveDirection};

/// A camera the controller can steer.
pub trait Controllable {
    fn translate(&mut self, direction: MoveDirection, dt: f32, boosted: bool);

    /// `delta` is relative cursor motion (y up); `cursor` is the latest
    /// absolute sample, if one arrived this frame.
    fn look(&mut self, delta: Vec2, cursor: Option<Vec2>);

    fn zoom(&mut self, _scroll: f32) {}
}

impl Controllable for FlyCamera {
    fn translate(&mut self, direction: MoveDirection, dt: f32, boosted: bool) {
        FlyCamera::translate(self, direction, dt, boosted);
    }

    fn look(&mut self, delta: Vec2, _cursor: Option<Vec2>) {
        if delta != Vec2::ZERO {
            self.rotate(delta.x, delta.y);
        }
    }

    fn zoom(&mut self, scroll: f32) {
        FlyCamera::zoom(self, scroll);
    }
}

impl Controllable for OrientationCamera {
    fn translate(&mut self, direction: MoveDirection, dt: f32, boosted: bool) {
        OrientationCamera::translate(self, direction, dt, boosted);
    }

    fn look(&mut self, _delta: Vec2, cursor: Option<Vec2>) {
        if let Some(c) = cursor {
            self.drag_look(c.x, c.y);
        }
    }
}

/// Whether the host should keep running after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Maps held keys, cursor motion and scroll onto a camera once per frame.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    bindings: Bindings,
}

impl CameraController {
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    fn any_held(&self, input: &InputState, action: Action) -> bool {
        input
            .held()
            .any(|key| self.bindings.action_for(key) == Some(action))
    }

    /// Apply one frame of input. A held quit key short-circuits the frame.
    pub fn update<C: Controllable>(
        &self,
        camera: &mut C,
        input: &mut InputState,
        dt: f32,
    ) -> Flow {
        if self.any_held(input, Action::Quit) {
            tracing::info!("quit requested");
            return Flow::Quit;
        }

        let boosted = self.any_held(input, Action::Boost);
        for key in input.held() {
            if let Some(direction) = self.bindings.action_for(key).and_then(|a| a.direction()) {
                camera.translate(direction, dt, boosted);
            }
        }

        let delta = input.take_cursor_delta();
        let cursor = input.take_cursor();
        if delta != Vec2::ZERO || cursor.is_some() {
            tracing::debug!("look delta={delta} cursor={cursor:?}");
            camera.look(delta, cursor);
        }

        let scroll = input.take_scroll();
        if scroll != 0.0 {
            camera.zoom(scroll);
        }

        Flow::Continue
    }
}
