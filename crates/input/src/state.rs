use glam::Vec2;
use origins_common::Key;
use std::collections::BTreeSet;

/// Input gathered between two camera updates.
///
/// The host feeds raw events in; the controller drains cursor motion and
/// scroll once per frame. Held keys persist until released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
    /// Reference point for the next cursor delta. `None` until the first
    /// sample after construction or [`InputState::reset_cursor`].
    last_cursor: Option<Vec2>,
    pending_cursor: Option<Vec2>,
    cursor_delta: Vec2,
    scroll: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }

    /// Record an absolute cursor position in window pixels (y grows downward).
    ///
    /// The first sample only latches the reference point: it yields neither a
    /// delta nor an absolute sample, so capturing the cursor never produces a jump.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if let Some(last) = self.last_cursor {
            self.cursor_delta += Vec2::new(pos.x - last.x, last.y - pos.y);
            self.pending_cursor = Some(pos);
        }
        self.last_cursor = Some(pos);
    }

    /// Forget the reference point, e.g. when the cursor is released or warped.
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
        self.pending_cursor = None;
        self.cursor_delta = Vec2::ZERO;
    }

    /// Motion since the last take, with y positive upward.
    pub fn take_cursor_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.cursor_delta)
    }

    /// Latest absolute cursor sample since the last take, excluding the
    /// latching sample.
    pub fn take_cursor(&mut self) -> Option<Vec2> {
        self.pending_cursor.take()
    }

    pub fn scroll(&mut self, dy: f32) {
        self.scroll += dy;
    }

    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = InputState::new();
        input.press(Key::W);
        input.press(Key::W);
        input.press(Key::D);
        assert!(input.is_held(Key::W));
        assert_eq!(input.held().count(), 2);
        input.release(Key::W);
        assert!(!input.is_held(Key::W));
        input.release_all();
        assert_eq!(input.held().count(), 0);
    }

    #[test]
    fn first_cursor_sample_produces_no_delta() {
        let mut input = InputState::new();
        input.cursor_moved(400.0, 300.0);
        assert_eq!(input.take_cursor_delta(), Vec2::ZERO);
        assert_eq!(input.take_cursor(), None);

        input.cursor_moved(420.0, 300.0);
        assert_eq!(input.take_cursor(), Some(Vec2::new(420.0, 300.0)));
        assert_eq!(input.take_cursor(), None);
    }

    #[test]
    fn delta_accumulates_with_inverted_y() {
        let mut input = InputState::new();
        input.cursor_moved(400.0, 300.0);
        input.cursor_moved(410.0, 290.0);
        input.cursor_moved(415.0, 280.0);
        assert_eq!(input.take_cursor_delta(), Vec2::new(15.0, 20.0));
        assert_eq!(input.take_cursor_delta(), Vec2::ZERO);
    }

    #[test]
    fn reset_relatches_cursor() {
        let mut input = InputState::new();
        input.cursor_moved(0.0, 0.0);
        input.cursor_moved(5.0, 5.0);
        input.reset_cursor();
        assert_eq!(input.take_cursor_delta(), Vec2::ZERO);
        assert_eq!(input.take_cursor(), None);
        input.cursor_moved(500.0, 500.0);
        assert_eq!(input.take_cursor_delta(), Vec2::ZERO);
        assert_eq!(input.take_cursor(), None);
    }

    #[test]
    fn scroll_accumulates_until_taken() {
        let mut input = InputState::new();
        input.scroll(1.0);
        input.scroll(2.5);
        assert_eq!(input.take_scroll(), 3.5);
        assert_eq!(input.take_scroll(), 0.0);
    }
}
