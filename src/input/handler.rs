use crate::app::GameState;
use crate::input::{InputSnapshot, Key};

/// Ticks between two taps that still count as a double tap (exclusive).
pub const DOUBLE_TAP_WINDOW: u64 = 15;

/// Maps an [`InputSnapshot`] onto the game state.
///
/// Owns the double-tap bookkeeping, which has to survive between ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_tap_time: Option<u64>,
    double_tap_window: u64,
    move_while_attacking: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW, true)
    }
}

impl InputHandler {
    pub fn new(double_tap_window: u64, move_while_attacking: bool) -> Self {
        Self {
            last_tap_time: None,
            double_tap_window,
            move_while_attacking,
        }
    }

    #[allow(dead_code)]
    pub fn last_tap_time(&self) -> Option<u64> {
        self.last_tap_time
    }

    /// Applies keyboard then touch input. Returns whether the character moved.
    pub fn handle(&mut self, state: &mut GameState, input: &InputSnapshot) -> bool {
        let can_move = self.move_while_attacking || !state.is_attacking;
        let mut moved = false;

        if can_move {
            moved |= handle_keyboard_movement(state, input);
        }
        if input.just_pressed(Key::Attack) {
            state.trigger_attack();
        }

        if state.touch_enabled {
            if can_move {
                moved |= handle_touch_movement(state, input);
            }
            self.handle_double_tap(state, input);
        }

        moved
    }

    fn handle_double_tap(&mut self, state: &mut GameState, input: &InputSnapshot) {
        let [touch] = input.touches.as_slice() else {
            return;
        };
        if touch.press_ticks != 1 {
            return;
        }

        let now = state.tick_count;
        match self.last_tap_time {
            Some(last) if now.saturating_sub(last) < self.double_tap_window => {
                log::debug!(
                    "Double tap on touch {} ({} ticks apart)",
                    touch.id,
                    now.saturating_sub(last)
                );
                state.trigger_attack();
                self.last_tap_time = None;
            }
            _ => self.last_tap_time = Some(now),
        }
    }
}

fn handle_keyboard_movement(state: &mut GameState, input: &InputSnapshot) -> bool {
    let mut moved = false;
    if input.is_held(Key::Right) {
        state.move_right();
        moved = true;
    }
    if input.is_held(Key::Left) {
        state.move_left();
        moved = true;
    }
    if input.is_held(Key::Up) {
        state.move_up();
        moved = true;
    }
    if input.is_held(Key::Down) {
        state.move_down();
        moved = true;
    }
    moved
}

/// The first touch steers: outer thirds of the screen move on that axis, the
/// center third does nothing.
fn handle_touch_movement(state: &mut GameState, input: &InputSnapshot) -> bool {
    let Some(touch) = input.touches.first() else {
        return false;
    };
    let width = input.screen_width as i64;
    let height = input.screen_height as i64;
    let (x, y) = (touch.x as i64, touch.y as i64);
    let mut moved = false;

    if x < width / 3 {
        state.move_left();
        moved = true;
    } else if x > width * 2 / 3 {
        state.move_right();
        moved = true;
    }

    if y < height / 3 {
        state.move_up();
        moved = true;
    } else if y > height * 2 / 3 {
        state.move_down();
        moved = true;
    }

    moved
}
