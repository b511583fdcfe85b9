use crate::app::GameState;
use crate::input::{InputHandler, InputSnapshot, Key, TouchPoint};

const WIDTH: u32 = 300;
const HEIGHT: u32 = 300;

fn touch_state() -> GameState {
    let mut state = GameState::new(50.0, 50.0, 2.0);
    state.touch_enabled = true;
    state
}

fn touch_at(x: i32, y: i32, press_ticks: u32) -> InputSnapshot {
    InputSnapshot::new(WIDTH, HEIGHT).with_touch(TouchPoint {
        id: 0,
        x,
        y,
        press_ticks,
    })
}

#[test]
fn test_no_input_does_not_move() {
    let mut state = GameState::default();
    let mut handler = InputHandler::default();
    assert!(!handler.handle(&mut state, &InputSnapshot::new(WIDTH, HEIGHT)));
    assert_eq!((state.x, state.y), (100.0, 100.0));
}

#[test]
fn test_diagonal_keys_are_not_normalized() {
    let mut state = GameState::new(50.0, 50.0, 2.0);
    let mut handler = InputHandler::default();
    let input = InputSnapshot::new(WIDTH, HEIGHT)
        .with_held(Key::Left)
        .with_held(Key::Up);

    assert!(handler.handle(&mut state, &input));
    assert_eq!((state.x, state.y), (48.0, 48.0));
    assert!(state.facing_left);
}

#[test]
fn test_facing_follows_latest_direction() {
    let mut state = GameState::default();
    let mut handler = InputHandler::default();
    let right = InputSnapshot::new(WIDTH, HEIGHT).with_held(Key::Right);
    let left = InputSnapshot::new(WIDTH, HEIGHT).with_held(Key::Left);

    handler.handle(&mut state, &right);
    assert!(!state.facing_left);
    handler.handle(&mut state, &left);
    assert!(state.facing_left);
    handler.handle(&mut state, &right);
    assert!(!state.facing_left);
    assert_eq!(state.x, 102.0);
}

#[test]
fn test_attack_is_edge_triggered() {
    let mut state = GameState::default();
    let mut handler = InputHandler::default();

    handler.handle(&mut state, &InputSnapshot::new(WIDTH, HEIGHT).with_held(Key::Attack));
    assert!(!state.is_attacking, "held without a press does nothing");

    handler.handle(&mut state, &InputSnapshot::new(WIDTH, HEIGHT).with_pressed(Key::Attack));
    assert!(state.is_attacking);
    assert_eq!(state.attack_counter, 0);
}

#[test]
fn test_movement_gated_while_attacking_when_disabled() {
    let mut state = GameState::default();
    state.trigger_attack();
    let input = InputSnapshot::new(WIDTH, HEIGHT).with_held(Key::Right);

    let mut gated = InputHandler::new(15, false);
    assert!(!gated.handle(&mut state, &input));
    assert_eq!(state.x, 100.0);

    let mut free = InputHandler::new(15, true);
    assert!(free.handle(&mut state, &input));
    assert_eq!(state.x, 102.0);
}

#[test]
fn test_touch_thirds() {
    let mut handler = InputHandler::default();
    let cases = [
        ((50, 150), (-2.0, 0.0), true),
        ((250, 150), (2.0, 0.0), false),
        ((150, 50), (0.0, -2.0), false),
        ((150, 250), (0.0, 2.0), false),
        ((20, 280), (-2.0, 2.0), true),
    ];

    for ((x, y), (dx, dy), facing_left) in cases {
        let mut state = touch_state();
        assert!(handler.handle(&mut state, &touch_at(x, y, 5)), "touch at {x},{y}");
        assert_eq!((state.x - 50.0, state.y - 50.0), (dx, dy), "touch at {x},{y}");
        assert_eq!(state.facing_left, facing_left, "touch at {x},{y}");
    }
}

#[test]
fn test_touch_center_does_not_move() {
    let mut state = touch_state();
    let mut handler = InputHandler::default();
    assert!(!handler.handle(&mut state, &touch_at(150, 150, 3)));
    // exactly on the third boundaries
    assert!(!handler.handle(&mut state, &touch_at(100, 200, 3)));
    assert_eq!((state.x, state.y), (50.0, 50.0));
}

#[test]
fn test_touch_ignored_when_disabled() {
    let mut state = GameState::new(50.0, 50.0, 2.0);
    let mut handler = InputHandler::default();
    assert!(!handler.handle(&mut state, &touch_at(10, 10, 1)));
    assert_eq!(handler.last_tap_time(), None);
}

#[test]
fn test_double_tap_records_then_attacks() {
    let mut state = touch_state();
    let mut handler = InputHandler::default();

    state.tick_count = 30;
    handler.handle(&mut state, &touch_at(150, 150, 1));
    assert_eq!(handler.last_tap_time(), Some(30));
    assert!(!state.is_attacking);

    state.tick_count = 44;
    handler.handle(&mut state, &touch_at(150, 150, 1));
    assert!(state.is_attacking);
    assert_eq!(handler.last_tap_time(), None);
}

#[test]
fn test_slow_second_tap_starts_new_window() {
    let mut state = touch_state();
    let mut handler = InputHandler::default();

    state.tick_count = 30;
    handler.handle(&mut state, &touch_at(150, 150, 1));
    state.tick_count = 45;
    handler.handle(&mut state, &touch_at(150, 150, 1));
    assert!(!state.is_attacking);
    assert_eq!(handler.last_tap_time(), Some(45));

    state.tick_count = 50;
    handler.handle(&mut state, &touch_at(150, 150, 1));
    assert!(state.is_attacking);
}

#[test]
fn test_tap_at_tick_zero_counts() {
    let mut state = touch_state();
    let mut handler = InputHandler::default();

    handler.handle(&mut state, &touch_at(150, 150, 1));
    state.tick_count = 5;
    handler.handle(&mut state, &touch_at(150, 150, 1));
    assert!(state.is_attacking);
}

#[test]
fn test_held_touch_and_multi_touch_are_not_taps() {
    let mut state = touch_state();
    let mut handler = InputHandler::default();

    handler.handle(&mut state, &touch_at(150, 150, 2));
    assert_eq!(handler.last_tap_time(), None, "press already in progress");

    let two_fingers = touch_at(150, 150, 1).with_touch(TouchPoint {
        id: 1,
        x: 10,
        y: 10,
        press_ticks: 1,
    });
    handler.handle(&mut state, &two_fingers);
    assert_eq!(handler.last_tap_time(), None);
    assert!(!state.is_attacking, "a second finger does not attack");
}
