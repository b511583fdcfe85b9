//! Input contract between the terminal and the simulation.
//!
//! A fresh [`InputSnapshot`] is built once per tick. Movement keys are read as
//! levels (`is_held`), attack, fullscreen and quit as edges (`just_pressed`).

use std::collections::HashSet;

pub mod crossterm_input;
pub mod handler;

pub use crossterm_input::CrosstermInput;
pub use handler::InputHandler;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Attack,
    Fullscreen,
    Quit,
}

/// One active touch point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    /// 1 on the tick the touch began.
    pub press_ticks: u32,
}

/// Size of one terminal cell in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(2),
        }
    }

    /// Center of a cell in logical pixels.
    pub fn cell_center(&self, col: u16, row: u16) -> (i32, i32) {
        (
            col as i32 * self.width as i32 + self.width as i32 / 2,
            row as i32 * self.height as i32 + self.height as i32 / 2,
        )
    }

    pub fn logical_size(&self, cols: u16, rows: u16) -> (u32, u32) {
        (
            cols as u32 * self.width as u32,
            rows as u32 * self.height as u32,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    pub touches: Vec<TouchPoint>,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl InputSnapshot {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn with_held(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Marks `key` as pressed this tick. A fresh press is also held.
    pub fn with_pressed(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.held.insert(key);
        self
    }

    pub fn with_touch(mut self, touch: TouchPoint) -> Self {
        self.touches.push(touch);
        self
    }
}
