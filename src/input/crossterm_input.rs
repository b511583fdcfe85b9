use crate::input::{CellSize, InputSnapshot, Key, TouchPoint};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::collections::{HashMap, HashSet};

/// Touch id used for the mouse pointer.
const MOUSE_TOUCH_ID: u64 = 0;

/// A physical key that is currently down and the action it is bound to.
#[derive(Debug, Clone, Copy)]
struct HeldKey {
    key: Key,
    last_seen: u64,
}

#[derive(Debug, Clone, Copy)]
struct MouseTouch {
    col: u16,
    row: u16,
    started_tick: u64,
    released: bool,
}

/// Turns the crossterm event stream into one [`InputSnapshot`] per tick.
///
/// Terminals only report key releases when keyboard enhancement is active.
/// Until a release has been observed, a key is considered held for
/// `hold_ticks` ticks after its last press or repeat event.
///
/// Holds are tracked per physical key code, so two keys bound to the same
/// action each produce their own press.
#[derive(Debug)]
pub struct CrosstermInput {
    cell: CellSize,
    hold_ticks: u64,
    tick: u64,
    reports_release: bool,
    held: HashMap<KeyCode, HeldKey>,
    pressed: HashSet<Key>,
    mouse: Option<MouseTouch>,
    cols: u16,
    rows: u16,
}

impl CrosstermInput {
    pub fn new(cell: CellSize, hold_ticks: u32, (cols, rows): (u16, u16)) -> Self {
        Self {
            cell,
            hold_ticks: hold_ticks.max(1) as u64,
            tick: 0,
            reports_release: false,
            held: HashMap::new(),
            pressed: HashSet::new(),
            mouse: None,
            cols,
            rows,
        }
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => {
                self.cols = *cols;
                self.rows = *rows;
            }
            Event::FocusLost => {
                self.held.clear();
                self.mouse = None;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.kind == KeyEventKind::Release {
            if !self.reports_release {
                log::debug!("Terminal reports key releases");
            }
            self.reports_release = true;
            // modifiers on a release may differ from the press
            self.held.remove(&event.code);
            return;
        }

        let Some(key) = map_key(event.code, event.modifiers) else {
            return;
        };
        if event.kind == KeyEventKind::Press && !self.held.contains_key(&event.code) {
            self.pressed.insert(key);
        }
        self.held.insert(
            event.code,
            HeldKey {
                key,
                last_seen: self.tick,
            },
        );
    }

    fn handle_mouse(&mut self, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.mouse = Some(MouseTouch {
                    col: event.column,
                    row: event.row,
                    started_tick: self.tick,
                    released: false,
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(touch) = self.mouse.as_mut() {
                    touch.col = event.column;
                    touch.row = event.row;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(touch) = self.mouse.as_mut() {
                    touch.released = true;
                }
            }
            _ => {}
        }
    }

    /// Builds the snapshot for the current tick and moves on to the next one.
    ///
    /// A click that starts and ends within the same tick still shows up as a
    /// one-tick touch.
    pub fn snapshot(&mut self) -> InputSnapshot {
        if !self.reports_release {
            let tick = self.tick;
            let hold_ticks = self.hold_ticks;
            self.held
                .retain(|_, held| tick.saturating_sub(held.last_seen) < hold_ticks);
        }

        let (width, height) = self.cell.logical_size(self.cols, self.rows);
        let mut snapshot = InputSnapshot::new(width, height);
        for held in self.held.values() {
            snapshot = snapshot.with_held(held.key);
        }
        for key in self.pressed.drain() {
            snapshot = snapshot.with_pressed(key);
        }

        if let Some(touch) = self.mouse {
            if !touch.released || touch.started_tick == self.tick {
                let (x, y) = self.cell.cell_center(touch.col, touch.row);
                snapshot = snapshot.with_touch(TouchPoint {
                    id: MOUSE_TOUCH_ID,
                    x,
                    y,
                    press_ticks: (self.tick - touch.started_tick + 1) as u32,
                });
            }
            if touch.released {
                self.mouse = None;
            }
        }

        self.tick += 1;
        snapshot
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Right => Some(Key::Right),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Attack),
        KeyCode::F(11) => Some(Key::Fullscreen),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Key::Fullscreen),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}
