use crate::app::AnimationMode;

/// Starting speed in logical pixels per tick.
pub const DEFAULT_SPEED: f32 = 2.0;

/// Everything the demo knows about the character between two ticks.
///
/// The record is plain data: the input handler and the tick driver mutate it,
/// the renderer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub tick_count: u64,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub facing_left: bool,
    pub is_attacking: bool,
    /// Only meaningful while `is_attacking` is set.
    pub attack_counter: u32,
    pub idle_counter: u32,
    pub touch_enabled: bool,
    pub fullscreen: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(100.0, 100.0, DEFAULT_SPEED)
    }
}

impl GameState {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            tick_count: 0,
            x,
            y,
            speed,
            facing_left: false,
            is_attacking: false,
            attack_counter: 0,
            idle_counter: 0,
            touch_enabled: false,
            fullscreen: false,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        if self.is_attacking {
            AnimationMode::Attacking
        } else if self.idle_counter > 0 {
            AnimationMode::Idle
        } else {
            AnimationMode::Walking
        }
    }

    pub fn move_right(&mut self) {
        self.x += self.speed;
        self.facing_left = false;
    }

    pub fn move_left(&mut self) {
        self.x -= self.speed;
        self.facing_left = true;
    }

    pub fn move_up(&mut self) {
        self.y -= self.speed;
    }

    pub fn move_down(&mut self) {
        self.y += self.speed;
    }

    /// Starts an attack unless one is already running.
    ///
    /// Returns whether a new attack began.
    pub fn trigger_attack(&mut self) -> bool {
        if self.is_attacking {
            return false;
        }
        self.is_attacking = true;
        self.attack_counter = 0;
        true
    }

    /// Advances a running attack by one tick and ends it once `attack_ticks`
    /// ticks have elapsed. Returns true on the tick the attack ends.
    pub fn advance_attack(&mut self, attack_ticks: u32) -> bool {
        if !self.is_attacking {
            return false;
        }
        self.attack_counter += 1;
        if self.attack_counter >= attack_ticks {
            self.is_attacking = false;
            return true;
        }
        false
    }

    pub fn record_movement(&mut self, moved: bool) {
        if moved {
            self.idle_counter = 0;
        } else {
            self.idle_counter = self.idle_counter.saturating_add(1);
        }
    }
}
