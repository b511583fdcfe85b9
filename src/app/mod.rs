use serde::{Deserialize, Serialize};

/// Which animation row drives the sprite on a given tick.
///
/// Exactly one mode is active per tick; attacking wins over idle, idle wins
/// over walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationMode {
    Walking,
    Idle,
    Attacking,
}

impl AnimationMode {
    pub fn label(&self) -> &str {
        match self {
            AnimationMode::Walking => "walk",
            AnimationMode::Idle => "idle",
            AnimationMode::Attacking => "attack",
        }
    }
}

pub mod game_state;
pub mod tick;

pub use game_state::GameState;
pub use tick::{update, TickReport, TickRules};
