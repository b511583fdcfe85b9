use crate::app::{self, GameState, TickReport, TickRules};
use crate::config::Config;
use crate::input::{CellSize, CrosstermInput, InputHandler, InputSnapshot};
use crate::sprite::{SheetLayout, SpriteSheet, SKELETON_LAYOUT};

/// Everything the demo loop owns: the simulation, its input plumbing and the
/// read-only sheet.
pub struct DemoState {
    pub game: GameState,
    pub handler: InputHandler,
    pub input: CrosstermInput,
    pub sheet: SpriteSheet,
    pub layout: SheetLayout,
    pub rules: TickRules,
    pub config: Config,
}

impl DemoState {
    pub fn new(config: Config, sheet: SpriteSheet, cell: CellSize, terminal_size: (u16, u16)) -> Self {
        let layout = SKELETON_LAYOUT;
        Self {
            game: config.initial_state(),
            handler: config.input_handler(),
            input: CrosstermInput::new(cell, config.key_hold_ticks, terminal_size),
            rules: config.tick_rules(&layout),
            sheet,
            layout,
            config,
        }
    }

    pub fn update(&mut self, snapshot: &InputSnapshot) -> TickReport {
        let previous_mode = self.game.mode();
        let report = app::update(&mut self.game, &mut self.handler, snapshot, &self.rules);

        let mode = self.game.mode();
        if mode != previous_mode {
            log::debug!(
                "Mode {} -> {} at tick {}",
                previous_mode.label(),
                mode.label(),
                self.game.tick_count
            );
        }
        if self.game.tick_count % self.config.tick_rate_hz.max(1) as u64 == 0 {
            log::trace!(
                "Tick {} | {} at ({:.0}, {:.0})",
                self.game.tick_count,
                mode.label(),
                self.game.x,
                self.game.y
            );
        }
        report
    }
}
