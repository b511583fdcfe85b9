pub mod events;
pub mod page;
pub mod state;

use crate::input::Key;
use crate::tui::demo::events::handle_demo_events;
use crate::tui::demo::page::draw_demo_ui;
use crate::tui::demo::state::DemoState;

use ratatui::{backend::Backend, Terminal};
use std::io;
use tokio::time::MissedTickBehavior;

/// Fixed-tick loop: drain input, update, draw. Returns when quit is pressed.
pub async fn run_demo_page<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut DemoState,
) -> io::Result<()> {
    let mut ticker = tokio::time::interval(state.config.tick_duration());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        handle_demo_events(&mut state.input)?;
        let snapshot = state.input.snapshot();
        if snapshot.just_pressed(Key::Quit) {
            log::info!("Quit requested at tick {}", state.game.tick_count);
            return Ok(());
        }

        let report = state.update(&snapshot);
        if report.fullscreen_toggled {
            terminal.clear()?;
        }

        terminal.draw(|f| draw_demo_ui(f, state))?;
    }
}
