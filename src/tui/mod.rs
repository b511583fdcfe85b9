use crate::config::Config;
use crate::input::CellSize;
use crate::sprite::SpriteSheet;
use crate::tui::demo::state::DemoState;
use crossterm::{
    cursor::Show,
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, size as terminal_size, supports_keyboard_enhancement,
        window_size, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub mod demo;
pub mod sprite_widget;


pub async fn run_tui(config: Config, sheet: SpriteSheet) -> io::Result<()> {
    enable_raw_mode()?;
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));

    let result = run_session(config, sheet, enhanced).await;
    let restored = restore_terminal(enhanced);
    session_outcome(result, restored)
}

/// Everything between entering and leaving raw mode. The caller restores the
/// terminal whatever this returns.
async fn run_session(config: Config, sheet: SpriteSheet, enhanced: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;

    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        log::warn!("Keyboard enhancement unavailable, key releases are inferred from repeats");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let cell = detect_cell_size(config.fallback_cell_size());
    let size = terminal_size()?;
    log::info!(
        "Terminal {}x{} cells, cell size {}x{}px",
        size.0,
        size.1,
        cell.width,
        cell.height
    );

    let mut state = DemoState::new(config, sheet, cell, size);
    let result = demo::run_demo_page(&mut terminal, &mut state).await;

    log::info!(
        "Final stats: {} ticks, position ({:.0}, {:.0}), key releases {}",
        state.game.tick_count,
        state.game.x,
        state.game.y,
        if state.input.reports_release() { "reported" } else { "inferred" }
    );
    result
}

/// Leaves raw mode and every terminal feature the session may have turned on.
/// Each step runs even if an earlier one failed.
fn restore_terminal(enhanced: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let popped = if enhanced {
        execute!(stdout, PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = execute!(
        stdout,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
    popped.and(raw).and(screen)
}

/// The session error wins over a restore error. A restore failure after a
/// clean session is still reported.
pub fn session_outcome(result: io::Result<()>, restored: io::Result<()>) -> io::Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            log::error!("Failed to restore terminal after error: {}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

/// Cell size in pixels as reported by the terminal, or `fallback` when the
/// terminal does not know its pixel dimensions.
pub fn detect_cell_size(fallback: CellSize) -> CellSize {
    match window_size() {
        Ok(size) if size.width > 0 && size.height > 0 && size.columns > 0 && size.rows > 0 => {
            CellSize::new(size.width / size.columns, size.height / size.rows)
        }
        _ => fallback,
    }
}
