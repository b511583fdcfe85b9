use crate::input::CrosstermInput;
use crossterm::event;
use std::io;
use std::time::Duration;

/// Upper bound on events consumed per tick, so a flood of mouse motion
/// cannot stall the frame.
const MAX_EVENTS_PER_TICK: usize = 256;

/// Feeds every pending terminal event into the input tracker without
/// blocking.
pub fn handle_demo_events(input: &mut CrosstermInput) -> io::Result<()> {
    for _ in 0..MAX_EVENTS_PER_TICK {
        if !event::poll(Duration::ZERO)? {
            break;
        }
        input.handle_event(&event::read()?);
    }
    Ok(())
}
