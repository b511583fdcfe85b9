use crate::app::GameState;
use crate::input::{InputHandler, InputSnapshot, Key};

/// Parameters of the per-tick update that do not change while running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRules {
    /// Ticks from attack trigger to automatic exit.
    pub attack_ticks: u32,
    /// Touch input is enabled while the screen is narrower than this, in
    /// logical pixels.
    pub touch_width_threshold: u32,
}

/// What happened during one call to [`update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub moved: bool,
    pub attack_started: bool,
    pub attack_finished: bool,
    pub fullscreen_toggled: bool,
}

/// Runs one simulation step: bumps the tick counter, applies input and
/// advances the attack and idle counters.
///
/// An attack triggered on this tick keeps `attack_counter == 0`; counting
/// starts on the next tick so the attack lasts exactly `attack_ticks` ticks.
pub fn update(
    state: &mut GameState,
    handler: &mut InputHandler,
    input: &InputSnapshot,
    rules: &TickRules,
) -> TickReport {
    state.tick_count += 1;

    let touch_enabled = input.screen_width < rules.touch_width_threshold;
    if touch_enabled != state.touch_enabled {
        log::debug!(
            "Touch input {} (screen width {}px)",
            if touch_enabled { "enabled" } else { "disabled" },
            input.screen_width
        );
    }
    state.touch_enabled = touch_enabled;

    let mut report = TickReport::default();

    if input.just_pressed(Key::Fullscreen) {
        state.fullscreen = !state.fullscreen;
        report.fullscreen_toggled = true;
        log::debug!("Fullscreen set to {}", state.fullscreen);
    }

    let was_attacking = state.is_attacking;
    report.moved = handler.handle(state, input);
    report.attack_started = !was_attacking && state.is_attacking;

    if was_attacking {
        report.attack_finished = state.advance_attack(rules.attack_ticks);
    }

    state.record_movement(report.moved);

    if report.attack_started {
        log::debug!("Attack started at tick {}", state.tick_count);
    }
    if report.attack_finished {
        log::debug!("Attack finished at tick {}", state.tick_count);
    }

    report
}
