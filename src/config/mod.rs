use crate::app::{GameState, TickRules};
use crate::input::{CellSize, InputHandler};
use crate::sprite::SheetLayout;
use crate::themes::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const WINDOW_TITLE: &str = "Skeleton Walk";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub speed: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Logical pixels per sprite-sheet pixel.
    pub scale: f32,
    pub tick_rate_hz: u32,
    pub touch_width_threshold: u32,
    pub double_tap_window: u64,
    pub move_while_attacking: bool,
    pub fullscreen: bool,
    pub window_title: String,
    pub window_cols: u16,
    pub window_rows: u16,
    /// Used when the terminal does not report its pixel size.
    pub cell_width_px: u16,
    pub cell_height_px: u16,
    pub key_hold_ticks: u32,
    pub show_hud: bool,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: crate::app::game_state::DEFAULT_SPEED,
            start_x: 100.0,
            start_y: 100.0,
            scale: 3.0,
            tick_rate_hz: 60,
            touch_width_threshold: 600,
            double_tap_window: crate::input::handler::DOUBLE_TAP_WINDOW,
            move_while_attacking: true,
            fullscreen: false,
            window_title: WINDOW_TITLE.to_string(),
            window_cols: 80,
            window_rows: 24,
            cell_width_px: 8,
            cell_height_px: 16,
            key_hold_ticks: 36,
            show_hud: true,
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn initial_state(&self) -> GameState {
        let mut state = GameState::new(self.start_x, self.start_y, self.speed);
        state.fullscreen = self.fullscreen;
        state
    }

    pub fn input_handler(&self) -> InputHandler {
        InputHandler::new(self.double_tap_window, self.move_while_attacking)
    }

    pub fn tick_rules(&self, layout: &SheetLayout) -> TickRules {
        TickRules {
            attack_ticks: layout.attack_ticks(),
            touch_width_threshold: self.touch_width_threshold,
        }
    }

    pub fn fallback_cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width_px, self.cell_height_px)
    }

    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate_hz.clamp(1, 1000) as f64)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let mut config_dir = dirs::config_dir()?;
    config_dir.push("spritewalk");
    config_dir.push("spritewalk.json");
    Some(config_dir)
}

pub fn parse_config(data: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(data)
}

/// Reads the config from `path`, or from the default location when `path` is
/// `None`. Missing or broken files fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Config {
    let Some(config_path) = path.map(Path::to_path_buf).or_else(get_config_path) else {
        log::warn!("No config directory available, using defaults");
        return Config::default();
    };
    if !config_path.exists() {
        log::info!("No config at {}, using defaults", config_path.display());
        return Config::default();
    }

    let parsed = fs::read_to_string(&config_path)
        .map_err(|e| e.to_string())
        .and_then(|data| parse_config(&data).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            log::warn!(
                "Ignoring config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            Config::default()
        }
    }
}
