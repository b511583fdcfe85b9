use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub fn rgb_to_color(rgb: &Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    pub background: Rgb,
    pub stage_background: Rgb,
    pub border: Rgb,
    pub title: Rgb,
    pub hud_text: Rgb,
    pub attack_text: Rgb,
    pub help_text: Rgb,
}

impl Default for Theme {
    // catppuccin mocha
    fn default() -> Self {
        Self {
            background: Rgb(17, 17, 27),
            stage_background: Rgb(30, 30, 46),
            border: Rgb(137, 180, 250),
            title: Rgb(203, 166, 247),
            hud_text: Rgb(205, 214, 244),
            attack_text: Rgb(243, 139, 168),
            help_text: Rgb(108, 112, 134),
        }
    }
}
