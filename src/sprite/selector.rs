use crate::app::{AnimationMode, GameState};
use crate::sprite::sheet::SheetLayout;

/// Sub-rectangle of the sprite sheet in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSelection {
    pub mode: AnimationMode,
    pub row: u32,
    pub frame_index: u32,
}

impl FrameSelection {
    pub fn source_rect(&self, layout: &SheetLayout) -> FrameRect {
        FrameRect {
            x: self.frame_index * layout.frame_width,
            y: self.row * layout.frame_height,
            width: layout.frame_width,
            height: layout.frame_height,
        }
    }
}

/// Picks the animation row and column for the given counters.
pub fn frame_for(
    mode: AnimationMode,
    attack_counter: u32,
    idle_counter: u32,
    tick_count: u64,
    layout: &SheetLayout,
) -> FrameSelection {
    let (anim, counter) = match mode {
        AnimationMode::Attacking => (layout.attack, attack_counter as u64),
        AnimationMode::Idle => (layout.idle, idle_counter as u64),
        AnimationMode::Walking => (layout.walk, tick_count),
    };
    FrameSelection {
        mode,
        row: anim.row,
        frame_index: anim.frame_at(counter),
    }
}

pub fn select_frame(state: &GameState, layout: &SheetLayout) -> FrameSelection {
    frame_for(
        state.mode(),
        state.attack_counter,
        state.idle_counter,
        state.tick_count,
        layout,
    )
}

/// Affine map from frame pixels to logical screen pixels: scale, optional
/// horizontal mirror, then translate to the sprite position.
///
/// Mirroring shifts by one scaled frame width, so the sprite covers the same
/// box whichever way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl DrawTransform {
    pub fn for_sprite(x: f32, y: f32, facing_left: bool, frame_width: u32, scale: f32) -> Self {
        if facing_left {
            Self {
                scale_x: -scale,
                scale_y: scale,
                translate_x: x + frame_width as f32 * scale,
                translate_y: y,
            }
        } else {
            Self {
                scale_x: scale,
                scale_y: scale,
                translate_x: x,
                translate_y: y,
            }
        }
    }

    pub fn apply(&self, u: f32, v: f32) -> (f32, f32) {
        (
            u * self.scale_x + self.translate_x,
            v * self.scale_y + self.translate_y,
        )
    }

    /// Screen point back to frame coordinates.
    pub fn invert(&self, sx: f32, sy: f32) -> (f32, f32) {
        (
            (sx - self.translate_x) / self.scale_x,
            (sy - self.translate_y) / self.scale_y,
        )
    }

    /// Screen-space box `(left, top, right, bottom)` covered by a frame.
    pub fn bounds(&self, frame_width: u32, frame_height: u32) -> (f32, f32, f32, f32) {
        let (x0, y0) = self.apply(0.0, 0.0);
        let (x1, y1) = self.apply(frame_width as f32, frame_height as f32);
        (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }
}
