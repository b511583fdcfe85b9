//! Sprite sheet loading and animation frame selection.

pub mod error;
pub mod selector;
pub mod sheet;

pub use error::SheetError;
pub use selector::{select_frame, DrawTransform, FrameRect, FrameSelection};
pub use sheet::{SheetLayout, SpriteSheet, SKELETON_LAYOUT};

#[cfg(test)]
pub mod tests;
