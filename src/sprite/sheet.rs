use crate::sprite::error::SheetError;
use crate::sprite::selector::FrameRect;
use image::RgbaImage;
use std::path::Path;

/// The skeleton sheet compiled into the binary.
pub const EMBEDDED_SHEET: &[u8] = include_bytes!("../../assets/skeleton_sheet.png");

/// Pixels with less coverage than this are not drawn.
const ALPHA_CUTOFF: u8 = 128;

/// One animation strip of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec {
    pub row: u32,
    pub frame_count: u32,
    /// Ticks each frame stays on screen.
    pub ticks_per_frame: u32,
}

impl RowSpec {
    pub fn frame_at(&self, counter: u64) -> u32 {
        ((counter / self.ticks_per_frame.max(1) as u64) % self.frame_count.max(1) as u64) as u32
    }

    pub fn duration(&self) -> u32 {
        self.frame_count * self.ticks_per_frame
    }
}

/// Grid layout of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub frame_width: u32,
    pub frame_height: u32,
    pub attack: RowSpec,
    pub walk: RowSpec,
    pub idle: RowSpec,
}

/// Rows are attack, unused, walk, idle; frames are 64x64.
pub const SKELETON_LAYOUT: SheetLayout = SheetLayout {
    frame_width: 64,
    frame_height: 64,
    attack: RowSpec {
        row: 0,
        frame_count: 13,
        ticks_per_frame: 5,
    },
    walk: RowSpec {
        row: 2,
        frame_count: 12,
        ticks_per_frame: 5,
    },
    idle: RowSpec {
        row: 3,
        frame_count: 4,
        ticks_per_frame: 10,
    },
};

impl SheetLayout {
    /// Ticks from attack trigger to automatic exit.
    pub fn attack_ticks(&self) -> u32 {
        self.attack.duration()
    }

    pub fn min_size(&self) -> (u32, u32) {
        let rows = [self.attack, self.walk, self.idle];
        let columns = rows.iter().map(|r| r.frame_count).max().unwrap_or(0);
        let last_row = rows.iter().map(|r| r.row).max().unwrap_or(0);
        (
            columns * self.frame_width,
            (last_row + 1) * self.frame_height,
        )
    }
}

/// Decoded sheet, read-only after startup.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    pub fn embedded(layout: &SheetLayout) -> Result<Self, SheetError> {
        Self::from_bytes(EMBEDDED_SHEET, layout)
    }

    pub fn from_path(path: &Path, layout: &SheetLayout) -> Result<Self, SheetError> {
        let data = std::fs::read(path).map_err(|e| SheetError::Io(path.to_path_buf(), e))?;
        Self::from_bytes(&data, layout)
    }

    pub fn from_bytes(data: &[u8], layout: &SheetLayout) -> Result<Self, SheetError> {
        let image = image::load_from_memory(data)?.to_rgba8();
        let (min_width, min_height) = layout.min_size();
        if image.width() < min_width || image.height() < min_height {
            return Err(SheetError::TooSmall {
                width: image.width(),
                height: image.height(),
                min_width,
                min_height,
            });
        }
        Ok(Self { image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Opaque pixel at `(u, v)` inside `frame`, or `None` when the pixel is
    /// transparent or outside the frame.
    pub fn frame_pixel(&self, frame: &FrameRect, u: u32, v: u32) -> Option<[u8; 3]> {
        if u >= frame.width || v >= frame.height {
            return None;
        }
        let pixel = self.image.get_pixel_checked(frame.x + u, frame.y + v)?;
        let [r, g, b, a] = pixel.0;
        (a >= ALPHA_CUTOFF).then_some([r, g, b])
    }
}
