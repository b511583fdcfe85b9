use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SheetError {
    Io(PathBuf, io::Error),
    Decode(image::ImageError),
    TooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Io(path, e) => {
                write!(f, "Could not read sprite sheet {}: {}", path.display(), e)
            }
            SheetError::Decode(e) => write!(f, "Could not decode sprite sheet: {}", e),
            SheetError::TooSmall {
                width,
                height,
                min_width,
                min_height,
            } => write!(
                f,
                "Sprite sheet is {}x{} but the animation layout needs at least {}x{}",
                width, height, min_width, min_height
            ),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Io(_, e) => Some(e),
            SheetError::Decode(e) => Some(e),
            SheetError::TooSmall { .. } => None,
        }
    }
}

impl From<image::ImageError> for SheetError {
    fn from(err: image::ImageError) -> Self {
        SheetError::Decode(err)
    }
}
