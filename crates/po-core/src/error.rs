use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidSize { width: i32, height: i32 },
    TooLarge { width: i32, height: i32 },
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid grid size: {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid size {width}x{height} exceeds addressable storage")
            }
            Self::OutOfBounds { x, y } => write!(f, "coordinate ({x}, {y}) out of bounds"),
        }
    }
}

impl std::error::Error for Error {}
