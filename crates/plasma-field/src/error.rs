use std::fmt;

/// Pixel buffer allocation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// `width * height * 4` bytes overflow the address space.
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::TooLarge { width, height } => {
                write!(f, "{width}x{height} RGBA8 buffer does not fit in memory")
            }
        }
    }
}

impl std::error::Error for BufferError {}
