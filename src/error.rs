//! Error types for rendering and encoding.

use std::fmt;

/// Errors that can occur while writing an output file.
#[derive(Debug)]
pub enum EncodeError {
    /// Failed to create or write the output file.
    Io(std::io::Error),
    /// The image encoder rejected a frame.
    Image(image::ImageError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Io(e) => write!(f, "Failed to write output file: {}", e),
            EncodeError::Image(e) => write!(f, "Failed to encode frame: {}", e),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Io(e) => Some(e),
            EncodeError::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(e: std::io::Error) -> Self {
        EncodeError::Io(e)
    }
}

impl From<image::ImageError> for EncodeError {
    fn from(e: image::ImageError) -> Self {
        EncodeError::Image(e)
    }
}

/// Errors that can occur when rendering an animation.
#[derive(Debug)]
pub enum RenderError {
    /// Output encoding failed.
    Encode(EncodeError),
    /// The animation was configured with a zero frame count.
    NoFrames,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Encode(e) => write!(f, "Encoding error: {}", e),
            RenderError::NoFrames => {
                write!(f, "Frame count is zero. Use .with_frames() to set how many frames to render.")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Encode(e) => Some(e),
            RenderError::NoFrames => None,
        }
    }
}

impl From<EncodeError> for RenderError {
    fn from(e: EncodeError) -> Self {
        RenderError::Encode(e)
    }
}
