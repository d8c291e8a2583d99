//! GIF and PNG output via the `image` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame, RgbaImage};

use crate::error::EncodeError;

/// Streaming writer for a looping GIF.
///
/// Frames are encoded as they arrive, so a long animation never holds more
/// than one rasterized frame in memory.
pub struct GifSink {
    encoder: GifEncoder<BufWriter<File>>,
    delay: Delay,
}

impl GifSink {
    /// Create the output file and configure an infinitely looping GIF at
    /// the given frame rate.
    pub fn create<P: AsRef<Path>>(path: P, fps: u32) -> Result<Self, EncodeError> {
        let file = File::create(path)?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), 10);
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder,
            delay: Delay::from_numer_denom_ms(1000, fps.max(1)),
        })
    }

    /// Append one frame.
    pub fn push(&mut self, image: RgbaImage) -> Result<(), EncodeError> {
        let frame = GifFrame::from_parts(image, 0, 0, self.delay);
        self.encoder.encode_frame(frame)?;
        Ok(())
    }
}

/// Write a single frame as a PNG still.
pub fn write_png<P: AsRef<Path>>(path: P, image: &RgbaImage) -> Result<(), EncodeError> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
