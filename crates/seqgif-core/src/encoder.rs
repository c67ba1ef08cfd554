use std::io::Write;

use image::codecs::gif::{GifEncoder, Repeat};
use image::Delay;
use tracing::{debug, info};

use crate::error::{AssembleError, Result};
use crate::frame::Frame;

/// Encode `frames` as an infinitely looping GIF into `writer`.
///
/// The first frame sets the logical screen size and the rest are appended in
/// order, each shown for `duration_ms`. The container stores delays in
/// centiseconds, so the duration is truncated to a multiple of 10 ms on disk.
///
/// Frames with at most 256 colors keep an exact palette. Busier frames are
/// quantized with NeuQuant at `speed` (1..=30).
pub fn encode_gif<W: Write>(
    frames: Vec<Frame>,
    duration_ms: u32,
    speed: i32,
    writer: W,
) -> Result<()> {
    if frames.is_empty() {
        return Err(AssembleError::EmptySequence);
    }

    let frame_count = frames.len();
    let mut encoder = GifEncoder::new_with_speed(writer, speed);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(AssembleError::Encode)?;

    let delay = Delay::from_numer_denom_ms(duration_ms, 1);
    for frame in frames {
        let index = frame.index;
        encoder
            .encode_frame(image::Frame::from_parts(frame.image, 0, 0, delay))
            .map_err(AssembleError::Encode)?;
        debug!(index, "encoded frame");
    }

    // The trailer is written when the encoder is dropped.
    drop(encoder);

    info!(frame_count, duration_ms, speed, "gif encoded");
    Ok(())
}
