use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::error::{AssembleError, Result};
use crate::scan::FrameEntry;

/// A decoded, resized still ready to be encoded.
pub struct Frame {
    /// The frame's pixels, already at output size.
    pub image: RgbaImage,
    /// Playback position taken from the source file name.
    pub index: u64,
}

/// Decode one frame file and scale it to `size` x `size`.
pub fn load_frame(entry: &FrameEntry, size: u32) -> Result<Frame> {
    let decoded = image::open(&entry.path).map_err(|source| AssembleError::Decode {
        path: entry.path.clone(),
        source,
    })?;
    let (src_w, src_h) = (decoded.width(), decoded.height());

    let image = resize_nearest(decoded.into_rgba8(), size);

    debug!(
        index = entry.index,
        name = %entry.name,
        src_w,
        src_h,
        size,
        "loaded frame"
    );

    Ok(Frame {
        image,
        index: entry.index,
    })
}

/// Scale to a square without smoothing. Aspect ratio is not preserved.
pub fn resize_nearest(image: RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image;
    }
    imageops::resize(&image, size, size, FilterType::Nearest)
}
