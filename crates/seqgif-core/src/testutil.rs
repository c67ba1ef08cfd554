//! Helpers shared by the unit tests.

use std::path::Path;

use image::{Rgba, RgbaImage};

pub struct DecodedFrame {
    pub width: u16,
    pub height: u16,
    pub delay_cs: u16,
    pub first_pixel: [u8; 4],
}

pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub repeat: gif::Repeat,
    pub frames: Vec<DecodedFrame>,
}

pub fn solid(size: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(size, size, color)
}

/// Write a numbered frame into `dir`.
pub fn write_frame(dir: &Path, name: &str, w: u32, h: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(w, h, color)
        .save(dir.join(name))
        .unwrap_or_else(|e| panic!("failed to write fixture {name}: {e}"));
}

pub fn decode_gif(bytes: &[u8]) -> DecodedGif {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(bytes).expect("gif header");

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().expect("gif frame") {
        frames.push(DecodedFrame {
            width: frame.width,
            height: frame.height,
            delay_cs: frame.delay,
            first_pixel: [
                frame.buffer[0],
                frame.buffer[1],
                frame.buffer[2],
                frame.buffer[3],
            ],
        });
    }

    DecodedGif {
        width: decoder.width(),
        height: decoder.height(),
        repeat: decoder.repeat(),
        frames,
    }
}
