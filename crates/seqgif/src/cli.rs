use std::path::PathBuf;

use clap::Parser;
use seqgif_core::config::{
    AssemblerConfig, DEFAULT_FPS, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH, DEFAULT_QUANTIZER_SPEED,
    DEFAULT_SIZE, DEFAULT_SUFFIX,
};

#[derive(Parser)]
#[command(
    name = "seqgif",
    version,
    about = "Assemble numbered PNG frames into a looping GIF"
)]
pub struct Cli {
    /// Folder containing frames named `<integer><suffix>`.
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Path of the GIF to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Side length in pixels of every output frame.
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    /// Frames per second. Each frame is shown for 1000 / fps ms (truncated).
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// File name suffix that selects frames.
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Palette quantizer speed for frames with more than 256 colors (1 = best, 30 = fastest).
    #[arg(long, default_value_t = DEFAULT_QUANTIZER_SPEED)]
    pub speed: i32,
}

impl Cli {
    pub fn into_config(self) -> AssemblerConfig {
        AssemblerConfig {
            input_dir: self.input,
            output_path: self.output,
            suffix: self.suffix,
            size: self.size,
            fps: self.fps,
            quantizer_speed: self.speed,
        }
    }
}
