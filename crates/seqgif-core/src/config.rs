use std::path::PathBuf;

use crate::error::{AssembleError, Result};

pub const DEFAULT_INPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_PATH: &str = "output.gif";
pub const DEFAULT_SUFFIX: &str = ".png";
/// Output frames are square, this many pixels on a side.
pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_FPS: u32 = 30;
/// NeuQuant sampling factor, only used when a frame has more than 256 colors.
pub const DEFAULT_QUANTIZER_SPEED: i32 = 10;

/// GIF logical screen dimensions are 16-bit.
const MAX_SIZE: u32 = u16::MAX as u32;

/// Parameters for one assembly run.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Folder holding the numbered frames.
    pub input_dir: PathBuf,
    /// Where the animated GIF is written.
    pub output_path: PathBuf,
    /// File name suffix that selects frames, e.g. `.png`.
    pub suffix: String,
    /// Side length of every output frame in pixels.
    pub size: u32,
    /// Playback rate in frames per second.
    pub fps: u32,
    /// Quantizer speed in 1..=30 (1 = best palette, 30 = fastest).
    pub quantizer_speed: i32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            suffix: DEFAULT_SUFFIX.to_string(),
            size: DEFAULT_SIZE,
            fps: DEFAULT_FPS,
            quantizer_speed: DEFAULT_QUANTIZER_SPEED,
        }
    }
}

impl AssemblerConfig {
    /// Display time of a single frame. Truncates, so 30 fps gives 33 ms.
    pub fn frame_duration_ms(&self) -> u32 {
        1000 / self.fps
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(AssembleError::InvalidConfig("fps must be >= 1".into()));
        }
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(AssembleError::InvalidConfig(format!(
                "size must be in 1..={MAX_SIZE}, got {}",
                self.size
            )));
        }
        if self.suffix.is_empty() {
            return Err(AssembleError::InvalidConfig("suffix must not be empty".into()));
        }
        if !(1..=30).contains(&self.quantizer_speed) {
            return Err(AssembleError::InvalidConfig(format!(
                "quantizer speed must be in 1..=30, got {}",
                self.quantizer_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let config = AssemblerConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("output"));
        assert_eq!(config.output_path, PathBuf::from("output.gif"));
        assert_eq!(config.suffix, ".png");
        assert_eq!(config.size, 512);
        assert_eq!(config.fps, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn frame_duration_truncates() {
        let mut config = AssemblerConfig::default();
        assert_eq!(config.frame_duration_ms(), 33);
        config.fps = 7;
        assert_eq!(config.frame_duration_ms(), 142);
        config.fps = 1000;
        assert_eq!(config.frame_duration_ms(), 1);
        config.fps = 2000;
        assert_eq!(config.frame_duration_ms(), 0);
    }

    #[test]
    fn validate_rejects_zero_fps() {
        let config = AssemblerConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AssembleError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_bad_size() {
        for size in [0, 65_536] {
            let config = AssemblerConfig {
                size,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "size {size} should be rejected");
        }
        let config = AssemblerConfig {
            size: 65_535,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_suffix_and_bad_speed() {
        let config = AssemblerConfig {
            suffix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        for quantizer_speed in [0, 31] {
            let config = AssemblerConfig {
                quantizer_speed,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }
}
