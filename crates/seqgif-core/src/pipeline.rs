use std::path::PathBuf;

use tracing::info;

use crate::config::AssemblerConfig;
use crate::encoder::encode_gif;
use crate::error::{AssembleError, Result};
use crate::frame::{load_frame, Frame};
use crate::scan::{scan_frames, sort_frames};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleReport {
    pub output_path: PathBuf,
    pub frame_count: usize,
    pub size: u32,
    pub frame_duration_ms: u32,
    pub bytes_written: usize,
}

/// Assemble the numbered frames in `config.input_dir` into one animated GIF.
///
/// Every frame is decoded and the whole GIF is encoded in memory before the
/// output file is touched, so a failing run never leaves an output behind.
pub fn run_pipeline(config: &AssemblerConfig) -> Result<AssembleReport> {
    config.validate()?;

    let duration_ms = config.frame_duration_ms();
    info!(
        input = ?config.input_dir,
        output = ?config.output_path,
        suffix = %config.suffix,
        size = config.size,
        fps = config.fps,
        duration_ms,
        "pipeline starting"
    );

    let files = scan_frames(&config.input_dir, &config.suffix)?;
    if files.is_empty() {
        return Err(AssembleError::NoFrames {
            dir: config.input_dir.clone(),
            suffix: config.suffix.clone(),
        });
    }

    let entries = sort_frames(files, &config.suffix)?;

    let frames = entries
        .iter()
        .map(|entry| load_frame(entry, config.size))
        .collect::<Result<Vec<Frame>>>()?;
    let frame_count = frames.len();
    info!(frame_count, "frame loading complete");

    let mut buf = Vec::new();
    encode_gif(frames, duration_ms, config.quantizer_speed, &mut buf)?;

    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| AssembleError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(&config.output_path, &buf).map_err(|source| AssembleError::Write {
        path: config.output_path.clone(),
        source,
    })?;

    info!(output = ?config.output_path, bytes = buf.len(), "gif written");

    Ok(AssembleReport {
        output_path: config.output_path.clone(),
        frame_count,
        size: config.size,
        frame_duration_ms: duration_ms,
        bytes_written: buf.len(),
    })
}
