pub mod config;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod scan;

#[cfg(test)]
mod testutil;

pub use config::AssemblerConfig;
pub use error::AssembleError;
pub use pipeline::{run_pipeline, AssembleReport};
