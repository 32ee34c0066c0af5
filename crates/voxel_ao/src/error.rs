//! # Pipeline Error Types

use thiserror::Error;
use voxel_ao_mesh::VolumeError;

/// Errors that can occur while configuring or running the pipeline.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading the config or writing the vertex dump failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::AppConfig`].
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but describes something we cannot build.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Volume construction or generation failed.
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

/// Result type for pipeline operations.
pub type AppResult<T> = Result<T, AppError>;
