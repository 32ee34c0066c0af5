//! # Voxel AO
//!
//! Headless pipeline around the mesher: read a TOML config, run the
//! generation step, build the chunk mesh and report on it.
//!
//! The window, shaders, camera and draw call live outside this workspace.
//! What this crate hands them is the vertex buffer, either in memory via
//! [`PipelineOutput::mesh`] or on disk via the configured vertex dump.
//!
//! ## Example
//!
//! ```rust
//! use voxel_ao::{AppConfig, Pipeline};
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [generator]
//!     pattern = "sphere"
//! "#)?;
//! let output = Pipeline::new(config)?.run()?;
//! assert!(output.report.faces > 0);
//! # Ok::<(), voxel_ao::AppError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{AppConfig, GeneratorConfig, OutputConfig, PatternKind, VolumeConfig};
pub use error::{AppError, AppResult};
pub use pipeline::{write_vertex_dump, MeshReport, Pipeline, PipelineOutput};

/// Re-export of the mesher crate.
pub use voxel_ao_mesh as mesh;
/// Re-export of the generation crate.
pub use voxel_ao_procedural as procedural;
