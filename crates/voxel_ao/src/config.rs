//! # Pipeline Configuration
//!
//! Loaded once at startup from TOML. Every section is optional and falls
//! back to the reference setup: a 16³ terrain chunk with no vertex dump.
//!
//! ```toml
//! [volume]
//! width = 16
//! height = 16
//! depth = 16
//!
//! [generator]
//! pattern = "scatter"
//! seed = 42
//! density = 0.35
//!
//! [output]
//! vertex_dump = "mesh.bin"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voxel_ao_mesh::{VoxelVolume, DEFAULT_DIMENSION, MAX_DIMENSION};
use voxel_ao_procedural::{GenSeed, Pattern, VolumeGenerator};

use crate::error::{AppError, AppResult};

/// Volume dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VolumeConfig {
    /// Cells along X.
    pub width: usize,
    /// Cells along Y.
    pub height: usize,
    /// Cells along Z.
    pub depth: usize,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            depth: DEFAULT_DIMENSION,
        }
    }
}

impl VolumeConfig {
    /// Allocates an empty volume of this size.
    ///
    /// # Errors
    /// Returns [`AppError::Volume`] if the dimensions are out of range.
    pub fn allocate(&self) -> AppResult<VoxelVolume> {
        Ok(VoxelVolume::new(self.width, self.height, self.depth)?)
    }
}

/// Built-in fill pattern names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Every cell occupied.
    Solid,
    /// Centered ball.
    Sphere,
    /// Noise height field.
    #[default]
    Terrain,
    /// Random cells at `density`.
    Scatter,
}

/// Generation step settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fill pattern.
    pub pattern: PatternKind,
    /// Generation seed.
    pub seed: u64,
    /// Occupancy probability for `scatter`, in `[0, 1]`.
    pub density: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pattern: PatternKind::default(),
            seed: GenSeed::default().value(),
            density: 0.35,
        }
    }
}

impl GeneratorConfig {
    /// The pattern to hand to the generator.
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        match self.pattern {
            PatternKind::Solid => Pattern::Solid,
            PatternKind::Sphere => Pattern::Sphere,
            PatternKind::Terrain => Pattern::Terrain,
            PatternKind::Scatter => Pattern::Scatter { density: self.density },
        }
    }

    /// Builds the generator for this seed.
    #[must_use]
    pub fn generator(&self) -> VolumeGenerator {
        VolumeGenerator::new(GenSeed::new(self.seed))
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Where to write the raw `x, y, z, r, g, b` vertex bytes, if anywhere.
    pub vertex_dump: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Volume dimensions.
    pub volume: VolumeConfig,
    /// Generation step.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl AppConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns [`AppError::Parse`] for malformed TOML or unknown keys and
    /// [`AppError::InvalidConfig`] if validation fails.
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    /// Returns [`AppError::Io`] if the file cannot be read, otherwise see
    /// [`AppConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Checks ranges serde cannot express.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> AppResult<()> {
        let VolumeConfig { width, height, depth } = self.volume;
        for (axis, n) in [("width", width), ("height", height), ("depth", depth)] {
            if !(1..=MAX_DIMENSION).contains(&n) {
                return Err(AppError::InvalidConfig(format!(
                    "volume.{axis} = {n}, expected 1..={MAX_DIMENSION}"
                )));
            }
        }

        let density = self.generator.density;
        if !(0.0..=1.0).contains(&density) {
            return Err(AppError::InvalidConfig(format!(
                "generator.density = {density}, expected 0.0..=1.0"
            )));
        }
        Ok(())
    }
}
