//! # Voxel AO Procedural Generation
//!
//! The generation step that populates a [`VoxelVolume`] before meshing.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed, pattern and dimensions give the same cells
//! 2. **Bounded**: every write goes through `VoxelVolume::set`
//! 3. **Dimension-agnostic**: works for any volume size, not just 16³
//!
//! ## Example
//!
//! ```rust
//! use voxel_ao_mesh::VoxelVolume;
//! use voxel_ao_procedural::{GenSeed, Pattern, VolumeGenerator};
//!
//! let mut volume = VoxelVolume::cube(16)?;
//! let written = VolumeGenerator::new(GenSeed::new(42)).fill(&mut volume, Pattern::Terrain)?;
//! assert_eq!(written, volume.occupied_count());
//! # Ok::<(), voxel_ao_mesh::VolumeError>(())
//! ```
//!
//! [`VoxelVolume`]: voxel_ao_mesh::VoxelVolume

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod generator;
pub mod noise;

pub use generator::{palette, Pattern, VolumeGenerator};
pub use noise::{GenSeed, HeightNoise};
