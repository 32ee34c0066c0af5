//! Voxel data structures.
//!
//! The volume owns its cells; meshing only ever borrows it. [`SharedVolume`]
//! is the read-write barrier for callers that generate on another thread.

mod shared;
mod volume;

pub use shared::SharedVolume;
pub use volume::{Cell, VoxelVolume, DEFAULT_DIMENSION, MAX_DIMENSION};
