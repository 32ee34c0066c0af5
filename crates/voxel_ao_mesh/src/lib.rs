//! # Voxel AO Mesh
//!
//! Turns a small dense voxel volume into a triangle mesh with per-face
//! shading and per-vertex ambient occlusion.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   borrow   ┌─────────────┐   owns   ┌───────────┐
//! │ VoxelVolume  │ ─────────→ │ ChunkMesher │ ───────→ │ ChunkMesh │ → GPU upload
//! └──────────────┘            └─────────────┘          └───────────┘
//!                                   │ per visible face
//!                                   ↓
//!                      emit_face + occlusion_level
//! ```
//!
//! ## Output
//!
//! A non-indexed triangle list of 6-byte vertices `(x, y, z, r, g, b)`.
//! Only faces adjacent to empty space are emitted; cells outside the
//! volume count as empty.
//!
//! ## Example
//!
//! ```rust
//! use voxel_ao_mesh::{ChunkMesher, VoxelVolume};
//!
//! let mut volume = VoxelVolume::cube(16)?;
//! volume.set(0, 0, 0, [255, 0, 0])?;
//!
//! let mesh = ChunkMesher::new().build_mesh(&volume);
//! assert_eq!(mesh.vertex_count(), 36);
//! # Ok::<(), voxel_ao_mesh::VolumeError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod mesh;
pub mod voxel;

pub use error::{VolumeError, VolumeResult};
pub use mesh::{build_mesh, ChunkMesh, ChunkMesher, Diagonal, Face, MeshVertex};
pub use voxel::{Cell, SharedVolume, VoxelVolume, DEFAULT_DIMENSION, MAX_DIMENSION};
