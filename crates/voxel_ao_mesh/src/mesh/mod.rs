//! Voxel-to-mesh conversion.
//!
//! ```text
//! VoxelVolume → ChunkMesher (cells) → emit_face (per face) → ChunkMesh
//!                                          ↓
//!                               occlusion_level / brightness
//! ```

mod face;
mod mesher;
mod occlusion;
mod vertex;

pub use face::{corner_brightness, emit_face, Diagonal, Face, FaceDescriptor};
pub use mesher::{build_mesh, ChunkMesher};
pub use occlusion::{brightness, occlusion_level, COVERED_FACE_LEVEL, MAX_LEVEL, MIN_BRIGHTNESS};
pub use vertex::{ChunkMesh, MeshVertex, VERTICES_PER_FACE};
