//! Chunk Mesher - one full pass over a volume.
//!
//! Every occupied cell is visited in ascending `(y, z, x)` order and offered
//! all six faces. Interior faces are culled, visible ones are shaded and
//! appended. The output depends only on the volume contents, so two passes
//! over the same volume produce the same bytes.

use std::time::Instant;

use super::face::{emit_face, Face};
use super::vertex::ChunkMesh;
use crate::voxel::VoxelVolume;

/// Builds triangle meshes from voxel volumes.
///
/// Holds no state between passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkMesher;

impl ChunkMesher {
    /// Creates a new mesher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Meshes the whole volume, returning a freshly owned vertex buffer.
    #[must_use]
    pub fn build_mesh(&self, volume: &VoxelVolume) -> ChunkMesh {
        let start = Instant::now();

        if volume.is_empty() {
            tracing::trace!(
                width = volume.width(),
                height = volume.height(),
                depth = volume.depth(),
                "volume is empty - skipping"
            );
            return ChunkMesh::new();
        }

        // Upper bound would be 6 faces per cell; a surface-heavy guess of
        // two visible faces per occupied cell avoids most regrowth.
        let mut mesh = ChunkMesh::with_face_capacity(volume.occupied_count() * 2);

        for y in 0..volume.height() as i32 {
            for z in 0..volume.depth() as i32 {
                for x in 0..volume.width() as i32 {
                    let cell = volume.get(x, y, z);
                    if !cell.is_occupied() {
                        continue;
                    }
                    for face in Face::ALL {
                        emit_face(volume, [x, y, z], cell.color(), face, &mut mesh.vertices);
                    }
                }
            }
        }

        tracing::debug!(
            width = volume.width(),
            height = volume.height(),
            depth = volume.depth(),
            occupied = volume.occupied_count(),
            faces = mesh.face_count(),
            vertices = mesh.vertex_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "built chunk mesh"
        );

        mesh
    }
}

/// Meshes a volume with a default [`ChunkMesher`].
#[must_use]
pub fn build_mesh(volume: &VoxelVolume) -> ChunkMesh {
    ChunkMesher::new().build_mesh(volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_volume() {
        let volume = VoxelVolume::cube(16).unwrap();
        let mesh = build_mesh(&volume);
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_single_voxel_at_origin() {
        let mut volume = VoxelVolume::cube(16).unwrap();
        volume.set(0, 0, 0, [255, 0, 0]).unwrap();

        let mesh = build_mesh(&volume);

        // 6 faces * 2 triangles * 3 vertices
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.face_count(), 6);
    }

    #[test]
    fn test_adjacent_pair_culls_shared_faces() {
        let mut volume = VoxelVolume::cube(4).unwrap();
        volume.set(1, 1, 1, [10, 20, 30]).unwrap();
        volume.set(2, 1, 1, [10, 20, 30]).unwrap();

        let mesh = build_mesh(&volume);
        assert_eq!(mesh.face_count(), 10);

        // No triangle may lie entirely in the shared plane x = 2 within the pair.
        for tri in mesh.triangles() {
            let on_shared_plane = tri.iter().all(|v| {
                v.position[0] == 2
                    && (1..=2).contains(&v.position[1])
                    && (1..=2).contains(&v.position[2])
            });
            assert!(!on_shared_plane);
        }
    }

    #[test]
    fn test_full_volume_only_boundary_faces() {
        let n = 5;
        let mut volume = VoxelVolume::cube(n).unwrap();
        for y in 0..n as i32 {
            for z in 0..n as i32 {
                for x in 0..n as i32 {
                    volume.set(x, y, z, [128, 128, 128]).unwrap();
                }
            }
        }

        let mesh = build_mesh(&volume);
        assert_eq!(mesh.vertex_count(), 6 * n * n * 6);
    }

    #[test]
    fn test_repeated_passes_are_identical() {
        let mut volume = VoxelVolume::new(6, 4, 5).unwrap();
        for (i, (x, y, z)) in [(0, 0, 0), (1, 0, 0), (1, 1, 0), (3, 2, 4), (5, 3, 4), (2, 2, 2)]
            .into_iter()
            .enumerate()
        {
            volume.set(x, y, z, [40 * i as u8, 200, 17]).unwrap();
        }

        let mesher = ChunkMesher::new();
        let a = mesher.build_mesh(&volume);
        let b = mesher.build_mesh(&volume);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_positions_stay_within_grid() {
        let mut volume = VoxelVolume::new(3, 7, 2).unwrap();
        volume.set(2, 6, 1, [1, 1, 1]).unwrap();
        volume.set(0, 0, 0, [1, 1, 1]).unwrap();

        for v in build_mesh(&volume).vertices {
            assert!(v.position[0] <= 3);
            assert!(v.position[1] <= 7);
            assert!(v.position[2] <= 2);
        }
    }
}
