//! Mesh output - the vertex buffer handed to the GPU uploader.

use bytemuck::{Pod, Zeroable};

/// Vertices emitted per visible face (two triangles, no index buffer).
pub const VERTICES_PER_FACE: usize = 6;

/// One mesh vertex - 6 bytes, no padding.
///
/// Layout on the wire: `x, y, z, r, g, b`, each an unsigned byte.
/// Normals are not stored; they follow from the winding of each triangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct MeshVertex {
    /// Grid-aligned corner position, each component in `0..=N`.
    pub position: [u8; 3],
    /// Shaded color (face weight and ambient occlusion applied).
    pub color: [u8; 3],
}

impl MeshVertex {
    /// Size of one vertex in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a new vertex.
    #[inline]
    #[must_use]
    pub const fn new(position: [u8; 3], color: [u8; 3]) -> Self {
        Self { position, color }
    }
}

/// A non-indexed triangle list: every three vertices form one triangle.
///
/// Rebuilt wholesale on every meshing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkMesh {
    /// Vertex buffer data.
    pub vertices: Vec<MeshVertex>,
}

impl ChunkMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    /// Creates an empty mesh with room for `faces` faces.
    #[must_use]
    pub fn with_face_capacity(faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(faces * VERTICES_PER_FACE),
        }
    }

    /// Check if mesh is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Get visible face count.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    /// Iterates over triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = &[MeshVertex]> {
        self.vertices.chunks_exact(3)
    }

    /// The vertex buffer as raw bytes, ready for upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Hands the vertex buffer over to the caller.
    #[must_use]
    pub fn into_vertices(self) -> Vec<MeshVertex> {
        self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(MeshVertex::SIZE, 6);
        assert_eq!(std::mem::align_of::<MeshVertex>(), 1);
    }

    #[test]
    fn test_byte_view_order() {
        let mesh = ChunkMesh {
            vertices: vec![
                MeshVertex::new([1, 2, 3], [4, 5, 6]),
                MeshVertex::new([7, 8, 9], [10, 11, 12]),
            ],
        };
        assert_eq!(mesh.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_counts() {
        let mut mesh = ChunkMesh::with_face_capacity(2);
        assert!(mesh.is_empty());
        mesh.vertices.extend(std::iter::repeat(MeshVertex::default()).take(12));
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.triangles().count(), 4);
        assert_eq!(mesh.into_vertices().len(), 12);
    }
}
