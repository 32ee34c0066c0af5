//! Face emission for a single cell.
//!
//! All six directions share one routine driven by a [`FaceDescriptor`]:
//! the outward normal, two in-plane axes and a fixed shading weight.
//! The in-plane axes are ordered so that `u x v = normal`, which makes the
//! corner loop `00 -> 10 -> 11 -> 01` counter-clockwise seen from outside.

use super::occlusion::{brightness, occlusion_level};
use super::vertex::MeshVertex;
use crate::voxel::VoxelVolume;

/// One of the six axis-aligned face directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +Y.
    Top,
    /// -Y.
    Bottom,
    /// -X.
    Left,
    /// +X.
    Right,
    /// +Z.
    Front,
    /// -Z.
    Back,
}

impl Face {
    /// All faces, in emission order.
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Front,
        Self::Back,
    ];

    /// Returns the geometry and shading for this direction.
    #[inline]
    #[must_use]
    pub const fn descriptor(self) -> &'static FaceDescriptor {
        match self {
            Self::Top => &TOP,
            Self::Bottom => &BOTTOM,
            Self::Left => &LEFT,
            Self::Right => &RIGHT,
            Self::Front => &FRONT,
            Self::Back => &BACK,
        }
    }
}

/// Geometry and shading for one face direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDescriptor {
    /// Outward unit normal.
    pub normal: [i32; 3],
    /// First in-plane axis.
    pub u: [i32; 3],
    /// Second in-plane axis.
    pub v: [i32; 3],
    /// Directional shading weight applied to the cell color.
    pub shade: f32,
}

const X: [i32; 3] = [1, 0, 0];
const Y: [i32; 3] = [0, 1, 0];
const Z: [i32; 3] = [0, 0, 1];

const TOP: FaceDescriptor = FaceDescriptor { normal: Y, u: Z, v: X, shade: 1.00 };
const BOTTOM: FaceDescriptor = FaceDescriptor { normal: [0, -1, 0], u: X, v: Z, shade: 0.90 };
const LEFT: FaceDescriptor = FaceDescriptor { normal: [-1, 0, 0], u: Z, v: Y, shade: 0.94 };
const RIGHT: FaceDescriptor = FaceDescriptor { normal: X, u: Y, v: Z, shade: 0.98 };
const FRONT: FaceDescriptor = FaceDescriptor { normal: Z, u: X, v: Y, shade: 0.96 };
const BACK: FaceDescriptor = FaceDescriptor { normal: [0, 0, -1], u: Y, v: X, shade: 0.92 };

/// Which quad diagonal the two triangles share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Corners 00 and 11.
    Main,
    /// Corners 01 and 10.
    Anti,
}

impl Diagonal {
    /// Picks the split that keeps the brighter corner pair connected.
    ///
    /// `corners[i][j]` is the brightness at corner `ij`. Ties go to
    /// [`Diagonal::Anti`].
    #[inline]
    #[must_use]
    pub fn choose(corners: [[f32; 2]; 2]) -> Self {
        if corners[0][0] + corners[1][1] > corners[0][1] + corners[1][0] {
            Self::Main
        } else {
            Self::Anti
        }
    }

    /// Corner `(i, j)` pairs for both triangles, counter-clockwise.
    #[inline]
    #[must_use]
    pub const fn triangles(self) -> [(usize, usize); 6] {
        match self {
            Self::Main => [(0, 0), (1, 0), (1, 1), (0, 0), (1, 1), (0, 1)],
            Self::Anti => [(0, 0), (1, 0), (0, 1), (1, 0), (1, 1), (0, 1)],
        }
    }
}

#[inline]
fn offset(p: [i32; 3], axis: [i32; 3], k: i32) -> [i32; 3] {
    [p[0] + axis[0] * k, p[1] + axis[1] * k, p[2] + axis[2] * k]
}

#[inline]
fn occupied(volume: &VoxelVolume, p: [i32; 3]) -> bool {
    volume.is_occupied(p[0], p[1], p[2])
}

/// Brightness at each corner of a face, indexed `[i][j]`.
///
/// Samples are taken in the layer directly in front of the face.
#[must_use]
pub fn corner_brightness(volume: &VoxelVolume, cell: [i32; 3], face: Face) -> [[f32; 2]; 2] {
    let desc = face.descriptor();
    let front = offset(cell, desc.normal, 1);
    let face_occluded = occupied(volume, front);

    let mut out = [[0.0; 2]; 2];
    for (i, row) in out.iter_mut().enumerate() {
        let su = if i == 0 { -1 } else { 1 };
        for (j, slot) in row.iter_mut().enumerate() {
            let sv = if j == 0 { -1 } else { 1 };
            let side1 = offset(front, desc.u, su);
            let side2 = offset(front, desc.v, sv);
            let corner = offset(side1, desc.v, sv);
            let level = occlusion_level(
                occupied(volume, side1),
                occupied(volume, side2),
                occupied(volume, corner),
                face_occluded,
            );
            *slot = brightness(level);
        }
    }
    out
}

/// Appends one face of `cell` to `out` if the cell beyond it is empty.
///
/// Returns true if the face was emitted. Cells outside the volume count as
/// empty, so faces on the boundary are always drawn.
pub fn emit_face(
    volume: &VoxelVolume,
    cell: [i32; 3],
    color: [u8; 3],
    face: Face,
    out: &mut Vec<MeshVertex>,
) -> bool {
    let desc = face.descriptor();
    if occupied(volume, offset(cell, desc.normal, 1)) {
        return false;
    }

    let corners = corner_brightness(volume, cell, face);

    // Positive faces sit on the far side of the cell.
    let origin = [
        cell[0] + desc.normal[0].max(0),
        cell[1] + desc.normal[1].max(0),
        cell[2] + desc.normal[2].max(0),
    ];
    let base = color.map(|c| f32::from(c) * desc.shade);

    for (i, j) in Diagonal::choose(corners).triangles() {
        let p = offset(offset(origin, desc.u, i as i32), desc.v, j as i32);
        let b = corners[i][j];
        out.push(MeshVertex {
            position: p.map(|c| c as u8),
            color: base.map(|c| (b * c) as u8),
        });
    }
    true
}
