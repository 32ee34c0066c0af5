//! Volume fill patterns.
//!
//! A generator replaces the whole contents of a volume. Meshing is expected
//! to run after `fill` returns, never during it.

use rand::Rng;
use voxel_ao_mesh::{VolumeResult, VoxelVolume};

use crate::noise::{GenSeed, HeightNoise};

/// Block colors used by the built-in patterns.
pub mod palette {
    /// Surface layer of terrain.
    pub const GRASS: [u8; 3] = [106, 170, 64];
    /// Subsurface layer of terrain.
    pub const DIRT: [u8; 3] = [134, 96, 67];
    /// Deep layer of terrain and the solid pattern.
    pub const STONE: [u8; 3] = [125, 125, 125];
    /// Sphere pattern.
    pub const CLAY: [u8; 3] = [200, 120, 90];
    /// Colors drawn by the scatter pattern.
    pub const SCATTER: [[u8; 3]; 4] = [GRASS, DIRT, STONE, CLAY];
}

/// Sub-seed purposes.
const HEIGHT_STREAM: u64 = 1;
const SCATTER_STREAM: u64 = 2;

/// Horizontal frequency of the terrain height field.
const TERRAIN_SCALE: f64 = 0.08;
/// Octaves summed for the terrain height field.
const TERRAIN_OCTAVES: u32 = 4;
/// Dirt layers under the grass cell.
const DIRT_DEPTH: i32 = 3;

/// What to fill the volume with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// Every cell occupied.
    Solid,
    /// A ball centered in the volume touching its shortest axis.
    Sphere,
    /// A noise height field: grass on top, then dirt, then stone.
    Terrain,
    /// Independent cells, each occupied with probability `density`.
    Scatter {
        /// Occupancy probability, clamped to `[0, 1]`.
        density: f64,
    },
}

/// Populates volumes from a seed.
pub struct VolumeGenerator {
    seed: GenSeed,
    heights: HeightNoise,
}

impl VolumeGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new(seed: GenSeed) -> Self {
        Self {
            seed,
            heights: HeightNoise::new(seed.derive(HEIGHT_STREAM)),
        }
    }

    /// Returns the seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> GenSeed {
        self.seed
    }

    /// Clears `volume` and fills it with `pattern`.
    ///
    /// Returns the number of occupied cells written.
    ///
    /// # Errors
    /// Propagates [`voxel_ao_mesh::VolumeError`] from a write. Built-in
    /// patterns only write in-range cells.
    pub fn fill(&self, volume: &mut VoxelVolume, pattern: Pattern) -> VolumeResult<usize> {
        volume.clear_all();

        match pattern {
            Pattern::Solid => fill_solid(volume)?,
            Pattern::Sphere => fill_sphere(volume)?,
            Pattern::Terrain => self.fill_terrain(volume)?,
            Pattern::Scatter { density } => self.fill_scatter(volume, density)?,
        }

        tracing::debug!(
            seed = self.seed.value(),
            ?pattern,
            occupied = volume.occupied_count(),
            "generated volume"
        );
        Ok(volume.occupied_count())
    }

    /// Surface height of the column at `(x, z)`, in `1..=max_height`.
    #[must_use]
    pub fn column_height(&self, x: i32, z: i32, max_height: usize) -> i32 {
        let n = self.heights.fbm(
            f64::from(x) * TERRAIN_SCALE,
            f64::from(z) * TERRAIN_SCALE,
            TERRAIN_OCTAVES,
        );
        let t = (n + 1.0) * 0.5;
        let h = 1 + (t * (max_height - 1) as f64).floor() as i32;
        h.clamp(1, max_height as i32)
    }

    fn fill_terrain(&self, volume: &mut VoxelVolume) -> VolumeResult<()> {
        let height = volume.height();
        for z in 0..volume.depth() as i32 {
            for x in 0..volume.width() as i32 {
                let top = self.column_height(x, z, height);
                for y in 0..top {
                    let below_surface = top - 1 - y;
                    let color = match below_surface {
                        0 => palette::GRASS,
                        d if d <= DIRT_DEPTH => palette::DIRT,
                        _ => palette::STONE,
                    };
                    volume.set(x, y, z, color)?;
                }
            }
        }
        Ok(())
    }

    fn fill_scatter(&self, volume: &mut VoxelVolume, density: f64) -> VolumeResult<()> {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let mut rng = self.seed.derive(SCATTER_STREAM).rng();

        for y in 0..volume.height() as i32 {
            for z in 0..volume.depth() as i32 {
                for x in 0..volume.width() as i32 {
                    if rng.gen_bool(density) {
                        let color = palette::SCATTER[rng.gen_range(0..palette::SCATTER.len())];
                        volume.set(x, y, z, color)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn fill_solid(volume: &mut VoxelVolume) -> VolumeResult<()> {
    for y in 0..volume.height() as i32 {
        for z in 0..volume.depth() as i32 {
            for x in 0..volume.width() as i32 {
                volume.set(x, y, z, palette::STONE)?;
            }
        }
    }
    Ok(())
}

fn fill_sphere(volume: &mut VoxelVolume) -> VolumeResult<()> {
    let (w, h, d) = (volume.width(), volume.height(), volume.depth());
    let center = [w as f64 / 2.0, h as f64 / 2.0, d as f64 / 2.0];
    let radius = w.min(h).min(d) as f64 / 2.0;

    for y in 0..h as i32 {
        for z in 0..d as i32 {
            for x in 0..w as i32 {
                let dx = f64::from(x) + 0.5 - center[0];
                let dy = f64::from(y) + 0.5 - center[1];
                let dz = f64::from(z) + 0.5 - center[2];
                if dx * dx + dy * dy + dz * dz <= radius * radius {
                    volume.set(x, y, z, palette::CLAY)?;
                }
            }
        }
    }
    Ok(())
}
