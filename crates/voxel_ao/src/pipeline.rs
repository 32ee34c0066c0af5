//! # Mesh Pipeline
//!
//! ```text
//! AppConfig → VolumeGenerator::fill → ChunkMesher::build_mesh → MeshReport
//!                                                   ↓
//!                                          vertex dump (optional)
//! ```

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use voxel_ao_mesh::{ChunkMesh, ChunkMesher, VoxelVolume};
use voxel_ao_procedural::VolumeGenerator;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Statistics for one generate-and-mesh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshReport {
    /// Volume dimensions `(width, height, depth)`.
    pub dimensions: (usize, usize, usize),
    /// Occupied cells after generation.
    pub occupied: usize,
    /// Visible faces emitted.
    pub faces: usize,
    /// Triangles emitted.
    pub triangles: usize,
    /// Vertices emitted.
    pub vertices: usize,
    /// Size of the vertex buffer in bytes.
    pub bytes: usize,
    /// Time spent meshing.
    pub mesh_time: Duration,
}

impl MeshReport {
    /// Summarizes a mesh built from `volume`.
    #[must_use]
    pub fn new(volume: &VoxelVolume, mesh: &ChunkMesh, mesh_time: Duration) -> Self {
        Self {
            dimensions: (volume.width(), volume.height(), volume.depth()),
            occupied: volume.occupied_count(),
            faces: mesh.face_count(),
            triangles: mesh.triangle_count(),
            vertices: mesh.vertex_count(),
            bytes: mesh.as_bytes().len(),
            mesh_time,
        }
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h, d) = self.dimensions;
        writeln!(f, "volume     {w}x{h}x{d} ({} occupied)", self.occupied)?;
        writeln!(f, "faces      {}", self.faces)?;
        writeln!(f, "triangles  {}", self.triangles)?;
        writeln!(f, "vertices   {} ({} bytes)", self.vertices, self.bytes)?;
        write!(f, "mesh time  {:?}", self.mesh_time)
    }
}

/// Output of [`Pipeline::run`].
#[derive(Debug)]
pub struct PipelineOutput {
    /// The generated volume.
    pub volume: VoxelVolume,
    /// The mesh built from it.
    pub mesh: ChunkMesh,
    /// Statistics.
    pub report: MeshReport,
}

/// Generate, mesh and report, as configured.
pub struct Pipeline {
    config: AppConfig,
    generator: VolumeGenerator,
    mesher: ChunkMesher,
}

impl Pipeline {
    /// Creates a pipeline from a validated config.
    ///
    /// # Errors
    /// Returns [`crate::AppError::InvalidConfig`] if the config fails
    /// validation.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            generator: config.generator.generator(),
            mesher: ChunkMesher::new(),
            config,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Allocates and populates a volume.
    ///
    /// # Errors
    /// Returns [`crate::AppError::Volume`] if allocation or a write fails.
    pub fn generate(&self) -> AppResult<VoxelVolume> {
        let mut volume = self.config.volume.allocate()?;
        self.generator.fill(&mut volume, self.config.generator.pattern())?;
        Ok(volume)
    }

    /// Runs generation and meshing, writing the vertex dump if configured.
    ///
    /// # Errors
    /// Returns [`crate::AppError::Volume`] from generation or
    /// [`crate::AppError::Io`] if the dump cannot be written.
    pub fn run(&self) -> AppResult<PipelineOutput> {
        let volume = self.generate()?;

        let start = Instant::now();
        let mesh = self.mesher.build_mesh(&volume);
        let report = MeshReport::new(&volume, &mesh, start.elapsed());

        if let Some(path) = &self.config.output.vertex_dump {
            write_vertex_dump(&mesh, path)?;
        }

        tracing::info!(
            faces = report.faces,
            vertices = report.vertices,
            "pipeline finished"
        );
        Ok(PipelineOutput { volume, mesh, report })
    }
}

/// Writes the raw vertex buffer (6 bytes per vertex) to `path`.
///
/// # Errors
/// Returns [`crate::AppError::Io`] if the file cannot be written.
pub fn write_vertex_dump(mesh: &ChunkMesh, path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();
    std::fs::write(path, mesh.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = mesh.as_bytes().len(), "wrote vertex dump");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternKind;

    #[test]
    fn test_default_pipeline_runs() {
        let pipeline = Pipeline::new(AppConfig::default()).unwrap();
        let output = pipeline.run().unwrap();

        assert_eq!(output.report.dimensions, (16, 16, 16));
        assert_eq!(output.report.occupied, output.volume.occupied_count());
        assert_eq!(output.report.vertices, output.mesh.vertex_count());
        assert_eq!(output.report.bytes, output.report.vertices * 6);
        assert!(output.report.faces > 0);
    }

    #[test]
    fn test_solid_report_counts() {
        let mut config = AppConfig::default();
        config.volume.width = 4;
        config.volume.height = 4;
        config.volume.depth = 4;
        config.generator.pattern = PatternKind::Solid;

        let report = Pipeline::new(config).unwrap().run().unwrap().report;
        assert_eq!(report.occupied, 64);
        assert_eq!(report.faces, 6 * 16);
        assert_eq!(report.triangles, 2 * 6 * 16);
        assert_eq!(report.vertices, 6 * 6 * 16);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.volume.width = 300;
        assert!(Pipeline::new(config).is_err());
    }

    #[test]
    fn test_report_display() {
        let report = MeshReport {
            dimensions: (16, 16, 16),
            occupied: 1,
            faces: 6,
            triangles: 12,
            vertices: 36,
            bytes: 216,
            mesh_time: Duration::from_micros(5),
        };
        let text = report.to_string();
        assert!(text.contains("16x16x16 (1 occupied)"));
        assert!(text.contains("vertices   36 (216 bytes)"));
    }
}
