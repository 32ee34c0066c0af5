//! Volume shared between a generator and the mesher.
//!
//! A meshing pass holds one read guard from start to finish, so a writer can
//! never interleave with it. There is no incremental remeshing: after a write
//! the caller runs a full pass again.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::volume::VoxelVolume;
use crate::mesh::{ChunkMesh, ChunkMesher};

/// A cloneable handle to a volume behind a read-write lock.
#[derive(Clone, Debug)]
pub struct SharedVolume {
    inner: Arc<RwLock<VoxelVolume>>,
}

impl SharedVolume {
    /// Wraps a volume for shared access.
    #[must_use]
    pub fn new(volume: VoxelVolume) -> Self {
        Self {
            inner: Arc::new(RwLock::new(volume)),
        }
    }

    /// Shared read access. Blocks while a writer holds the lock.
    pub fn read(&self) -> RwLockReadGuard<'_, VoxelVolume> {
        self.inner.read()
    }

    /// Exclusive write access. Blocks while any meshing pass is running.
    pub fn write(&self) -> RwLockWriteGuard<'_, VoxelVolume> {
        self.inner.write()
    }

    /// Runs a full meshing pass under a single read guard.
    #[must_use]
    pub fn build_mesh(&self, mesher: &ChunkMesher) -> ChunkMesh {
        let guard = self.inner.read();
        mesher.build_mesh(&guard)
    }

    /// Unwraps the volume if this is the last handle.
    ///
    /// # Errors
    /// Returns `self` unchanged if other handles are still alive.
    pub fn try_unwrap(self) -> Result<VoxelVolume, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_mesh_after_concurrent_writes() {
        let shared = SharedVolume::new(VoxelVolume::cube(8).unwrap());

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let handle = shared.clone();
                thread::spawn(move || {
                    let mut volume = handle.write();
                    volume.set(i * 2, 0, 0, [200, 100, 50]).unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let mesh = shared.build_mesh(&ChunkMesher::new());
        // Four isolated cells, six faces each.
        assert_eq!(mesh.face_count(), 24);

        let volume = shared.try_unwrap().unwrap();
        assert_eq!(volume.occupied_count(), 4);
    }

    #[test]
    fn test_try_unwrap_with_live_handle() {
        let shared = SharedVolume::new(VoxelVolume::cube(2).unwrap());
        let other = shared.clone();
        let shared = shared.try_unwrap().unwrap_err();
        drop(other);
        assert!(shared.try_unwrap().is_ok());
    }
}
