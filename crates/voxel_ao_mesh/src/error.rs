//! # Volume Error Types
//!
//! Reads from a volume are total, so every error here comes from building
//! or writing one.

use thiserror::Error;

/// Errors that can occur when creating or writing a voxel volume.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VolumeError {
    /// Attempted to write a cell outside the volume.
    #[error("cell ({x}, {y}, {z}) is outside the {width}x{height}x{depth} volume")]
    OutOfBounds {
        /// Requested X coordinate.
        x: i32,
        /// Requested Y coordinate.
        y: i32,
        /// Requested Z coordinate.
        z: i32,
        /// Volume width.
        width: usize,
        /// Volume height.
        height: usize,
        /// Volume depth.
        depth: usize,
    },

    /// Volume dimensions cannot be represented by `u8` vertex positions.
    #[error("invalid volume dimensions {width}x{height}x{depth}: each axis must be 1..=255")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Requested depth.
        depth: usize,
    },
}

/// Result type for volume operations.
pub type VolumeResult<T> = Result<T, VolumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = VolumeError::OutOfBounds {
            x: -1,
            y: 0,
            z: 16,
            width: 16,
            height: 16,
            depth: 16,
        };
        assert_eq!(
            err.to_string(),
            "cell (-1, 0, 16) is outside the 16x16x16 volume"
        );
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = VolumeError::InvalidDimensions { width: 0, height: 16, depth: 300 };
        assert_eq!(
            err.to_string(),
            "invalid volume dimensions 0x16x300: each axis must be 1..=255"
        );
    }
}
