//! Per-corner ambient occlusion.
//!
//! Each face corner looks at three cells in the layer just in front of the
//! face: the two that share an edge with the corner and the one diagonal to
//! it. Every occupied sample darkens the corner by one step.
//!
//! ```text
//!   side2 | corner
//!   ------+-------
//!    face | side1
//! ```

/// Brightest occlusion level (nothing nearby).
pub const MAX_LEVEL: u8 = 3;

/// Brightness multiplier at level 0.
pub const MIN_BRIGHTNESS: f32 = 0.6;

/// Brightness gained between level 0 and level [`MAX_LEVEL`].
const BRIGHTNESS_RANGE: f32 = 0.4;

/// Level reported when the face itself is covered.
///
/// Covered faces are culled before any corner is evaluated, so the mesher
/// never reaches this value.
pub const COVERED_FACE_LEVEL: u8 = 2;

/// Occlusion level for one corner, in `0..=3` (0 = darkest).
///
/// When both edge neighbors are occupied the corner is fully enclosed and
/// the diagonal is not counted again.
#[inline]
#[must_use]
pub const fn occlusion_level(side1: bool, side2: bool, corner: bool, face_occluded: bool) -> u8 {
    if face_occluded {
        return COVERED_FACE_LEVEL;
    }
    if side1 && side2 {
        return 0;
    }
    MAX_LEVEL - (side1 as u8 + side2 as u8 + corner as u8)
}

/// Maps an occlusion level to a color multiplier in `[0.6, 1.0]`.
///
/// Levels above [`MAX_LEVEL`] are treated as [`MAX_LEVEL`].
#[inline]
#[must_use]
pub fn brightness(level: u8) -> f32 {
    let level = level.min(MAX_LEVEL);
    MIN_BRIGHTNESS + (f32::from(level) / 3.0) * BRIGHTNESS_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn test_open_corner_is_brightest() {
        assert_eq!(occlusion_level(false, false, false, false), 3);
        assert!((brightness(3) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_each_sample_darkens_one_step() {
        assert_eq!(occlusion_level(true, false, false, false), 2);
        assert_eq!(occlusion_level(false, true, false, false), 2);
        assert_eq!(occlusion_level(false, false, true, false), 2);
        assert_eq!(occlusion_level(true, false, true, false), 1);
        assert_eq!(occlusion_level(false, true, true, false), 1);
    }

    #[test]
    fn test_both_edges_ignore_diagonal() {
        for corner in BOOLS {
            assert_eq!(occlusion_level(true, true, corner, false), 0);
        }
    }

    #[test]
    fn test_covered_face_level() {
        for side1 in BOOLS {
            for side2 in BOOLS {
                for corner in BOOLS {
                    assert_eq!(occlusion_level(side1, side2, corner, true), 2);
                }
            }
        }
    }

    #[test]
    fn test_level_and_brightness_bounds() {
        for side1 in BOOLS {
            for side2 in BOOLS {
                for corner in BOOLS {
                    for covered in BOOLS {
                        let level = occlusion_level(side1, side2, corner, covered);
                        assert!(level <= MAX_LEVEL);
                        let b = brightness(level);
                        assert!((MIN_BRIGHTNESS..=1.0).contains(&b), "brightness {b}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_brightness_table() {
        assert!((brightness(0) - 0.6).abs() < 1e-6);
        assert!((brightness(1) - (0.6 + 0.4 / 3.0)).abs() < 1e-6);
        assert!((brightness(2) - (0.6 + 0.8 / 3.0)).abs() < 1e-6);
        assert_eq!(brightness(200), brightness(3));
    }
}
