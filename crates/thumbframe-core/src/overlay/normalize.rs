//! Optional post-gesture normalization.
//!
//! During a drag, width and height may cross zero and the rotation may grow
//! without bound. Whether that should be cleaned up afterwards is a policy
//! choice, so it is applied only when a gesture ends and defaults to leaving
//! everything as-is.

use super::geometry::Geometry;
use serde::{Deserialize, Serialize};

/// What to do with a negative width or height when a gesture ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// Keep negative sizes.
    #[default]
    Preserve,
    /// Clamp negative sizes to zero, keeping the offset.
    ClampToZero,
    /// Swap the edges so the same area is covered with a positive size.
    Flip,
}

/// What to do with the rotation angle when a gesture ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Keep the raw accumulated angle.
    #[default]
    Unbounded,
    /// Wrap into `[0, 360)`.
    Wrap,
}

/// Normalization applied at gesture end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalization {
    pub size: SizePolicy,
    pub rotation: RotationPolicy,
}

impl SizePolicy {
    pub fn apply(self, geometry: Geometry) -> Geometry {
        let mut g = geometry;
        match self {
            SizePolicy::Preserve => {}
            SizePolicy::ClampToZero => {
                g.width = g.width.max(0.0);
                g.height = g.height.max(0.0);
            }
            SizePolicy::Flip => {
                if g.width < 0.0 {
                    g.x += g.width;
                    g.width = -g.width;
                }
                if g.height < 0.0 {
                    g.y += g.height;
                    g.height = -g.height;
                }
            }
        }
        g
    }
}

impl RotationPolicy {
    pub fn apply(self, rotation: f64) -> f64 {
        match self {
            RotationPolicy::Unbounded => rotation,
            RotationPolicy::Wrap => {
                let wrapped = rotation.rem_euclid(360.0);
                // rem_euclid can round up to exactly 360 for tiny negatives
                if wrapped >= 360.0 {
                    0.0
                } else {
                    wrapped
                }
            }
        }
    }
}

impl Normalization {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_keeps_negative_size() {
        let g = Geometry::new(5.0, 5.0, -10.0, -20.0);
        assert_eq!(SizePolicy::Preserve.apply(g), g);
    }

    #[test]
    fn test_clamp_to_zero() {
        let g = Geometry::new(5.0, 5.0, -10.0, 20.0);
        assert_eq!(
            SizePolicy::ClampToZero.apply(g),
            Geometry::new(5.0, 5.0, 0.0, 20.0)
        );
    }

    #[test]
    fn test_flip_covers_same_area() {
        let g = Geometry::new(100.0, 50.0, -30.0, -10.0);
        let flipped = SizePolicy::Flip.apply(g);
        assert_eq!(flipped, Geometry::new(70.0, 40.0, 30.0, 10.0));
        // The far edges of the flipped rect are the previous offsets
        assert_eq!(flipped.right(), 100.0);
        assert_eq!(flipped.bottom(), 50.0);
    }

    #[test]
    fn test_wrap_rotation() {
        assert_eq!(RotationPolicy::Wrap.apply(370.0), 10.0);
        assert_eq!(RotationPolicy::Wrap.apply(-90.0), 270.0);
        assert_eq!(RotationPolicy::Wrap.apply(0.0), 0.0);
        assert_eq!(RotationPolicy::Wrap.apply(720.0), 0.0);
        assert_eq!(RotationPolicy::Unbounded.apply(-725.0), -725.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let wrapped = RotationPolicy::Wrap.apply(-1e-20);
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn test_default_is_identity() {
        assert!(Normalization::default().is_identity());
        let n = Normalization {
            size: SizePolicy::Flip,
            ..Default::default()
        };
        assert!(!n.is_identity());
    }
}
