//! Angle primitives over marked points
//!
//! All angles are in degrees and keep the image convention of the
//! marking UI: y grows downward, so a vector that drops to the right
//! has a positive angle.

use crate::model::Point;

/// Angle of the vector from `p1` to `p2` against the horizontal axis
///
/// Returns a value in (-180, 180]. Identical points give 0.
#[inline]
pub fn angle_between(p1: &Point, p2: &Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Deviation of the `top`-to-`bottom` segment from the vertical
///
/// 0 means plumb. The value goes negative once the segment tilts past
/// the horizontal, which keeps the direction of extreme markings
/// distinguishable downstream.
#[inline]
pub fn vertical_alignment(top: &Point, bottom: &Point) -> f64 {
    90.0 - angle_between(top, bottom).abs()
}

/// Tilt of the `left`-to-`right` segment against the horizontal
///
/// 0 means level; positive means the right landmark sits lower in the
/// image than the left one.
#[inline]
pub fn horizontal_level(left: &Point, right: &Point) -> f64 {
    angle_between(left, right)
}

/// Deviation of the hip-knee-ankle chain from a straight leg
///
/// 0 means the three landmarks are collinear. No zero-norm guard: a
/// degenerate triple (coincident landmarks) makes the ratio NaN and
/// the NaN flows through to the caller.
pub fn knee_deviation_angle(hip: &Point, knee: &Point, ankle: &Point) -> f64 {
    let (ux, uy) = (hip.x - knee.x, hip.y - knee.y);
    let (vx, vy) = (ankle.x - knee.x, ankle.y - knee.y);
    let dot = ux * vx + uy * vy;
    let norm = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    let interior = (dot / norm).acos().to_degrees();
    180.0 - interior
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y, "")
    }

    #[test]
    fn test_angle_identical_points_is_zero() {
        let p = pt(0.5, 0.5);
        assert_eq!(angle_between(&p, &p), 0.0);
    }

    #[test]
    fn test_angle_cardinal_directions() {
        let origin = pt(0.5, 0.5);
        assert!((angle_between(&origin, &pt(0.9, 0.5)) - 0.0).abs() < 0.01);
        assert!((angle_between(&origin, &pt(0.5, 0.9)) - 90.0).abs() < 0.01);
        assert!((angle_between(&origin, &pt(0.1, 0.5)) - 180.0).abs() < 0.01);
        assert!((angle_between(&origin, &pt(0.5, 0.1)) + 90.0).abs() < 0.01);
    }

    #[test]
    fn test_angle_downward_right_is_positive() {
        // Right point lower in the image
        let angle = angle_between(&pt(0.3, 0.4), &pt(0.5, 0.45));
        assert!((angle - 14.04).abs() < 0.01);
    }

    #[test]
    fn test_vertical_alignment_plumb_is_zero() {
        let value = vertical_alignment(&pt(0.5, 0.1), &pt(0.5, 0.5));
        assert!((value - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_vertical_alignment_identical_points() {
        let p = pt(0.5, 0.3);
        assert_eq!(vertical_alignment(&p, &p), 90.0);
    }

    #[test]
    fn test_vertical_alignment_small_lean() {
        // Bottom point slightly to the right of the top point
        let value = vertical_alignment(&pt(0.5, 0.2), &pt(0.52, 0.5));
        assert!((value - 3.81).abs() < 0.01);
    }

    #[test]
    fn test_vertical_alignment_past_horizontal_goes_negative() {
        let value = vertical_alignment(&pt(0.3, 0.5), &pt(0.1, 0.45));
        assert!((value + 75.96).abs() < 0.01);
    }

    #[test]
    fn test_horizontal_level_flat_is_zero() {
        let value = horizontal_level(&pt(0.4, 0.3), &pt(0.6, 0.3));
        assert!((value - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_horizontal_level_right_higher_is_negative() {
        let value = horizontal_level(&pt(0.4, 0.3), &pt(0.6, 0.25));
        assert!(value < 0.0);
    }

    #[test]
    fn test_knee_deviation_straight_leg_is_zero() {
        // Exactly representable offsets with 3-4-5 norms, so the
        // cosine lands on -1.0 instead of drifting past it
        let value = knee_deviation_angle(&pt(0.6875, 0.25), &pt(0.5, 0.5), &pt(0.3125, 0.75));
        assert!((value - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_knee_deviation_bent_knee() {
        let value = knee_deviation_angle(&pt(0.4, 0.5), &pt(0.38, 0.7), &pt(0.4, 0.9));
        assert!((value - 11.42).abs() < 0.01);
    }

    #[test]
    fn test_knee_deviation_degenerate_is_nan() {
        let hip = pt(0.4, 0.5);
        let knee = pt(0.4, 0.5);
        let ankle = pt(0.4, 0.9);
        assert!(knee_deviation_angle(&hip, &knee, &ankle).is_nan());
    }
}
