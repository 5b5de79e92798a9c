//! Per-finger geometry: how bent each finger is and where it points.

use crate::{
    config::CurlThresholds,
    types::{Finger, FingerGeometry, LandmarkFrame, NUM_FINGERS, Point3},
};

/// Vector math runs in f64: any finite f32 landmark squares and sums without
/// overflow, so results do not depend on the coordinate scale.
type Vec3 = [f64; 3];

pub fn extract(
    frame: &LandmarkFrame,
    thresholds: &CurlThresholds,
) -> [FingerGeometry; NUM_FINGERS] {
    Finger::ALL.map(|finger| finger_geometry(frame, finger, thresholds))
}

pub fn finger_geometry(
    frame: &LandmarkFrame,
    finger: Finger,
    thresholds: &CurlThresholds,
) -> FingerGeometry {
    let [base, joint1, joint2, tip] = frame.joints(finger).map(widen);

    let max_bend = match finger {
        Finger::Thumb => thresholds.thumb_max_bend_degrees,
        _ => thresholds.max_bend_degrees,
    };
    let total_bend = bend64(sub64(joint1, base), sub64(joint2, joint1))
        + bend64(sub64(joint2, joint1), sub64(tip, joint2));
    let curl_magnitude = (total_bend as f32 / max_bend).clamp(0.0, 1.0);

    // The thumb's first segment swings across the palm, so its pointing
    // direction starts at the MCP joint instead.
    let origin = match finger {
        Finger::Thumb => joint1,
        _ => base,
    };
    let direction = narrow(normalize64(sub64(tip, origin)));

    FingerGeometry {
        finger,
        curl_magnitude,
        direction,
    }
}

/// Deviation from colinear between two consecutive bone segments, in degrees.
pub fn bend_degrees(a: Point3, b: Point3) -> f32 {
    bend64(widen(a), widen(b)) as f32
}

/// Angle between two non-zero vectors, in degrees.
pub fn angle_between_degrees(a: Point3, b: Point3) -> f32 {
    angle64(widen(a), widen(b)) as f32
}

/// Euclidean length. Saturates to infinity only when the true length is
/// beyond `f32::MAX`.
pub fn length(v: Point3) -> f32 {
    length64(widen(v)) as f32
}

/// Unit vector along `v`, or zero for the zero vector.
pub fn normalize(v: Point3) -> Point3 {
    narrow(normalize64(widen(v)))
}

fn widen(p: Point3) -> Vec3 {
    p.map(f64::from)
}

fn narrow(v: Vec3) -> Point3 {
    v.map(|c| c as f32)
}

fn sub64(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot64(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn length64(v: Vec3) -> f64 {
    dot64(v, v).sqrt()
}

fn normalize64(v: Vec3) -> Vec3 {
    let len = length64(v);
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0; 3]
    }
}

fn bend64(a: Vec3, b: Vec3) -> f64 {
    if length64(a) == 0.0 || length64(b) == 0.0 {
        return 0.0;
    }
    angle64(a, b)
}

fn angle64(a: Vec3, b: Vec3) -> f64 {
    dot64(normalize64(a), normalize64(b))
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    /// Every finger is a straight column along -y (up in image space).
    fn straight_hand() -> Vec<Point3> {
        let mut points = vec![[0.0, 0.0, 0.0]];
        for f in 0..5 {
            let x = f as f32 * 0.2;
            for j in 0..4 {
                points.push([x, -0.5 - j as f32 * 0.3, 0.0]);
            }
        }
        points
    }

    #[test]
    fn colinear_segments_do_not_bend() {
        assert!(approx(bend_degrees([0.0, 1.0, 0.0], [0.0, 2.0, 0.0]), 0.0));
    }

    #[test]
    fn right_angle_bend() {
        assert!(approx(bend_degrees([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), 90.0));
    }

    #[test]
    fn zero_length_segment_counts_as_straight() {
        assert_eq!(bend_degrees([0.0; 3], [1.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn straight_fingers_have_no_curl_and_point_up() {
        let frame = LandmarkFrame::new(&straight_hand()).unwrap();
        for geometry in extract(&frame, &CurlThresholds::default()) {
            assert!(approx(geometry.curl_magnitude, 0.0), "{geometry:?}");
            assert!(approx(geometry.direction[1], -1.0), "{geometry:?}");
        }
    }

    #[test]
    fn folded_finger_saturates_curl() {
        let mut points = straight_hand();
        // Index: up, then sideways, then back down.
        points[5] = [0.0, 0.0, 0.0];
        points[6] = [0.0, -1.0, 0.0];
        points[7] = [0.0, -1.0, 1.0];
        points[8] = [0.0, 0.0, 1.0];
        let frame = LandmarkFrame::new(&points).unwrap();
        let index = finger_geometry(&frame, Finger::Index, &CurlThresholds::default());
        assert!(approx(index.curl_magnitude, 1.0));
    }

    #[test]
    fn thumb_direction_starts_at_mcp() {
        let mut points = straight_hand();
        points[1] = [0.0, 0.0, 0.0];
        points[2] = [1.0, 0.0, 0.0];
        points[3] = [2.0, 0.0, 0.0];
        points[4] = [3.0, 0.0, 0.0];
        let frame = LandmarkFrame::new(&points).unwrap();
        let thumb = finger_geometry(&frame, Finger::Thumb, &CurlThresholds::default());
        assert!(approx(thumb.direction[0], 1.0));
        assert!(approx(thumb.curl_magnitude, 0.0));
    }

    #[test]
    fn collapsed_finger_has_zero_direction() {
        let mut points = straight_hand();
        for idx in 9..=12 {
            points[idx] = [0.3, 0.3, 0.3];
        }
        let frame = LandmarkFrame::new(&points).unwrap();
        let middle = finger_geometry(&frame, Finger::Middle, &CurlThresholds::default());
        assert_eq!(middle.direction, [0.0, 0.0, 0.0]);
        assert_eq!(middle.curl_magnitude, 0.0);
    }

    #[test]
    fn huge_coordinates_keep_their_geometry() {
        let points: Vec<Point3> = straight_hand()
            .into_iter()
            .map(|p| p.map(|c| c * 1e20))
            .collect();
        let frame = LandmarkFrame::new(&points).unwrap();
        for geometry in extract(&frame, &CurlThresholds::default()) {
            assert!(approx(geometry.curl_magnitude, 0.0), "{geometry:?}");
            assert!(approx(geometry.direction[1], -1.0), "{geometry:?}");
        }
        assert!(approx(normalize([3e38, 3e38, 0.0])[0], std::f32::consts::FRAC_1_SQRT_2));
        assert!(approx(bend_degrees([3e38, 0.0, 0.0], [0.0, -3e38, 0.0]), 90.0));
    }

    #[test]
    fn tiny_coordinates_keep_their_geometry() {
        let points: Vec<Point3> = straight_hand()
            .into_iter()
            .map(|p| p.map(|c| c * 1e-20))
            .collect();
        let frame = LandmarkFrame::new(&points).unwrap();
        for geometry in extract(&frame, &CurlThresholds::default()) {
            assert!(approx(geometry.curl_magnitude, 0.0), "{geometry:?}");
            assert!(approx(geometry.direction[1], -1.0), "{geometry:?}");
        }
    }
}
