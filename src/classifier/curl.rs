use crate::{
    config::CurlThresholds,
    types::{CurlCategory, CurlMembership},
};

/// Fuzzy curl membership for one finger's normalized curl magnitude.
pub fn classify_curl(magnitude: f32, thresholds: &CurlThresholds) -> CurlMembership {
    let m = magnitude.clamp(0.0, 1.0);
    let lo = thresholds.no_curl_until;
    let peak = thresholds.half_curl_peak;
    let hi = thresholds.full_curl_from;

    let mut scores = [0.0; 3];
    scores[CurlCategory::NoCurl.index()] = 1.0 - ramp(m, lo, peak);
    scores[CurlCategory::HalfCurl.index()] = if m <= peak {
        ramp(m, lo, peak)
    } else {
        1.0 - ramp(m, peak, hi)
    };
    scores[CurlCategory::FullCurl.index()] = ramp(m, peak, hi);

    CurlMembership(scores)
}

/// 0 below `from`, 1 above `to`, linear in between.
fn ramp(value: f32, from: f32, to: f32) -> f32 {
    if value <= from {
        0.0
    } else if value >= to {
        1.0
    } else {
        (value - from) / (to - from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(m: f32) -> CurlMembership {
        classify_curl(m, &CurlThresholds::default())
    }

    #[test]
    fn straight_finger_is_no_curl() {
        let c = classify(0.1);
        assert_eq!(c.get(CurlCategory::NoCurl), 1.0);
        assert_eq!(c.get(CurlCategory::HalfCurl), 0.0);
        assert_eq!(c.get(CurlCategory::FullCurl), 0.0);
    }

    #[test]
    fn fully_bent_finger_is_full_curl() {
        let c = classify(0.9);
        assert_eq!(c.get(CurlCategory::FullCurl), 1.0);
        assert_eq!(c.get(CurlCategory::NoCurl), 0.0);
    }

    #[test]
    fn boundary_zone_splits_confidence() {
        let c = classify(0.375);
        assert!((c.get(CurlCategory::NoCurl) - 0.5).abs() < 1e-6);
        assert!((c.get(CurlCategory::HalfCurl) - 0.5).abs() < 1e-6);
        assert_eq!(c.get(CurlCategory::FullCurl), 0.0);

        let c = classify(0.5);
        assert_eq!(c.get(CurlCategory::HalfCurl), 1.0);
        assert_eq!(c.dominant(), CurlCategory::HalfCurl);
    }

    #[test]
    fn memberships_are_monotonic_in_magnitude() {
        let mut prev = classify(0.0);
        for step in 1..=200 {
            let next = classify(step as f32 / 200.0);
            assert!(next.get(CurlCategory::NoCurl) <= prev.get(CurlCategory::NoCurl));
            assert!(next.get(CurlCategory::FullCurl) >= prev.get(CurlCategory::FullCurl));
            prev = next;
        }
    }

    #[test]
    fn out_of_range_magnitudes_are_clamped() {
        assert_eq!(classify(-3.0), classify(0.0));
        assert_eq!(classify(7.0), classify(1.0));
    }
}
