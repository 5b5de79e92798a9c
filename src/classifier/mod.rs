mod curl;
mod direction;

pub use curl::classify_curl;
pub use direction::{classify_direction, reference_vector};

use crate::{
    config::EstimatorConfig,
    geometry,
    types::{FingerPose, LandmarkFrame, NUM_FINGERS},
};

/// Runs the extractor and both classifiers over every finger of a frame.
pub fn finger_poses(frame: &LandmarkFrame, config: &EstimatorConfig) -> [FingerPose; NUM_FINGERS] {
    geometry::extract(frame, &config.curl).map(|geometry| FingerPose {
        geometry,
        curl: classify_curl(geometry.curl_magnitude, &config.curl),
        direction: classify_direction(geometry.direction, &config.direction),
    })
}
