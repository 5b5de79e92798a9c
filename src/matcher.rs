use rayon::prelude::*;

use crate::{
    classifier,
    config::EstimatorConfig,
    error::EstimateError,
    gesture::{Constraint, GestureLibrary, GestureTemplate},
    types::{Estimation, Finger, FingerPose, GestureMatch, LandmarkFrame, NUM_FINGERS, Point3},
};

/// Scores landmark frames against a fixed gesture library. Holds no state
/// between calls, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct GestureEstimator {
    library: GestureLibrary,
    config: EstimatorConfig,
}

impl GestureEstimator {
    pub fn new(library: GestureLibrary, config: EstimatorConfig) -> Self {
        if library.is_empty() {
            log::warn!("gesture library is empty, no gesture will ever be recognized");
        } else {
            log::info!("gesture estimator ready with {} templates", library.len());
        }
        Self { library, config }
    }

    pub fn library(&self) -> &GestureLibrary {
        &self.library
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Evaluates one hand using the configured minimum score.
    pub fn estimate(&self, landmarks: &[Point3]) -> Result<Estimation, EstimateError> {
        self.estimate_with_threshold(landmarks, self.config.min_score)
    }

    pub fn estimate_with_threshold(
        &self,
        landmarks: &[Point3],
        min_score: f32,
    ) -> Result<Estimation, EstimateError> {
        let frame = LandmarkFrame::new(landmarks)?;
        Ok(self.estimate_frame(&frame, min_score))
    }

    pub fn estimate_frame(&self, frame: &LandmarkFrame, min_score: f32) -> Estimation {
        let poses = classifier::finger_poses(frame, &self.config);
        let matches = rank(self.score_all(&poses), min_score);

        if let Some(best) = matches.first() {
            log::debug!("best match {} score {:.3}", best.name, best.score);
        }

        Estimation { poses, matches }
    }

    /// Unfiltered scores for every template, in library order.
    pub fn score_all(&self, poses: &[FingerPose; NUM_FINGERS]) -> Vec<GestureMatch> {
        self.library
            .templates()
            .par_iter()
            .map(|template| GestureMatch {
                name: template.name().to_string(),
                score: score_template(template, poses),
            })
            .collect()
    }
}

/// Sum over fingers of curl contribution times direction contribution.
pub fn score_template(template: &GestureTemplate, poses: &[FingerPose; NUM_FINGERS]) -> f32 {
    Finger::ALL
        .iter()
        .map(|finger| finger_score(template, &poses[finger.index()]))
        .sum()
}

/// A dimension with no criteria counts as fully satisfied; otherwise the best
/// weighted alternative is taken.
pub fn finger_score(template: &GestureTemplate, pose: &FingerPose) -> f32 {
    let mut curl: Option<f32> = None;
    let mut direction: Option<f32> = None;

    for criterion in template.criteria_for(pose.finger()) {
        match criterion.constraint {
            Constraint::Curl(category) => {
                let score = pose.curl.get(category) * criterion.weight;
                curl = Some(curl.map_or(score, |best| best.max(score)));
            }
            Constraint::Direction(category) => {
                let score = pose.direction.get(category) * criterion.weight;
                direction = Some(direction.map_or(score, |best| best.max(score)));
            }
        }
    }

    curl.unwrap_or(1.0) * direction.unwrap_or(1.0)
}

/// Keeps matches at or above `min_score`, highest first. Ties keep their
/// incoming order.
pub fn rank(mut matches: Vec<GestureMatch>, min_score: f32) -> Vec<GestureMatch> {
    matches.retain(|m| m.score >= min_score);
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
