use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

pub const NUM_LANDMARKS: usize = 21;
pub const NUM_FINGERS: usize = 5;

pub type Point3 = [f32; 3];

/// One hand as emitted by the upstream pose detector: the wrist followed by
/// four joints per finger, base to tip.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    points: [Point3; NUM_LANDMARKS],
}

impl LandmarkFrame {
    pub fn new(points: &[Point3]) -> Result<Self, EstimateError> {
        if points.len() != NUM_LANDMARKS {
            return Err(EstimateError::MalformedFrame {
                reason: format!(
                    "expected {NUM_LANDMARKS} landmarks, got {}",
                    points.len()
                ),
            });
        }

        if let Some(idx) = points
            .iter()
            .position(|p| p.iter().any(|v| !v.is_finite()))
        {
            return Err(EstimateError::MalformedFrame {
                reason: format!("landmark {idx} has a non-finite coordinate"),
            });
        }

        let mut owned = [[0.0; 3]; NUM_LANDMARKS];
        owned.copy_from_slice(points);
        Ok(Self { points: owned })
    }

    pub fn points(&self) -> &[Point3; NUM_LANDMARKS] {
        &self.points
    }

    pub fn wrist(&self) -> Point3 {
        self.points[0]
    }

    /// Base-to-tip joints of one finger.
    pub fn joints(&self, finger: Finger) -> [Point3; 4] {
        finger.landmark_indices().map(|idx| self.points[idx])
    }
}

impl TryFrom<&[Point3]> for LandmarkFrame {
    type Error = EstimateError;

    fn try_from(points: &[Point3]) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; NUM_FINGERS] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn index(&self) -> usize {
        match self {
            Finger::Thumb => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
        }
    }

    /// Positions of this finger's joints inside a [`LandmarkFrame`].
    pub fn landmark_indices(&self) -> [usize; 4] {
        let base = 1 + self.index() * 4;
        [base, base + 1, base + 2, base + 3]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurlCategory {
    NoCurl,
    HalfCurl,
    FullCurl,
}

impl CurlCategory {
    pub const ALL: [CurlCategory; 3] = [
        CurlCategory::NoCurl,
        CurlCategory::HalfCurl,
        CurlCategory::FullCurl,
    ];

    pub fn index(&self) -> usize {
        match self {
            CurlCategory::NoCurl => 0,
            CurlCategory::HalfCurl => 1,
            CurlCategory::FullCurl => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurlCategory::NoCurl => "no curl",
            CurlCategory::HalfCurl => "half curl",
            CurlCategory::FullCurl => "full curl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionCategory {
    VerticalUp,
    VerticalDown,
    HorizontalLeft,
    HorizontalRight,
    DiagonalUpLeft,
    DiagonalUpRight,
    DiagonalDownLeft,
    DiagonalDownRight,
    Forward,
    Backward,
}

impl DirectionCategory {
    pub const ALL: [DirectionCategory; 10] = [
        DirectionCategory::VerticalUp,
        DirectionCategory::VerticalDown,
        DirectionCategory::HorizontalLeft,
        DirectionCategory::HorizontalRight,
        DirectionCategory::DiagonalUpLeft,
        DirectionCategory::DiagonalUpRight,
        DirectionCategory::DiagonalDownLeft,
        DirectionCategory::DiagonalDownRight,
        DirectionCategory::Forward,
        DirectionCategory::Backward,
    ];

    pub fn index(&self) -> usize {
        match self {
            DirectionCategory::VerticalUp => 0,
            DirectionCategory::VerticalDown => 1,
            DirectionCategory::HorizontalLeft => 2,
            DirectionCategory::HorizontalRight => 3,
            DirectionCategory::DiagonalUpLeft => 4,
            DirectionCategory::DiagonalUpRight => 5,
            DirectionCategory::DiagonalDownLeft => 6,
            DirectionCategory::DiagonalDownRight => 7,
            DirectionCategory::Forward => 8,
            DirectionCategory::Backward => 9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectionCategory::VerticalUp => "vertical up",
            DirectionCategory::VerticalDown => "vertical down",
            DirectionCategory::HorizontalLeft => "horizontal left",
            DirectionCategory::HorizontalRight => "horizontal right",
            DirectionCategory::DiagonalUpLeft => "diagonal up left",
            DirectionCategory::DiagonalUpRight => "diagonal up right",
            DirectionCategory::DiagonalDownLeft => "diagonal down left",
            DirectionCategory::DiagonalDownRight => "diagonal down right",
            DirectionCategory::Forward => "forward",
            DirectionCategory::Backward => "backward",
        }
    }
}

/// Per-category confidences for one finger's curl. Categories are scored
/// independently and need not sum to one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurlMembership(pub [f32; 3]);

impl CurlMembership {
    pub fn get(&self, category: CurlCategory) -> f32 {
        self.0[category.index()]
    }

    pub fn dominant(&self) -> CurlCategory {
        dominant(&CurlCategory::ALL, &self.0)
    }
}

/// Per-category confidences for one finger's pointing direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionMembership(pub [f32; 10]);

impl DirectionMembership {
    pub fn get(&self, category: DirectionCategory) -> f32 {
        self.0[category.index()]
    }

    pub fn dominant(&self) -> DirectionCategory {
        dominant(&DirectionCategory::ALL, &self.0)
    }
}

// First category wins ties.
fn dominant<C: Copy>(categories: &[C], scores: &[f32]) -> C {
    let mut best = 0;
    for (idx, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = idx;
        }
    }
    categories[best]
}

/// Geometry of one finger in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerGeometry {
    pub finger: Finger,
    /// 0 = straight, 1 = fully curled.
    pub curl_magnitude: f32,
    /// Unit vector from base to tip; zero when the finger has no length.
    pub direction: Point3,
}

/// Geometry plus both fuzzy memberships for one finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerPose {
    pub geometry: FingerGeometry,
    pub curl: CurlMembership,
    pub direction: DirectionMembership,
}

impl FingerPose {
    pub fn finger(&self) -> Finger {
        self.geometry.finger
    }

    pub fn label(&self) -> String {
        format!(
            "{} {} / {}",
            self.finger().label(),
            self.curl.dominant().label(),
            self.direction.dominant().label()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureMatch {
    pub name: String,
    /// Raw sum of the five per-finger scores, in [0, 5].
    pub score: f32,
}

impl GestureMatch {
    /// Score rescaled to [0, 1].
    pub fn confidence(&self) -> f32 {
        (self.score / NUM_FINGERS as f32).clamp(0.0, 1.0)
    }

    pub fn display_text(&self) -> String {
        format!("{} ({:.0}%)", self.name, self.confidence() * 100.0)
    }
}

/// Result of evaluating one hand against the whole library.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimation {
    pub poses: [FingerPose; NUM_FINGERS],
    /// Templates meeting the threshold, most confident first.
    pub matches: Vec<GestureMatch>,
}

impl Estimation {
    pub fn best(&self) -> Option<&GestureMatch> {
        self.matches.first()
    }

    pub fn is_recognized(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn display_text(&self) -> String {
        self.best()
            .map(GestureMatch::display_text)
            .unwrap_or_else(|| "no gesture recognized".to_string())
    }
}
