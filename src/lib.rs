//! Static hand-gesture recognition from 21-point hand landmarks.
//!
//! Each finger is reduced to a curl magnitude and a pointing direction,
//! both turned into fuzzy category memberships, and every gesture template in
//! a [`GestureLibrary`] is scored against them.

pub mod classifier;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod matcher;
pub mod types;

pub use config::{CurlThresholds, DirectionConfig, EstimatorConfig, YAxis};
pub use error::{ConfigError, EstimateError, LibraryError};
pub use gesture::{
    Constraint, Criterion, Dimension, GestureDescription, GestureLibrary, GestureLibraryBuilder,
    GestureTemplate,
};
pub use matcher::GestureEstimator;
pub use types::{
    CurlCategory, DirectionCategory, Estimation, Finger, FingerPose, GestureMatch, LandmarkFrame,
    Point3,
};
