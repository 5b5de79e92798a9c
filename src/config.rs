use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_MIN_SCORE: f32 = 4.0;

/// Curl bands on the normalized magnitude. Below `no_curl_until` a finger is
/// fully `NoCurl`, above `full_curl_from` fully `FullCurl`; `HalfCurl` peaks
/// at `half_curl_peak` and the zones in between are interpolated linearly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurlThresholds {
    pub no_curl_until: f32,
    pub half_curl_peak: f32,
    pub full_curl_from: f32,
    /// Summed joint bend (degrees) that counts as a fully curled finger.
    pub max_bend_degrees: f32,
    pub thumb_max_bend_degrees: f32,
}

impl Default for CurlThresholds {
    fn default() -> Self {
        Self {
            no_curl_until: 0.25,
            half_curl_peak: 0.5,
            full_curl_from: 0.75,
            max_bend_degrees: 180.0,
            thumb_max_bend_degrees: 120.0,
        }
    }
}

/// Which way "up" points in landmark space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxis {
    /// Image coordinates: y grows toward the bottom of the frame.
    #[default]
    Down,
    Up,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DirectionConfig {
    /// Angle from a reference direction at which its confidence reaches zero.
    pub falloff_degrees: f32,
    pub y_axis: YAxis,
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            falloff_degrees: 90.0,
            y_axis: YAxis::Down,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub curl: CurlThresholds,
    pub direction: DirectionConfig,
    /// Minimum raw score (sum over five fingers) a template needs to be reported.
    pub min_score: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            curl: CurlThresholds::default(),
            direction: DirectionConfig::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl EstimatorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EstimatorConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("loaded estimator config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.curl;
        let ordered = 0.0 <= c.no_curl_until
            && c.no_curl_until < c.half_curl_peak
            && c.half_curl_peak < c.full_curl_from
            && c.full_curl_from <= 1.0;
        if !ordered {
            return Err(ConfigError::Invalid(format!(
                "curl bands must satisfy 0 <= {} < {} < {} <= 1",
                c.no_curl_until, c.half_curl_peak, c.full_curl_from
            )));
        }
        if !(c.max_bend_degrees > 0.0 && c.thumb_max_bend_degrees > 0.0) {
            return Err(ConfigError::Invalid(
                "max bend angles must be positive".to_string(),
            ));
        }
        let falloff = self.direction.falloff_degrees;
        if !(falloff > 0.0 && falloff <= 180.0) {
            return Err(ConfigError::Invalid(format!(
                "direction falloff must be in (0, 180], got {falloff}"
            )));
        }
        if !self.min_score.is_finite() {
            return Err(ConfigError::Invalid("min_score must be finite".to_string()));
        }
        Ok(())
    }
}
