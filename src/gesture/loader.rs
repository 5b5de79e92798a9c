use std::{fs, path::Path};

use serde::Deserialize;

use super::{Constraint, Criterion, GestureDescription, GestureLibrary};
use crate::{
    error::LibraryError,
    types::{CurlCategory, DirectionCategory, Finger},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefinitionsFile {
    #[serde(default, rename = "gesture")]
    gestures: Vec<GestureDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GestureDefinition {
    name: String,
    #[serde(default)]
    criteria: Vec<CriterionDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CriterionDefinition {
    fingers: Vec<Finger>,
    curl: Option<CurlCategory>,
    direction: Option<DirectionCategory>,
    #[serde(default = "default_weight")]
    weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl GestureDefinition {
    fn into_description(self) -> Result<GestureDescription, LibraryError> {
        let mut desc = GestureDescription::new(self.name);
        for def in self.criteria {
            let constraint = match (def.curl, def.direction) {
                (Some(curl), None) => Constraint::Curl(curl),
                (None, Some(direction)) => Constraint::Direction(direction),
                _ => {
                    return Err(LibraryError::InvalidCriterion {
                        gesture: desc.name().to_string(),
                        reason: "each criterion needs exactly one of `curl` or `direction`"
                            .to_string(),
                    });
                }
            };
            if def.fingers.is_empty() {
                return Err(LibraryError::InvalidCriterion {
                    gesture: desc.name().to_string(),
                    reason: "criterion lists no fingers".to_string(),
                });
            }
            for finger in def.fingers {
                desc = desc.add_criterion(Criterion {
                    finger,
                    constraint,
                    weight: def.weight,
                });
            }
        }
        Ok(desc)
    }
}

impl GestureLibrary {
    /// Parses gesture definitions written as `[[gesture]]` tables.
    pub fn from_toml_str(raw: &str) -> Result<Self, LibraryError> {
        let file: DefinitionsFile = toml::from_str(raw)?;
        if file.gestures.is_empty() {
            return Err(LibraryError::EmptyLibrary);
        }

        let descriptions = file
            .gestures
            .into_iter()
            .map(GestureDefinition::into_description)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_descriptions(descriptions)
    }

    pub fn load(path: &Path) -> Result<Self, LibraryError> {
        let raw = fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::from_toml_str(&raw)?;
        log::info!(
            "loaded {} gesture templates from {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }
}
