//! Declarative gesture templates and the library that holds them.

mod builtin;
mod loader;

use std::collections::HashSet;

use crate::{
    error::LibraryError,
    types::{CurlCategory, DirectionCategory, Finger},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Curl,
    Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constraint {
    Curl(CurlCategory),
    Direction(DirectionCategory),
}

impl Constraint {
    pub fn dimension(&self) -> Dimension {
        match self {
            Constraint::Curl(_) => Dimension::Curl,
            Constraint::Direction(_) => Dimension::Direction,
        }
    }
}

/// One weighted rule on one finger. Several criteria on the same finger and
/// dimension are alternatives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Criterion {
    pub finger: Finger,
    pub constraint: Constraint,
    pub weight: f32,
}

/// Builder-style authoring surface for a gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureDescription {
    name: String,
    criteria: Vec<Criterion>,
}

impl GestureDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            criteria: Vec::new(),
        }
    }

    pub fn add_curl(mut self, finger: Finger, curl: CurlCategory, weight: f32) -> Self {
        self.criteria.push(Criterion {
            finger,
            constraint: Constraint::Curl(curl),
            weight,
        });
        self
    }

    pub fn add_direction(
        mut self,
        finger: Finger,
        direction: DirectionCategory,
        weight: f32,
    ) -> Self {
        self.criteria.push(Criterion {
            finger,
            constraint: Constraint::Direction(direction),
            weight,
        });
        self
    }

    pub fn add_curl_all(self, fingers: &[Finger], curl: CurlCategory, weight: f32) -> Self {
        fingers
            .iter()
            .fold(self, |desc, finger| desc.add_curl(*finger, curl, weight))
    }

    pub fn add_direction_all(
        self,
        fingers: &[Finger],
        direction: DirectionCategory,
        weight: f32,
    ) -> Self {
        fingers
            .iter()
            .fold(self, |desc, finger| desc.add_direction(*finger, direction, weight))
    }

    pub fn add_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }
}

/// A validated, immutable gesture description.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureTemplate {
    name: String,
    criteria: Vec<Criterion>,
}

impl GestureTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criteria_for(&self, finger: Finger) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(move |c| c.finger == finger)
    }
}

impl TryFrom<GestureDescription> for GestureTemplate {
    type Error = LibraryError;

    fn try_from(desc: GestureDescription) -> Result<Self, Self::Error> {
        let name = desc.name.trim().to_string();
        if name.is_empty() {
            return Err(LibraryError::EmptyName);
        }
        if desc.criteria.is_empty() {
            return Err(LibraryError::InvalidCriterion {
                gesture: name,
                reason: "declares no criteria".to_string(),
            });
        }
        if let Some(bad) = desc
            .criteria
            .iter()
            .find(|c| !(0.0..=1.0).contains(&c.weight))
        {
            return Err(LibraryError::InvalidWeight {
                gesture: name,
                weight: bad.weight,
            });
        }

        Ok(Self {
            name,
            criteria: desc.criteria,
        })
    }
}

/// Read-only set of templates considered during matching, in registration
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureLibrary {
    templates: Vec<GestureTemplate>,
}

impl GestureLibrary {
    pub fn builder() -> GestureLibraryBuilder {
        GestureLibraryBuilder::default()
    }

    pub fn from_descriptions(
        descriptions: impl IntoIterator<Item = GestureDescription>,
    ) -> Result<Self, LibraryError> {
        descriptions
            .into_iter()
            .try_fold(Self::builder(), GestureLibraryBuilder::add)
            .map(GestureLibraryBuilder::build)
    }

    /// The gestures the application ships with.
    pub fn builtin() -> Self {
        let mut builder = Self::builder();
        for desc in builtin::descriptions() {
            let name = desc.name().to_string();
            builder = match builder.clone().add(desc) {
                Ok(next) => next,
                Err(err) => {
                    log::error!("skipping built-in gesture {name}: {err}");
                    builder
                }
            };
        }
        builder.build()
    }

    pub fn templates(&self) -> &[GestureTemplate] {
        &self.templates
    }

    pub fn get(&self, name: &str) -> Option<&GestureTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct GestureLibraryBuilder {
    templates: Vec<GestureTemplate>,
    names: HashSet<String>,
}

impl GestureLibraryBuilder {
    pub fn add(mut self, desc: GestureDescription) -> Result<Self, LibraryError> {
        let template = GestureTemplate::try_from(desc)?;
        if !self.names.insert(template.name.clone()) {
            return Err(LibraryError::DuplicateGesture(template.name));
        }
        self.templates.push(template);
        Ok(self)
    }

    /// Adds every template of `library`, keeping its order.
    pub fn extend(mut self, library: GestureLibrary) -> Result<Self, LibraryError> {
        for template in library.templates {
            if !self.names.insert(template.name.clone()) {
                return Err(LibraryError::DuplicateGesture(template.name));
            }
            self.templates.push(template);
        }
        Ok(self)
    }

    pub fn build(self) -> GestureLibrary {
        GestureLibrary {
            templates: self.templates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let library = GestureLibrary::builder()
            .add(GestureDescription::new("b").add_curl(Finger::Index, CurlCategory::NoCurl, 1.0))
            .unwrap()
            .add(GestureDescription::new("a").add_curl(Finger::Index, CurlCategory::FullCurl, 1.0))
            .unwrap()
            .build();
        assert_eq!(library.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let desc =
            GestureDescription::new("fist").add_curl(Finger::Thumb, CurlCategory::FullCurl, 1.0);
        let err = GestureLibrary::from_descriptions([desc.clone(), desc]).unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateGesture(name) if name == "fist"));
    }

    #[test]
    fn rejects_weights_outside_unit_range() {
        let desc =
            GestureDescription::new("heavy").add_curl(Finger::Thumb, CurlCategory::NoCurl, 2.0);
        assert!(matches!(
            GestureTemplate::try_from(desc),
            Err(LibraryError::InvalidWeight { weight, .. }) if weight == 2.0
        ));

        let desc = GestureDescription::new("nan").add_curl(
            Finger::Thumb,
            CurlCategory::NoCurl,
            f32::NAN,
        );
        assert!(GestureTemplate::try_from(desc).is_err());
    }

    #[test]
    fn rejects_blank_and_empty_templates() {
        let blank =
            GestureDescription::new("  ").add_curl(Finger::Thumb, CurlCategory::NoCurl, 1.0);
        assert!(matches!(GestureTemplate::try_from(blank), Err(LibraryError::EmptyName)));
        assert!(matches!(
            GestureTemplate::try_from(GestureDescription::new("nothing")),
            Err(LibraryError::InvalidCriterion { .. })
        ));
    }

    #[test]
    fn add_all_helpers_expand_per_finger() {
        let desc = GestureDescription::new("open")
            .add_curl_all(&Finger::ALL, CurlCategory::NoCurl, 1.0)
            .add_direction_all(
                &[Finger::Index, Finger::Middle],
                DirectionCategory::VerticalUp,
                0.5,
            );
        assert_eq!(desc.criteria().len(), 7);
        let template = GestureTemplate::try_from(desc).unwrap();
        assert_eq!(template.criteria_for(Finger::Index).count(), 2);
        assert_eq!(template.criteria_for(Finger::Pinky).count(), 1);
    }

    #[test]
    fn builtin_library_registers_every_gesture() {
        let library = GestureLibrary::builtin();
        assert_eq!(library.len(), builtin::descriptions().len());
        for name in ["hello", "thumbs_up", "raised_fist", "victory", "thank_you"] {
            assert!(library.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn extend_merges_libraries() {
        let extra = GestureLibrary::from_descriptions([GestureDescription::new("wave")
            .add_curl(Finger::Index, CurlCategory::NoCurl, 1.0)])
        .unwrap();
        let merged = GestureLibrary::builder()
            .extend(GestureLibrary::builtin())
            .unwrap()
            .extend(extra)
            .unwrap()
            .build();
        assert_eq!(merged.len(), GestureLibrary::builtin().len() + 1);
        assert!(GestureLibrary::builder()
            .extend(GestureLibrary::builtin())
            .unwrap()
            .extend(GestureLibrary::builtin())
            .is_err());
    }
}
