use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_trimmed, deserialize_trimmed};

/// Identifier generated by the store for schemes.
pub type SchemeId = i64;

/// Identifier generated by the store for steps.
pub type StepId = i64;

/// A named multi-step procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: SchemeId,
    pub scheme_name: String,
}

impl Scheme {
    /// Creates a scheme with a known ID.
    pub fn new(id: SchemeId, scheme_name: impl Into<String>) -> Self {
        Self {
            id,
            scheme_name: scheme_name.into(),
        }
    }
}

/// Payload for inserting a scheme. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheme {
    #[serde(deserialize_with = "deserialize_trimmed")]
    pub scheme_name: String,
}

impl NewScheme {
    pub fn new(scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_name: scheme_name.into(),
        }
    }

    /// Materializes the payload as a scheme with the given ID.
    pub fn into_scheme(self, id: SchemeId) -> Scheme {
        Scheme {
            id,
            scheme_name: self.scheme_name,
        }
    }
}

/// Partial update for a scheme. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeChanges {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_trimmed",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheme_name: Option<String>,
}

impl SchemeChanges {
    /// Sets a new scheme name.
    pub fn with_scheme_name(mut self, scheme_name: impl Into<String>) -> Self {
        self.scheme_name = Some(scheme_name.into());
        self
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.scheme_name.is_none()
    }

    /// Applies the changes to an existing scheme.
    pub fn apply_to(&self, scheme: &mut Scheme) {
        if let Some(scheme_name) = &self.scheme_name {
            scheme.scheme_name = scheme_name.clone();
        }
    }
}

/// One ordered instruction of a scheme, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub scheme_id: SchemeId,
    pub step_number: i64,
    pub instructions: String,
}

/// Payload for inserting a step into an existing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStep {
    pub step_number: i64,
    pub instructions: String,
}

impl NewStep {
    pub fn new(step_number: i64, instructions: impl Into<String>) -> Self {
        Self {
            step_number,
            instructions: instructions.into(),
        }
    }

    /// Materializes the payload as a step owned by `scheme_id`.
    pub fn into_step(self, id: StepId, scheme_id: SchemeId) -> Step {
        Step {
            id,
            scheme_id,
            step_number: self.step_number,
            instructions: self.instructions,
        }
    }
}

/// A step as presented to callers: the owning scheme's name replaces its ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeStep {
    pub id: StepId,
    pub scheme_name: String,
    pub step_number: i64,
    pub instructions: String,
}

impl SchemeStep {
    /// Projects a stored step, substituting `scheme_name` for its `scheme_id`.
    pub fn project(step: Step, scheme_name: impl Into<String>) -> Self {
        Self {
            id: step.id,
            scheme_name: scheme_name.into(),
            step_number: step.step_number,
            instructions: step.instructions,
        }
    }
}
