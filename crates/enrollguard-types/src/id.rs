use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised only when constructing a [`SubjectId`] from a blank string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("identifier must not be empty")]
pub struct ValidationError;

/// Canonical subject identifier used in catalogs, student records, and enrollments.
///
/// Invariant: the wrapped value is non-empty after trimming whitespace. The
/// stored value is the exact input, untrimmed; trimming happens only for the
/// emptiness check. Equality is ordinal string equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self, ValidationError> {
        let v = s.as_ref();
        if v.trim().is_empty() {
            return Err(ValidationError);
        }
        Ok(Self(v.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SubjectId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubjectId::new(value)
    }
}

impl From<SubjectId> for String {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}
