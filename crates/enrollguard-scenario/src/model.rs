use serde::{Deserialize, Serialize};

/// `scenario.toml` schema v1.
///
/// This is a *user-facing* model: it stays permissive (raw strings, defaults
/// everywhere) so forward-compat is easy; identifiers and references are
/// validated during resolve.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioV1 {
    /// Optional schema string for tooling (`enrollguard.scenario.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Subjects available in the catalog.
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,

    /// The student record the scenario evaluates against.
    #[serde(default)]
    pub student: StudentEntry,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub id: String,
    pub name: String,

    /// Ids of direct prerequisites, in the order they should be reported.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentEntry {
    /// Ids of subjects the student has already approved.
    #[serde(default)]
    pub approved: Vec<String>,

    /// Ids of subjects the student is currently taking.
    #[serde(default)]
    pub current: Vec<String>,
}
