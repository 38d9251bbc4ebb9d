use serde::{Deserialize, Serialize};

/// Outcome of an eligibility check. Intentionally small: each variant maps to
/// exactly one message template in the decision engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Approved,
    Conditional,
    Rejected,
}
