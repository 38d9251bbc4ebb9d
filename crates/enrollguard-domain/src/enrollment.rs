use crate::model::Subject;
use enrollguard_types::EnrollmentStatus;
use serde::Serialize;

/// The outcome of one eligibility check.
///
/// `status`, `code`, and `message` are always produced together by a single
/// decision branch in the engine; no other code path constructs them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Enrollment {
    /// The subject that was evaluated.
    pub subject: Subject,
    pub status: EnrollmentStatus,
    /// Stable snake_case discriminator for the decision branch taken.
    pub code: String,
    /// Human-readable explanation of the decision.
    pub message: String,
}
