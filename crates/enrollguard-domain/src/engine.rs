use crate::catalog::SubjectCatalog;
use crate::enrollment::Enrollment;
use crate::model::{Student, Subject};
use enrollguard_types::{EnrollmentStatus, SubjectId, codes};
use std::collections::BTreeSet;

/// Decide whether `student` may enroll in `subject`.
///
/// Only the subject's direct prerequisites are inspected. The catalog is
/// consulted for display names only, so the operation never fails: every
/// input combination maps to exactly one of the three statuses.
///
/// Branch priority, first match wins:
/// 1. no missing prerequisites: Approved
/// 2. exactly one missing and it is in progress: Conditional
/// 3. anything else: Rejected
pub fn decide(student: &Student, subject: &Subject, catalog: &SubjectCatalog) -> Enrollment {
    let approved: BTreeSet<&str> = student
        .approved_subjects
        .iter()
        .map(SubjectId::as_str)
        .collect();
    let current: BTreeSet<&str> = student
        .current_subjects
        .iter()
        .map(SubjectId::as_str)
        .collect();

    // Declaration order of the prerequisite list is preserved.
    let missing: Vec<&SubjectId> = subject
        .prerequisites
        .iter()
        .filter(|p| !approved.contains(p.as_str()))
        .collect();

    if missing.is_empty() {
        return Enrollment {
            subject: subject.clone(),
            status: EnrollmentStatus::Approved,
            code: codes::CODE_PREREQUISITES_MET.to_string(),
            message: "Enrollment approved: all prerequisites met.".to_string(),
        };
    }

    // One unmet prerequisite already in progress is trusted to be completed
    // concurrently.
    if let [only] = missing.as_slice()
        && current.contains(only.as_str())
    {
        return Enrollment {
            subject: subject.clone(),
            status: EnrollmentStatus::Conditional,
            code: codes::CODE_PREREQUISITE_IN_PROGRESS.to_string(),
            message: format!(
                "Conditional enrollment: must pass \"{}\" to complete \"{}\".",
                catalog.display_name(only),
                subject.name
            ),
        };
    }

    let names: Vec<&str> = missing.iter().map(|id| catalog.display_name(id)).collect();
    Enrollment {
        subject: subject.clone(),
        status: EnrollmentStatus::Rejected,
        code: codes::CODE_MISSING_PREREQUISITES.to_string(),
        message: format!(
            "Enrollment rejected: missing prerequisites - {}.",
            names.join(", ")
        ),
    }
}

impl Student {
    /// Method form of [`decide`].
    pub fn enroll(&self, subject: &Subject, catalog: &SubjectCatalog) -> Enrollment {
        decide(self, subject, catalog)
    }
}
