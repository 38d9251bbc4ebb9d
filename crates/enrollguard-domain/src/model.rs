use enrollguard_types::SubjectId;
use serde::Serialize;

/// A course in the catalog, with zero or more direct prerequisite subjects.
///
/// Prerequisites are identifier references resolved through a
/// [`SubjectCatalog`](crate::catalog::SubjectCatalog), so a subject shared by
/// many dependents exists exactly once. Only direct (one-hop) prerequisites
/// are ever inspected; a prerequisite's own prerequisites are not chased.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,

    /// Direct prerequisites, in declaration order.
    pub prerequisites: Vec<SubjectId>,
}

impl Subject {
    pub fn new(id: SubjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites(
        id: SubjectId,
        name: impl Into<String>,
        prerequisites: Vec<SubjectId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            prerequisites,
        }
    }
}

/// A student's academic record: subjects already approved and subjects
/// currently in progress.
///
/// Duplicate identifiers in either list are tolerated; the decision engine
/// tests membership, it never counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Student {
    pub approved_subjects: Vec<SubjectId>,
    pub current_subjects: Vec<SubjectId>,
}

impl Student {
    pub fn new(approved_subjects: Vec<SubjectId>, current_subjects: Vec<SubjectId>) -> Self {
        Self {
            approved_subjects,
            current_subjects,
        }
    }

    pub fn has_approved(&self, id: &SubjectId) -> bool {
        self.approved_subjects.contains(id)
    }

    pub fn is_taking(&self, id: &SubjectId) -> bool {
        self.current_subjects.contains(id)
    }
}
