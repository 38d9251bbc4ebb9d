use crate::model::Subject;
use enrollguard_types::SubjectId;
use std::collections::BTreeMap;

/// Arena of subjects addressed by identifier.
///
/// Prerequisite edges reference subjects by id, so the same subject can sit
/// under many dependents without duplicate or drifting copies.
#[derive(Clone, Debug, Default)]
pub struct SubjectCatalog {
    subjects: BTreeMap<SubjectId, Subject>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a subject, returning the previous entry for the same id.
    pub fn insert(&mut self, subject: Subject) -> Option<Subject> {
        self.subjects.insert(subject.id.clone(), subject)
    }

    pub fn get(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.get(id)
    }

    pub fn contains(&self, id: &SubjectId) -> bool {
        self.subjects.contains_key(id)
    }

    /// Display name for `id`; unknown ids fall back to the raw identifier so
    /// message construction never fails.
    pub fn display_name<'a>(&'a self, id: &'a SubjectId) -> &'a str {
        self.subjects
            .get(id)
            .map(|s| s.name.as_str())
            .unwrap_or_else(|| id.as_str())
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
