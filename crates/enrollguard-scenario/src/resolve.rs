use crate::model::ScenarioV1;
use anyhow::Context;
use enrollguard_domain::catalog::SubjectCatalog;
use enrollguard_domain::model::{Student, Subject};
use enrollguard_types::SubjectId;

/// A scenario resolved into domain values, ready for evaluation.
#[derive(Clone, Debug)]
pub struct ResolvedScenario {
    pub catalog: SubjectCatalog,
    pub student: Student,
}

pub fn parse_scenario_toml(text: &str) -> anyhow::Result<ScenarioV1> {
    toml::from_str(text).context("parse scenario TOML")
}

/// Validate a parsed scenario and build the catalog and student record.
///
/// The domain core tolerates unknown identifiers; this boundary does not.
/// Duplicate subject ids, references to subjects the scenario never declares,
/// and blank identifiers are all rejected here.
pub fn resolve_scenario(scenario: ScenarioV1) -> anyhow::Result<ResolvedScenario> {
    let mut catalog = SubjectCatalog::new();

    for entry in &scenario.subjects {
        let id = SubjectId::new(&entry.id)
            .with_context(|| format!("invalid subject id {:?}", entry.id))?;

        let mut prerequisites = Vec::with_capacity(entry.prerequisites.len());
        for p in &entry.prerequisites {
            let prereq = SubjectId::new(p).with_context(|| {
                format!("invalid prerequisite id {:?} on subject '{}'", p, entry.id)
            })?;
            prerequisites.push(prereq);
        }

        let subject = Subject::with_prerequisites(id, entry.name.clone(), prerequisites);
        if catalog.insert(subject).is_some() {
            anyhow::bail!("duplicate subject id '{}'", entry.id);
        }
    }

    for subject in catalog.subjects() {
        for prereq in &subject.prerequisites {
            if !catalog.contains(prereq) {
                anyhow::bail!(
                    "subject '{}' lists unknown prerequisite '{}'",
                    subject.id,
                    prereq
                );
            }
        }
    }

    let approved = resolve_ids(&scenario.student.approved, &catalog, "approved")?;
    let current = resolve_ids(&scenario.student.current, &catalog, "current")?;

    Ok(ResolvedScenario {
        catalog,
        student: Student::new(approved, current),
    })
}

fn resolve_ids(
    values: &[String],
    catalog: &SubjectCatalog,
    list: &str,
) -> anyhow::Result<Vec<SubjectId>> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let id = SubjectId::new(value)
            .with_context(|| format!("invalid subject id {value:?} in student {list} list"))?;
        if !catalog.contains(&id) {
            anyhow::bail!("unknown subject '{value}' in student {list} list");
        }
        out.push(id);
    }
    Ok(out)
}
