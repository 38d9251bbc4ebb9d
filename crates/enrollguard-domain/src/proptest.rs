//! Property-based tests for the enrollment engine.
//!
//! These verify the decision-rule invariants:
//! - subjects without prerequisites are always approved
//! - branch priority (approved > conditional > rejected)
//! - rejection messages list every missing prerequisite in declared order
//! - the decision is deterministic and status/message stay paired

use crate::catalog::SubjectCatalog;
use crate::engine::decide;
use crate::model::{Student, Subject};
use crate::test_support::{sid, subject};
use enrollguard_types::EnrollmentStatus;
use ::proptest::prelude::*;

/// Strategy for subject identifiers: short uppercase course codes.
fn arb_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Z0-9]{0,4}").unwrap()
}

/// Strategy for a set of distinct identifiers, returned in stable order.
fn arb_ids(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_id(), size).prop_map(|set| set.into_iter().collect())
}

fn course(id: &str) -> Subject {
    subject(id, &format!("Course {id}"), &[])
}

fn catalog_of(ids: &[String]) -> SubjectCatalog {
    let mut catalog = SubjectCatalog::new();
    for id in ids {
        catalog.insert(course(id));
    }
    catalog
}

fn target_with_prereqs(ids: &[String]) -> Subject {
    Subject::with_prerequisites(
        sid("TGT"),
        "Target Course",
        ids.iter().map(|id| sid(id)).collect(),
    )
}

fn student_of(approved: &[String], current: &[String]) -> Student {
    Student::new(
        approved.iter().map(|id| sid(id)).collect(),
        current.iter().map(|id| sid(id)).collect(),
    )
}

proptest! {
    #[test]
    fn no_prerequisites_is_approved_for_any_student(
        approved in arb_ids(0..5),
        current in arb_ids(0..5),
    ) {
        let catalog = SubjectCatalog::new();
        let target = target_with_prereqs(&[]);
        let student = student_of(&approved, &current);

        let enrollment = decide(&student, &target, &catalog);
        prop_assert_eq!(enrollment.status, EnrollmentStatus::Approved);
        prop_assert_eq!(
            enrollment.message.as_str(),
            "Enrollment approved: all prerequisites met."
        );
    }

    #[test]
    fn all_prerequisites_approved_is_approved(
        ids in arb_ids(1..6),
        extra in arb_ids(0..4),
    ) {
        let catalog = catalog_of(&ids);
        let target = target_with_prereqs(&ids);

        let mut approved = ids.clone();
        approved.extend(extra);
        let student = student_of(&approved, &[]);

        let enrollment = decide(&student, &target, &catalog);
        prop_assert_eq!(enrollment.status, EnrollmentStatus::Approved);
    }

    #[test]
    fn two_or_more_missing_is_rejected_listing_all_in_order(
        ids in arb_ids(2..6),
        current in arb_ids(0..4),
    ) {
        let catalog = catalog_of(&ids);
        let target = target_with_prereqs(&ids);
        let student = student_of(&[], &current);

        let enrollment = decide(&student, &target, &catalog);
        prop_assert_eq!(enrollment.status, EnrollmentStatus::Rejected);

        let expected = ids
            .iter()
            .map(|id| format!("Course {id}"))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(
            enrollment.message,
            format!("Enrollment rejected: missing prerequisites - {expected}.")
        );
    }

    #[test]
    fn single_missing_in_progress_is_conditional(
        ids in arb_ids(1..6),
        index in any::<prop::sample::Index>(),
    ) {
        let catalog = catalog_of(&ids);
        let target = target_with_prereqs(&ids);

        let missing = ids[index.index(ids.len())].clone();
        let approved: Vec<String> = ids.iter().filter(|id| **id != missing).cloned().collect();
        let student = student_of(&approved, std::slice::from_ref(&missing));

        let enrollment = decide(&student, &target, &catalog);
        prop_assert_eq!(enrollment.status, EnrollmentStatus::Conditional);
        let missing_label = format!("Course {missing}");
        prop_assert!(enrollment.message.contains(&missing_label));
        prop_assert!(enrollment.message.contains("Target Course"));
    }

    #[test]
    fn single_missing_not_in_progress_is_rejected(
        ids in arb_ids(1..6),
        index in any::<prop::sample::Index>(),
    ) {
        let catalog = catalog_of(&ids);
        let target = target_with_prereqs(&ids);

        let missing = ids[index.index(ids.len())].clone();
        let approved: Vec<String> = ids.iter().filter(|id| **id != missing).cloned().collect();
        let student = student_of(&approved, &[]);

        let enrollment = decide(&student, &target, &catalog);
        prop_assert_eq!(enrollment.status, EnrollmentStatus::Rejected);
    }

    #[test]
    fn decision_is_deterministic_and_pairing_holds(
        ids in arb_ids(0..6),
        approved in arb_ids(0..6),
        current in arb_ids(0..6),
    ) {
        let catalog = catalog_of(&ids);
        let target = target_with_prereqs(&ids);
        let student = student_of(&approved, &current);

        let first = decide(&student, &target, &catalog);
        let second = decide(&student, &target, &catalog);
        prop_assert_eq!(&first, &second);

        let prefix = match first.status {
            EnrollmentStatus::Approved => "Enrollment approved:",
            EnrollmentStatus::Conditional => "Conditional enrollment:",
            EnrollmentStatus::Rejected => "Enrollment rejected:",
        };
        prop_assert!(first.message.starts_with(prefix));
    }
}
