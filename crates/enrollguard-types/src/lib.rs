//! Stable value objects and codes shared across the enrollguard workspace.
//!
//! This crate is intentionally boring:
//! - the validated subject identifier
//! - the enrollment status enum
//! - stable string codes for decision branches

#![forbid(unsafe_code)]

pub mod codes;
pub mod id;
pub mod status;

pub use id::{SubjectId, ValidationError};
pub use status::EnrollmentStatus;
