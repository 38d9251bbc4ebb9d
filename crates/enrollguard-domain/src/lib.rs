//! Pure enrollment eligibility evaluation (no IO).
//!
//! Input: a subject catalog and a student record constructed elsewhere.
//! Output: an enrollment decision with a status, code, and explanation.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod enrollment;
pub mod model;

mod engine;

pub use engine::decide;

#[cfg(test)]
mod proptest;
