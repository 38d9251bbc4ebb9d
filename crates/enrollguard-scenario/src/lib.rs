//! Scenario file parsing and resolution into the domain model.
//!
//! The TOML-facing model is intentionally permissive (plain strings); all
//! validation happens during resolve so failures carry context.

#![forbid(unsafe_code)]

pub mod model;

mod resolve;

pub use model::{ScenarioV1, StudentEntry, SubjectEntry};
pub use resolve::{ResolvedScenario, parse_scenario_toml, resolve_scenario};
