//! Stable codes for enrollment decisions.
//!
//! `code` is a short snake_case discriminator paired with exactly one
//! status/message template by the decision engine.

// Codes: approved
pub const CODE_PREREQUISITES_MET: &str = "prerequisites_met";

// Codes: conditional
pub const CODE_PREREQUISITE_IN_PROGRESS: &str = "prerequisite_in_progress";

// Codes: rejected
pub const CODE_MISSING_PREREQUISITES: &str = "missing_prerequisites";
