//! Helpers shared by the backend's integration test suites: logging setup,
//! problem-details assertions and unique fixture values.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
