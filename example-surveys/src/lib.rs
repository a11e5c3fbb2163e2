//! Example surveys for canvass.
//!
//! Shared fixtures for the test suites across the workspace: each module
//! exposes a `survey()` and a matching `responses()` so aggregation,
//! storage, and export tests all chew on the same data.

pub mod course_feedback;
pub mod tiny;
