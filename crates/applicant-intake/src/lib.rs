//! Core crate for the job applicant management backend.
//!
//! The intake workflow (screening, persistence boundary, HTTP routes) lives in
//! [`applicants`]. Configuration, telemetry, and the top-level error type back
//! the binaries under `services/`.

pub mod applicants;
pub mod config;
pub mod error;
pub mod telemetry;
