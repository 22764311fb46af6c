//! AI maturity diagnosis: questionnaire scoring, level classification and
//! rule-driven guidance, plus the configuration and telemetry shared by the
//! service binaries.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod telemetry;
