//! Questionnaire scoring and rule-driven synthesis of maturity guidance.
//!
//! The engine takes a [`DiagnosisProfile`] (one questionnaire plus its block
//! and overall level ladders), a response map and an organization size, and
//! returns an immutable [`DiagnosisResult`]. The only nondeterministic step is
//! the padding of priority actions, which draws from an injected
//! [`FallbackSource`].

pub mod actions;
pub mod aggregate;
pub mod blocks;
pub mod domain;
mod engine;
pub mod guidance;
pub mod import;
pub mod insights;
pub mod levels;
pub mod narrative;
mod presets;
pub mod questionnaire;
pub mod rules;

#[cfg(test)]
mod tests;

pub use actions::{FallbackSource, RandomFallback, SequenceFallback, PRIORITY_ACTION_COUNT};
pub use domain::{
    BlockAnalysis, BlockLevel, CompanySize, DiagnosisResult, OrganizationInfo, OverallLevel,
    Responses, SizeGroup, UnknownCompanySize,
};
pub use engine::DiagnosisEngine;
pub use import::{responses_from_csv, responses_from_json, responses_from_path, ResponseImportError};
pub use levels::{BlockLadder, LadderError, LadderStep, OverallLadder, ThresholdLadder};
pub use presets::{DiagnosisProfile, Preset, ProfileError};
pub use questionnaire::{
    Block, BlockKind, Question, Questionnaire, QuestionnaireError, SchemaWarning,
};
