//! The scoring and verdict core: questionnaire schema, weighted scoring,
//! alert detection, verdict tiers, and alternative selection. Everything here
//! is pure computation over already-validated answers; persistence and
//! rendering live in sibling modules.

pub mod alerts;
pub mod alternatives;
pub mod catalog;
pub mod domain;
pub mod scoring;
pub mod verdict;

pub use alerts::detect_alerts;
pub use alternatives::{select_alternatives, AlternativeView};
pub use catalog::{CategoryDef, CategoryId, OptionDef, QuestionDef, Questionnaire, SCHEMA_VERSION};
pub use domain::{AnswerSet, ChosenOption, Evaluation, SessionMeta};
pub use scoring::{AnswerDetail, CategoryResult, ScoreResult, ScoringEngine};
pub use verdict::{generate_verdict, Severity, Verdict, VerdictTier};
