//! Decision-support evaluator for AI agent initiatives.
//!
//! The evaluation core is a pure, deterministic pipeline: a versioned
//! questionnaire schema feeds a weighted scoring engine, whose results drive
//! alert detection, a threshold-based verdict, and the selection of simpler
//! alternatives when an agent is not justified. Persistence and report
//! rendering consume the resulting [`evaluation::Evaluation`] snapshot.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod history;
pub mod report;
pub mod telemetry;
