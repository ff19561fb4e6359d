use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::scoring::ScoreResult;
use super::verdict::Verdict;

/// The option a respondent picked for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenOption {
    pub letter: char,
    pub points: u32,
}

/// Completed answers keyed by question id. The interactive driver validates
/// letters against the question's option set before recording; the scoring
/// engine ignores identifiers it does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<String, ChosenOption>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: impl Into<String>, letter: char, points: u32) {
        self.answers.insert(question_id.into(), ChosenOption { letter, points });
    }

    pub fn get(&self, question_id: &str) -> Option<ChosenOption> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Session metadata captured before the questionnaire starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMeta {
    pub initiative: String,
    pub team: String,
    pub responsible: String,
    pub description: String,
    pub recorded_at: DateTime<Local>,
}

/// A completed evaluation: the unit persisted to history and rendered to
/// reports. Snapshots are self-contained so entries scored under an older
/// schema version stay readable without migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub meta: SessionMeta,
    pub schema_version: u32,
    pub answers: AnswerSet,
    pub score: ScoreResult,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_previous_choice() {
        let mut answers = AnswerSet::new();
        answers.record("kpi_defined", 'C', 0);
        answers.record("kpi_defined", 'A', 4);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("kpi_defined"), Some(ChosenOption { letter: 'A', points: 4 }));
    }

    #[test]
    fn missing_question_yields_none() {
        let answers = AnswerSet::new();
        assert!(answers.is_empty());
        assert_eq!(answers.get("chained_decisions"), None);
    }
}
