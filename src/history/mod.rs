use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use serde::Serialize;

use crate::evaluation::Evaluation;

const HISTORY_FILE: &str = "evaluations.json";
const SUMMARY_FILE: &str = "evaluations_summary.csv";

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("unable to access history storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unable to update the summary table: {0}")]
    Summary(#[from] csv::Error),
}

/// Append-only store for completed evaluations: a JSON file holding the full
/// snapshots plus a flat CSV digest with one row per evaluation. Rows are
/// never edited in place.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    data_dir: PathBuf,
}

impl HistoryStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.data_dir.join(SUMMARY_FILE)
    }

    /// Loads every recorded evaluation, oldest first. A missing file is an
    /// empty history, not an error.
    pub fn load(&self) -> Result<Vec<Evaluation>, HistoryError> {
        let path = self.history_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Appends one evaluation to the JSON history and the CSV digest.
    pub fn append(&self, evaluation: &Evaluation) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.data_dir)?;

        let mut history = self.load()?;
        history.push(evaluation.clone());
        fs::write(self.history_path(), serde_json::to_string_pretty(&history)?)?;

        self.append_summary_row(evaluation)
    }

    fn append_summary_row(&self, evaluation: &Evaluation) -> Result<(), HistoryError> {
        let path = self.summary_path();
        let write_headers = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_headers)
            .from_writer(file);

        writer.serialize(SummaryRow {
            timestamp: evaluation.meta.recorded_at.to_rfc3339(),
            responsible: &evaluation.meta.responsible,
            team: &evaluation.meta.team,
            initiative: &evaluation.meta.initiative,
            overall_score: evaluation.score.overall,
            verdict: evaluation.verdict.tier.label(),
            agent_justified: if evaluation.verdict.agent_justified { "yes" } else { "no" },
            alert_count: evaluation.verdict.alerts.len(),
        })?;
        writer.flush()?;
        Ok(())
    }
}

/// Flat digest row, one per evaluation.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    timestamp: String,
    responsible: &'a str,
    team: &'a str,
    initiative: &'a str,
    overall_score: f64,
    verdict: &'a str,
    agent_justified: &'a str,
    alert_count: usize,
}
