use serde::{Deserialize, Serialize};

use super::alerts::detect_alerts;
use super::alternatives::{select_alternatives, AlternativeView};
use super::catalog::CategoryId;
use super::scoring::CategoryResult;

/// Overall score at or above which an agent is clearly justified.
pub const CLEAR_THRESHOLD: f64 = 70.0;
/// Overall score at or above which alternatives should be explored first.
pub const HYBRID_THRESHOLD: f64 = 45.0;

const HIGH_CONFIDENCE_THRESHOLD: f64 = 85.0;
const WEAK_CATEGORY_THRESHOLD: f64 = 40.0;

/// Decision tier determined by the overall score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    Clear,
    Hybrid,
    Reject,
}

impl VerdictTier {
    pub const fn label(self) -> &'static str {
        match self {
            VerdictTier::Clear => "clear",
            VerdictTier::Hybrid => "hybrid",
            VerdictTier::Reject => "reject",
        }
    }
}

/// Qualitative severity attached to the tier for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Favorable,
    Caution,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Favorable => "favorable",
            Severity::Caution => "caution",
            Severity::Critical => "critical",
        }
    }
}

/// Final decision for one evaluation. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub tier: VerdictTier,
    pub headline: String,
    pub severity: Severity,
    pub agent_justified: bool,
    pub rationale: String,
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
    pub alternatives: Vec<AlternativeView>,
}

/// Maps the rounded overall score plus the category breakdown to a verdict.
/// Total over any valid score result; computed fresh per evaluation.
pub fn generate_verdict(overall: f64, categories: &[CategoryResult]) -> Verdict {
    let weak: Vec<&CategoryResult> = categories
        .iter()
        .filter(|category| category.percentage < WEAK_CATEGORY_THRESHOLD)
        .collect();
    let alerts = detect_alerts(categories);

    if overall >= CLEAR_THRESHOLD {
        clear_verdict(overall, alerts)
    } else if overall >= HYBRID_THRESHOLD {
        hybrid_verdict(overall, &weak, alerts)
    } else {
        reject_verdict(overall, &weak, alerts)
    }
}

fn clear_verdict(score: f64, alerts: Vec<String>) -> Verdict {
    let (headline, rationale) = if score >= HIGH_CONFIDENCE_THRESHOLD {
        (
            "Agent strongly recommended",
            format!(
                "With a score of {score:.1}%, this initiative has the ideal profile for an AI \
                 agent. The problem is genuinely complex, with several interdependent steps, \
                 unstructured data, and a need for adaptive reasoning. The business impact is \
                 significant (high frequency, substantial time invested, wide organizational \
                 reach) and the organization has the technical and cultural conditions to adopt \
                 it. This is exactly the kind of problem where agents add value that simpler \
                 workflows cannot offer."
            ),
        )
    } else {
        (
            "Agent recommended",
            format!(
                "With a score of {score:.1}%, this initiative has solid grounds for building an \
                 agent. There is real complexity in the process, a defensible business impact, \
                 and adequate technical conditions. Start with a narrowly scoped prototype, \
                 validate it in production under human supervision, and scale gradually. Define \
                 what success looks like before you build."
            ),
        )
    };

    Verdict {
        tier: VerdictTier::Clear,
        headline: headline.to_string(),
        severity: Severity::Favorable,
        agent_justified: true,
        rationale,
        alerts,
        recommendations: vec![
            "Start with a narrowly scoped MVP".to_string(),
            "Define clear success metrics before starting (error rate, time saved, adoption)"
                .to_string(),
            "Keep a human in the loop during the first weeks of operation".to_string(),
            "Use free tooling for the base LLM: Ollama locally, or a free API tier".to_string(),
            "Document edge cases and failures from day one".to_string(),
            "Plan a recurring evaluation and improvement cycle (at least monthly)".to_string(),
        ],
        alternatives: Vec::new(),
    }
}

fn hybrid_verdict(score: f64, weak: &[&CategoryResult], alerts: Vec<String>) -> Verdict {
    let weaknesses = joined_weak_names(weak, "some key dimensions");
    let rationale = format!(
        "With a score of {score:.1}%, the initiative shows potential but has significant \
         weaknesses in: {weaknesses}. Before committing resources to a full agent, validate with \
         a simpler solution (a workflow, prompt chaining, or a direct LLM call) to confirm that \
         agent-level complexity is really necessary. Add complexity only once simpler solutions \
         prove insufficient."
    );

    Verdict {
        tier: VerdictTier::Hybrid,
        headline: "Grey zone: validate before building".to_string(),
        severity: Severity::Caution,
        agent_justified: false,
        rationale,
        alerts,
        recommendations: vec![
            "Validate first with a simple workflow or prompt chaining for 4-6 weeks".to_string(),
            "Measure whether the simple solution resolves 80% of the problem".to_string(),
            "Only build the agent if unresolved cases remain".to_string(),
            "Close the identified gaps (data, technical capacity, adoption) before scaling"
                .to_string(),
        ],
        alternatives: select_alternatives(&weak_ids(weak)),
    }
}

fn reject_verdict(score: f64, weak: &[&CategoryResult], alerts: Vec<String>) -> Verdict {
    let weaknesses = joined_weak_names(weak, "multiple key dimensions");
    let rationale = format!(
        "With a score of {score:.1}%, the initiative does not justify investing in an AI agent \
         right now. The weaknesses are significant in: {weaknesses}. Building an agent under \
         these conditions would waste time, effort, and budget, with a high probability of \
         technical or adoption failure. Industry evidence shows that most failed agent \
         deployments fail because the problem never required that solution. Only about 1% of \
         agent rollouts are considered mature (Bain, 2024). Simpler, cheaper, and more reliable \
         alternatives exist for this problem."
    );

    Verdict {
        tier: VerdictTier::Reject,
        headline: "An agent is not recommended".to_string(),
        severity: Severity::Critical,
        agent_justified: false,
        rationale,
        alerts,
        recommendations: Vec::new(),
        alternatives: select_alternatives(&weak_ids(weak)),
    }
}

fn weak_ids(weak: &[&CategoryResult]) -> Vec<CategoryId> {
    weak.iter().map(|category| category.id).collect()
}

fn joined_weak_names(weak: &[&CategoryResult], fallback: &str) -> String {
    if weak.is_empty() {
        fallback.to_string()
    } else {
        weak.iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
