use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::catalog::CategoryId;

/// Static catalog entry describing a non-agent solution pattern.
struct AlternativeDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    when_to_use: &'static str,
    tools: &'static [&'static str],
}

impl AlternativeDef {
    fn to_view(&self) -> AlternativeView {
        AlternativeView {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            when_to_use: self.when_to_use.to_string(),
            tools: self.tools.iter().map(|tool| (*tool).to_string()).collect(),
        }
    }
}

/// Owned, serializable projection of a catalog entry selected for a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub when_to_use: String,
    pub tools: Vec<String>,
}

const MAX_ALTERNATIVES: usize = 4;

static SIMPLE_SCRIPT: AlternativeDef = AlternativeDef {
    id: "simple_script",
    name: "Script or simple automation",
    description: "For processes with fixed steps and structured data, a well-written script is \
                  more reliable, predictable, and cheaper to maintain than an agent.",
    when_to_use: "The process is repetitive, with known steps and structured data.",
    tools: &["Python scripts", "Bash scripts", "Scheduled tasks (cron)", "Google Apps Script"],
};

static WORKFLOW_ORCHESTRATOR: AlternativeDef = AlternativeDef {
    id: "workflow",
    name: "Workflow / automation orchestrator",
    description: "Workflow tools chain steps with conditional logic without any generative AI.",
    when_to_use: "The process has multiple steps but the flow is predictable and documentable.",
    tools: &[
        "n8n",
        "Make (Integromat)",
        "Zapier",
        "Apache Airflow",
        "Prefect",
        "Microsoft Power Automate",
    ],
};

static RPA: AlternativeDef = AlternativeDef {
    id: "rpa",
    name: "RPA (Robotic Process Automation)",
    description: "RPA replays human actions on graphical interfaces without needing APIs. Ideal \
                  for legacy processes.",
    when_to_use: "You need to automate interactions with software that has no API.",
    tools: &["UiPath", "Automation Anywhere", "Blue Prism", "Power Automate Desktop"],
};

static DIRECT_LLM_CALL: AlternativeDef = AlternativeDef {
    id: "llm_direct",
    name: "Direct LLM call (no agent)",
    description: "A single call to a language model with a well-designed prompt can solve 80% of \
                  cases without any agent architecture.",
    when_to_use: "The problem needs natural-language processing, but in a single input-output \
                  step.",
    tools: &[
        "Advanced prompt engineering",
        "Groq API (free tier)",
        "Google Gemini API (free tier)",
        "Ollama (local)",
    ],
};

static PROMPT_CHAINING: AlternativeDef = AlternativeDef {
    id: "prompt_chaining",
    name: "Prompt chaining / LLM pipeline",
    description: "Chain several LLM calls with predefined outputs between steps. More predictable \
                  than an agent, without the overhead of managing autonomous tools.",
    when_to_use: "The process needs several text or information transformations with defined \
                  steps.",
    tools: &["Python plus basic LangChain", "Sequential flows over any free LLM API"],
};

static BI_DASHBOARD: AlternativeDef = AlternativeDef {
    id: "bi_dashboard",
    name: "Dashboard / business intelligence tool",
    description: "When the need is to surface data or produce reports, an interactive dashboard \
                  is more robust, transparent, and auditable than an agent.",
    when_to_use: "The end goal is analyzing or visualizing data, not taking autonomous action.",
    tools: &["Metabase", "Apache Superset", "Google Looker Studio", "Power BI"],
};

static TRAINING_DOCS: AlternativeDef = AlternativeDef {
    id: "training",
    name: "Process training and documentation",
    description: "Sometimes the problem is knowledge, not technology. A good knowledge base or \
                  step-by-step guide can be more effective.",
    when_to_use: "The problem stems from missing knowledge or inconsistent process execution.",
    tools: &["Notion", "Confluence", "Loom walkthrough videos", "Documented SOPs"],
};

static DEFINE_KPIS: AlternativeDef = AlternativeDef {
    id: "define_kpis",
    name: "Define KPIs and the business case first",
    description: "Before building any technical solution, the team must define which indicators \
                  it will move, the current baseline, and what improving them is worth. Without \
                  that, no initiative has a success criterion.",
    when_to_use: "The business indicators the initiative should move are not clear.",
    tools: &["Business case canvas", "OKRs", "DACI framework", "A simple ROI spreadsheet"],
};

/// Selects the most relevant alternatives for the weak categories, capped at
/// four, deduplicated by name in first-seen order. The rule order is a
/// deliberate priority heuristic (strategy gaps outrank tactical ones) and
/// must stay stable for reproducible verdicts.
pub fn select_alternatives(weak_categories: &[CategoryId]) -> Vec<AlternativeView> {
    let is_weak = |id: CategoryId| weak_categories.contains(&id);
    let mut selected: Vec<&AlternativeDef> = Vec::new();

    // Undefined KPIs come first: everything else depends on a business case.
    if is_weak(CategoryId::Kpis) {
        selected.push(&DEFINE_KPIS);
    }

    // Always offer the simplest baseline.
    selected.push(&DIRECT_LLM_CALL);

    if is_weak(CategoryId::ProblemNature) {
        selected.push(&WORKFLOW_ORCHESTRATOR);
        selected.push(&SIMPLE_SCRIPT);
    }

    if is_weak(CategoryId::BusinessImpact) {
        selected.push(&BI_DASHBOARD);
        selected.push(&TRAINING_DOCS);
    }

    if is_weak(CategoryId::TechnicalFeasibility) {
        selected.push(&RPA);
    }

    if is_weak(CategoryId::ComplexityVsAlternatives) {
        selected.push(&PROMPT_CHAINING);
        selected.push(&SIMPLE_SCRIPT);
    }

    let mut seen = HashSet::new();
    selected
        .into_iter()
        .filter(|alternative| seen.insert(alternative.name))
        .take(MAX_ALTERNATIVES)
        .map(AlternativeDef::to_view)
        .collect()
}
