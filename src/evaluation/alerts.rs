use super::scoring::CategoryResult;

/// A critical-risk rule: the answer letter that trips it and the warning it
/// emits. Rules key on stable question identifiers, never on prompt text, so
/// editing a question's wording cannot silently detach its rule.
struct AlertRule {
    question_id: &'static str,
    letter: char,
    message: &'static str,
}

const ALERT_RULES: &[AlertRule] = &[
    AlertRule {
        question_id: "kpi_defined",
        letter: 'C',
        message: "Strategy alert: there is no concrete KPI for the agent to move. Without a \
                  defined success indicator you cannot measure return or justify the investment. \
                  Define the metric you want to move first.",
    },
    AlertRule {
        question_id: "kpi_economic_value",
        letter: 'C',
        message: "ROI alert: the economic value of the impact has not been estimated. Without it, \
                  this initiative cannot be ranked against others or get budget approved.",
    },
    AlertRule {
        question_id: "kpi_time_to_impact",
        letter: 'D',
        message: "Value alert: it is unclear when or how the impact would show up in the \
                  indicators. Initiatives without a value horizon are highly likely to be \
                  cancelled.",
    },
    AlertRule {
        question_id: "error_impact",
        letter: 'C',
        message: "Critical alert: the process has high error impact. An autonomous agent can \
                  cause serious consequences; plan for constant human oversight or drop the \
                  agent.",
    },
    AlertRule {
        question_id: "data_availability",
        letter: 'C',
        message: "Data alert: without digitized, accessible data no AI system will work. Fix \
                  data quality and access first.",
    },
    AlertRule {
        question_id: "technical_capacity",
        letter: 'C',
        message: "Technical alert: without in-house technical capacity the agent creates total \
                  dependence on third parties and high operational risk.",
    },
    AlertRule {
        question_id: "team_resistance",
        letter: 'C',
        message: "Adoption alert: strong team resistance can sink the project. Manage the change \
                  before building.",
    },
];

/// Scans the answered questions in category/question order and emits the
/// warning for every (question id, letter) pair matching a rule. A rule
/// naming a retired question id simply never fires.
pub fn detect_alerts(categories: &[CategoryResult]) -> Vec<String> {
    let mut alerts = Vec::new();
    for category in categories {
        for answer in &category.answers {
            for rule in ALERT_RULES {
                if rule.question_id == answer.question_id && rule.letter == answer.letter {
                    alerts.push(rule.message.to_string());
                }
            }
        }
    }
    alerts
}
