use serde::{Deserialize, Serialize};

/// Version tag of the active questionnaire schema. Bumped whenever categories,
/// weights, or questions are recalibrated; persisted evaluations record the
/// version they were scored under.
pub const SCHEMA_VERSION: u32 = 2;

/// Identifies one of the weighted questionnaire categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    ProblemNature,
    Kpis,
    BusinessImpact,
    TechnicalFeasibility,
    ComplexityVsAlternatives,
    Organization,
}

impl CategoryId {
    pub const fn key(self) -> &'static str {
        match self {
            CategoryId::ProblemNature => "problem_nature",
            CategoryId::Kpis => "kpis",
            CategoryId::BusinessImpact => "business_impact",
            CategoryId::TechnicalFeasibility => "technical_feasibility",
            CategoryId::ComplexityVsAlternatives => "complexity_vs_alternatives",
            CategoryId::Organization => "organization",
        }
    }
}

/// One selectable answer for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDef {
    pub letter: char,
    pub text: &'static str,
    pub points: u32,
}

/// A single questionnaire question with its lettered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDef {
    pub id: &'static str,
    pub prompt: &'static str,
    pub help: Option<&'static str>,
    pub options: Vec<OptionDef>,
}

impl QuestionDef {
    /// Highest point value among the question's options.
    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|option| option.points).max().unwrap_or(0)
    }

    pub fn option(&self, letter: char) -> Option<&OptionDef> {
        self.options.iter().find(|option| option.letter == letter)
    }
}

/// A weighted grouping of related questions.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: f64,
    pub questions: Vec<QuestionDef>,
}

impl CategoryDef {
    /// Maximum achievable score: the sum of each question's best option.
    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(QuestionDef::max_points).sum()
    }
}

/// The active questionnaire schema. Read-only after construction; scoring and
/// prompting both iterate it in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Questionnaire {
    version: u32,
    categories: Vec<CategoryDef>,
}

impl Questionnaire {
    /// The canonical schema currently in force.
    pub fn current() -> Self {
        Self {
            version: SCHEMA_VERSION,
            categories: current_categories(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|category| category.questions.len()).sum()
    }

    pub fn question(&self, id: &str) -> Option<&QuestionDef> {
        self.categories
            .iter()
            .flat_map(|category| category.questions.iter())
            .find(|question| question.id == id)
    }
}

fn current_categories() -> Vec<CategoryDef> {
    vec![
        CategoryDef {
            id: CategoryId::ProblemNature,
            name: "Nature of the Problem",
            description: "How complex the problem is and how well it suits an AI agent.",
            weight: 0.20,
            questions: vec![
                QuestionDef {
                    id: "chained_decisions",
                    prompt: "Does the problem require multiple chained decisions that depend on one another?",
                    help: Some(
                        "Yes: researching a topic and drafting a report, adapting the approach to findings. No: summarizing a fixed text.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, many interdependent steps that are hard to predetermine", points: 4 },
                        OptionDef { letter: 'B', text: "Yes, but the steps are known and predictable in advance", points: 2 },
                        OptionDef { letter: 'C', text: "No, it is a single decision or a fixed sequence of steps", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "unstructured_sources",
                    prompt: "Does the process work with unstructured information or multiple heterogeneous sources?",
                    help: Some(
                        "Yes: analyzing e-mails plus CRM records plus PDF reports. No: processing rows of a spreadsheet.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, it combines free text, documents, APIs, databases, and more", points: 4 },
                        OptionDef { letter: 'B', text: "Mostly structured, with some free text", points: 2 },
                        OptionDef { letter: 'C', text: "No, everything comes from structured, uniform sources (CSV, database, forms)", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "contextual_judgment",
                    prompt: "Does the process require contextual reasoning or judgment that adapts to the situation?",
                    help: Some(
                        "Yes: customer support where every problem is different. No: validating that an ID number has the right format.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, every case can differ and requires adaptation", points: 4 },
                        OptionDef { letter: 'B', text: "Partially, there are rules but with frequent exceptions", points: 2 },
                        OptionDef { letter: 'C', text: "No, the same deterministic rules always apply", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "open_ended_flow",
                    prompt: "Is it difficult or impossible to define every step of the process in advance (open-ended flow)?",
                    help: Some(
                        "If you can diagram the whole process with every possible path, you probably do not need an agent.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, the number of steps varies and cannot be fully predetermined", points: 4 },
                        OptionDef { letter: 'B', text: "The main flow is known, with minor variations", points: 2 },
                        OptionDef { letter: 'C', text: "No, the process can be fully documented as a fixed flowchart", points: 0 },
                    ],
                },
            ],
        },
        CategoryDef {
            id: CategoryId::Kpis,
            name: "KPIs & Success Criteria",
            description: "Whether the initiative has measurable indicators that define success.",
            weight: 0.23,
            questions: vec![
                QuestionDef {
                    id: "kpi_defined",
                    prompt: "Is there a concrete KPI the agent is expected to move?",
                    help: Some(
                        "Without a success metric you cannot measure return or justify the investment.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, a specific indicator with a known current baseline", points: 4 },
                        OptionDef { letter: 'B', text: "Roughly, we know the area to improve but have not quantified it", points: 2 },
                        OptionDef { letter: 'C', text: "No, no business indicator has been identified", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "kpi_baseline",
                    prompt: "Is the current value of that indicator measured today?",
                    help: Some("A baseline is what turns 'it feels faster' into evidence."),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, we track it continuously", points: 4 },
                        OptionDef { letter: 'B', text: "We could reconstruct it from existing records", points: 2 },
                        OptionDef { letter: 'C', text: "No, there is no baseline measurement", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "kpi_economic_value",
                    prompt: "Has the economic value of improving the indicator been estimated?",
                    help: Some(
                        "The estimate is what lets you rank this initiative against others and approve budget.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, the impact has been valued in money terms", points: 4 },
                        OptionDef { letter: 'B', text: "Partially, we have rough estimates", points: 2 },
                        OptionDef { letter: 'C', text: "No, the value of the improvement is unknown", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "kpi_time_to_impact",
                    prompt: "How soon would the impact show up in the indicators?",
                    help: Some("Initiatives without a defined value horizon are the first to be cancelled."),
                    options: vec![
                        OptionDef { letter: 'A', text: "Within the first quarter after launch", points: 4 },
                        OptionDef { letter: 'B', text: "Within six months", points: 3 },
                        OptionDef { letter: 'C', text: "It would take a year or more", points: 1 },
                        OptionDef { letter: 'D', text: "It is unclear when or how the impact would be seen", points: 0 },
                    ],
                },
            ],
        },
        CategoryDef {
            id: CategoryId::BusinessImpact,
            name: "Business Impact",
            description: "The real value the agent would generate for the organization.",
            weight: 0.15,
            questions: vec![
                QuestionDef {
                    id: "process_frequency",
                    prompt: "How often does this process or need occur in your team?",
                    help: Some(
                        "An agent for a very infrequent process rarely justifies the build and maintenance cost.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Many times a day, or continuously", points: 4 },
                        OptionDef { letter: 'B', text: "Several times a week", points: 3 },
                        OptionDef { letter: 'C', text: "Once or a few times a month", points: 1 },
                        OptionDef { letter: 'D', text: "Rarely (a few times a year, sporadically)", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "time_per_occurrence",
                    prompt: "How much human time does the process currently consume per occurrence?",
                    help: Some(
                        "The potential savings must justify building, testing, and maintaining the agent.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "More than 2 hours per occurrence", points: 4 },
                        OptionDef { letter: 'B', text: "Between 30 minutes and 2 hours", points: 3 },
                        OptionDef { letter: 'C', text: "Between 5 and 30 minutes", points: 1 },
                        OptionDef { letter: 'D', text: "Less than 5 minutes", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "error_impact",
                    prompt: "What is the impact of an error in this process?",
                    help: Some(
                        "High error tolerance favors an agent; critical processes (medical, financial, legal) demand constant human oversight.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Low: errors are easy to detect and fix without serious consequences", points: 4 },
                        OptionDef { letter: 'B', text: "Medium: errors have moderate but recoverable consequences", points: 3 },
                        OptionDef { letter: 'C', text: "High: an error has serious consequences (financial, legal, safety)", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "beneficiary_reach",
                    prompt: "How many people in your organization would benefit from the agent?",
                    help: Some("The reach of the impact is key to justifying the investment."),
                    options: vec![
                        OptionDef { letter: 'A', text: "The whole company or a large department (50+ people)", points: 4 },
                        OptionDef { letter: 'B', text: "A mid-sized team (10-50 people)", points: 3 },
                        OptionDef { letter: 'C', text: "A small team (2-10 people)", points: 2 },
                        OptionDef { letter: 'D', text: "Just me or one person", points: 0 },
                    ],
                },
            ],
        },
        CategoryDef {
            id: CategoryId::TechnicalFeasibility,
            name: "Technical Feasibility",
            description: "Whether the technical conditions exist to build and operate the agent.",
            weight: 0.15,
            questions: vec![
                QuestionDef {
                    id: "data_availability",
                    prompt: "Is the data the agent needs available and accessible?",
                    help: Some(
                        "Without quality, accessible data any AI system will fail regardless of its sophistication.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, the data is digitized, organized, and accessible", points: 4 },
                        OptionDef { letter: 'B', text: "Partially, some data needs cleanup or digitization", points: 2 },
                        OptionDef { letter: 'C', text: "No, the data is mostly manual, on paper, or scattered", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "technical_capacity",
                    prompt: "Does the team have, or can it acquire, the technical capacity to build and maintain the agent?",
                    help: Some("An agent without a technical team behind it becomes technology debt."),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, we have experienced developers or access to them", points: 4 },
                        OptionDef { letter: 'B', text: "We have basic capacity but would need occasional outside help", points: 2 },
                        OptionDef { letter: 'C', text: "No, we would depend entirely on third parties", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "systems_integration",
                    prompt: "Can the process integrate with existing systems (APIs, databases, tools)?",
                    help: Some(
                        "An agent cut off from the systems where the data lives cannot operate effectively.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, the surrounding systems expose APIs or ready integrations", points: 4 },
                        OptionDef { letter: 'B', text: "Partially, some integrations exist and others need development", points: 2 },
                        OptionDef { letter: 'C', text: "No, the systems are closed, legacy, or impossible to integrate", points: 0 },
                    ],
                },
            ],
        },
        CategoryDef {
            id: CategoryId::ComplexityVsAlternatives,
            name: "Complexity vs. Alternatives",
            description: "Whether an agent is the right tool or something simpler would do.",
            weight: 0.17,
            questions: vec![
                QuestionDef {
                    id: "simpler_attempts",
                    prompt: "Have you already tried solving this with simple automation (macros, scripts, RPA, workflows)?",
                    help: Some("Start simple. Only add complexity when it proves necessary."),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, and unresolved cases remained that need more intelligence", points: 4 },
                        OptionDef { letter: 'B', text: "We have not tried simple automation yet", points: 1 },
                        OptionDef { letter: 'C', text: "Yes, it worked partially but we chose not to refine it", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "multi_turn_interaction",
                    prompt: "Does the process require multi-turn interaction or contextual conversation with the user?",
                    help: Some("Single input-output processes rarely need a full agent."),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, it must keep context across a conversation or session", points: 4 },
                        OptionDef { letter: 'B', text: "Occasional clarifications, but mostly one-way", points: 2 },
                        OptionDef { letter: 'C', text: "No, it is a single input-to-output step", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "realtime_adaptation",
                    prompt: "Does the solution need to adapt in real time to new or changing information?",
                    help: Some(
                        "If every possible path can be anticipated, a decision tree or workflow is enough.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, it must respond to unexpected changes mid-execution", points: 4 },
                        OptionDef { letter: 'B', text: "Changes are predictable and could be handled with if-else rules", points: 2 },
                        OptionDef { letter: 'C', text: "No, the process always follows the same path regardless of context", points: 0 },
                    ],
                },
            ],
        },
        CategoryDef {
            id: CategoryId::Organization,
            name: "Organizational Maturity & Culture",
            description: "Whether the organization is ready to adopt and trust an AI agent.",
            weight: 0.10,
            questions: vec![
                QuestionDef {
                    id: "automation_experience",
                    prompt: "Does the organization have prior experience with automation or AI tooling?",
                    help: Some(
                        "Organizations without automation experience usually struggle with adoption and maintenance.",
                    ),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, we actively use automation/AI tools", points: 4 },
                        OptionDef { letter: 'B', text: "A few isolated experiences; we are getting started", points: 2 },
                        OptionDef { letter: 'C', text: "No, this would be our first initiative of this kind", points: 0 },
                    ],
                },
                QuestionDef {
                    id: "team_resistance",
                    prompt: "Are the end users of the process willing to work with or supervise an AI agent?",
                    help: Some("The human factor is critical: an agent nobody adopts is a failed project."),
                    options: vec![
                        OptionDef { letter: 'A', text: "Yes, the team is enthusiastic and willing", points: 4 },
                        OptionDef { letter: 'B', text: "Moderate resistance, manageable with training", points: 2 },
                        OptionDef { letter: 'C', text: "High resistance, or external customers would not accept an agent", points: 0 },
                    ],
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_weights_sum_to_one() {
        let questionnaire = Questionnaire::current();
        let total: f64 = questionnaire.categories().iter().map(|category| category.weight).sum();
        assert!((total - 1.0).abs() < 1e-6, "weights sum to {total}");
    }

    #[test]
    fn schema_has_expected_shape() {
        let questionnaire = Questionnaire::current();
        assert_eq!(questionnaire.version(), SCHEMA_VERSION);
        assert_eq!(questionnaire.categories().len(), 6);
        assert_eq!(questionnaire.total_questions(), 20);
        let kpis = questionnaire
            .categories()
            .iter()
            .find(|category| category.id == CategoryId::Kpis)
            .expect("kpis category present");
        assert_eq!(kpis.weight, 0.23);
    }

    #[test]
    fn category_keys_are_unique() {
        let questionnaire = Questionnaire::current();
        let mut seen = HashSet::new();
        for category in questionnaire.categories() {
            assert!(seen.insert(category.id.key()), "duplicate key {}", category.id.key());
        }
    }

    #[test]
    fn question_ids_are_unique() {
        let questionnaire = Questionnaire::current();
        let mut seen = HashSet::new();
        for category in questionnaire.categories() {
            for question in &category.questions {
                assert!(seen.insert(question.id), "duplicate question id {}", question.id);
            }
        }
    }

    #[test]
    fn every_question_has_valid_options() {
        let questionnaire = Questionnaire::current();
        for category in questionnaire.categories() {
            for question in &category.questions {
                assert!(
                    question.options.len() >= 2,
                    "question {} has fewer than two options",
                    question.id
                );
                let mut letters = HashSet::new();
                for option in &question.options {
                    assert!(
                        letters.insert(option.letter),
                        "duplicate letter {} in question {}",
                        option.letter,
                        question.id
                    );
                }
                let max = question.max_points();
                assert!(max > 0, "question {} has a zero maximum", question.id);
                assert!(
                    question.options.iter().any(|option| option.points == max),
                    "question {} has no option at its maximum",
                    question.id
                );
            }
        }
    }

    #[test]
    fn category_maximum_sums_question_maximums() {
        let questionnaire = Questionnaire::current();
        let problem = &questionnaire.categories()[0];
        assert_eq!(problem.id, CategoryId::ProblemNature);
        assert_eq!(problem.max_points(), 16);
    }

    #[test]
    fn lookup_by_id_finds_questions() {
        let questionnaire = Questionnaire::current();
        assert!(questionnaire.question("kpi_defined").is_some());
        assert!(questionnaire.question("no_such_question").is_none());
    }
}
