use serde::{Deserialize, Serialize};

use super::catalog::{CategoryId, Questionnaire};
use super::domain::AnswerSet;

/// Stateless engine applying the active questionnaire schema to an answer set.
pub struct ScoringEngine {
    questionnaire: Questionnaire,
}

impl ScoringEngine {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self { questionnaire }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Pure, total scoring over any answer subset. Unanswered questions
    /// contribute nothing to the obtained total while the category maximum
    /// stays fixed by the schema, so incomplete answer sets lower the score
    /// instead of erroring.
    pub fn score(&self, answers: &AnswerSet) -> ScoreResult {
        let mut categories = Vec::with_capacity(self.questionnaire.categories().len());
        let mut overall = 0.0;

        for category in self.questionnaire.categories() {
            let max_points = category.max_points();
            let mut obtained = 0u32;
            let mut details = Vec::new();

            for question in &category.questions {
                let Some(chosen) = answers.get(question.id) else {
                    continue;
                };
                obtained += chosen.points;
                let option_text = question
                    .option(chosen.letter)
                    .map(|option| option.text)
                    .unwrap_or_default();
                details.push(AnswerDetail {
                    question_id: question.id.to_string(),
                    prompt: question.prompt.to_string(),
                    letter: chosen.letter,
                    option_text: option_text.to_string(),
                    points: chosen.points,
                    max_points: question.max_points(),
                });
            }

            let raw_percentage = if max_points > 0 {
                f64::from(obtained) / f64::from(max_points) * 100.0
            } else {
                0.0
            };
            overall += raw_percentage * category.weight;

            categories.push(CategoryResult {
                id: category.id,
                name: category.name.to_string(),
                obtained,
                max_points,
                percentage: round_one_decimal(raw_percentage),
                weight: category.weight,
                answers: details,
            });
        }

        ScoreResult {
            overall: round_one_decimal(overall),
            categories,
        }
    }
}

/// Per-question answer detail carried for reporting and alert matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDetail {
    pub question_id: String,
    pub prompt: String,
    pub letter: char,
    pub option_text: String,
    pub points: u32,
    pub max_points: u32,
}

/// Score breakdown for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub id: CategoryId,
    pub name: String,
    pub obtained: u32,
    pub max_points: u32,
    pub percentage: f64,
    pub weight: f64,
    pub answers: Vec<AnswerDetail>,
}

/// Weighted overall score plus the ordered category breakdown. Computed once
/// per evaluation, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall: f64,
    pub categories: Vec<CategoryResult>,
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::catalog::Questionnaire;

    fn engine() -> ScoringEngine {
        ScoringEngine::new(Questionnaire::current())
    }

    fn answer_everything_with_max(engine: &ScoringEngine) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for category in engine.questionnaire().categories() {
            for question in &category.questions {
                let best = question
                    .options
                    .iter()
                    .max_by_key(|option| option.points)
                    .expect("questions have options");
                answers.record(question.id, best.letter, best.points);
            }
        }
        answers
    }

    #[test]
    fn empty_answer_set_scores_zero() {
        let result = engine().score(&AnswerSet::new());
        assert_eq!(result.overall, 0.0);
        for category in &result.categories {
            assert_eq!(category.obtained, 0);
            assert_eq!(category.percentage, 0.0);
            assert!(category.answers.is_empty());
            assert!(category.max_points > 0);
        }
    }

    #[test]
    fn complete_maximum_answers_score_one_hundred() {
        let engine = engine();
        let answers = answer_everything_with_max(&engine);
        let result = engine.score(&answers);
        assert_eq!(result.overall, 100.0);
        for category in &result.categories {
            assert_eq!(category.percentage, 100.0);
            assert_eq!(category.obtained, category.max_points);
            assert!(!category.answers.is_empty());
        }
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let engine = engine();
        let mut answers = AnswerSet::new();
        answers.record("question_from_a_retired_schema", 'A', 4);
        let result = engine.score(&answers);
        assert_eq!(result.overall, 0.0);
        assert!(result.categories.iter().all(|category| category.answers.is_empty()));
    }

    #[test]
    fn partial_answers_lower_the_score_without_error() {
        let engine = engine();
        let mut answers = AnswerSet::new();
        answers.record("chained_decisions", 'A', 4);
        let result = engine.score(&answers);

        let problem = &result.categories[0];
        assert_eq!(problem.obtained, 4);
        assert_eq!(problem.max_points, 16);
        assert_eq!(problem.percentage, 25.0);
        // 25% of a 0.20-weight category, everything else unanswered.
        assert_eq!(result.overall, 5.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let engine = engine();
        let answers = answer_everything_with_max(&engine);
        assert_eq!(engine.score(&answers), engine.score(&answers));
    }

    #[test]
    fn raising_one_answer_never_lowers_the_overall() {
        let engine = engine();
        let mut answers = AnswerSet::new();
        for category in engine.questionnaire().categories() {
            for question in &category.questions {
                let worst = question
                    .options
                    .iter()
                    .min_by_key(|option| option.points)
                    .expect("questions have options");
                answers.record(question.id, worst.letter, worst.points);
            }
        }
        let baseline = engine.score(&answers).overall;

        let mut improved = answers.clone();
        improved.record("chained_decisions", 'A', 4);
        let after = engine.score(&improved).overall;
        assert!(after >= baseline);
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        let engine = engine();
        let mut answers = AnswerSet::new();
        // 2 of 12 points in technical feasibility: 16.666...%
        answers.record("data_availability", 'B', 2);
        let result = engine.score(&answers);
        let feasibility = result
            .categories
            .iter()
            .find(|category| category.id == CategoryId::TechnicalFeasibility)
            .expect("feasibility category present");
        assert_eq!(feasibility.percentage, 16.7);
    }
}
