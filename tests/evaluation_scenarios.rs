use agent_fit::evaluation::{
    generate_verdict, AnswerSet, CategoryId, Questionnaire, ScoringEngine, VerdictTier,
};

fn engine() -> ScoringEngine {
    ScoringEngine::new(Questionnaire::current())
}

/// Builds a complete answer set, choosing per question via the given closure.
fn answer_all(engine: &ScoringEngine, pick: impl Fn(&str) -> Pick) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for category in engine.questionnaire().categories() {
        for question in &category.questions {
            let option = match pick(question.id) {
                Pick::Best => question
                    .options
                    .iter()
                    .max_by_key(|option| option.points)
                    .expect("question has options"),
                Pick::Worst => question
                    .options
                    .iter()
                    .min_by_key(|option| option.points)
                    .expect("question has options"),
            };
            answers.record(question.id, option.letter, option.points);
        }
    }
    answers
}

enum Pick {
    Best,
    Worst,
}

#[test]
fn all_maximum_answers_yield_high_confidence_clear() {
    let engine = engine();
    let answers = answer_all(&engine, |_| Pick::Best);
    let score = engine.score(&answers);
    let verdict = generate_verdict(score.overall, &score.categories);

    assert_eq!(score.overall, 100.0);
    assert_eq!(verdict.tier, VerdictTier::Clear);
    assert_eq!(verdict.headline, "Agent strongly recommended");
    assert!(verdict.agent_justified);
    assert!(verdict.alerts.is_empty());
    assert!(verdict.alternatives.is_empty());
    assert!(!verdict.recommendations.is_empty());
}

#[test]
fn all_minimum_answers_yield_reject_with_alternatives() {
    let engine = engine();
    let answers = answer_all(&engine, |_| Pick::Worst);
    let score = engine.score(&answers);
    let verdict = generate_verdict(score.overall, &score.categories);

    assert_eq!(score.overall, 0.0);
    assert_eq!(verdict.tier, VerdictTier::Reject);
    assert!(!verdict.agent_justified);
    assert!(verdict.recommendations.is_empty());
    assert!(!verdict.alternatives.is_empty());
    assert!(verdict.alternatives.len() <= 4);
}

#[test]
fn a_fully_weak_kpi_category_alone_cannot_force_hybrid() {
    let engine = engine();
    let kpi_ids = ["kpi_defined", "kpi_baseline", "kpi_economic_value", "kpi_time_to_impact"];
    let answers = answer_all(&engine, |id| {
        if kpi_ids.contains(&id) {
            Pick::Worst
        } else {
            Pick::Best
        }
    });
    let score = engine.score(&answers);

    // The KPI category (weight 0.23) contributes nothing; every other
    // category contributes its full weight: 100 - 23 = 77.
    assert_eq!(score.overall, 77.0);

    let kpis = score
        .categories
        .iter()
        .find(|category| category.id == CategoryId::Kpis)
        .expect("kpis category present");
    assert_eq!(kpis.percentage, 0.0);

    let verdict = generate_verdict(score.overall, &score.categories);
    assert_eq!(verdict.tier, VerdictTier::Clear);
    assert!(verdict.agent_justified);
}

#[test]
fn weak_kpi_answers_surface_strategy_alerts() {
    let engine = engine();
    let answers = answer_all(&engine, |id| {
        if id == "kpi_defined" {
            Pick::Worst
        } else {
            Pick::Best
        }
    });
    let score = engine.score(&answers);
    let verdict = generate_verdict(score.overall, &score.categories);

    let strategy_alerts = verdict
        .alerts
        .iter()
        .filter(|alert| alert.starts_with("Strategy alert"))
        .count();
    assert_eq!(strategy_alerts, 1);
}

#[test]
fn identical_answer_sets_produce_identical_verdicts() {
    let engine = engine();
    let answers = answer_all(&engine, |id| {
        if id.starts_with("kpi") {
            Pick::Worst
        } else {
            Pick::Best
        }
    });

    let first_score = engine.score(&answers);
    let second_score = engine.score(&answers);
    assert_eq!(first_score, second_score);

    let first = generate_verdict(first_score.overall, &first_score.categories);
    let second = generate_verdict(second_score.overall, &second_score.categories);
    assert_eq!(first, second);
}

#[test]
fn overall_score_stays_within_bounds_for_partial_answers() {
    let engine = engine();
    let mut answers = AnswerSet::new();
    answers.record("chained_decisions", 'A', 4);
    answers.record("kpi_defined", 'B', 2);
    answers.record("team_resistance", 'C', 0);

    let score = engine.score(&answers);
    assert!(score.overall >= 0.0 && score.overall <= 100.0);
    for category in &score.categories {
        assert!(category.percentage >= 0.0 && category.percentage <= 100.0);
    }
}
