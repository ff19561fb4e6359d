use std::io::{self, Write as _};
use std::path::Path;

use agent_fit::config::AppConfig;
use agent_fit::error::AppError;
use agent_fit::evaluation::{
    generate_verdict, AnswerSet, ChosenOption, Evaluation, QuestionDef, Questionnaire,
    ScoringEngine, SessionMeta,
};
use agent_fit::history::HistoryStore;
use agent_fit::{report, telemetry};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

const RULE_WIDTH: usize = 72;
const WRAP_WIDTH: usize = 70;

#[derive(Parser, Debug)]
#[command(
    name = "agent-fit",
    about = "Score whether an initiative really needs an AI agent",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a new interactive evaluation (default command)
    Evaluate,
    /// List previously recorded evaluations
    History,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Evaluate) {
        Command::Evaluate => run_evaluation(&config),
        Command::History => show_history(&config),
    }
}

fn run_evaluation(config: &AppConfig) -> Result<(), AppError> {
    let questionnaire = Questionnaire::current();
    print_banner(&questionnaire);

    println!("This evaluator helps you decide whether your initiative really");
    println!("warrants building an AI agent, or whether a simpler, cheaper,");
    println!("more reliable solution would serve you better.");
    println!("\nThe questionnaire takes about 5-10 minutes.");
    prompt("\nPress Enter to begin: ")?;

    let meta = collect_metadata()?;
    let answers = run_questionnaire(&questionnaire)?;

    let engine = ScoringEngine::new(questionnaire);
    let score = engine.score(&answers);
    let verdict = generate_verdict(score.overall, &score.categories);

    let evaluation = Evaluation {
        meta,
        schema_version: engine.questionnaire().version(),
        answers,
        score,
        verdict,
    };

    let store = HistoryStore::new(&config.storage.data_dir);
    store.append(&evaluation)?;
    info!(
        initiative = %evaluation.meta.initiative,
        score = evaluation.score.overall,
        tier = evaluation.verdict.tier.label(),
        "evaluation recorded"
    );

    render_results(&evaluation);
    offer_export(&evaluation, &config.storage.reports_dir)?;

    println!("\nEvaluation complete. Review past runs with: agent-fit history\n");
    Ok(())
}

fn print_banner(questionnaire: &Questionnaire) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("  AGENT INITIATIVE EVALUATOR");
    println!();
    println!("  Does your initiative really need an agent?");
    println!(
        "  Answer {} questions and get a grounded diagnosis.",
        questionnaire.total_questions()
    );
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("  Based on: Anthropic, Google Cloud, AWS, McKinsey, Dataiku\n");
}

fn collect_metadata() -> Result<SessionMeta, AppError> {
    println!("\nINITIATIVE DETAILS");
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Before we start, tell us a little about your initiative.\n");

    let mut initiative = prompt("Initiative name: ")?;
    while initiative.is_empty() {
        println!("Please enter a name for the initiative.");
        initiative = prompt("Initiative name: ")?;
    }

    let team = default_if_empty(prompt("Team or company: ")?, "Not specified");
    let responsible = default_if_empty(prompt("Your name / owner: ")?, "Anonymous");

    println!("\nBriefly describe the problem you want the agent to solve.");
    let description = default_if_empty(prompt("Description: ")?, "Not specified");

    Ok(SessionMeta {
        initiative,
        team,
        responsible,
        description,
        recorded_at: Local::now(),
    })
}

fn run_questionnaire(questionnaire: &Questionnaire) -> Result<AnswerSet, AppError> {
    let mut answers = AnswerSet::new();
    let total = questionnaire.total_questions();
    let mut asked = 0;

    for category in questionnaire.categories() {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("  {}", category.name);
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("  {}", category.description);

        for question in &category.questions {
            asked += 1;
            let chosen = ask_question(question, asked, total)?;
            answers.record(question.id, chosen.letter, chosen.points);
        }
    }

    Ok(answers)
}

fn ask_question(
    question: &QuestionDef,
    number: usize,
    total: usize,
) -> Result<ChosenOption, AppError> {
    println!("\nQuestion {number}/{total}");
    println!("{}", question.prompt);
    if let Some(help) = question.help {
        println!("  hint: {help}");
    }
    println!();
    for option in &question.options {
        println!("  [{}] {}", option.letter, option.text);
    }

    let letters: Vec<String> = question
        .options
        .iter()
        .map(|option| option.letter.to_string())
        .collect();

    loop {
        let raw = prompt(&format!("\nYour answer [{}]: ", letters.join("/")))?;
        let mut chars = raw.chars();
        let selection = match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(letter.to_ascii_uppercase()),
            _ => None,
        };
        if let Some(option) = selection.and_then(|letter| question.option(letter)) {
            return Ok(ChosenOption { letter: option.letter, points: option.points });
        }
        println!("Invalid option. Choose one of: {}", letters.join(", "));
    }
}

fn render_results(evaluation: &Evaluation) {
    let score = &evaluation.score;
    let verdict = &evaluation.verdict;

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("  EVALUATION RESULTS");
    println!("{}", "=".repeat(RULE_WIDTH));

    println!("\n  {} [{}]", verdict.headline, verdict.severity.label());
    println!("\n  Overall score: {:.1}% / 100%", score.overall);
    println!("  {}  {:.1}%", score_bar(score.overall, 35), score.overall);

    println!("\n  Rationale:");
    print_wrapped(&verdict.rationale, WRAP_WIDTH);

    if !verdict.alerts.is_empty() {
        println!("\n  Warning signals:");
        for alert in &verdict.alerts {
            println!();
            print_wrapped(alert, WRAP_WIDTH);
        }
    }

    println!("\n  Results by category:");
    println!("  {}", "-".repeat(RULE_WIDTH - 2));
    for category in &score.categories {
        println!("\n  {}", category.name);
        println!(
            "  {}  {:.1}%  ({}/{} pts)",
            score_bar(category.percentage, 25),
            category.percentage,
            category.obtained,
            category.max_points
        );
    }

    if !verdict.recommendations.is_empty() {
        println!("\n  Recommendations to proceed:");
        println!("  {}", "-".repeat(RULE_WIDTH - 2));
        for recommendation in &verdict.recommendations {
            println!("  -> {recommendation}");
        }
    }

    if !verdict.alternatives.is_empty() {
        println!("\n  Recommended alternatives:");
        println!("  {}", "-".repeat(RULE_WIDTH - 2));
        for (index, alternative) in verdict.alternatives.iter().enumerate() {
            println!("\n  {}. {}", index + 1, alternative.name);
            print_wrapped(&alternative.description, WRAP_WIDTH);
            println!("     Tools: {}", alternative.tools.join(", "));
        }
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
}

fn offer_export(evaluation: &Evaluation, reports_dir: &Path) -> Result<(), AppError> {
    println!("\nExport a report for this evaluation?");
    println!("  [M] Markdown (.md)");
    println!("  [P] Markdown + attempt PDF conversion");
    println!("  [N] Skip");

    let choice = prompt("\nYour option [M/P/N]: ")?.to_ascii_uppercase();
    if choice != "M" && choice != "P" {
        return Ok(());
    }

    let markdown_path = report::save_markdown(evaluation, reports_dir)?;
    println!("\nMarkdown report saved to:");
    println!("  {}", markdown_path.display());

    if choice == "P" {
        println!("\nAttempting PDF conversion (requires pandoc)...");
        match report::markdown_to_pdf(&markdown_path) {
            Some(pdf_path) => {
                println!("PDF saved to:");
                println!("  {}", pdf_path.display());
            }
            None => {
                println!("PDF conversion unavailable. The markdown report is already saved");
                println!("and can be converted manually.");
            }
        }
    }

    Ok(())
}

fn show_history(config: &AppConfig) -> Result<(), AppError> {
    let store = HistoryStore::new(&config.storage.data_dir);
    let history = store.load()?;

    if history.is_empty() {
        println!("\nNo previous evaluations recorded.\n");
        return Ok(());
    }

    println!("\nEVALUATION HISTORY ({} records)", history.len());
    println!("{}", "-".repeat(78));
    println!("{:<4} {:<28} {:<18} {:>8}  Verdict", "#", "Initiative", "Team", "Score");
    println!("{}", "-".repeat(78));

    for (index, evaluation) in history.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:<18} {:>7.1}%  {}",
            index + 1,
            truncate(&evaluation.meta.initiative, 26),
            truncate(&evaluation.meta.team, 16),
            evaluation.score.overall,
            evaluation.verdict.headline
        );
    }

    println!("{}", "-".repeat(78));
    println!();
    Ok(())
}

fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed before the evaluation finished",
        )));
    }
    Ok(line.trim().to_string())
}

fn default_if_empty(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn score_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0 * width as f64) as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn print_wrapped(text: &str, width: usize) {
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            println!("  {line}");
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        println!("  {line}");
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_preserves_short_values() {
        assert_eq!(truncate("Invoice triage", 26), "Invoice triage");
    }

    #[test]
    fn truncate_cuts_on_char_boundaries() {
        assert_eq!(truncate("ābcdefgh", 3), "ābc");
    }

    #[test]
    fn score_bar_fills_proportionally() {
        assert_eq!(score_bar(0.0, 4), "░░░░");
        assert_eq!(score_bar(100.0, 4), "████");
        assert_eq!(score_bar(50.0, 4), "██░░");
    }

    #[test]
    fn default_if_empty_substitutes_fallback() {
        assert_eq!(default_if_empty(String::new(), "Anonymous"), "Anonymous");
        assert_eq!(default_if_empty("Dana".to_string(), "Anonymous"), "Dana");
    }
}
