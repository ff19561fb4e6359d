mod convert;

pub use convert::markdown_to_pdf;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::evaluation::Evaluation;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unable to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a complete markdown report for one evaluation: metadata header,
/// verdict with a textual progress indicator, alerts, category table, full
/// answer detail, tier-dependent recommendations or alternatives, and the
/// framework references.
pub fn render_markdown(evaluation: &Evaluation) -> String {
    let meta = &evaluation.meta;
    let score = &evaluation.score;
    let verdict = &evaluation.verdict;

    let mut md = String::new();

    writeln!(md, "# AI Agent Initiative Evaluation\n").expect("write title");
    writeln!(md, "> **Date:** {}  ", meta.recorded_at.format("%B %d, %Y %H:%M"))
        .expect("write date");
    writeln!(md, "> **Initiative:** {}  ", meta.initiative).expect("write initiative");
    writeln!(md, "> **Team / Company:** {}  ", meta.team).expect("write team");
    writeln!(md, "> **Responsible:** {}  \n", meta.responsible).expect("write responsible");
    md.push_str("---\n\n");

    writeln!(md, "## Final Verdict\n").expect("write verdict heading");
    writeln!(md, "### {}\n", verdict.headline).expect("write headline");
    writeln!(md, "**Overall score: {:.1}% / 100%**\n", score.overall).expect("write score");
    writeln!(md, "{}\n", progress_bar(score.overall, 30)).expect("write bar");
    writeln!(md, "{}\n", verdict.rationale).expect("write rationale");

    if !verdict.alerts.is_empty() {
        writeln!(md, "### Warning Signals\n").expect("write alerts heading");
        for alert in &verdict.alerts {
            writeln!(md, "- {alert}").expect("write alert");
        }
        md.push('\n');
    }

    md.push_str("---\n\n");

    writeln!(md, "## Results by Category\n").expect("write categories heading");
    md.push_str("| Category | Points | Percentage | Bar |\n");
    md.push_str("|----------|--------|------------|-----|\n");
    for category in &score.categories {
        writeln!(
            md,
            "| {} | {}/{} | {:.1}% | {} |",
            category.name,
            category.obtained,
            category.max_points,
            category.percentage,
            mini_bar(category.percentage, 15)
        )
        .expect("write category row");
    }
    md.push('\n');

    writeln!(md, "## Answer Detail\n").expect("write detail heading");
    for category in &score.categories {
        writeln!(md, "### {}\n", category.name).expect("write category name");
        for (index, answer) in category.answers.iter().enumerate() {
            writeln!(md, "**{}. {}**  ", index + 1, answer.prompt).expect("write prompt");
            writeln!(md, "Chosen answer ({}): *{}*  ", answer.letter, answer.option_text)
                .expect("write chosen");
            writeln!(md, "Points: {} / {}\n", answer.points, answer.max_points)
                .expect("write points");
        }
    }

    md.push_str("---\n\n");

    if !verdict.recommendations.is_empty() {
        writeln!(md, "## Recommendations to Proceed\n").expect("write recommendations heading");
        for recommendation in &verdict.recommendations {
            writeln!(md, "- {recommendation}").expect("write recommendation");
        }
        md.push_str("\n---\n\n");
    }

    if !verdict.alternatives.is_empty() {
        writeln!(md, "## Recommended Alternatives\n").expect("write alternatives heading");
        md.push_str(
            "Since an AI agent is not the best fit for this initiative, these approaches can \
             solve the problem more efficiently:\n\n",
        );
        for (index, alternative) in verdict.alternatives.iter().enumerate() {
            writeln!(md, "### {}. {}\n", index + 1, alternative.name).expect("write alt name");
            writeln!(md, "**What is it?** {}\n", alternative.description).expect("write alt what");
            writeln!(md, "**When to use it?** {}\n", alternative.when_to_use)
                .expect("write alt when");
            writeln!(md, "**Tools:** {}\n", alternative.tools.join(", ")).expect("write alt tools");
        }
        md.push_str("---\n\n");
    }

    writeln!(md, "## Reference Frameworks\n").expect("write references heading");
    md.push_str("- [Anthropic: Building Effective Agents (2024)](https://www.anthropic.com/research/building-effective-agents)\n");
    md.push_str("- [Google Cloud: A Methodical Approach to Agent Evaluation](https://cloud.google.com/blog/topics/developers-practitioners/a-methodical-approach-to-agent-evaluation)\n");
    md.push_str("- [AWS: Agents vs Automation - A Strategic Guide](https://aws.amazon.com/executive-insights/content/agents-vs-automation-a-strategic-guide-for-business-leaders/)\n");
    md.push_str("- [Dataiku: How to Select High-Impact AI Agent Use Cases](https://www.dataiku.com/stories/blog/how-to-select-high-impact-ai-agent-use-cases)\n");
    md.push_str("- [McKinsey: Rethinking Decision Making to Unlock AI Potential](https://www.mckinsey.com/capabilities/operations/our-insights/when-can-ai-make-good-decisions-the-rise-of-ai-corporate-citizens)\n\n");
    md.push_str("---\n");
    md.push_str("*Generated by the Agent Initiative Evaluator*\n");

    md
}

/// Saves the markdown report under the reports directory with a timestamped,
/// slugged file name and returns the path.
pub fn save_markdown(evaluation: &Evaluation, reports_dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(reports_dir)?;

    let timestamp = evaluation.meta.recorded_at.format("%Y%m%d_%H%M%S");
    let slug = slugify(&evaluation.meta.initiative, 30);
    let path = reports_dir.join(format!("report_{slug}_{timestamp}.md"));

    fs::write(&path, render_markdown(evaluation))?;
    Ok(path)
}

fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = bar_cells(percentage, width);
    format!(
        "`{}{}` **{:.1}%**",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percentage
    )
}

fn mini_bar(percentage: f64, width: usize) -> String {
    let filled = bar_cells(percentage, width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn bar_cells(percentage: f64, width: usize) -> usize {
    let clamped = percentage.clamp(0.0, 100.0);
    ((clamped / 100.0 * width as f64) as usize).min(width)
}

fn slugify(name: &str, max_len: usize) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .map(|c| if c.is_ascii_whitespace() { '_' } else { c.to_ascii_lowercase() })
        .take(max_len)
        .collect();
    if slug.is_empty() {
        "evaluation".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_with_percentage() {
        assert_eq!(mini_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(mini_bar(100.0, 10), "██████████");
        assert_eq!(mini_bar(50.0, 10), "█████░░░░░");
        assert!(progress_bar(77.0, 30).contains("77.0%"));
    }

    #[test]
    fn bar_handles_out_of_range_values() {
        assert_eq!(mini_bar(140.0, 10), "██████████");
        assert_eq!(mini_bar(-5.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn slugify_strips_punctuation_and_truncates() {
        assert_eq!(slugify("Invoice Triage (v2)!", 30), "invoice_triage_v2");
        assert_eq!(slugify("", 30), "evaluation");
        assert_eq!(slugify("x".repeat(50).as_str(), 30).len(), 30);
    }
}
