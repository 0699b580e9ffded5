//! Console output formatter for run results

use colored::Colorize;
use council_domain::{CouncilOutcome, Run, format_elapsed};

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run result
    pub fn format(run: &Run) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("LLM Council Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), run.query()));

        if run.is_failed() {
            output.push_str(&Self::section_header("Run Failed"));
            output.push_str(&format!(
                "\n{}\n",
                run.error().unwrap_or("Unknown error").red()
            ));
        }

        if !run.answers().is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Stage 1: Independent Answers ({})",
                run.answers().len()
            )));
            for answer in run.answers() {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", answer.model).yellow().bold(),
                    answer.response
                ));
            }
        }

        if !run.reviews().is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Stage 2: Peer Reviews ({})",
                run.reviews().len()
            )));
            for review in run.reviews() {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── Reviewer: {} ──", review.reviewer).yellow().bold(),
                    review.text()
                ));
            }
        }

        if let Some(final_answer) = run.final_answer() {
            output.push_str(&Self::section_header("Stage 3: Final Synthesis"));
            output.push_str(&format!(
                "\n{}\n\n{}\n",
                format!("Chairman: {}", run.chairman_model().unwrap_or("unknown"))
                    .yellow()
                    .bold(),
                final_answer
            ));
        }

        // The four timing metrics are revealed together, and only for a
        // completed run
        if run.is_completed() && run.timings().is_complete() {
            output.push_str(&Self::section_header("Timing"));
            let timings = run.timings();
            for (label, ms) in [
                ("Stage 1", timings.stage1_ms),
                ("Stage 2", timings.stage2_ms),
                ("Stage 3", timings.stage3_ms),
                ("Total", timings.total_ms),
            ] {
                if let Some(ms) = ms {
                    output.push_str(&format!(
                        "  {:<8} {}\n",
                        format!("{}:", label),
                        format_elapsed(ms).bold()
                    ));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format only the chairman's final answer (concise output)
    pub fn format_final_only(run: &Run) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), run.query()));

        match run.final_answer() {
            Some(final_answer) => {
                output.push_str(&format!(
                    "{}\n\n",
                    format!("Chairman: {}", run.chairman_model().unwrap_or("unknown")).dimmed()
                ));
                output.push_str(final_answer);
                output.push('\n');
            }
            None => {
                output.push_str(&format!(
                    "{}\n",
                    run.error().unwrap_or("No final answer received").red()
                ));
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(run: &Run) -> String {
        serde_json::to_string_pretty(run).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the result of the legacy `/council` single-call endpoint.
    ///
    /// The combined endpoint has no client-visible stage boundaries, so
    /// there is no timing section; server-tolerated errors are listed.
    pub fn format_outcome(outcome: &CouncilOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("LLM Council Results"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), outcome.query));

        if !outcome.answers.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Stage 1: Independent Answers ({})",
                outcome.answers.len()
            )));
            for answer in &outcome.answers {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", answer.model).yellow().bold(),
                    answer.response
                ));
            }
        }

        if !outcome.reviews.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Stage 2: Peer Reviews ({})",
                outcome.reviews.len()
            )));
            for review in &outcome.reviews {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── Reviewer: {} ──", review.reviewer).yellow().bold(),
                    review.text()
                ));
            }
        }

        output.push_str(&Self::section_header("Stage 3: Final Synthesis"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("Chairman: {}", outcome.chairman_model).yellow().bold(),
            outcome.final_answer
        ));

        if !outcome.errors.is_empty() {
            output.push_str(&Self::section_header("Server-side Errors"));
            for error in &outcome.errors {
                output.push_str(&format!("  {} {}\n", "x".red(), error));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        format!(
            "\n{}\n{}\n{}\n",
            "=".repeat(60),
            format!("  {}", title).cyan().bold(),
            "=".repeat(60)
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(60))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{Answer, Query, Review, Synthesis};

    fn completed_run() -> Run {
        let mut run = Run::new(Query::try_new("What is Rust?").unwrap());
        run.begin();
        run.timings_mut().stage1_ms = Some(1200);
        run.complete_stage1(vec![Answer::new("llama3", "A systems language")]);
        run.timings_mut().stage2_ms = Some(800);
        run.complete_stage2(vec![Review::new("llama3", "Accurate and concise")]);
        run.timings_mut().stage3_ms = Some(2500);
        run.timings_mut().total_ms = Some(4500);
        run.complete_stage3(Synthesis::new("qwen", "Rust is a systems language."));
        run
    }

    #[test]
    fn test_completed_run_shows_timings() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&completed_run());
        assert!(output.contains("What is Rust?"));
        assert!(output.contains("llama3"));
        assert!(output.contains("Chairman: qwen"));
        assert!(output.contains("1.2s"));
        assert!(output.contains("4.5s"));
    }

    #[test]
    fn test_failed_run_hides_timings() {
        colored::control::set_override(false);
        let mut run = Run::new(Query::try_new("q").unwrap());
        run.begin();
        run.timings_mut().stage1_ms = Some(900);
        run.complete_stage1(vec![Answer::new("a", "x")]);
        run.fail("Stage 2: Peer Review failed: HTTP 500: Internal Server Error");

        let output = ConsoleFormatter::format(&run);
        assert!(output.contains("Run Failed"));
        assert!(output.contains("HTTP 500"));
        // Stage-1 answers are still shown, timings are not
        assert!(output.contains("Stage 1: Independent Answers"));
        assert!(!output.contains("Timing"));
    }

    #[test]
    fn test_final_only() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_final_only(&completed_run());
        assert!(output.contains("Rust is a systems language."));
        assert!(!output.contains("Peer Reviews"));
    }
}
