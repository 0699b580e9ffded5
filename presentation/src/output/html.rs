//! Standalone HTML report of a run
//!
//! Every piece of free-form remote text is escaped before insertion;
//! the council's models are not trusted to emit markup-safe output.

use council_domain::{Run, Theme, format_elapsed};

/// Escape text for safe insertion into HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a run as a self-contained HTML document
pub struct HtmlReport;

impl HtmlReport {
    pub fn render(run: &Run, theme: Theme) -> String {
        let (bg, fg, card) = match theme {
            Theme::Light => ("#ffffff", "#1a1a2e", "#f0f0f5"),
            Theme::Dark => ("#1a1a2e", "#e4e4ef", "#26263a"),
        };

        let mut body = String::new();

        body.push_str(&format!(
            "<h1>LLM Council Results</h1>\n<p class=\"query\"><strong>Query:</strong> {}</p>\n",
            escape_html(run.query().content())
        ));

        if let Some(error) = run.error() {
            body.push_str(&format!(
                "<div class=\"card error\"><h2>Run Failed</h2><p>{}</p></div>\n",
                escape_html(error)
            ));
        }

        if !run.answers().is_empty() {
            body.push_str(&format!(
                "<h2>Stage 1: Independent Answers ({})</h2>\n",
                run.answers().len()
            ));
            for answer in run.answers() {
                body.push_str(&format!(
                    "<div class=\"card\"><h3>{}</h3><p>{}</p></div>\n",
                    escape_html(&answer.model),
                    escape_html(&answer.response)
                ));
            }
        }

        if !run.reviews().is_empty() {
            body.push_str(&format!(
                "<h2>Stage 2: Peer Reviews ({})</h2>\n",
                run.reviews().len()
            ));
            for review in run.reviews() {
                body.push_str(&format!(
                    "<div class=\"card\"><h3>Reviewer: {}</h3><p>{}</p></div>\n",
                    escape_html(&review.reviewer),
                    escape_html(review.text())
                ));
            }
        }

        if let Some(final_answer) = run.final_answer() {
            body.push_str("<h2>Stage 3: Final Synthesis</h2>\n");
            body.push_str(&format!(
                "<div class=\"card final\"><h3>Chairman: {}</h3><p>{}</p></div>\n",
                escape_html(run.chairman_model().unwrap_or("unknown")),
                escape_html(final_answer)
            ));
        }

        if run.is_completed() && run.timings().is_complete() {
            let timings = run.timings();
            body.push_str("<h2>Timing</h2>\n<ul>\n");
            for (label, ms) in [
                ("Stage 1", timings.stage1_ms),
                ("Stage 2", timings.stage2_ms),
                ("Stage 3", timings.stage3_ms),
                ("Total", timings.total_ms),
            ] {
                if let Some(ms) = ms {
                    body.push_str(&format!("<li>{}: {}</li>\n", label, format_elapsed(ms)));
                }
            }
            body.push_str("</ul>\n");
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>LLM Council Results</title>\n<style>\n\
             body {{ font-family: sans-serif; max-width: 56rem; margin: 2rem auto; \
             background: {bg}; color: {fg}; }}\n\
             .card {{ background: {card}; border-radius: 8px; padding: 1rem; \
             margin: 0.5rem 0; white-space: pre-wrap; }}\n\
             .card.error {{ border-left: 4px solid #d9534f; }}\n\
             .card.final {{ border-left: 4px solid #5cb85c; }}\n\
             </style>\n</head>\n<body>\n{body}</body>\n</html>\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{Answer, Query, Review, Synthesis};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b \"c\""), "a &amp; b &quot;c&quot;");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_hostile_model_output_is_escaped() {
        let mut run = Run::new(Query::try_new("q").unwrap());
        run.begin();
        run.complete_stage1(vec![Answer::new("<img src=x>", "<script>bad()</script>")]);
        run.complete_stage2(vec![Review::new("r", "ok")]);
        run.complete_stage3(Synthesis::new("chair", "<b>done</b>"));

        let html = HtmlReport::render(&run, Theme::Light);
        assert!(!html.contains("<script>bad()"));
        assert!(html.contains("&lt;script&gt;bad()"));
        assert!(html.contains("&lt;b&gt;done&lt;/b&gt;"));
    }

    #[test]
    fn test_failed_run_renders_error() {
        let mut run = Run::new(Query::try_new("q").unwrap());
        run.begin();
        run.fail("Stage 1: Independent Answers failed: Transport error");

        let html = HtmlReport::render(&run, Theme::Dark);
        assert!(html.contains("Run Failed"));
        assert!(html.contains("Transport error"));
        assert!(!html.contains("Timing"));
    }

    #[test]
    fn test_theme_selects_palette() {
        let run = Run::new(Query::try_new("q").unwrap());
        let light = HtmlReport::render(&run, Theme::Light);
        let dark = HtmlReport::render(&run, Theme::Dark);
        assert!(light.contains("background: #ffffff"));
        assert!(dark.contains("background: #1a1a2e"));
    }
}
