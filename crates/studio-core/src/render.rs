//! Plain-text views of the roadmap. Callers decide where the text goes.

use crate::phase::Phase;

pub const SUMMARY_HEADER: &str = "Roadmap phases:";
pub const USAGE_HINT: &str = "Use --phase <number> for details or --next to see what comes next.";

pub fn render_summary(phases: &[Phase]) -> String {
    let mut lines = vec![SUMMARY_HEADER.to_string()];
    lines.extend(
        phases
            .iter()
            .map(|p| format!("Phase {}: {} — {}", p.number, p.name, p.focus)),
    );
    lines.push(String::new());
    lines.push(USAGE_HINT.to_string());
    lines.join("\n")
}

pub fn render_details(phase: &Phase) -> String {
    let mut lines = vec![
        format!("Phase {}: {}", phase.number, phase.name),
        format!("Focus: {}", phase.focus),
        "Highlights:".to_string(),
    ];
    lines.extend(phase.highlights.iter().map(|item| format!("  - {item}")));
    lines.join("\n")
}

/// Context line shown above the recommended phase.
pub fn next_context(after: Option<u32>) -> String {
    match after {
        None => "Starting point".to_string(),
        Some(n) => format!("Next step after completing Phase {n}"),
    }
}

pub fn render_next(phase: &Phase, after: Option<u32>) -> String {
    format!("{}:\n\n{}", next_context(after), render_details(phase))
}
