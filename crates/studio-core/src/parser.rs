//! Milestone document parsing.
//!
//! A milestone is a free-form Markdown file. Only the first line is strict:
//! it must read `# Milestone <number> – <title>` (en-dash or hyphen). The
//! objective paragraph and the highlight list are optional and fall back to
//! fixed text when missing, so a sloppy document still yields a phase.

use crate::error::ParseError;
use crate::phase::Phase;
use regex::Regex;
use std::sync::OnceLock;

pub const FALLBACK_FOCUS: &str = "See milestone documentation for details.";
pub const FALLBACK_HIGHLIGHT: &str = "Consult the milestone file for recommended tasks.";

const OBJECTIVE_HEADING: &str = "## objective";
const SECTION_PREFIX: &str = "## ";

static HEADER_RE: OnceLock<Regex> = OnceLock::new();
static ORDERED_ITEM_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| {
        Regex::new(r"^#\s*Milestone\s+(?P<number>[0-9]+)\s*[–-]\s*(?P<title>.+?)\s*$").unwrap()
    })
}

fn ordered_item_re() -> &'static Regex {
    ORDERED_ITEM_RE.get_or_init(|| Regex::new(r"^[0-9]+\.\s+(?P<text>.*)$").unwrap())
}

/// Parse one milestone document into a [`Phase`].
pub fn parse(text: &str) -> Result<Phase, ParseError> {
    let normalized = text.replace("\r\n", "\n");
    let lines: Vec<&str> = split_lines(&normalized).collect();
    let Some((first, body)) = lines.split_first() else {
        return Err(ParseError::Empty);
    };

    let (number, name) = parse_header(first)?;
    Ok(Phase {
        number,
        name,
        focus: extract_objective(body),
        highlights: extract_highlights(body),
    })
}

/// Lines split on `\n` or a bare `\r`; a trailing terminator adds no
/// empty line. Expects `\r\n` to be normalized already.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator(['\n', '\r'])
}

fn parse_header(line: &str) -> Result<(u32, String), ParseError> {
    let line = line.trim_start_matches('\u{feff}').trim();
    let caps = header_re()
        .captures(line)
        .ok_or(ParseError::MissingHeader)?;
    let digits = &caps["number"];
    let number = digits
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber(digits.to_string()))?;
    Ok((number, caps["title"].trim().to_string()))
}

/// The `## Objective` section collapsed to one line, or the first plain
/// line of the body, or [`FALLBACK_FOCUS`].
fn extract_objective(lines: &[&str]) -> String {
    let mut capturing = false;
    let mut collected: Vec<&str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.to_lowercase().starts_with(OBJECTIVE_HEADING) {
            capturing = true;
            continue;
        }
        if capturing && trimmed.starts_with(SECTION_PREFIX) {
            break;
        }
        if capturing && !trimmed.is_empty() {
            collected.push(trimmed);
        }
    }
    if !collected.is_empty() {
        return collected.join(" ");
    }

    lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or(FALLBACK_FOCUS)
        .to_string()
}

/// The first contiguous run of bullet (`-`, `*`) or numbered list items.
fn extract_highlights(lines: &[&str]) -> Vec<String> {
    let mut highlights = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !highlights.is_empty() {
                break;
            }
            continue;
        }
        match list_item(trimmed) {
            Some(item) => highlights.push(item.to_string()),
            None if !highlights.is_empty() => break,
            None => {}
        }
    }
    if highlights.is_empty() {
        highlights.push(FALLBACK_HIGHLIGHT.to_string());
    }
    highlights
}

fn list_item(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(rest.trim());
    }
    ordered_item_re()
        .captures(line)
        .and_then(|caps| caps.name("text"))
        .map(|m| m.as_str().trim())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
