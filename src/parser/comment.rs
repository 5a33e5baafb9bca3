//! Step doc-comment parser — line-oriented state machine.
//!
//! Only whole-line patterns are significant: the `/**` and `*/` markers, the
//! `@code` / `@endcode` example fences and the `@Given` / `@When` / `@Then`
//! step tags. Anything else, including marker look-alikes inside prose, is
//! plain text.

use crate::error::ParseError;
use crate::model::MethodDoc;
use regex::Regex;
use std::sync::LazyLock;

static RE_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(Given|When|Then)(?:\s|$)").unwrap());

const EXAMPLE_OPEN: &str = "@code";
const EXAMPLE_CLOSE: &str = "@endcode";

/// Parse one doc-comment block into a [`MethodDoc`].
///
/// Returns `Ok(None)` when the comment has no step tags, even if it carries
/// a code sample or an unterminated `@code` fence.
pub fn parse(comment: &str) -> Result<Option<MethodDoc>, ParseError> {
    let lines = comment_lines(comment);

    let mut steps: Vec<(usize, String)> = Vec::new();
    let mut example: Option<String> = None;
    let mut example_lines: Vec<&str> = Vec::new();
    let mut in_example = false;

    for &line in &lines {
        let trimmed = line.trim();

        if in_example {
            if trimmed == EXAMPLE_CLOSE {
                in_example = false;
                // Only the first example region is kept.
                if example.is_none() {
                    example = Some(unindent(&example_lines));
                }
                example_lines.clear();
            } else {
                example_lines.push(line);
            }
            continue;
        }

        if trimmed == EXAMPLE_OPEN {
            in_example = true;
            continue;
        }

        if let Some(rank) = step_rank(trimmed) {
            steps.push((rank, trimmed.to_string()));
        }
    }

    if steps.is_empty() {
        return Ok(None);
    }
    if in_example {
        return Err(ParseError::ExampleNotClosed);
    }

    // Stable: relative order inside each group is preserved.
    steps.sort_by_key(|(rank, _)| *rank);

    Ok(Some(MethodDoc {
        steps: steps.into_iter().map(|(_, step)| step).collect(),
        description: first_paragraph(&lines),
        example: example.unwrap_or_default(),
    }))
}

/// Description of a comment block that documents something other than a
/// step, e.g. the trait itself.
pub fn description(comment: &str) -> String {
    first_paragraph(&comment_lines(comment))
}

/// Ordering rank of a step tag line: Given < When < Then.
fn step_rank(line: &str) -> Option<usize> {
    let caps = RE_STEP.captures(line)?;
    match &caps[1] {
        "Given" => Some(0),
        "When" => Some(1),
        _ => Some(2),
    }
}

/// Split a comment into content lines with the comment markers removed.
///
/// `/**` is only recognized on the first line and `*/` on the last, so
/// look-alikes in prose such as `src/*/` survive. Indentation after the `* `
/// gutter is preserved so example blocks can be de-indented later.
fn comment_lines(comment: &str) -> Vec<&str> {
    let raw: Vec<&str> = comment.lines().collect();
    let last = raw.len().saturating_sub(1);
    raw.into_iter()
        .enumerate()
        .map(|(i, line)| strip_markers(line, i == 0, i == last))
        .collect()
}

fn strip_markers(line: &str, opening: bool, closing: bool) -> &str {
    let mut s = line.trim();
    if opening {
        if let Some(rest) = s.strip_prefix("/**") {
            s = rest;
        }
    }
    if closing {
        if let Some(rest) = s.strip_suffix("*/") {
            s = rest;
        }
    }
    if let Some(rest) = s.strip_prefix('*') {
        s = rest.strip_prefix(' ').unwrap_or(rest);
    }
    s.trim_end()
}

/// First paragraph of text before the first `@` line, joined with spaces.
fn first_paragraph(lines: &[&str]) -> String {
    let mut paragraph: Vec<&str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('@') {
            break;
        }
        if trimmed.is_empty() {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }
        paragraph.push(trimmed);
    }
    paragraph.join(" ").trim().to_string()
}

/// Byte length of the leading run of spaces and tabs.
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Remove the common leading whitespace of the non-blank lines and
/// terminate the block with a newline.
fn unindent(lines: &[&str]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    let mut out = String::new();
    for &line in lines {
        if line.trim().is_empty() {
            out.push('\n');
            continue;
        }
        out.push_str(&line[min_indent..]);
        out.push('\n');
    }
    out
}
