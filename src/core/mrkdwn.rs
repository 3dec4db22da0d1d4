//! Markdown to Slack mrkdwn conversion.
//!
//! Slack has no heading syntax, uses a single `*` for bold, and writes links as
//! `<url|label>`. Conversion is line-oriented: every rewrite is local to one
//! line and the output has exactly as many lines as the input.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `# Title` .. `###### Title` at the start of a line.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.+)$").expect("heading pattern is valid"));

/// A line made only of three or more hyphens, optionally followed by whitespace.
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---+\s*$").expect("rule pattern is valid"));

/// `**text**`, non-greedy so several runs on one line stay separate.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

/// `[label](target)`; label has no `]`, target has no `)`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

const FENCE: &str = "```";

/// Convert standard Markdown to Slack mrkdwn.
///
/// Headings become bold, horizontal rules become empty lines, `**bold**`
/// becomes `*bold*` and `[label](url)` becomes `<url|label>`. Everything else,
/// fenced code included, passes through as-is.
pub fn md_to_mrkdwn(text: &str) -> String {
    text.split('\n')
        .map(convert_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`md_to_mrkdwn`], but lines inside fenced code blocks are left untouched.
///
/// A fence opens and closes on any line whose trimmed start begins with
/// three backticks; the fence lines themselves are kept verbatim. An unclosed
/// fence runs to the end of the input.
pub fn md_to_mrkdwn_preserving_code(text: &str) -> String {
    let mut in_fence = false;
    let mut skipped = 0usize;
    let lines: Vec<Cow<'_, str>> = text
        .split('\n')
        .map(|line| {
            if line.trim_start().starts_with(FENCE) {
                in_fence = !in_fence;
                skipped += 1;
                return Cow::Borrowed(line);
            }
            if in_fence {
                skipped += 1;
                Cow::Borrowed(line)
            } else {
                convert_line(line)
            }
        })
        .collect();
    if in_fence {
        log::debug!("Unclosed code fence; kept remaining lines verbatim");
    }
    log::trace!("Kept {} fenced line(s) verbatim", skipped);
    lines.join("\n")
}

/// Apply heading, rule, bold and link rewrites to a single line, in that order.
fn convert_line(line: &str) -> Cow<'_, str> {
    let line = HEADING.replace(line, "*${1}*");
    if HORIZONTAL_RULE.is_match(&line) {
        return Cow::Borrowed("");
    }
    let line = BOLD.replace_all(&line, "*${1}*");
    let line = LINK.replace_all(&line, "<${2}|${1}>");
    Cow::Owned(line.into_owned())
}
