//! Parser for the fixed ISSUES.md section template.
//!
//! Each `##` heading opens one issue section:
//!
//! ```markdown
//! ## Title
//!
//! **Difficulty:** ⭐⭐ Intermediate
//!
//! **Description:**
//! One or more lines.
//!
//! **Tips:**
//! - a tip
//! - another tip
//!
//! **Ask Copilot:**
//! > the suggested prompt
//! ```
//!
//! Malformed sections are skipped with a warning; the batch never aborts.

use regex::Regex;
use std::sync::LazyLock;

static DIFFICULTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\*Difficulty:\*\*\s*(.+)$").unwrap());

static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*Description:\*\*\n(.*?)\n\n\*\*Tips:\*\*").unwrap());

static TIPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*Tips:\*\*\n((?:- [^\n]*\n?)+)").unwrap());

static PROMPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Ask Copilot:\*\*\n> (.+)").unwrap());

/// One ticket record ready for creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSpec {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Read and parse an ISSUES.md file.
pub fn parse_issues_file(path: &std::path::Path) -> wall_core::Result<Vec<IssueSpec>> {
    let markdown = std::fs::read_to_string(path)?;
    Ok(parse_issues(&markdown))
}

/// Parse every well-formed issue section out of the Markdown document.
pub fn parse_issues(markdown: &str) -> Vec<IssueSpec> {
    let mut issues = Vec::new();

    for section in split_sections(markdown) {
        match parse_section(&section) {
            Some(issue) => issues.push(issue),
            None => {
                let heading = section.lines().next().unwrap_or("").trim();
                tracing::warn!("Skipping malformed issue section: {:?}", heading);
            }
        }
    }

    issues
}

/// Split the document at `##` headings. Returns each section with its
/// title line first.
fn split_sections(markdown: &str) -> Vec<String> {
    let mut sections: Vec<String> = Vec::new();
    for line in markdown.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            sections.push(format!("{}\n", title));
        } else if let Some(current) = sections.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }
    sections
}

fn parse_section(section: &str) -> Option<IssueSpec> {
    let title = section.lines().next()?.trim();
    if title.is_empty() {
        return None;
    }

    let difficulty = DIFFICULTY_RE.captures(section)?.get(1)?.as_str().trim();
    let description = DESCRIPTION_RE.captures(section)?.get(1)?.as_str().trim();
    let tips = TIPS_RE.captures(section)?.get(1)?.as_str().trim();
    let prompt = PROMPT_RE.captures(section)?.get(1)?.as_str().trim();

    let body = format!(
        "**Difficulty:** {difficulty}\n\n\
         **Description:**\n{description}\n\n\
         **Tips:**\n{tips}\n\n\
         **Ask Copilot:**\n> {prompt}\n\n\
         ---\n\n\
         💡 **Tip:** Use the suggested prompt above with your AI assistant to get started!\n"
    );

    Some(IssueSpec {
        title: title.to_string(),
        body,
        labels: labels_for(difficulty),
    })
}

/// Map a difficulty rating to issue labels by its star count.
fn labels_for(difficulty: &str) -> Vec<String> {
    let mut labels = vec!["enhancement".to_string()];
    match difficulty.matches('⭐').count() {
        0 => {}
        1 => labels.push("good first issue".to_string()),
        2 => labels.push("intermediate".to_string()),
        _ => labels.push("advanced".to_string()),
    }
    labels
}
