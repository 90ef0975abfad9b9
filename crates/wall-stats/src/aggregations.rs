//! Summary statistics over the message list.
//!
//! Four independent folds over the same input: total count, per-date
//! counts, per-author contribution counts, and the longest message.
//! Malformed per-item data is skipped for the affected fold only; nothing
//! here aborts the batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wall_core::Message;

/// Display name substituted for a trimmed-empty author, aggregation only.
pub const ANONYMOUS: &str = "Anonymous";

/// Maximum snippet length for the longest message, in characters.
const SNIPPET_CHARS: usize = 180;

/// How many runners-up `other_contributors` exposes (ranks 2–4).
const OTHERS_LIMIT: usize = 3;

/// Messages submitted on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Contribution count for one author group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    /// Case-folded grouping key (trimmed, lowercased).
    pub key: String,
    /// First-seen spelling of the author name, kept for display.
    pub display_name: String,
    pub count: u32,
}

/// Derived statistics, recomputed on every call. No persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: usize,
    /// Per-date counts, ascending by date.
    pub by_date: Vec<DateCount>,
    /// Per-author counts, descending by count; ties keep first-seen order.
    pub by_author: Vec<AuthorCount>,
    /// The message with the greatest character count, if any has text.
    pub longest: Option<Message>,
}

impl StatsSnapshot {
    /// The leading contributor, if any.
    pub fn top_contributor(&self) -> Option<&AuthorCount> {
        self.by_author.first()
    }

    /// Ranks 2–4, for the "others" line on the stat card.
    pub fn other_contributors(&self) -> &[AuthorCount] {
        let end = self.by_author.len().min(1 + OTHERS_LIMIT);
        self.by_author.get(1..end).unwrap_or(&[])
    }
}

/// Aggregate the message list into a [`StatsSnapshot`].
///
/// Empty input is valid and yields an empty snapshot. The input slice is
/// read-only; internal copies are sorted, never the source.
pub fn aggregate(messages: &[Message]) -> StatsSnapshot {
    StatsSnapshot {
        total: messages.len(),
        by_date: count_by_date(messages),
        by_author: count_by_author(messages),
        longest: longest_message(messages).cloned(),
    }
}

/// Snippet of a winning text: first 180 characters, ellipsis when cut.
pub fn snippet(text: &str) -> String {
    let mut out: String = text.chars().take(SNIPPET_CHARS).collect();
    if text.chars().count() > SNIPPET_CHARS {
        out.push('…');
    }
    out
}

fn count_by_date(messages: &[Message]) -> Vec<DateCount> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for msg in messages {
        // Unparsable dates drop out of this fold only.
        let Some(date) = msg.parsed_date() else {
            continue;
        };
        *counts.entry(date).or_insert(0) += 1;
    }
    let mut buckets: Vec<DateCount> = counts
        .into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect();
    buckets.sort_by_key(|b| b.date);
    buckets
}

fn count_by_author(messages: &[Message]) -> Vec<AuthorCount> {
    // First-seen order is kept in the vec; the map only holds positions.
    let mut groups: Vec<AuthorCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for msg in messages {
        let trimmed = msg.author.trim();
        let display = if trimmed.is_empty() { ANONYMOUS } else { trimmed };
        let key = display.to_lowercase();

        match index.get(&key) {
            Some(&pos) => groups[pos].count += 1,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AuthorCount {
                    key,
                    display_name: display.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort: ties keep the first-encounter order built above.
    groups.sort_by_key(|g| std::cmp::Reverse(g.count));
    groups
}

fn longest_message(messages: &[Message]) -> Option<&Message> {
    let mut best: Option<(&Message, usize)> = None;
    for msg in messages {
        let len = msg.text.chars().count();
        if len == 0 {
            continue;
        }
        // Strict comparison: ties keep the earlier message.
        match best {
            Some((_, best_len)) if len <= best_len => {}
            _ => best = Some((msg, len)),
        }
    }
    best.map(|(msg, _)| msg)
}
