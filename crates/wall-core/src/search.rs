//! Case-insensitive search over the message list.

use crate::types::Message;

/// Filter messages by a search query.
///
/// Matches a case-insensitive substring against text, author, and date.
/// A blank query returns every message. Input order is preserved; the
/// source list is never mutated.
pub fn filter_messages<'a>(messages: &'a [Message], query: &str) -> Vec<&'a Message> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return messages.iter().collect();
    }
    messages
        .iter()
        .filter(|m| {
            m.text.to_lowercase().contains(&needle)
                || m.author.to_lowercase().contains(&needle)
                || m.date.to_lowercase().contains(&needle)
        })
        .collect()
}
