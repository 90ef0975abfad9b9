use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single submitted entry on the wall.
///
/// The list a loader hands out is in insertion order; nothing downstream
/// reorders or mutates it. Display-side copies may be reversed or sorted,
/// never the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display text. The longest-message computation runs on the raw
    /// character count of this field.
    pub text: String,
    /// Author display name. May be empty; aggregation maps trimmed-empty
    /// to "Anonymous" but the raw field stays as submitted.
    pub author: String,
    /// Submission date as provided. Unparsable dates drop the message
    /// from date-bucketed aggregation only.
    pub date: String,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            date: date.into(),
        }
    }

    /// Parse the submission date, if possible.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (date component).
    /// Everything else is `None` — the accepted grammar is pinned here so
    /// behavior doesn't depend on a host date parser.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

/// One record as it appears in the external JSON document.
///
/// The field names (`message`, `name`, `date`) are the loader's external
/// contract; they map onto [`Message`] for everything downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
}

impl From<RawRecord> for Message {
    fn from(raw: RawRecord) -> Self {
        Self {
            text: raw.message,
            author: raw.name,
            date: raw.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_date_ymd() {
        let msg = Message::new("hi", "Bob", "2024-01-01");
        assert_eq!(
            msg.parsed_date(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_parsed_date_rfc3339() {
        let msg = Message::new("hi", "Bob", "2024-06-15T10:30:00Z");
        assert_eq!(
            msg.parsed_date(),
            Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_parsed_date_trims_whitespace() {
        let msg = Message::new("hi", "Bob", "  2024-01-01  ");
        assert!(msg.parsed_date().is_some());
    }

    #[test]
    fn test_parsed_date_rejects_garbage() {
        for raw in ["not-a-date", "", "2024-13-01", "01/02/2024"] {
            let msg = Message::new("hi", "Bob", raw);
            assert_eq!(msg.parsed_date(), None, "should reject {raw:?}");
        }
    }

    #[test]
    fn test_raw_record_field_mapping() {
        let json = r#"{"message": "my hack", "name": "Alice", "date": "2024-02-02"}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let msg = Message::from(raw);
        assert_eq!(msg.text, "my hack");
        assert_eq!(msg.author, "Alice");
        assert_eq!(msg.date, "2024-02-02");
    }

    #[test]
    fn test_raw_record_missing_fields_default_empty() {
        let json = r#"{"message": "only text"}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let msg = Message::from(raw);
        assert_eq!(msg.author, "");
        assert_eq!(msg.date, "");
    }
}
