//! Chart series and text rendering of a stats snapshot.

use crate::aggregations::{snippet, StatsSnapshot};
use serde::{Deserialize, Serialize};

/// Labels and values for the per-date chart, ascending by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
}

impl ChartSeries {
    /// Build the chart series from a snapshot's date buckets.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        let labels = snapshot
            .by_date
            .iter()
            .map(|b| b.date.format("%Y-%m-%d").to_string())
            .collect();
        let data = snapshot.by_date.iter().map(|b| b.count).collect();
        Self { labels, data }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Render the stat cards as terminal text for the `stats` subcommand.
pub fn text_summary(snapshot: &StatsSnapshot) -> String {
    let mut output = String::new();

    if snapshot.total == 0 {
        output.push_str("  No hacks on the wall yet\n");
        return output;
    }

    output.push_str(&format!("  Total: {} hacks\n", snapshot.total));

    if let Some(top) = snapshot.top_contributor() {
        output.push_str(&format!(
            "  Most active: {} ({} contributions)\n",
            top.display_name, top.count
        ));
        let others = snapshot.other_contributors();
        if !others.is_empty() {
            output.push_str("    Others:");
            for other in others {
                output.push_str(&format!(" {}({})", other.display_name, other.count));
            }
            output.push('\n');
        }
    }

    match &snapshot.longest {
        Some(longest) => {
            output.push_str(&format!(
                "  Longest: {} chars by {}\n",
                longest.text.chars().count(),
                if longest.author.trim().is_empty() {
                    crate::aggregations::ANONYMOUS
                } else {
                    longest.author.trim()
                }
            ));
            output.push_str(&format!("    \"{}\"\n", snippet(&longest.text)));
        }
        None => output.push_str("  Longest: —\n"),
    }

    if !snapshot.by_date.is_empty() {
        output.push_str(&format!(
            "  Active dates: {} (from {} to {})\n",
            snapshot.by_date.len(),
            snapshot.by_date[0].date,
            snapshot.by_date[snapshot.by_date.len() - 1].date,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::aggregate;
    use wall_core::Message;

    fn wall() -> Vec<Message> {
        vec![
            Message::new("hi", "Bob", "2024-01-01"),
            Message::new("hiya", "bob", "2024-01-01"),
            Message::new("a considerably longer hack description", "Alice", "2024-02-10"),
        ]
    }

    #[test]
    fn test_chart_series_from_snapshot() {
        let snapshot = aggregate(&wall());
        let series = ChartSeries::from_snapshot(&snapshot);
        assert_eq!(series.labels, vec!["2024-01-01", "2024-02-10"]);
        assert_eq!(series.data, vec![2, 1]);
    }

    #[test]
    fn test_chart_series_empty() {
        let snapshot = aggregate(&[]);
        let series = ChartSeries::from_snapshot(&snapshot);
        assert!(series.is_empty());
    }

    #[test]
    fn test_text_summary_contents() {
        let snapshot = aggregate(&wall());
        let summary = text_summary(&snapshot);
        assert!(summary.contains("Total: 3 hacks"));
        assert!(summary.contains("Most active: Bob (2 contributions)"));
        assert!(summary.contains("Alice(1)"));
        assert!(summary.contains("a considerably longer hack description"));
        assert!(summary.contains("from 2024-01-01 to 2024-02-10"));
    }

    #[test]
    fn test_text_summary_empty_state() {
        let snapshot = aggregate(&[]);
        let summary = text_summary(&snapshot);
        assert!(summary.contains("No hacks on the wall yet"));
    }

    #[test]
    fn test_text_summary_anonymous_longest() {
        let messages = vec![Message::new("only one", "  ", "2024-01-01")];
        let summary = text_summary(&aggregate(&messages));
        assert!(summary.contains("by Anonymous"));
    }
}
