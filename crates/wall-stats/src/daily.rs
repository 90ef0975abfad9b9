//! Deterministic "message of the day" selection.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use wall_core::Message;

/// A daily pick, recomputed on every call. Never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPick {
    pub message: Message,
    pub computed_for: NaiveDate,
}

/// Integer key for a calendar date: `year*10000 + month*100 + day`.
///
/// 2025-11-30 maps to 20251130. The same date always yields the same key.
pub fn day_key(date: NaiveDate) -> i64 {
    date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64
}

/// Reduce a day key to a zero-based index into a list of `len` elements.
///
/// Exposed separately so the cycling property is testable with synthetic
/// consecutive keys; real calendar keys are not consecutive across month
/// boundaries.
pub fn pick_index(key: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    key.rem_euclid(len as i64) as usize
}

/// Pick the message of the day.
///
/// Deterministic in its two inputs: the same date and the same list always
/// select the same message, by original list order. Returns `None` for an
/// empty list. As day keys advance, the selection cycles through the list
/// with period equal to its length; that is the intended behavior, not a
/// defect.
pub fn pick_daily(messages: &[Message], today: NaiveDate) -> Option<DailyPick> {
    if messages.is_empty() {
        return None;
    }
    let index = pick_index(day_key(today), messages.len());
    Some(DailyPick {
        message: messages[index].clone(),
        computed_for: today,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wall(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| Message::new(format!("hack {i}"), format!("author {i}"), "2024-01-01"))
            .collect()
    }

    #[test]
    fn test_day_key_format() {
        assert_eq!(day_key(date(2025, 11, 30)), 20251130);
        assert_eq!(day_key(date(2024, 1, 1)), 20240101);
        assert_eq!(day_key(date(1999, 12, 31)), 19991231);
    }

    #[test]
    fn test_empty_list_is_none() {
        assert!(pick_daily(&[], date(2025, 11, 30)).is_none());
    }

    #[test]
    fn test_same_date_same_pick() {
        let messages = wall(7);
        let a = pick_daily(&messages, date(2025, 6, 15)).unwrap();
        let b = pick_daily(&messages, date(2025, 6, 15)).unwrap();
        assert_eq!(a.message, b.message);
        assert_eq!(a.computed_for, b.computed_for);
    }

    #[test]
    fn test_pick_is_member_of_list() {
        for len in [1, 2, 3, 5, 31, 100] {
            let messages = wall(len);
            for day in 1..=28 {
                let pick = pick_daily(&messages, date(2025, 2, day)).unwrap();
                assert!(messages.contains(&pick.message));
            }
        }
    }

    #[test]
    fn test_single_message_always_picked() {
        let messages = wall(1);
        let pick = pick_daily(&messages, date(2030, 7, 4)).unwrap();
        assert_eq!(pick.message.text, "hack 0");
    }

    #[test]
    fn test_index_uses_original_order() {
        // 20240101 % 4 == 1 → second element in insertion order.
        let messages = wall(4);
        let pick = pick_daily(&messages, date(2024, 1, 1)).unwrap();
        assert_eq!(pick.message.text, "hack 1");
    }

    #[test]
    fn test_consecutive_keys_cycle_through_all_indices() {
        // Synthetic consecutive keys: each index is visited exactly once per
        // cycle, in key-ascending order.
        for len in [1, 3, 7, 10] {
            let start = 20240101_i64;
            let visited: Vec<usize> =
                (start..start + len as i64).map(|k| pick_index(k, len)).collect();

            let mut sorted = visited.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), len, "every index visited once for len {len}");

            // Ascending keys walk the indices in wrapping order.
            for pair in visited.windows(2) {
                assert_eq!(pair[1], (pair[0] + 1) % len);
            }
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let messages = wall(5);
        let before = messages.clone();
        let _ = pick_daily(&messages, date(2025, 3, 3));
        assert_eq!(messages, before);
    }
}
