//! Period label parsing and chronological sorting
//!
//! Observations arrive tagged with free-text factor labels such as
//! `"... DATE_=Q1 1999]"`. This module extracts the period token, classifies
//! it into one of the recognized notations (quarterly, monthly,
//! weekday-indexed), and sorts uniformly-formatted lists into calendar
//! order. Each label is parsed exactly once; downstream consumers work with
//! the classified variant and never re-parse text.

use chrono::{Month, Weekday};
use std::str::FromStr;

/// Marker preceding the period token inside a raw factor label
const PERIOD_MARKER: &str = "DATE_=";

/// A period label classified into one of the recognized notations.
///
/// Carries the parsed numeric fields so sort keys can be derived without
/// touching the original text again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodLabel {
    /// Quarterly notation, e.g. `"Q1 1999"`
    Quarter { year: i32, quarter: u32 },
    /// Monthly notation, e.g. `"JAN 2000"`
    Month { year: i32, month: u32 },
    /// Weekday-indexed notation, e.g. `"3 MON"` or `"MON 3"`
    WeekdayOrdinal {
        weekday: Weekday,
        ordinal: i64,
        /// Whether the weekday token came first in the label
        weekday_first: bool,
    },
    /// Anything else; unorderable, kept in original position
    Unclassified,
}

impl PeriodLabel {
    /// Classify a cleaned period token.
    ///
    /// The notation tests run in priority order: quarterly, then monthly,
    /// then weekday-indexed. A token shaped like a month whose abbreviation
    /// is not a real month stays unclassified rather than falling through
    /// to the weekday test.
    pub fn parse(token: &str) -> Self {
        if let Some(label) = Self::parse_quarter(token) {
            return label;
        }
        if Self::is_month_shaped(token) {
            return Self::parse_month(token).unwrap_or(PeriodLabel::Unclassified);
        }
        if let Some(label) = Self::parse_weekday(token) {
            return label;
        }
        PeriodLabel::Unclassified
    }

    /// Whether this label is in quarterly notation
    pub fn is_quarter(&self) -> bool {
        matches!(self, PeriodLabel::Quarter { .. })
    }

    /// Whether this label is in monthly notation
    pub fn is_month(&self) -> bool {
        matches!(self, PeriodLabel::Month { .. })
    }

    /// Whether this label is in weekday-indexed notation
    pub fn is_weekday(&self) -> bool {
        matches!(self, PeriodLabel::WeekdayOrdinal { .. })
    }

    fn parse_quarter(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split(' ').collect();
        if parts.len() != 2 {
            return None;
        }
        let quarter = parts[0].as_bytes();
        if quarter.len() == 2
            && quarter[0] == b'Q'
            && (b'1'..=b'4').contains(&quarter[1])
            && is_four_digit_year(parts[1])
        {
            return Some(PeriodLabel::Quarter {
                year: parts[1].parse().ok()?,
                quarter: (quarter[1] - b'0') as u32,
            });
        }
        None
    }

    fn is_month_shaped(token: &str) -> bool {
        let parts: Vec<&str> = token.split(' ').collect();
        parts.len() == 2 && is_upper_alpha3(parts[0]) && is_four_digit_year(parts[1])
    }

    fn parse_month(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split(' ').collect();
        let month = Month::from_str(parts[0]).ok()?;
        Some(PeriodLabel::Month {
            year: parts[1].parse().ok()?,
            month: month.number_from_month(),
        })
    }

    fn parse_weekday(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split(' ').collect();
        if parts.len() != 2 {
            return None;
        }
        if is_upper_alpha3(parts[0]) && is_ordinal(parts[1]) {
            return Some(PeriodLabel::WeekdayOrdinal {
                weekday: Weekday::from_str(parts[0]).ok()?,
                ordinal: parts[1].parse().ok()?,
                weekday_first: true,
            });
        }
        if is_ordinal(parts[0]) && is_upper_alpha3(parts[1]) {
            return Some(PeriodLabel::WeekdayOrdinal {
                weekday: Weekday::from_str(parts[1]).ok()?,
                ordinal: parts[0].parse().ok()?,
                weekday_first: false,
            });
        }
        None
    }
}

/// Rank of a weekday in the fixed SUN=0 .. SAT=6 table
pub fn weekday_rank(weekday: Weekday) -> i64 {
    weekday.num_days_from_sunday() as i64
}

/// Extract the period token from a raw factor label.
///
/// Takes the substring between the `DATE_=` marker and the next closing
/// bracket, collapses internal whitespace runs to single spaces, and trims.
/// Labels without the marker (or with nothing between marker and bracket)
/// yield `None` and simply contribute no entry to the cleaned list.
pub fn extract_period_token(label: &str) -> Option<String> {
    let start = label.find(PERIOD_MARKER)? + PERIOD_MARKER.len();
    let rest = &label[start..];
    let end = rest.find(']')?;
    let raw = &rest[..end];
    if raw.is_empty() {
        return None;
    }
    Some(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Clean a slice of raw factor labels into period tokens, dropping labels
/// without a recognizable marker
pub fn clean_factor_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .filter_map(|label| extract_period_token(label))
        .collect()
}

/// Sort cleaned period labels chronologically.
///
/// A single dominant notation is determined for the whole list by testing
/// "do ALL labels match quarterly", then monthly, then weekday-indexed; the
/// first test every label passes decides the sort keys. Mixed-notation
/// lists are returned unmodified in original order. Ties keep their
/// original relative order (stable sort).
///
/// For weekday-indexed lists the orientation of the FIRST label decides the
/// key order for the whole list: weekday token first sorts by
/// `(weekday_rank, ordinal)`, ordinal first by `(ordinal, weekday_rank)`.
pub fn sort_period_labels(labels: &[String]) -> Vec<String> {
    if labels.is_empty() {
        return Vec::new();
    }

    let parsed: Vec<PeriodLabel> = labels.iter().map(|l| PeriodLabel::parse(l)).collect();

    let keys: Option<Vec<(i64, i64)>> = if parsed.iter().all(PeriodLabel::is_quarter) {
        Some(
            parsed
                .iter()
                .map(|p| match p {
                    PeriodLabel::Quarter { year, quarter } => {
                        (*year as i64 * 4 + (*quarter as i64 - 1), 0)
                    }
                    _ => unreachable!(),
                })
                .collect(),
        )
    } else if parsed.iter().all(PeriodLabel::is_month) {
        Some(
            parsed
                .iter()
                .map(|p| match p {
                    PeriodLabel::Month { year, month } => {
                        (*year as i64 * 12 + *month as i64, 0)
                    }
                    _ => unreachable!(),
                })
                .collect(),
        )
    } else if parsed.iter().all(PeriodLabel::is_weekday) {
        let weekday_leads = matches!(
            parsed[0],
            PeriodLabel::WeekdayOrdinal {
                weekday_first: true,
                ..
            }
        );
        Some(
            parsed
                .iter()
                .map(|p| match p {
                    PeriodLabel::WeekdayOrdinal {
                        weekday, ordinal, ..
                    } => {
                        if weekday_leads {
                            (weekday_rank(*weekday), *ordinal)
                        } else {
                            (*ordinal, weekday_rank(*weekday))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect(),
        )
    } else {
        None
    };

    match keys {
        Some(keys) => {
            let mut keyed: Vec<((i64, i64), String)> =
                keys.into_iter().zip(labels.iter().cloned()).collect();
            keyed.sort_by_key(|(key, _)| *key);
            keyed.into_iter().map(|(_, label)| label).collect()
        }
        None => labels.to_vec(),
    }
}

fn is_four_digit_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_upper_alpha3(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_ordinal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
