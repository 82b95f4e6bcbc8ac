//! Stat vocabulary: informal stat phrases to upstream stat codes
//!
//! The table is scanned top to bottom and the first phrase found wins, so a
//! phrase must come before any shorter phrase that could match inside the
//! same question ("earned run average" before "average", "home run" before
//! "hr").

use crate::api::types::StatCategory::{Hitting, Pitching};
use crate::api::types::{StatCategory, StatValue};

/// A stat the leaderboard and comparison answers can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSpec {
    /// Phrase looked for in the lower-cased question
    pub phrase: &'static str,
    /// Upstream leader category code
    pub code: &'static str,
    pub category: StatCategory,
}

const fn stat(phrase: &'static str, code: &'static str, category: StatCategory) -> StatSpec {
    StatSpec {
        phrase,
        code,
        category,
    }
}

pub static STAT_VOCABULARY: &[StatSpec] = &[
    stat("earned run average", "era", Pitching),
    stat("home run", "homeRuns", Hitting),
    stat("homer", "homeRuns", Hitting),
    stat("hr", "homeRuns", Hitting),
    stat("batting average", "battingAverage", Hitting),
    stat("average", "battingAverage", Hitting),
    stat("avg", "battingAverage", Hitting),
    stat("runs batted in", "rbi", Hitting),
    stat("rbi", "rbi", Hitting),
    stat("stolen base", "stolenBases", Hitting),
    stat("hit", "hits", Hitting),
    stat("strikeout", "strikeOuts", Pitching),
    stat("era", "era", Pitching),
    stat("whip", "whip", Pitching),
    stat("save", "saves", Pitching),
    stat("win", "wins", Pitching),
];

impl StatSpec {
    /// Short label used in answer titles ("HR", "AVG", "K", "ERA", ...)
    pub fn display_label(&self) -> String {
        display_label(self.code)
    }

    /// Format a leaderboard value for this stat
    ///
    /// Batting average prints as `.287`, ERA with two decimals, everything
    /// else as upstream sent it.
    pub fn format_value(&self, value: &StatValue) -> String {
        match self.code {
            "battingAverage" => value
                .as_f64()
                .map(format_batting_average)
                .unwrap_or_else(|| value.raw()),
            "era" => value
                .as_f64()
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| value.raw()),
            _ => value.raw(),
        }
    }
}

pub fn display_label(code: &str) -> String {
    match code {
        "battingAverage" => "AVG".into(),
        "homeRuns" => "HR".into(),
        "strikeOuts" => "K".into(),
        other => other.to_uppercase(),
    }
}

/// Batting average without the leading zero: 0.287 -> ".287", 0.3 -> ".300"
pub fn format_batting_average(value: f64) -> String {
    let thousandths = (value * 1000.0).round().max(0.0) as u64;
    if thousandths >= 1000 {
        format!("{}.{:03}", thousandths / 1000, thousandths % 1000)
    } else {
        format!(".{:03}", thousandths)
    }
}

/// First vocabulary entry whose phrase appears in the text
pub fn resolve_stat(text: &str) -> Option<&'static StatSpec> {
    let text = text.to_lowercase();
    STAT_VOCABULARY
        .iter()
        .find(|spec| contains_phrase(&text, spec.phrase))
}

/// True when the text names any known stat
pub fn mentions_stat(text: &str) -> bool {
    resolve_stat(text).is_some()
}

/// Phrase occurs starting at a word boundary ("hr" in "hr leaders", not in "three")
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(idx, _)| {
        text[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}
