//! Question intent classification
//!
//! An ordered table of (intent, predicate) rules evaluated top to bottom;
//! the first rule that matches decides the intent. The order matters:
//! - pitching-role + time questions go before stat matching, since they often
//!   carry stat words ("strikeout")
//! - injury and transaction checks go before player lookup, since they also
//!   carry a name but want a different answer
//! - leaderboards go before comparison and player lookup, since team names in
//!   a leaderboard question look like a player name

use crate::command::extractor::extract_name;
use crate::command::vocabulary::{mentions_stat, resolve_stat};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// The purpose of a question, selecting which handler answers it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AllTimeLeaders,
    ProbablePitchers,
    InjuryStatus,
    Transactions,
    CurrentLeaderboard,
    Comparison,
    BoxScore,
    PlayerLookup,
    Fallback,
}

/// A question in both forms: raw for name extraction, normalized for matching
#[derive(Debug, Clone)]
pub struct Question<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> Question<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: raw.trim().to_lowercase(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.normalized.contains(n))
    }

    fn has_word(&self, word: &str) -> bool {
        self.normalized
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| w == word)
    }
}

/// One row of the priority table
pub struct IntentRule {
    pub intent: Intent,
    pub matches: fn(&Question<'_>) -> bool,
}

const PITCHING_ROLES: &[&str] = &["pitching", "pitcher", "starter", "probable"];
const TIME_CONTEXT: &[&str] = &["today", "tonight", "game"];
const INJURY_TERMS: &[&str] = &["injured", "injury", "injuries", "hurt", "doubtful"];
const TRANSACTION_TERMS: &[&str] = &["traded", "signed", "trade", "acquired", "transaction"];
const LEADER_CUES: &[&str] = &["lead", "top ", "most ", "best "];
const COMPARISON_CUES: &[&str] = &[" vs ", " vs. ", " versus ", "compare"];
const PAST_GAME_CUES: &[&str] = &["yesterday", "last night", "final"];

fn all_time_pattern() -> &'static Regex {
    static ALL_TIME: OnceLock<Regex> = OnceLock::new();
    ALL_TIME.get_or_init(|| {
        Regex::new(r"\ball[\s._-]*time\b|\bcareer leaders\b").expect("all-time pattern")
    })
}

fn is_all_time(q: &Question<'_>) -> bool {
    all_time_pattern().is_match(q.normalized())
}

fn is_probable_pitchers(q: &Question<'_>) -> bool {
    q.contains_any(PITCHING_ROLES) && q.contains_any(TIME_CONTEXT)
}

fn is_injury(q: &Question<'_>) -> bool {
    // "il" only as a whole word, or "will" and "Phillies" would match
    q.contains_any(INJURY_TERMS) || q.has_word("il")
}

fn is_transaction(q: &Question<'_>) -> bool {
    q.contains_any(TRANSACTION_TERMS)
}

fn is_current_leaderboard(q: &Question<'_>) -> bool {
    (q.contains_any(LEADER_CUES) || mentions_stat(q.normalized()))
        && resolve_stat(q.normalized()).is_some()
}

fn is_comparison(q: &Question<'_>) -> bool {
    q.contains_any(COMPARISON_CUES)
}

fn is_box_score(q: &Question<'_>) -> bool {
    q.contains_any(&["box score", "boxscore"])
        || (q.normalized().contains("score") && q.contains_any(PAST_GAME_CUES))
}

fn is_player_lookup(q: &Question<'_>) -> bool {
    extract_name(q.raw()).is_some()
}

/// Priority table; first match wins, `Fallback` when nothing matches
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule { intent: Intent::AllTimeLeaders, matches: is_all_time },
    IntentRule { intent: Intent::ProbablePitchers, matches: is_probable_pitchers },
    IntentRule { intent: Intent::InjuryStatus, matches: is_injury },
    IntentRule { intent: Intent::Transactions, matches: is_transaction },
    IntentRule { intent: Intent::CurrentLeaderboard, matches: is_current_leaderboard },
    IntentRule { intent: Intent::Comparison, matches: is_comparison },
    IntentRule { intent: Intent::BoxScore, matches: is_box_score },
    IntentRule { intent: Intent::PlayerLookup, matches: is_player_lookup },
];

pub fn classify_question(question: &Question<'_>) -> Intent {
    INTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(question))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

/// Classify raw question text
pub fn classify(text: &str) -> Intent {
    classify_question(&Question::new(text))
}
