//! Property tests for question classification and stat formatting

use mlb_chat::api::types::StatCategory;
use mlb_chat::command::classifier::{classify, Intent};
use mlb_chat::command::vocabulary::{format_batting_average, resolve_stat, STAT_VOCABULARY};
use proptest::prelude::*;

/// Words that trigger no rule and contain no stat phrase
const FILLER: &[&str] = &[
    "the", "show", "me", "please", "league", "in", "who", "for", "with", "now", "of", "baseball",
];

fn filler() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FILLER), 0..4).prop_map(|words| words.join(" "))
}

fn stat_phrase() -> impl Strategy<Value = &'static str> {
    prop::sample::select(STAT_VOCABULARY.iter().map(|s| s.phrase).collect::<Vec<_>>())
}

fn all_time_spelling() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["all-time", "all time", "alltime", "All-Time", "ALL TIME"])
}

fn pitching_role() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["pitching", "pitcher", "pitchers", "starter", "probable"])
}

fn time_context() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["today", "tonight", "game"])
}

proptest! {
    #[test]
    fn all_time_with_stat_is_never_current(
        before in filler(),
        all_time in all_time_spelling(),
        phrase in stat_phrase(),
        after in filler(),
    ) {
        let question = format!("{} {} {} leaders {}", before, all_time, phrase, after);
        prop_assert_eq!(classify(&question), Intent::AllTimeLeaders);
    }

    #[test]
    fn pitching_role_and_time_beat_stat_words(
        before in filler(),
        role in pitching_role(),
        time in time_context(),
        phrase in stat_phrase(),
        stat_first in any::<bool>(),
    ) {
        let question = if stat_first {
            format!("most {} {} {} {}", phrase, before, role, time)
        } else {
            format!("{} {} {} most {}", before, role, time, phrase)
        };
        prop_assert_eq!(classify(&question), Intent::ProbablePitchers);
    }

    #[test]
    fn stat_phrase_resolves_anywhere_in_question(
        before in filler(),
        index in 0..STAT_VOCABULARY.len(),
        after in filler(),
    ) {
        let spec = &STAT_VOCABULARY[index];
        let question = format!("{} {} {}", before, spec.phrase, after);
        let resolved = resolve_stat(&question);
        prop_assert!(resolved.is_some());
        prop_assert_eq!(resolved.unwrap().code, spec.code);
    }

    #[test]
    fn batting_average_drops_leading_zero(thousandths in 0u32..1000) {
        let value = f64::from(thousandths) / 1000.0;
        prop_assert_eq!(format_batting_average(value), format!(".{:03}", thousandths));
    }
}

#[test]
fn test_documented_stat_resolutions() {
    let home_runs = resolve_stat("home run leaders").unwrap();
    assert_eq!(home_runs.code, "homeRuns");
    assert_eq!(home_runs.category, StatCategory::Hitting);

    let era = resolve_stat("era leaders").unwrap();
    assert_eq!(era.code, "era");
    assert_eq!(era.category, StatCategory::Pitching);
}

#[test]
fn test_documented_batting_averages() {
    assert_eq!(format_batting_average(0.287), ".287");
    assert_eq!(format_batting_average(0.3), ".300");
}
