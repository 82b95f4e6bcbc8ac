//! Player name extraction from raw question text
//!
//! Works on the original casing. A name is two adjacent capitalized words
//! ("Shohei Ohtani", "Pete Crow-Armstrong"). When no such pair exists, the
//! last two standalone capitalized words are joined instead. Question words
//! that are capitalized only because they open the sentence ("Is", "Who",
//! "Compare") are never part of a name.
//!
//! Known limits: other capitalized words still pair up ("Yankees Dodgers"),
//! and single-word nicknames are never found.

use regex::Regex;
use std::sync::OnceLock;

/// Capitalized word: uppercase first letter, lowercase rest (any script), optional hyphenated part
fn capitalized_word() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        Regex::new(r"\b\p{Lu}\p{Ll}+(?:-\p{Lu}?\p{Ll}+)?\b").expect("capitalized word pattern")
    })
}

/// Capitalized question and command words; first names like "Will" stay out
const SENTENCE_OPENERS: &[&str] = &[
    "Who", "What", "When", "Where", "Why", "Which", "How", "Is", "Was", "Are", "Were", "Does",
    "Did", "Do", "Has", "Have", "Can", "Could", "Should", "Compare", "Show", "Tell", "Give",
    "Find", "List", "Between", "The",
];

/// Minimum length of a standalone word used by the fallback pass
const MIN_FALLBACK_WORD_LEN: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

fn capitalized_words(text: &str) -> Vec<Word<'_>> {
    capitalized_word()
        .find_iter(text)
        .filter(|m| !SENTENCE_OPENERS.contains(&m.as_str()))
        .map(|m| Word {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Left-to-right, non-overlapping pairs of capitalized words separated only by whitespace
fn adjacent_pairs(text: &str, words: &[Word<'_>]) -> Vec<String> {
    let mut pairs = Vec::new();
    let mut i = 0;

    while i + 1 < words.len() {
        let (first, second) = (words[i], words[i + 1]);
        let gap = &text[first.end..second.start];
        if !gap.is_empty() && gap.chars().all(char::is_whitespace) {
            pairs.push(format!("{} {}", first.text, second.text));
            i += 2;
        } else {
            i += 1;
        }
    }

    pairs
}

/// Recover a two-word player name from the question
pub fn extract_name(text: &str) -> Option<String> {
    let words = capitalized_words(text);

    if let Some(pair) = adjacent_pairs(text, &words).into_iter().next() {
        return Some(pair);
    }

    let standalone: Vec<&str> = words
        .iter()
        .map(|w| w.text)
        .filter(|w| w.chars().count() >= MIN_FALLBACK_WORD_LEN)
        .collect();

    match standalone.as_slice() {
        [.., second_last, last] => Some(format!("{} {}", second_last, last)),
        _ => None,
    }
}

/// Up to `max` two-word names, for questions that mention several players
pub fn extract_names(text: &str, max: usize) -> Vec<String> {
    let words = capitalized_words(text);
    let mut names = adjacent_pairs(text, &words);
    names.truncate(max);
    names
}
