//! Player resolution - turns an extracted name into an upstream player id

use crate::api::source::DataSource;
use crate::api::types::Person;

/// A search result picked for an extracted name
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMatch {
    pub id: u64,
    pub full_name: String,
    pub match_reason: MatchReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    ExactName,
    PartialName,
    /// Nothing matched by name; upstream's first result
    FirstResult,
}

/// Resolves names against the DataSource search
pub struct PlayerResolver<'a> {
    source: &'a dyn DataSource,
}

impl<'a> PlayerResolver<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Best match for `name`; `None` when nothing is found or the search fails
    pub async fn resolve(&self, name: &str) -> Option<PlayerMatch> {
        match self.source.search_player(name).await {
            Ok(found) => best_match(name, &found.people),
            Err(e) => {
                tracing::warn!(player = name, error = %e, "player search failed");
                None
            }
        }
    }
}

/// Exact full-name match first, then prefix match, then the first result
pub fn best_match(name: &str, people: &[Person]) -> Option<PlayerMatch> {
    let name_lower = name.trim().to_lowercase();

    let pick = |person: &Person, match_reason| PlayerMatch {
        id: person.id,
        full_name: if person.full_name.is_empty() {
            name.trim().to_string()
        } else {
            person.full_name.clone()
        },
        match_reason,
    };

    if let Some(person) = people
        .iter()
        .find(|p| p.full_name.to_lowercase() == name_lower)
    {
        return Some(pick(person, MatchReason::ExactName));
    }

    if let Some(person) = people
        .iter()
        .find(|p| p.full_name.to_lowercase().starts_with(&name_lower))
    {
        return Some(pick(person, MatchReason::PartialName));
    }

    people.first().map(|p| pick(p, MatchReason::FirstResult))
}
