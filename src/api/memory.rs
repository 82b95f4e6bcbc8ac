//! In-memory DataSource backed by canned responses
//!
//! Answers the same questions as the HTTP client without a network: used for
//! offline runs and for driving the router in tests. A source can be switched
//! to fail every call to exercise the degraded paths.

use crate::api::source::{DataSource, LeaderboardQuery, ScheduleQuery, SeasonScope};
use crate::api::types::{
    BoxscoreResponse, LeaderboardResponse, PeopleResponse, Person, ScheduleResponse,
};
use crate::core::error::{ChatError, Result};
use ahash::AHashMap;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct MemorySource {
    players: Vec<Person>,
    schedules: AHashMap<NaiveDate, ScheduleResponse>,
    boxscores: AHashMap<u64, BoxscoreResponse>,
    leaderboards: AHashMap<(String, bool), LeaderboardResponse>,
    failing: bool,
    calls: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call errors, as if upstream were down
    pub fn unavailable() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_player(mut self, person: Person) -> Self {
        self.players.push(person);
        self
    }

    pub fn with_schedule(mut self, date: NaiveDate, schedule: ScheduleResponse) -> Self {
        self.schedules.insert(date, schedule);
        self
    }

    pub fn with_boxscore(mut self, game_pk: u64, boxscore: BoxscoreResponse) -> Self {
        self.boxscores.insert(game_pk, boxscore);
        self
    }

    /// Register a leaderboard for a stat code, either season or all-time
    pub fn with_leaderboard(
        mut self,
        stat: &str,
        all_time: bool,
        leaderboard: LeaderboardResponse,
    ) -> Self {
        self.leaderboards.insert((stat.to_string(), all_time), leaderboard);
        self
    }

    /// Number of DataSource calls served so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, op: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ChatError::Timeout(format!("memory source: {}", op)));
        }
        Ok(())
    }

    fn person(&self, id: u64) -> PeopleResponse {
        PeopleResponse {
            people: self.players.iter().filter(|p| p.id == id).cloned().collect(),
        }
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn search_player(&self, name: &str) -> Result<PeopleResponse> {
        self.enter("search_player")?;
        let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        let people = self
            .players
            .iter()
            .filter(|p| {
                let full = p.full_name.to_lowercase();
                !words.is_empty() && words.iter().all(|w| full.contains(w.as_str()))
            })
            .cloned()
            .collect();
        Ok(PeopleResponse { people })
    }

    async fn get_player(&self, id: u64) -> Result<PeopleResponse> {
        self.enter("get_player")?;
        Ok(self.person(id))
    }

    async fn get_player_stats(&self, id: u64, _season: Option<u16>) -> Result<PeopleResponse> {
        self.enter("get_player_stats")?;
        Ok(self.person(id))
    }

    async fn get_schedule(&self, query: &ScheduleQuery) -> Result<ScheduleResponse> {
        self.enter("get_schedule")?;
        Ok(query
            .date
            .and_then(|d| self.schedules.get(&d).cloned())
            .unwrap_or_default())
    }

    async fn get_boxscore(&self, game_pk: u64) -> Result<BoxscoreResponse> {
        self.enter("get_boxscore")?;
        self.boxscores
            .get(&game_pk)
            .cloned()
            .ok_or_else(|| ChatError::UpstreamStatus {
                status: 404,
                url: format!("/game/{}/boxscore", game_pk),
            })
    }

    async fn get_leaderboard(&self, query: &LeaderboardQuery) -> Result<LeaderboardResponse> {
        self.enter("get_leaderboard")?;
        let all_time = query.scope == SeasonScope::AllTime;
        Ok(self
            .leaderboards
            .get(&(query.stat.clone(), all_time))
            .cloned()
            .unwrap_or_default())
    }
}
