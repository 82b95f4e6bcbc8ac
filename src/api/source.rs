//! The data capability the question handlers consume
//!
//! Handlers only see this trait. The HTTP client implements it against the
//! live MLB Stats API; `MemorySource` implements it from canned responses.

use crate::api::types::{
    BoxscoreResponse, LeaderboardResponse, PeopleResponse, ScheduleResponse, StatCategory,
};
use crate::core::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Which seasons a leaderboard covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonScope {
    Season(u16),
    /// No season filter: career totals
    AllTime,
}

/// Leaderboard request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery {
    /// Upstream stat code ("homeRuns", "era", ...)
    pub stat: String,
    pub group: StatCategory,
    pub scope: SeasonScope,
    pub limit: usize,
}

/// Schedule filters; a missing date means the upstream's "today"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub date: Option<NaiveDate>,
    pub team_id: Option<u64>,
}

impl ScheduleQuery {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            team_id: None,
        }
    }
}

/// MLB statistics provider
///
/// Every call may fail or come back partially filled. Callers treat an
/// `Err` the same as an empty response.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn search_player(&self, name: &str) -> Result<PeopleResponse>;

    /// Player with current team, season stats, injuries and transactions
    async fn get_player(&self, id: u64) -> Result<PeopleResponse>;

    /// Player with hitting stats for one season (`None` = current)
    async fn get_player_stats(&self, id: u64, season: Option<u16>) -> Result<PeopleResponse>;

    async fn get_schedule(&self, query: &ScheduleQuery) -> Result<ScheduleResponse>;

    async fn get_boxscore(&self, game_pk: u64) -> Result<BoxscoreResponse>;

    async fn get_leaderboard(&self, query: &LeaderboardQuery) -> Result<LeaderboardResponse>;
}
