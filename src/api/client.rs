//! Async HTTP client for the MLB Stats API
//!
//! A thin pass-through: builds the endpoint URL and query, consults the
//! response cache, and decodes JSON into the wire types. Constructed once per
//! process and shared; it carries its own cache rather than a global one.

use crate::api::cache::ResponseCache;
use crate::api::source::{DataSource, LeaderboardQuery, ScheduleQuery, SeasonScope};
use crate::api::types::{BoxscoreResponse, LeaderboardResponse, PeopleResponse, ScheduleResponse};
use crate::core::calendar::schedule_date;
use crate::core::config::ChatConfig;
use crate::core::error::{ChatError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// MLB sport id on the Stats API
const SPORT_ID_MLB: &str = "1";

const PLAYER_HYDRATE: &str = "currentTeam,stats(type=season),injuries,transactions";
const SCHEDULE_HYDRATE: &str = "probablePitcher,linescore";

type Params = Vec<(&'static str, String)>;

/// Async client for the MLB Stats API
pub struct MlbClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    season: u16,
    cache: Arc<ResponseCache>,
}

impl MlbClient {
    /// Create a client with its own response cache
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let cache = Arc::new(ResponseCache::new(
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_max_entries,
        ));
        Self::with_cache(config, cache)
    }

    /// Create a client sharing an existing cache
    pub fn with_cache(config: &ChatConfig, cache: Arc<ResponseCache>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            season: config.season,
            cache,
        })
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: Params) -> Result<T> {
        let key = ResponseCache::key(endpoint, &params);
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(%key, "cache hit");
            return Ok(serde_json::from_value(cached)?);
        }

        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout(url.clone())
                } else {
                    ChatError::Upstream(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ChatError::UpstreamStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let decoded = serde_json::from_value(body.clone())?;
        self.cache.insert(key, body).await;
        Ok(decoded)
    }
}

fn search_params(name: &str) -> Params {
    vec![("names", name.to_string()), ("sportId", SPORT_ID_MLB.into())]
}

fn player_stats_params(season: u16) -> Params {
    vec![(
        "hydrate",
        format!("currentTeam,stats(group=[hitting],type=season,season={})", season),
    )]
}

fn schedule_params(query: &ScheduleQuery) -> Params {
    let mut params: Params = vec![
        ("sportId", SPORT_ID_MLB.into()),
        ("hydrate", SCHEDULE_HYDRATE.into()),
    ];
    if let Some(date) = query.date {
        params.push(("date", schedule_date(date)));
    }
    if let Some(team_id) = query.team_id {
        params.push(("teamId", team_id.to_string()));
    }
    params
}

fn leaderboard_params(query: &LeaderboardQuery) -> Params {
    let mut params: Params = vec![
        ("leaderCategories", query.stat.clone()),
        ("statGroup", query.group.as_str().into()),
        ("limit", query.limit.to_string()),
    ];
    // All-time boards are requested by leaving the season out
    if let SeasonScope::Season(season) = query.scope {
        params.push(("season", season.to_string()));
    }
    params
}

#[async_trait]
impl DataSource for MlbClient {
    async fn search_player(&self, name: &str) -> Result<PeopleResponse> {
        self.get_json("/people/search", search_params(name)).await
    }

    async fn get_player(&self, id: u64) -> Result<PeopleResponse> {
        self.get_json(
            &format!("/people/{}", id),
            vec![("hydrate", PLAYER_HYDRATE.into())],
        )
        .await
    }

    async fn get_player_stats(&self, id: u64, season: Option<u16>) -> Result<PeopleResponse> {
        let season = season.unwrap_or(self.season);
        self.get_json(&format!("/people/{}", id), player_stats_params(season))
            .await
    }

    async fn get_schedule(&self, query: &ScheduleQuery) -> Result<ScheduleResponse> {
        self.get_json("/schedule", schedule_params(query)).await
    }

    async fn get_boxscore(&self, game_pk: u64) -> Result<BoxscoreResponse> {
        self.get_json(&format!("/game/{}/boxscore", game_pk), Vec::new())
            .await
    }

    async fn get_leaderboard(&self, query: &LeaderboardQuery) -> Result<LeaderboardResponse> {
        self.get_json("/stats/leaders", leaderboard_params(query))
            .await
    }
}
