//! Intent handlers - one answer builder per intent
//!
//! Handlers never fail: an upstream error is logged and replaced by the same
//! empty or default data a missing field would produce, so the answer is
//! always a readable (if partial) string.

use crate::api::source::{DataSource, LeaderboardQuery, ScheduleQuery, SeasonScope};
use crate::api::types::{latest, Game, PeopleResponse, Person, ScheduleResponse};
use crate::command::classifier::{Intent, Question};
use crate::command::extractor::{extract_name, extract_names};
use crate::command::resolver::{PlayerMatch, PlayerResolver};
use crate::command::vocabulary::resolve_stat;
use crate::core::calendar::GameCalendar;
use crate::core::config::ChatConfig;
use crate::core::error::Result;

/// Answer for questions nothing else could handle
pub const HELP_TEXT: &str = "I can help with players, stats, injuries, trades, pitchers, and more! \
Try \"Who is Shohei Ohtani?\", \"top home run leaders\", \"who is pitching today\", \
or \"Aaron Judge vs Juan Soto\".";

/// Builds answers for classified questions
pub struct IntentHandlers<'a> {
    source: &'a dyn DataSource,
    config: &'a ChatConfig,
    calendar: GameCalendar,
}

impl<'a> IntentHandlers<'a> {
    pub fn new(source: &'a dyn DataSource, config: &'a ChatConfig, calendar: GameCalendar) -> Self {
        Self {
            source,
            config,
            calendar,
        }
    }

    /// Answer a question already classified as `intent`
    pub async fn handle(&self, intent: Intent, question: &Question<'_>) -> String {
        match intent {
            Intent::AllTimeLeaders => self.all_time_leaders(question.normalized()).await,
            Intent::ProbablePitchers => self.probable_pitchers().await,
            Intent::InjuryStatus => match extract_name(question.raw()) {
                Some(name) => self.injury_status(&name).await,
                None => "Who are you asking about?".into(),
            },
            Intent::Transactions => match extract_name(question.raw()) {
                Some(name) => self.transactions(&name).await,
                None => "Which player's moves are you asking about?".into(),
            },
            Intent::CurrentLeaderboard => self.current_leaderboard(question.normalized()).await,
            Intent::Comparison => self.comparison(question.raw()).await,
            Intent::BoxScore => self.box_score().await,
            Intent::PlayerLookup => match extract_name(question.raw()) {
                Some(name) => self.player_lookup(&name).await,
                None => HELP_TEXT.into(),
            },
            Intent::Fallback => HELP_TEXT.into(),
        }
    }

    /// `**Full Name** (POS, Team)` plus the season's HR and AVG
    pub async fn player_lookup(&self, name: &str) -> String {
        let Some(found) = self.resolver().resolve(name).await else {
            return format!("Couldn't find a player named {}.", name);
        };

        let person = self.player_details(&found).await;
        let (home_runs, avg) = person.hr_and_avg();
        format!(
            "**{}** ({}, {})\n{}: {} HR, {} AVG",
            person.full_name,
            person.position(),
            person.team_name(),
            self.config.season,
            home_runs,
            avg
        )
    }

    /// Most recent injury and roster status
    pub async fn injury_status(&self, name: &str) -> String {
        let Some(found) = self.resolver().resolve(name).await else {
            return format!("Couldn't find {}.", name);
        };

        let person = self.player_details(&found).await;
        match latest(&person.injuries) {
            Some(injury) => format!(
                "**{}** – {} ({})",
                person.full_name,
                injury.description.as_deref().unwrap_or("Injured"),
                person.status_label()
            ),
            None => format!("**{}** – Active ({})", person.full_name, person.status_label()),
        }
    }

    /// Most recent transaction with its date
    pub async fn transactions(&self, name: &str) -> String {
        let Some(found) = self.resolver().resolve(name).await else {
            return format!("Couldn't find {}.", name);
        };

        let person = self.player_details(&found).await;
        let Some(recent) = latest(&person.transactions) else {
            return format!("No recent transactions for {}.", person.full_name);
        };

        let description = recent.description.as_deref().unwrap_or("Transaction");
        match recent.day() {
            "" => format!("**{}**: {}", person.full_name, description),
            day => format!("**{}**: {} ({})", person.full_name, description, day),
        }
    }

    pub async fn current_leaderboard(&self, text: &str) -> String {
        self.leaderboard(
            text,
            SeasonScope::Season(self.config.season),
            self.config.leaderboard_display_limit,
        )
        .await
        .unwrap_or_else(|| HELP_TEXT.into())
    }

    pub async fn all_time_leaders(&self, text: &str) -> String {
        self.leaderboard(text, SeasonScope::AllTime, self.config.all_time_display_limit)
            .await
            .unwrap_or_else(|| "Try asking for all-time home run or strikeout leaders!".into())
    }

    /// Ranked list for the stat named in `text`; `None` when no stat is named
    async fn leaderboard(&self, text: &str, scope: SeasonScope, display: usize) -> Option<String> {
        let spec = resolve_stat(text)?;
        let query = LeaderboardQuery {
            stat: spec.code.to_string(),
            group: spec.category,
            scope,
            limit: self.config.leaderboard_fetch_limit.max(display),
        };

        let title = match scope {
            SeasonScope::Season(season) => format!("**{} {} Leaders**", season, spec.display_label()),
            SeasonScope::AllTime => format!("**All-Time {} Leaders**", spec.display_label()),
        };

        let board = or_default(self.source.get_leaderboard(&query).await, "leaderboard");
        let leaders = board.leaders();
        if leaders.is_empty() {
            return Some(format!("{}\nNo leaders available right now.", title));
        }

        let mut lines = vec![title, String::new()];
        for (i, leader) in leaders.iter().take(display).enumerate() {
            let value = leader
                .value
                .as_ref()
                .map(|v| spec.format_value(v))
                .unwrap_or_else(|| "n/a".into());
            let team = leader
                .team
                .as_ref()
                .map(|t| t.short_name())
                .filter(|t| !t.is_empty());

            lines.push(match team {
                Some(team) => format!("{}. {} ({}) – {}", i + 1, leader.person.full_name, team, value),
                None => format!("{}. {} – {}", i + 1, leader.person.full_name, value),
            });
        }

        Some(lines.join("\n"))
    }

    /// Today's games with announced starters
    pub async fn probable_pitchers(&self) -> String {
        let schedule = self.schedule_for(ScheduleQuery::on(self.calendar.today())).await;
        let games = schedule.games();
        if games.is_empty() {
            return "No games scheduled today.".into();
        }

        let mut lines = vec!["**Today's Probable Pitchers**".to_string(), String::new()];
        lines.extend(
            games
                .iter()
                .take(self.config.probable_display_limit)
                .map(|g| {
                    format!(
                        "{} @ {}: {} vs {}",
                        g.teams.away.team.short_name(),
                        g.teams.home.team.short_name(),
                        g.teams.away.pitcher_name(),
                        g.teams.home.pitcher_name()
                    )
                }),
        );
        lines.join("\n")
    }

    /// Final score of the first game played yesterday
    pub async fn box_score(&self) -> String {
        let schedule = self.schedule_for(ScheduleQuery::on(self.calendar.yesterday())).await;
        let Some(game) = schedule.games().first() else {
            return "No games yesterday.".into();
        };

        let (away, away_runs, home, home_runs) = match self.source.get_boxscore(game.game_pk).await {
            Ok(box_score) => {
                let teams = &box_score.teams;
                (
                    team_or(&teams.away.team.name, game, false),
                    teams.away.runs(),
                    team_or(&teams.home.team.name, game, true),
                    teams.home.runs(),
                )
            }
            Err(e) => {
                tracing::warn!(game_pk = game.game_pk, error = %e, "boxscore unavailable, using schedule score");
                (
                    game.teams.away.team.name.clone(),
                    game.teams.away.score.unwrap_or(0),
                    game.teams.home.team.name.clone(),
                    game.teams.home.score.unwrap_or(0),
                )
            }
        };

        format!("**{} {} – {} {}** (Final)", away, away_runs, home, home_runs)
    }

    /// Side-by-side season HR and AVG for two named players
    pub async fn comparison(&self, raw: &str) -> String {
        let names = extract_names(raw, 2);
        let [first, second] = names.as_slice() else {
            return "Name two players to compare, like \"Aaron Judge vs Juan Soto\".".into();
        };

        let resolver = self.resolver();
        let (a, b) = tokio::join!(resolver.resolve(first), resolver.resolve(second));
        let (Some(a), Some(b)) = (a, b) else {
            return "Couldn't find one of the players.".into();
        };

        let season = Some(self.config.season);
        let (stats_a, stats_b) = tokio::join!(
            self.source.get_player_stats(a.id, season),
            self.source.get_player_stats(b.id, season)
        );

        let line = |found: &PlayerMatch, stats: Result<PeopleResponse>| {
            let (home_runs, avg) = or_default(stats, "player stats")
                .first()
                .map(Person::hr_and_avg)
                .unwrap_or_else(|| ("0".into(), ".000".into()));
            format!("{}: {} HR, {} AVG", found.full_name, home_runs, avg)
        };

        format!(
            "**{} Stats**\n{}\n{}",
            self.config.season,
            line(&a, stats_a),
            line(&b, stats_b)
        )
    }

    fn resolver(&self) -> PlayerResolver<'a> {
        PlayerResolver::new(self.source)
    }

    /// Full player record, or a bare one carrying the search result's name
    async fn player_details(&self, found: &PlayerMatch) -> Person {
        let details = or_default(self.source.get_player(found.id).await, "player details");
        let mut person = details.first().cloned().unwrap_or_default();
        if person.full_name.is_empty() {
            person.full_name = found.full_name.clone();
        }
        person
    }

    async fn schedule_for(&self, query: ScheduleQuery) -> ScheduleResponse {
        or_default(self.source.get_schedule(&query).await, "schedule")
    }
}

/// Treat an upstream failure as an empty response
fn or_default<T: Default>(result: Result<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "{} unavailable", what);
        T::default()
    })
}

/// Boxscore team name, or the schedule's when the boxscore omits it
fn team_or(name: &str, game: &Game, home: bool) -> String {
    if !name.is_empty() {
        return name.to_string();
    }
    let side = if home { &game.teams.home } else { &game.teams.away };
    side.team.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::MemorySource;
    use chrono::NaiveDate;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn judge() -> Person {
        serde_json::from_value(json!({
            "id": 592450,
            "fullName": "Aaron Judge",
            "currentTeam": {"name": "New York Yankees"},
            "primaryPosition": {"abbreviation": "RF"},
            "status": {"description": "Active"},
            "stats": [{"type": {"displayName": "season"}, "group": {"displayName": "hitting"},
                       "splits": [{"stat": {"homeRuns": 40, "avg": ".290"}}]}],
            "injuries": [
                {"description": "Left elbow sprain", "date": "2025-07-22"},
                {"description": "Right toe fracture", "date": "2023-06-05"}
            ],
            "transactions": [{"description": "Signed 9-year extension", "date": "2022-12-21T00:00:00"}]
        }))
        .unwrap()
    }

    async fn answer(source: &MemorySource, question: &str) -> String {
        let config = ChatConfig::default();
        let handlers = IntentHandlers::new(source, &config, GameCalendar::fixed(day()));
        let q = Question::new(question);
        handlers
            .handle(crate::command::classifier::classify_question(&q), &q)
            .await
    }

    #[tokio::test]
    async fn test_player_lookup_format() {
        let source = MemorySource::new().with_player(judge());
        let out = answer(&source, "Who is Aaron Judge?").await;
        assert_eq!(out, "**Aaron Judge** (RF, New York Yankees)\n2025: 40 HR, .290 AVG");
    }

    #[tokio::test]
    async fn test_player_not_found_names_query() {
        let out = answer(&MemorySource::new(), "Who is Nobody Special?").await;
        assert!(out.contains("Nobody Special"));
    }

    #[tokio::test]
    async fn test_injury_reports_most_recent() {
        let source = MemorySource::new().with_player(judge());
        let out = answer(&source, "Is Aaron Judge injured?").await;
        assert_eq!(out, "**Aaron Judge** – Left elbow sprain (Active)");
    }

    #[tokio::test]
    async fn test_injury_without_name_asks() {
        let out = answer(&MemorySource::new(), "who is injured").await;
        assert_eq!(out, "Who are you asking about?");
    }

    #[tokio::test]
    async fn test_transactions_without_name_asks() {
        let out = answer(&MemorySource::new(), "any trades today").await;
        assert_eq!(out, "Which player's moves are you asking about?");
    }

    #[tokio::test]
    async fn test_transaction_day_precision() {
        let source = MemorySource::new().with_player(judge());
        let out = answer(&source, "When was Aaron Judge signed?").await;
        assert_eq!(out, "**Aaron Judge**: Signed 9-year extension (2022-12-21)");
    }

    #[tokio::test]
    async fn test_all_time_board_has_title_and_limit() {
        let leaders: Vec<_> = (1..=12)
            .map(|i| json!({"person": {"fullName": format!("Slugger {}", i)}, "value": format!("{}", 800 - i)}))
            .collect();
        let board = serde_json::from_value(json!({"leagueLeaders": [{"leaders": leaders}]})).unwrap();
        let source = MemorySource::new().with_leaderboard("homeRuns", true, board);

        let out = answer(&source, "all-time home run leaders").await;
        assert!(out.starts_with("**All-Time HR Leaders**"));
        assert!(out.contains("1. Slugger 1 – 799"));
        assert!(out.contains("8. Slugger 8 – 792"));
        assert!(!out.contains("9. Slugger 9"));
    }

    #[tokio::test]
    async fn test_all_time_without_stat() {
        let out = answer(&MemorySource::new(), "all time greats").await;
        assert_eq!(out, "Try asking for all-time home run or strikeout leaders!");
    }

    #[tokio::test]
    async fn test_era_board_formats_two_decimals() {
        let board = serde_json::from_value(json!({"leagueLeaders": [{"leaders": [
            {"person": {"fullName": "Tarik Skubal"}, "team": {"name": "Detroit Tigers"}, "value": "2.2"}
        ]}]}))
        .unwrap();
        let source = MemorySource::new().with_leaderboard("era", false, board);
        let out = answer(&source, "era leaders").await;
        assert_eq!(out, "**2025 ERA Leaders**\n\n1. Tarik Skubal (Tigers) – 2.20");
    }

    #[tokio::test]
    async fn test_probable_pitchers_default_tbd() {
        let schedule = serde_json::from_value(json!({"dates": [{"games": [{
            "gamePk": 1,
            "teams": {
                "away": {"team": {"name": "Boston Red Sox"}, "probablePitcher": {"fullName": "Garrett Crochet"}},
                "home": {"team": {"name": "New York Yankees"}}
            }
        }]}]}))
        .unwrap();
        let source = MemorySource::new().with_schedule(day(), schedule);
        let out = answer(&source, "who is pitching today").await;
        assert_eq!(out, "**Today's Probable Pitchers**\n\nSox @ Yankees: Garrett Crochet vs TBD");
    }

    #[tokio::test]
    async fn test_no_games_today() {
        let out = answer(&MemorySource::new(), "probable pitchers tonight").await;
        assert_eq!(out, "No games scheduled today.");
    }

    #[tokio::test]
    async fn test_box_score_uses_yesterday() {
        let yesterday = day().pred_opt().unwrap();
        let schedule = serde_json::from_value(json!({"dates": [{"games": [{
            "gamePk": 77,
            "teams": {"away": {"team": {"name": "Mets"}}, "home": {"team": {"name": "Braves"}}}
        }]}]}))
        .unwrap();
        let box_score = serde_json::from_value(json!({"teams": {
            "away": {"team": {"name": "New York Mets"}, "teamStats": {"batting": {"runs": 3}}},
            "home": {"team": {"name": "Atlanta Braves"}, "teamStats": {"batting": {"runs": 5}}}
        }}))
        .unwrap();
        let source = MemorySource::new()
            .with_schedule(yesterday, schedule)
            .with_boxscore(77, box_score);

        let out = answer(&source, "box score").await;
        assert_eq!(out, "**New York Mets 3 – Atlanta Braves 5** (Final)");
    }

    #[tokio::test]
    async fn test_box_score_falls_back_to_schedule_score() {
        let yesterday = day().pred_opt().unwrap();
        let schedule = serde_json::from_value(json!({"dates": [{"games": [{
            "gamePk": 78,
            "teams": {"away": {"team": {"name": "Cubs"}, "score": 2},
                      "home": {"team": {"name": "Cardinals"}, "score": 1}}
        }]}]}))
        .unwrap();
        let source = MemorySource::new().with_schedule(yesterday, schedule);
        let out = answer(&source, "final score yesterday").await;
        assert_eq!(out, "**Cubs 2 – Cardinals 1** (Final)");
    }

    #[tokio::test]
    async fn test_comparison_requires_both_players() {
        let source = MemorySource::new().with_player(judge());
        let out = answer(&source, "Aaron Judge vs Shohei Ohtani").await;
        assert_eq!(out, "Couldn't find one of the players.");

        let out = answer(&source, "compare judge and ohtani").await;
        assert!(out.starts_with("Name two players"));
    }

    #[tokio::test]
    async fn test_comparison_side_by_side() {
        let ohtani: Person = serde_json::from_value(json!({
            "id": 660271,
            "fullName": "Shohei Ohtani",
            "stats": [{"group": {"displayName": "hitting"},
                       "splits": [{"stat": {"homeRuns": 55, "avg": ".282"}}]}]
        }))
        .unwrap();
        let source = MemorySource::new().with_player(judge()).with_player(ohtani);
        let out = answer(&source, "Compare Aaron Judge vs Shohei Ohtani").await;
        assert_eq!(
            out,
            "**2025 Stats**\nAaron Judge: 40 HR, .290 AVG\nShohei Ohtani: 55 HR, .282 AVG"
        );
    }
}
