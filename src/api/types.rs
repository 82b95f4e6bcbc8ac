//! Wire types for MLB Stats API responses
//!
//! Every field is optional on the wire. Structs default missing fields and
//! expose accessors that state the fallback value, so callers never index
//! into raw JSON.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream stat group a stat code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Hitting,
    Pitching,
}

impl StatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Hitting => "hitting",
            StatCategory::Pitching => "pitching",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stat value; the API sends numbers for counts and strings for rates
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(s) => s.trim().parse().ok(),
            StatValue::Other(_) => None,
        }
    }

    /// Render the value the way upstream meant it (integers without a fraction)
    pub fn raw(&self) -> String {
        match self {
            StatValue::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            StatValue::Number(n) => n.to_string(),
            StatValue::Text(s) => s.clone(),
            StatValue::Other(v) => v.to_string(),
        }
    }
}

/// One split's stat line, keyed by upstream stat name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StatLine(AHashMap<String, StatValue>);

impl StatLine {
    pub fn get(&self, key: &str) -> Option<&StatValue> {
        self.0.get(key)
    }

    /// Home runs, "0" when absent
    pub fn home_runs(&self) -> String {
        self.get("homeRuns").map(StatValue::raw).unwrap_or_else(|| "0".into())
    }

    /// Batting average as upstream formats it, ".000" when absent
    pub fn avg(&self) -> String {
        self.get("avg").map(StatValue::raw).unwrap_or_else(|| ".000".into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Split {
    pub season: Option<String>,
    pub stat: StatLine,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayName {
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatGroup {
    #[serde(rename = "type")]
    pub kind: Option<DisplayName>,
    pub group: Option<DisplayName>,
    pub splits: Vec<Split>,
}

impl StatGroup {
    fn is_hitting(&self) -> bool {
        self.group
            .as_ref()
            .map_or(true, |g| g.display_name == StatCategory::Hitting.as_str())
    }

    fn is_season(&self) -> bool {
        self.kind.as_ref().is_some_and(|k| k.display_name == "season")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamRef {
    pub id: Option<u64>,
    pub name: String,
}

impl TeamRef {
    /// Last word of the team name ("New York Yankees" -> "Yankees")
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRef {
    pub id: Option<u64>,
    pub full_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Position {
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Status {
    pub description: Option<String>,
}

/// Dated note on a player: an injury or a transaction
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub description: Option<String>,
    pub date: Option<String>,
}

impl LogEntry {
    /// Date cut to calendar-day precision ("2025-06-01T00:00:00Z" -> "2025-06-01")
    pub fn day(&self) -> &str {
        let date = self.date.as_deref().unwrap_or("");
        date.get(..10).unwrap_or(date)
    }
}

/// Most recent entry by date; later entries win ties and undated lists
pub fn latest(entries: &[LogEntry]) -> Option<&LogEntry> {
    entries.iter().max_by(|a, b| a.day().cmp(b.day()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: u64,
    pub full_name: String,
    pub current_team: Option<TeamRef>,
    pub primary_position: Option<Position>,
    pub status: Option<Status>,
    pub stats: Vec<StatGroup>,
    pub injuries: Vec<LogEntry>,
    pub transactions: Vec<LogEntry>,
}

impl Person {
    /// Current team name, "Free Agent" when unsigned or missing
    pub fn team_name(&self) -> &str {
        match &self.current_team {
            Some(team) if !team.name.is_empty() => &team.name,
            _ => "Free Agent",
        }
    }

    /// Position abbreviation, "?" when missing
    pub fn position(&self) -> &str {
        self.primary_position
            .as_ref()
            .and_then(|p| p.abbreviation.as_deref())
            .unwrap_or("?")
    }

    /// Roster status label, "Active" when missing
    pub fn status_label(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.description.as_deref())
            .unwrap_or("Active")
    }

    /// Hitting line of the season split, falling back to any hitting group
    pub fn hitting_line(&self) -> Option<&StatLine> {
        self.stats
            .iter()
            .filter(|g| g.is_hitting() && !g.splits.is_empty())
            .find(|g| g.is_season())
            .or_else(|| {
                self.stats
                    .iter()
                    .find(|g| g.is_hitting() && !g.splits.is_empty())
            })
            .and_then(|g| g.splits.first())
            .map(|s| &s.stat)
    }

    /// (home runs, batting average) with "0" / ".000" defaults
    pub fn hr_and_avg(&self) -> (String, String) {
        match self.hitting_line() {
            Some(line) => (line.home_runs(), line.avg()),
            None => ("0".into(), ".000".into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PeopleResponse {
    pub people: Vec<Person>,
}

impl PeopleResponse {
    pub fn first(&self) -> Option<&Person> {
        self.people.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSide {
    pub team: TeamRef,
    pub probable_pitcher: Option<PersonRef>,
    pub score: Option<u32>,
}

impl GameSide {
    /// Announced starter, "TBD" otherwise
    pub fn pitcher_name(&self) -> &str {
        match &self.probable_pitcher {
            Some(p) if !p.full_name.is_empty() => &p.full_name,
            _ => "TBD",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameTeams {
    pub away: GameSide,
    pub home: GameSide,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    pub game_pk: u64,
    pub teams: GameTeams,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleDate {
    pub date: String,
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleResponse {
    pub dates: Vec<ScheduleDate>,
}

impl ScheduleResponse {
    /// Games on the first listed date
    pub fn games(&self) -> &[Game] {
        self.dates.first().map(|d| d.games.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BattingTotals {
    pub runs: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub batting: BattingTotals,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxscoreSide {
    pub team: TeamRef,
    pub team_stats: TeamStats,
}

impl BoxscoreSide {
    pub fn runs(&self) -> u32 {
        self.team_stats.batting.runs.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoxscoreTeams {
    pub away: BoxscoreSide,
    pub home: BoxscoreSide,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoxscoreResponse {
    pub teams: BoxscoreTeams,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leader {
    pub rank: Option<u32>,
    pub person: PersonRef,
    pub team: Option<TeamRef>,
    pub value: Option<StatValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderCategory {
    pub leader_category: String,
    pub leaders: Vec<Leader>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardResponse {
    pub league_leaders: Vec<LeaderCategory>,
}

impl LeaderboardResponse {
    /// Leaders of the first returned category
    pub fn leaders(&self) -> &[Leader] {
        self.league_leaders
            .first()
            .map(|c| c.leaders.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_defaults_on_empty_object() {
        let person: Person = serde_json::from_value(json!({"fullName": "Nobody"})).unwrap();
        assert_eq!(person.team_name(), "Free Agent");
        assert_eq!(person.position(), "?");
        assert_eq!(person.status_label(), "Active");
        assert_eq!(person.hr_and_avg(), ("0".to_string(), ".000".to_string()));
    }

    #[test]
    fn test_hitting_line_prefers_season_hitting() {
        let person: Person = serde_json::from_value(json!({
            "id": 592450,
            "fullName": "Aaron Judge",
            "currentTeam": {"id": 147, "name": "New York Yankees"},
            "primaryPosition": {"abbreviation": "RF"},
            "stats": [
                {"type": {"displayName": "career"}, "group": {"displayName": "hitting"},
                 "splits": [{"stat": {"homeRuns": 315, "avg": ".288"}}]},
                {"type": {"displayName": "season"}, "group": {"displayName": "fielding"},
                 "splits": [{"stat": {"errors": 2}}]},
                {"type": {"displayName": "season"}, "group": {"displayName": "hitting"},
                 "splits": [{"season": "2025", "stat": {"homeRuns": 40, "avg": ".290"}}]}
            ]
        }))
        .unwrap();

        assert_eq!(person.hr_and_avg(), ("40".to_string(), ".290".to_string()));
        assert_eq!(person.team_name(), "New York Yankees");
    }

    #[test]
    fn test_stat_value_accepts_numbers_and_strings() {
        let line: StatLine = serde_json::from_value(json!({
            "homeRuns": 12, "avg": ".301", "era": "3.21", "note": null
        }))
        .unwrap();
        assert_eq!(line.home_runs(), "12");
        assert_eq!(line.avg(), ".301");
        assert_eq!(line.get("era").and_then(StatValue::as_f64), Some(3.21));
        assert_eq!(line.get("avg").and_then(StatValue::as_f64), Some(0.301));
    }

    #[test]
    fn test_latest_log_entry_by_date() {
        let entries: Vec<LogEntry> = serde_json::from_value(json!([
            {"description": "Placed on 10-day IL", "date": "2025-06-01T00:00:00Z"},
            {"description": "Activated", "date": "2025-06-20"},
            {"description": "Optioned", "date": "2025-05-02"}
        ]))
        .unwrap();
        let latest = latest(&entries).unwrap();
        assert_eq!(latest.description.as_deref(), Some("Activated"));
        assert_eq!(latest.day(), "2025-06-20");
    }

    #[test]
    fn test_latest_without_dates_is_last() {
        let entries: Vec<LogEntry> =
            serde_json::from_value(json!([{"description": "a"}, {"description": "b"}])).unwrap();
        assert_eq!(latest(&entries).unwrap().description.as_deref(), Some("b"));
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_schedule_games_tolerates_missing_dates() {
        let schedule: ScheduleResponse = serde_json::from_value(json!({})).unwrap();
        assert!(schedule.games().is_empty());

        let schedule: ScheduleResponse = serde_json::from_value(json!({
            "dates": [{"date": "2025-07-04", "games": [{
                "gamePk": 1,
                "teams": {
                    "away": {"team": {"name": "Boston Red Sox"}},
                    "home": {"team": {"name": "New York Yankees"},
                             "probablePitcher": {"fullName": "Gerrit Cole"}}
                }
            }]}]
        }))
        .unwrap();
        let game = &schedule.games()[0];
        assert_eq!(game.teams.away.pitcher_name(), "TBD");
        assert_eq!(game.teams.home.pitcher_name(), "Gerrit Cole");
        assert_eq!(game.teams.away.team.short_name(), "Sox");
    }

    #[test]
    fn test_boxscore_runs_default_to_zero() {
        let box_score: BoxscoreResponse = serde_json::from_value(json!({
            "teams": {"home": {"team": {"name": "Yankees"}, "teamStats": {"batting": {"runs": 5}}}}
        }))
        .unwrap();
        assert_eq!(box_score.teams.home.runs(), 5);
        assert_eq!(box_score.teams.away.runs(), 0);
    }
}
