//! Permissive wire types mirroring the provider's JSON envelope.
//!
//! The provider represents the same logical entity with different optional
//! fields depending on endpoint, competition and match phase. Every field
//! beyond the mandatory core (event id, status state token) is optional and
//! defaults per field, so decoding never rejects a record just because an
//! enrichment field is absent. The canonical model in
//! [`super::models`] is built from these shapes by [`super::builder`].

use serde::Deserialize;

use crate::error::AppError;

/// Top-level scoreboard envelope: a list of events.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub leagues: Vec<WireLeague>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    pub status: WireStatus,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub league: Option<WireLeague>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStatus {
    #[serde(rename = "type")]
    pub kind: WireStatusType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStatusType {
    /// Lifecycle state token: "pre" | "in" | "post" on the wire today,
    /// but treated as open-ended (unknown tokens are preserved upstream).
    pub state: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Competition {
    #[serde(default)]
    pub venue: Option<WireVenue>,
    #[serde(default)]
    pub competitors: Vec<WireCompetitor>,
    #[serde(default)]
    pub details: Vec<WireDetail>,
    #[serde(default)]
    pub notes: Vec<WireNote>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireVenue {
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub address: Option<WireAddress>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireCompetitor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "homeAway", default)]
    pub home_away: Option<String>,
    /// Scores arrive as strings; absent before kickoff.
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub team: Option<WireTeam>,
    #[serde(default)]
    pub winner: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireTeam {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName", default)]
    pub short_display_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireLeague {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
}

/// Sport-specific incident entry (goal, card, substitution).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireDetail {
    #[serde(rename = "type", default)]
    pub kind: Option<WireDetailType>,
    #[serde(default)]
    pub clock: Option<WireClock>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireDetailType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireClock {
    #[serde(rename = "displayValue", default)]
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireNote {
    #[serde(default)]
    pub headline: Option<String>,
}

/// Teams-directory envelope: sports → leagues → teams, each level optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TeamsResponse {
    #[serde(default)]
    pub sports: Vec<SportEntry>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SportEntry {
    #[serde(default)]
    pub leagues: Vec<LeagueEntry>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LeagueEntry {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TeamEntry {
    #[serde(default)]
    pub team: Option<WireTeam>,
}

/// Team-detail envelope. Every enrichment section is an explicit optional
/// field so a partial response decodes without any dynamic traversal.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamDetailResponse {
    pub team: WireTeam,
    #[serde(default)]
    pub record: Option<WireRecord>,
    #[serde(rename = "nextEvent", default)]
    pub next_event: Option<Event>,
    #[serde(default)]
    pub standings: Option<WireStanding>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireRecord {
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub draws: i32,
    #[serde(rename = "goalsFor", default)]
    pub goals_for: i32,
    #[serde(rename = "goalsAgainst", default)]
    pub goals_against: i32,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireStanding {
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(rename = "goalDiff", default)]
    pub goal_diff: i32,
}

/// Decodes a scoreboard response body. Pure; the only failure mode is a
/// body that does not match the envelope, reported with a bounded sample.
pub fn decode_scoreboard(body: &str, url: &str) -> Result<ScoreboardResponse, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::decode_error(e.to_string(), body, url))
}

/// Decodes a teams-directory response body.
pub fn decode_team_directory(body: &str, url: &str) -> Result<TeamsResponse, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::decode_error(e.to_string(), body, url))
}

/// Decodes a team-detail response body.
pub fn decode_team_detail(body: &str, url: &str) -> Result<TeamDetailResponse, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::decode_error(e.to_string(), body, url))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.example.com/scoreboard";

    #[test]
    fn test_decode_minimal_event() {
        // Only the mandatory core is present; everything else defaults.
        let body = r#"{
            "events": [
                { "id": "401", "status": { "type": { "state": "pre" } } }
            ]
        }"#;

        let envelope = decode_scoreboard(body, URL).unwrap();
        assert_eq!(envelope.events.len(), 1);

        let event = &envelope.events[0];
        assert_eq!(event.id, "401");
        assert_eq!(event.status.kind.state, "pre");
        assert_eq!(event.status.kind.detail, None);
        assert!(!event.status.kind.completed);
        assert_eq!(event.date, None);
        assert_eq!(event.name, None);
        assert!(event.competitions.is_empty());
        assert!(event.league.is_none());
    }

    #[test]
    fn test_decode_empty_envelope() {
        let envelope = decode_scoreboard(r#"{}"#, URL).unwrap();
        assert!(envelope.events.is_empty());
        assert!(envelope.leagues.is_empty());
    }

    #[test]
    fn test_decode_competitor_defaults() {
        let body = r#"{
            "events": [{
                "id": "401",
                "status": { "type": { "state": "in", "detail": "45'" } },
                "competitions": [{
                    "competitors": [
                        { "homeAway": "home", "team": { "displayName": "Arsenal" } },
                        {}
                    ]
                }]
            }]
        }"#;

        let envelope = decode_scoreboard(body, URL).unwrap();
        let competitors = &envelope.events[0].competitions[0].competitors;
        assert_eq!(competitors.len(), 2);
        assert_eq!(competitors[0].home_away.as_deref(), Some("home"));
        assert_eq!(competitors[0].score, None);
        assert!(competitors[1].home_away.is_none());
        assert!(competitors[1].team.is_none());
    }

    #[test]
    fn test_decode_missing_id_is_rejected() {
        let body = r#"{ "events": [ { "status": { "type": { "state": "pre" } } } ] }"#;
        let err = decode_scoreboard(body, URL).unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[test]
    fn test_decode_malformed_body_carries_sample() {
        let body = "<html>upstream proxy error</html>";
        let err = decode_scoreboard(body, URL).unwrap_err();
        match err {
            AppError::Decode { sample, url, .. } => {
                assert_eq!(sample, body);
                assert_eq!(url, URL);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_team_directory_nesting() {
        let body = r#"{
            "sports": [{
                "leagues": [{
                    "teams": [
                        { "team": { "id": "360", "displayName": "Manchester United", "abbreviation": "MUN" } },
                        { "team": { "id": "382", "displayName": "Liverpool", "abbreviation": "LIV" } }
                    ]
                }]
            }]
        }"#;

        let directory = decode_team_directory(body, URL).unwrap();
        let teams = &directory.sports[0].leagues[0].teams;
        assert_eq!(teams.len(), 2);
        assert_eq!(
            teams[0].team.as_ref().unwrap().abbreviation.as_deref(),
            Some("MUN")
        );
    }

    #[test]
    fn test_decode_team_detail_partial_sections() {
        // Only the team block is present; record/nextEvent/standings absent.
        let body = r#"{ "team": { "id": "360", "displayName": "Manchester United" } }"#;
        let detail = decode_team_detail(body, URL).unwrap();
        assert_eq!(detail.team.id.as_deref(), Some("360"));
        assert!(detail.record.is_none());
        assert!(detail.next_event.is_none());
        assert!(detail.standings.is_none());
    }

    #[test]
    fn test_decode_team_detail_with_record() {
        let body = r#"{
            "team": { "id": "360", "displayName": "Manchester United" },
            "record": { "wins": 12, "losses": 4, "draws": 6, "goalsFor": 38, "goalsAgainst": 21 },
            "standings": { "position": 4, "points": 42, "league": "Premier League", "goalDiff": 17 }
        }"#;
        let detail = decode_team_detail(body, URL).unwrap();
        let record = detail.record.unwrap();
        assert_eq!(record.wins, 12);
        assert_eq!(record.goals_against, 21);
        let standing = detail.standings.unwrap();
        assert_eq!(standing.position, 4);
        assert_eq!(standing.goal_diff, 17);
    }
}
