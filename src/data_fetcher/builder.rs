//! Canonical model builder: maps wire records into the canonical model.
//!
//! Policy: never drop a match solely because enrichment fields are missing.
//! Degenerate competitor lists yield unresolved participants, absent venues
//! yield `None`, and kickoff parse failures fall back to the provider's
//! status detail string for display.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

use super::models::{
    Incident, LeagueInfo, Match, MatchStatus, Participant, Side, TeamDetail, TeamInfo, TeamRecord,
    TeamStanding, Venue,
};
use super::wire;
use crate::constants::SCORE_PLACEHOLDER;

/// Builds the canonical match list from a decoded scoreboard envelope,
/// preserving the provider's event ordering. Per-competition endpoints
/// carry the league at the envelope level; it backfills any event that
/// does not name its own.
pub fn build_matches(envelope: wire::ScoreboardResponse) -> Vec<Match> {
    let envelope_league = envelope.leagues.into_iter().next().map(build_league);
    envelope
        .events
        .into_iter()
        .map(|event| {
            let mut m = build_match(event);
            if m.league.is_none() {
                m.league = envelope_league.clone();
            }
            m
        })
        .collect()
}

/// Maps one wire event to one [`Match`]. Total: every event yields a match.
pub fn build_match(event: wire::Event) -> Match {
    let status = MatchStatus::from_state(&event.status.kind.state);
    if status == MatchStatus::Unknown {
        warn!(
            "Event {} carries unrecognized status state token '{}'",
            event.id, event.status.kind.state
        );
    }
    let status_detail = event.status.kind.detail.unwrap_or_default();

    let kickoff = event.date.as_deref().and_then(|raw| match parse_kickoff(raw) {
        Some(instant) => Some(instant),
        None => {
            debug!(
                "Event {}: unparseable kickoff timestamp '{raw}', falling back to status detail",
                event.id
            );
            None
        }
    });

    let competition = event.competitions.into_iter().next().unwrap_or_default();
    let (home, away) = resolve_sides(competition.competitors);

    let name = event
        .name
        .or(event.short_name)
        .unwrap_or_else(|| format!("{} v {}", home.name, away.name));

    Match {
        id: event.id,
        kickoff,
        name,
        status,
        status_detail,
        home,
        away,
        venue: competition.venue.and_then(build_venue),
        league: event.league.map(build_league),
        notes: competition
            .notes
            .into_iter()
            .filter_map(|n| n.headline)
            .collect(),
        incidents: competition
            .details
            .into_iter()
            .filter_map(build_incident)
            .collect(),
    }
}

/// Scans the competitor list for side tags. When exactly one competitor is
/// tagged `home` and one `away` the pair is resolved; any other shape
/// (fewer than two entries, missing or duplicate tags) keeps the match but
/// flags both participants as unresolved.
fn resolve_sides(competitors: Vec<wire::WireCompetitor>) -> (Participant, Participant) {
    let home_count = tagged_count(&competitors, "home");
    let away_count = tagged_count(&competitors, "away");

    if home_count == 1 && away_count == 1 {
        let mut home = None;
        let mut away = None;
        for competitor in competitors {
            match competitor.home_away.as_deref() {
                Some("home") => home = Some(build_participant(competitor, Side::Home)),
                Some("away") => away = Some(build_participant(competitor, Side::Away)),
                _ => {}
            }
        }
        // Both are present: counted above.
        return (
            home.unwrap_or_else(|| placeholder_participant(Side::Home)),
            away.unwrap_or_else(|| placeholder_participant(Side::Away)),
        );
    }

    debug!(
        "Ambiguous competitor list ({} entries, {home_count} home tags, {away_count} away tags); \
         participants flagged unresolved",
        competitors.len()
    );
    let mut iter = competitors.into_iter();
    let first = iter
        .next()
        .map(|c| build_participant(c, Side::Unresolved))
        .unwrap_or_else(|| placeholder_participant(Side::Unresolved));
    let second = iter
        .next()
        .map(|c| build_participant(c, Side::Unresolved))
        .unwrap_or_else(|| placeholder_participant(Side::Unresolved));
    (first, second)
}

fn tagged_count(competitors: &[wire::WireCompetitor], tag: &str) -> usize {
    competitors
        .iter()
        .filter(|c| c.home_away.as_deref() == Some(tag))
        .count()
}

fn build_participant(competitor: wire::WireCompetitor, side: Side) -> Participant {
    let team = competitor.team.unwrap_or_default();
    Participant {
        id: competitor.id.or(team.id).unwrap_or_default(),
        name: team
            .display_name
            .or(team.name)
            .or(team.short_display_name)
            .unwrap_or_else(|| "Unknown".to_string()),
        abbreviation: team.abbreviation.unwrap_or_default(),
        score: competitor
            .score
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SCORE_PLACEHOLDER.to_string()),
        side,
    }
}

fn placeholder_participant(side: Side) -> Participant {
    Participant {
        id: String::new(),
        name: "Unknown".to_string(),
        abbreviation: String::new(),
        score: SCORE_PLACEHOLDER.to_string(),
        side,
    }
}

/// A venue without a full name carries nothing worth displaying; it maps
/// to `None` rather than a placeholder string.
fn build_venue(venue: wire::WireVenue) -> Option<Venue> {
    let full_name = venue.full_name.filter(|n| !n.is_empty())?;
    let address = venue.address.unwrap_or_default();
    Some(Venue {
        full_name,
        city: address.city,
        country: address.country,
    })
}

fn build_league(league: wire::WireLeague) -> LeagueInfo {
    LeagueInfo {
        id: league.id.unwrap_or_default(),
        name: league.name.unwrap_or_default(),
        abbreviation: league.abbreviation.unwrap_or_default(),
        short_name: league.short_name.unwrap_or_default(),
    }
}

fn build_incident(detail: wire::WireDetail) -> Option<Incident> {
    let kind = detail.kind.and_then(|k| k.name.or(k.abbreviation))?;
    Some(Incident {
        kind,
        clock: detail.clock.and_then(|c| c.display_value),
    })
}

pub fn build_team_info(team: wire::WireTeam) -> TeamInfo {
    let display_name = team
        .display_name
        .or(team.name)
        .unwrap_or_else(|| "Unknown".to_string());
    TeamInfo {
        id: team.id.unwrap_or_default(),
        short_name: team
            .short_display_name
            .unwrap_or_else(|| display_name.clone()),
        display_name,
        abbreviation: team.abbreviation.unwrap_or_default(),
        logo: team.logo.unwrap_or_default(),
    }
}

/// Flattens the sports → leagues → teams nesting into a flat directory,
/// preserving provider order.
pub fn build_team_directory(response: wire::TeamsResponse) -> Vec<TeamInfo> {
    response
        .sports
        .into_iter()
        .flat_map(|sport| sport.leagues)
        .flat_map(|league| league.teams)
        .filter_map(|entry| entry.team)
        .map(build_team_info)
        .collect()
}

pub fn build_team_detail(response: wire::TeamDetailResponse) -> TeamDetail {
    TeamDetail {
        team: build_team_info(response.team),
        record: response.record.map(|r| TeamRecord {
            wins: r.wins,
            losses: r.losses,
            draws: r.draws,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
        }),
        next_match: response.next_event.map(build_match),
        standing: response.standings.map(|s| TeamStanding {
            position: s.position,
            points: s.points,
            league: s.league.unwrap_or_default(),
            goal_diff: s.goal_diff,
        }),
    }
}

/// Parses the provider's kickoff timestamp. The wire format is RFC3339,
/// though the provider routinely omits seconds ("2026-08-05T18:30Z").
fn parse_kickoff(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}
