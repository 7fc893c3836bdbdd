//! Canonical in-memory model.
//!
//! All entities here are immutable value records constructed once per query
//! by [`super::builder`]; nothing is mutated after construction and nothing
//! persists across invocations.

use chrono::{DateTime, Utc};

/// Lifecycle state of a match, derived from the provider's state token.
///
/// The mapping is total: `"pre"`, `"in"` and `"post"` map to the three
/// named states and every other token maps to [`MatchStatus::Unknown`]
/// instead of being dropped or defaulted. Filtering and grouping are
/// defined over exactly these four variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
    Unknown,
}

impl MatchStatus {
    pub fn from_state(token: &str) -> Self {
        match token {
            "pre" => MatchStatus::Upcoming,
            "in" => MatchStatus::Live,
            "post" => MatchStatus::Completed,
            _ => MatchStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "UPCOMING",
            MatchStatus::Live => "LIVE",
            MatchStatus::Completed => "FULL TIME",
            MatchStatus::Unknown => "UNCLASSIFIED",
        }
    }
}

/// Which side of the fixture a participant plays on. `Unresolved` marks a
/// side that could not be established from the source data; such matches
/// are retained, never dropped, and renderers must tolerate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    /// Numeric-as-text score. Defaults to the placeholder before kickoff
    /// and is never parsed as a number.
    pub score: String,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub full_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Venue {
    /// Display location: full name, with the city appended when present.
    pub fn display_location(&self) -> String {
        match &self.city {
            Some(city) => format!("{}, {}", self.full_name, city),
            None => self.full_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueInfo {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub short_name: String,
}

/// Directory entry for a known team; also the embedded team reference on
/// a participant's detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamInfo {
    pub id: String,
    pub display_name: String,
    pub short_name: String,
    pub abbreviation: String,
    pub logo: String,
}

/// Sport-specific incident carried opaquely for display (goal, card).
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    pub kind: String,
    pub clock: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    /// Scheduled kickoff. `None` when the wire timestamp failed to parse;
    /// `status_detail` is the display fallback in that case.
    pub kickoff: Option<DateTime<Utc>>,
    pub name: String,
    pub status: MatchStatus,
    /// Provider-supplied status detail ("45'", "FT", "Postponed").
    pub status_detail: String,
    pub home: Participant,
    pub away: Participant,
    pub venue: Option<Venue>,
    pub league: Option<LeagueInfo>,
    pub notes: Vec<String>,
    pub incidents: Vec<Incident>,
}

impl Match {
    /// Whether both sides were established from the source data.
    pub fn sides_resolved(&self) -> bool {
        self.home.side == Side::Home && self.away.side == Side::Away
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub goals_for: i32,
    pub goals_against: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub position: i32,
    pub points: i32,
    pub league: String,
    pub goal_diff: i32,
}

/// Resolved team view: the directory entry plus whichever enrichment
/// sections the detail endpoint supplied.
#[derive(Debug, Clone)]
pub struct TeamDetail {
    pub team: TeamInfo,
    pub record: Option<TeamRecord>,
    pub next_match: Option<Match>,
    pub standing: Option<TeamStanding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_total() {
        assert_eq!(MatchStatus::from_state("pre"), MatchStatus::Upcoming);
        assert_eq!(MatchStatus::from_state("in"), MatchStatus::Live);
        assert_eq!(MatchStatus::from_state("post"), MatchStatus::Completed);

        // Anything else maps to Unknown rather than being defaulted
        assert_eq!(MatchStatus::from_state(""), MatchStatus::Unknown);
        assert_eq!(MatchStatus::from_state("PRE"), MatchStatus::Unknown);
        assert_eq!(MatchStatus::from_state("halftime"), MatchStatus::Unknown);
        assert_eq!(MatchStatus::from_state("delayed"), MatchStatus::Unknown);
    }

    #[test]
    fn test_venue_display_location() {
        let venue = Venue {
            full_name: "Emirates Stadium".to_string(),
            city: Some("London".to_string()),
            country: Some("England".to_string()),
        };
        assert_eq!(venue.display_location(), "Emirates Stadium, London");

        let bare = Venue {
            full_name: "Emirates Stadium".to_string(),
            city: None,
            country: None,
        };
        assert_eq!(bare.display_location(), "Emirates Stadium");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MatchStatus::Live.label(), "LIVE");
        assert_eq!(MatchStatus::Completed.label(), "FULL TIME");
    }
}
