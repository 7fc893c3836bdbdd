//! Classification and filtering of canonical matches.
//!
//! Classification is a pure total function of [`MatchStatus`]: the three
//! named lifecycle states land in their buckets in provider order, and
//! `Unknown` matches are excluded from every bucket but counted so that
//! `upcoming + live + completed + unknown == total`.

use chrono::{Days, NaiveDate};

use super::models::{Match, MatchStatus};

/// User-specified filter record, constructed once per invocation and
/// threaded into the engine as a parameter.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Free-text league criterion: matched case-insensitively against the
    /// match name (substring) or the league abbreviation/name (exact).
    pub league: Option<String>,
    /// Team substring, matched against either participant's name.
    pub team: Option<String>,
    /// Start of the date window. `None` disables date filtering for the
    /// query; callers wanting the default window resolve it first with
    /// [`resolve_date_range`].
    pub date: Option<NaiveDate>,
    /// Window width in days, inclusive of the start date. Values below 1
    /// are treated as 1.
    pub date_range_days: u32,
}

/// Lifecycle buckets in provider order plus the unclassified count.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub upcoming: Vec<Match>,
    pub live: Vec<Match>,
    pub completed: Vec<Match>,
    pub unknown: usize,
}

impl Classified {
    /// Total records seen, unclassified included.
    pub fn total(&self) -> usize {
        self.upcoming.len() + self.live.len() + self.completed.len() + self.unknown
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Buckets matches by lifecycle state, preserving input order per bucket.
pub fn classify(matches: Vec<Match>) -> Classified {
    let mut classified = Classified::default();
    for m in matches {
        match m.status {
            MatchStatus::Upcoming => classified.upcoming.push(m),
            MatchStatus::Live => classified.live.push(m),
            MatchStatus::Completed => classified.completed.push(m),
            MatchStatus::Unknown => classified.unknown += 1,
        }
    }
    classified
}

/// Resolves the calendar window a query covers: `range_days` consecutive
/// days starting at `date`, defaulting to yesterday when no date is given
/// (results queries skew toward completed matches).
pub fn resolve_date_range(
    date: Option<NaiveDate>,
    range_days: u32,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let start = date.unwrap_or_else(|| today.pred_opt().unwrap_or(today));
    let days = range_days.max(1);
    (0..u64::from(days))
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// Applies the league, team and date criteria, keeping input order.
/// An empty result is a valid outcome, not an error.
pub fn apply_filters(matches: Vec<Match>, options: &FilterOptions) -> Vec<Match> {
    let window = options
        .date
        .map(|start| resolve_date_range(Some(start), options.date_range_days, start));

    matches
        .into_iter()
        .filter(|m| {
            options
                .league
                .as_deref()
                .map(|needle| league_matches(m, needle))
                .unwrap_or(true)
        })
        .filter(|m| {
            options
                .team
                .as_deref()
                .map(|needle| team_matches(m, needle))
                .unwrap_or(true)
        })
        .filter(|m| {
            window
                .as_deref()
                .map(|days| date_matches(m, days))
                .unwrap_or(true)
        })
        .collect()
}

/// League criterion: a logical OR across three case-insensitive checks:
/// substring of the match's free-text name, exact league abbreviation,
/// exact league name. A name-based rather than identifier-based match;
/// false positives are accepted over false negatives.
pub fn league_matches(m: &Match, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    if m.name.to_lowercase().contains(&needle) {
        return true;
    }
    match &m.league {
        Some(league) => {
            league.abbreviation.to_lowercase() == needle || league.name.to_lowercase() == needle
        }
        None => false,
    }
}

/// Team criterion: case-insensitive substring against either participant.
pub fn team_matches(m: &Match, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    m.home.name.to_lowercase().contains(&needle) || m.away.name.to_lowercase().contains(&needle)
}

/// Date criterion: the kickoff's calendar date falls inside the window.
/// A match without a parseable kickoff is retained; records are never
/// dropped solely because enrichment data is missing.
fn date_matches(m: &Match, window: &[NaiveDate]) -> bool {
    match m.kickoff {
        Some(instant) => window.contains(&instant.date_naive()),
        None => true,
    }
}
