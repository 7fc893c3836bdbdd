//! Terminal output: grouped structured view or verbatim raw echo.
//!
//! The renderer consumes canonical entities only. In raw mode the command
//! handlers print the untouched provider bytes and the whole normalization
//! pipeline is bypassed; that path never reaches this module.

use chrono::Local;
use crossterm::style::Stylize;

use crate::data_fetcher::classify::Classified;
use crate::data_fetcher::models::{Match, MatchStatus, TeamDetail};

/// How a query's output should be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Grouped human-readable view built from canonical entities.
    #[default]
    Structured,
    /// Verbatim echo of the provider response bytes.
    Raw,
}

pub struct Renderer {
    plain: bool,
}

impl Renderer {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn heading(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.bold().cyan().to_string()
        }
    }

    fn live_heading(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.bold().green().to_string()
        }
    }

    /// Grouped view: one section per lifecycle bucket, live first, plus a
    /// trailing reconcilable summary. Zero matches is an informational
    /// outcome, not an error.
    pub fn render_classified(&self, classified: &Classified) -> String {
        if classified.is_empty() {
            return "No matches found\n".to_string();
        }

        let mut out = String::new();
        self.render_section(
            &mut out,
            &self.live_heading(MatchStatus::Live.label()),
            &classified.live,
        );
        self.render_section(
            &mut out,
            &self.heading(MatchStatus::Upcoming.label()),
            &classified.upcoming,
        );
        self.render_section(
            &mut out,
            &self.heading(MatchStatus::Completed.label()),
            &classified.completed,
        );
        out.push_str(&self.summary_line(classified));
        out
    }

    /// Ad-hoc sequence view (team schedules, single-bucket listings).
    pub fn render_matches(&self, title: &str, matches: &[Match]) -> String {
        if matches.is_empty() {
            return "No matches found\n".to_string();
        }
        let mut out = String::new();
        self.render_section(&mut out, &self.heading(title), matches);
        out
    }

    /// One self-contained crawl fragment: competition banner plus the
    /// grouped view (or a single quiet line when the fragment is empty).
    pub fn render_crawl_fragment(&self, league_slug: &str, classified: &Classified) -> String {
        let banner = self.heading(&format!("── {league_slug} ──"));
        if classified.is_empty() {
            return format!("{banner}\nNo matches found\n\n");
        }
        format!("{banner}\n{}\n", self.render_classified(classified))
    }

    fn render_section(&self, out: &mut String, heading: &str, matches: &[Match]) {
        if matches.is_empty() {
            return;
        }
        out.push_str(heading);
        out.push('\n');
        for m in matches {
            out.push_str(&self.render_match_line(m));
            out.push('\n');
            for note in &m.notes {
                out.push_str(&format!("      {note}\n"));
            }
            for incident in &m.incidents {
                match &incident.clock {
                    Some(clock) => out.push_str(&format!("      {clock} {}\n", incident.kind)),
                    None => out.push_str(&format!("      {}\n", incident.kind)),
                }
            }
        }
    }

    /// One line per match: scoreline, time column, optional venue. The
    /// line must render even for degraded records (unresolved sides,
    /// unparseable kickoff).
    pub fn render_match_line(&self, m: &Match) -> String {
        let scoreline = match m.status {
            MatchStatus::Upcoming => format!("{} vs {}", m.home.name, m.away.name),
            _ => format!(
                "{} {}-{} {}",
                m.home.name, m.home.score, m.away.score, m.away.name
            ),
        };

        let time = match (m.status, m.kickoff) {
            // Live and finished matches show the provider's detail string
            // ("45'", "FT", "Postponed") when it exists.
            (MatchStatus::Upcoming, Some(kickoff)) => kickoff
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            _ if !m.status_detail.is_empty() => m.status_detail.clone(),
            (_, Some(kickoff)) => kickoff
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            _ => m.status.label().to_string(),
        };

        let mut line = format!("  {scoreline:<42} {time:<12}");
        if !m.sides_resolved() {
            line.push_str(" (sides tbc)");
        }
        if let Some(venue) = &m.venue {
            line.push_str(&format!(" @ {}", venue.display_location()));
        }
        line.trim_end().to_string()
    }

    fn summary_line(&self, classified: &Classified) -> String {
        let mut summary = format!(
            "{} matches ({} live, {} upcoming, {} completed",
            classified.total(),
            classified.live.len(),
            classified.upcoming.len(),
            classified.completed.len()
        );
        if classified.unknown > 0 {
            summary.push_str(&format!(", {} unclassified", classified.unknown));
        }
        summary.push_str(")\n");
        summary
    }

    /// Resolved team view: directory identity plus whichever enrichment
    /// sections the detail endpoint supplied.
    pub fn render_team_detail(&self, detail: &TeamDetail) -> String {
        let mut out = String::new();
        let title = if detail.team.abbreviation.is_empty() {
            detail.team.display_name.clone()
        } else {
            format!("{} ({})", detail.team.display_name, detail.team.abbreviation)
        };
        out.push_str(&self.heading(&title));
        out.push('\n');

        if let Some(record) = &detail.record {
            out.push_str(&format!(
                "  Record:    {}W {}D {}L, goals {}-{}\n",
                record.wins, record.draws, record.losses, record.goals_for, record.goals_against
            ));
        }
        if let Some(standing) = &detail.standing {
            let league = if standing.league.is_empty() {
                String::new()
            } else {
                format!(" in {}", standing.league)
            };
            out.push_str(&format!(
                "  Standing:  P{}{league}, {} pts (GD {:+})\n",
                standing.position, standing.points, standing.goal_diff
            ));
        }
        match &detail.next_match {
            Some(next) => {
                out.push_str("  Next up:\n");
                out.push_str(&self.render_match_line(next));
                out.push('\n');
            }
            None => out.push_str("  No upcoming fixture on record\n"),
        }
        out
    }
}
