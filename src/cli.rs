use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football scores and team lookups in your terminal
///
/// Retrieves real-time and past match data for world football. Every run
/// is a fresh query: fetch, normalize, render, exit.
#[derive(Parser, Debug)]
#[command(name = "matchday", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug mode: log records are also printed to stdout.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written
    /// to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch live football scores
    ///
    /// Retrieves the current scoreboard. Supports showing all live
    /// matches or filtering by a specific league.
    ///
    /// Examples:
    ///   # All live scores
    ///   matchday live
    ///
    ///   # Live scores for the English Premier League
    ///   matchday live --league EPL
    ///
    ///   # Crawl every known league concurrently
    ///   matchday live --all-leagues
    Live {
        /// League to filter by: a code (EPL), a provider slug (eng.1) or
        /// a competition name
        #[arg(short, long)]
        league: Option<String>,

        /// Crawl every known league, rendering each as it completes
        #[arg(long = "all-leagues")]
        all_leagues: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch past football match results
    ///
    /// Retrieves completed results, defaulting to yesterday's matches.
    ///
    /// Examples:
    ///   # Yesterday's results
    ///   matchday past
    ///
    ///   # Results for a specific date
    ///   matchday past --date 2026-03-14
    ///
    ///   # A whole match week
    ///   matchday past --date 2026-03-13 --range 3 --league EPL
    Past {
        /// League to filter by
        #[arg(short, long)]
        league: Option<String>,

        /// Start date in YYYY-MM-DD format (default: yesterday)
        #[arg(short, long)]
        date: Option<String>,

        /// Number of consecutive days to cover, start date inclusive
        #[arg(short = 'r', long = "range", default_value_t = 1)]
        range: u32,

        /// Only show matches involving this team (substring match)
        #[arg(short, long)]
        team: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch team-specific results and stats
    ///
    /// Resolves the given name against the team directory, then shows the
    /// team's record, standing and next fixture.
    ///
    /// Examples:
    ///   # Full club name
    ///   matchday team --name "Manchester United"
    ///
    ///   # Abbreviation works too
    ///   matchday team --name MUN
    Team {
        /// Team name or abbreviation to resolve
        #[arg(short, long)]
        name: String,

        /// League whose directory to search (default: EPL)
        #[arg(short, long)]
        league: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print the provider response verbatim instead of the formatted view
    #[arg(long, help_heading = "Display Options")]
    pub raw: bool,

    /// Plain text output without colored headers
    #[arg(short = 'p', long, help_heading = "Display Options")]
    pub plain: bool,

    /// Also persist the raw response to matchday_response.json
    #[arg(long = "debug-dump", help_heading = "Debug")]
    pub debug_dump: bool,
}
