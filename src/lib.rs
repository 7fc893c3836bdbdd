//! Football scoreboard viewer library
//!
//! Fetches match data from a public scoreboard provider, reconciles its
//! loosely-typed JSON into a canonical model, and classifies, filters and
//! renders it for the terminal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use matchday::config::Config;
//! use matchday::data_fetcher::api::{create_http_client, fetch_scoreboard, scoreboard_url};
//! use matchday::data_fetcher::{build_matches, classify};
//! use matchday::data_fetcher::wire::decode_scoreboard;
//! use matchday::error::AppError;
//! use matchday::renderer::Renderer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client(config.http_timeout_seconds)?;
//!
//!     // Fetch and normalize one scoreboard page
//!     let body = fetch_scoreboard(&client, &config, "eng.1", None).await?;
//!     let url = scoreboard_url(&config.api_domain, "eng.1", None);
//!     let matches = build_matches(decode_scoreboard(&body, &url)?);
//!
//!     // Bucket by lifecycle state and render
//!     let classified = classify(matches);
//!     print!("{}", Renderer::new(false).render_classified(&classified));
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod renderer;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    Classified, FilterOptions, Match, MatchStatus, Participant, Side, TeamDetail, TeamInfo,
    apply_filters, build_matches, classify, resolve_date_range, resolve_team,
};
pub use error::AppError;
pub use renderer::{OutputMode, Renderer};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
