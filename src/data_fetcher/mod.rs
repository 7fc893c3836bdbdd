pub mod api;
pub mod builder;
pub mod classify;
pub mod models;
pub mod resolver;
pub mod scrape;
pub mod wire;

pub use builder::{build_match, build_matches, build_team_directory};
pub use classify::{Classified, FilterOptions, apply_filters, classify, resolve_date_range};
pub use models::{Match, MatchStatus, Participant, Side, TeamDetail, TeamInfo};
pub use resolver::resolve_team;
