//! Application-wide constants and configuration values
//!
//! This module centralizes endpoint paths, league identifiers and the
//! handful of magic values shared between the fetch and render layers.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Conventional browser-like identification header sent with every request.
/// Some provider edges reject requests with a bare library User-Agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default API domain for the scoreboard provider
pub const DEFAULT_API_DOMAIN: &str = "https://site.api.espn.com";

/// Path prefix shared by scoreboard, teams and team-detail endpoints
pub const SOCCER_API_PATH: &str = "/apis/site/v2/sports/soccer";

/// Pseudo-league slug covering every competition in one scoreboard query
pub const ALL_COMPETITIONS_SLUG: &str = "all";

/// Score shown for a participant before kickoff or when the provider
/// omits the field. Scores stay strings end to end.
pub const SCORE_PLACEHOLDER: &str = "-";

/// Fixed filename the raw provider response is persisted to when the
/// debug dump is enabled.
pub const DEBUG_DUMP_FILE: &str = "matchday_response.json";

/// Upper bound on in-flight requests in the multi-league crawl
pub const MAX_CONCURRENT_CRAWL: usize = 4;

/// League codes accepted on the command line, mapped to provider slugs.
pub mod leagues {
    /// Directory lookups need a concrete competition; default to the EPL.
    pub const DEFAULT_SLUG: &str = "eng.1";

    /// (user-facing code, provider slug) pairs. The crawl mode walks this
    /// table; the `--league` flag accepts either column.
    pub const KNOWN: &[(&str, &str)] = &[
        ("EPL", "eng.1"),
        ("CHAMPIONSHIP", "eng.2"),
        ("LALIGA", "esp.1"),
        ("BUNDESLIGA", "ger.1"),
        ("SERIEA", "ita.1"),
        ("LIGUE1", "fra.1"),
        ("EREDIVISIE", "ned.1"),
        ("MLS", "usa.1"),
        ("UCL", "uefa.champions"),
        ("UEL", "uefa.europa"),
    ];

    /// Resolve a user-supplied league code to a provider slug.
    /// Unknown codes are passed through untouched so power users can
    /// address any provider slug directly.
    pub fn slug_for(code: &str) -> String {
        let upper = code.trim().to_uppercase();
        KNOWN
            .iter()
            .find(|(known, _)| *known == upper)
            .map(|(_, slug)| (*slug).to_string())
            .unwrap_or_else(|| code.trim().to_lowercase())
    }
}
