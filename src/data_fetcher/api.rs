//! Provider HTTP layer: client construction, endpoint URLs and the
//! fetch entry points used by the command handlers.
//!
//! Each query is a fresh pull; there is no retry policy and no response
//! cache. A failed fetch surfaces immediately to the caller.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, error, info};

use super::builder::{build_team_detail, build_team_directory};
use super::models::{TeamDetail, TeamInfo};
use super::wire::{decode_team_detail, decode_team_directory};
use crate::config::Config;
use crate::constants::{DEBUG_DUMP_FILE, SOCCER_API_PATH, USER_AGENT};
use crate::error::AppError;

/// Creates the HTTP client shared by a query: fixed timeout, browser-like
/// identification header.
pub fn create_http_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
}

/// Scoreboard endpoint for a competition, optionally pinned to a date.
/// The provider expects dates as `YYYYMMDD`.
pub fn scoreboard_url(api_domain: &str, league_slug: &str, date: Option<NaiveDate>) -> String {
    let base = format!("{api_domain}{SOCCER_API_PATH}/{league_slug}/scoreboard");
    match date {
        Some(date) => format!("{base}?dates={}", date.format("%Y%m%d")),
        None => base,
    }
}

/// Teams-directory endpoint for a competition.
pub fn teams_url(api_domain: &str, league_slug: &str) -> String {
    format!("{api_domain}{SOCCER_API_PATH}/{league_slug}/teams")
}

/// Team-detail endpoint for a directory entry.
pub fn team_url(api_domain: &str, league_slug: &str, team_id: &str) -> String {
    format!("{api_domain}{SOCCER_API_PATH}/{league_slug}/teams/{team_id}")
}

/// Single blocking-on-await GET returning the raw response body.
/// Transport and HTTP-status failures map onto the error taxonomy; the
/// body is returned untouched so raw output mode can echo it verbatim.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {url}: {e}");
            if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::Fetch(e)
            }
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {status_code} - {reason} (URL: {url})");

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let body = response.text().await.map_err(AppError::Fetch)?;
    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches one scoreboard page and returns the raw body. Decoding is a
/// separate step so raw output mode can skip normalization entirely.
pub async fn fetch_scoreboard(
    client: &Client,
    config: &Config,
    league_slug: &str,
    date: Option<NaiveDate>,
) -> Result<String, AppError> {
    let url = scoreboard_url(&config.api_domain, league_slug, date);
    fetch_text(client, &url).await
}

/// Fetches and flattens the full team directory for a competition.
pub async fn fetch_team_directory(
    client: &Client,
    config: &Config,
    league_slug: &str,
) -> Result<Vec<TeamInfo>, AppError> {
    let url = teams_url(&config.api_domain, league_slug);
    let body = fetch_text(client, &url).await?;
    let directory = build_team_directory(decode_team_directory(&body, &url)?);
    info!("Fetched {} directory entries from {url}", directory.len());
    Ok(directory)
}

/// Fetches the detail view for a resolved team. Returns the canonical
/// detail plus the raw body for raw output mode and the debug dump.
pub async fn fetch_team_detail(
    client: &Client,
    config: &Config,
    league_slug: &str,
    team_id: &str,
) -> Result<(TeamDetail, String), AppError> {
    let url = team_url(&config.api_domain, league_slug, team_id);
    let body = fetch_text(client, &url).await?;
    let detail = build_team_detail(decode_team_detail(&body, &url)?);
    Ok((detail, body))
}

/// Persists the raw response body to the fixed debug filename in the
/// working directory. A side channel for offline inspection, not part of
/// the primary contract.
pub async fn dump_debug_response(body: &str) -> Result<PathBuf, AppError> {
    let path = PathBuf::from(DEBUG_DUMP_FILE);
    write_debug_dump(&path, body).await?;
    Ok(path)
}

pub(crate) async fn write_debug_dump(path: &Path, body: &str) -> Result<(), AppError> {
    tokio::fs::write(path, body).await?;
    info!("Raw response written to {}", path.display());
    Ok(())
}
