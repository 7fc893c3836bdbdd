//! Multi-league crawl: the fallback ingestion mode behind `live --all-leagues`.
//!
//! Walks the known-league table with a bounded number of requests in
//! flight. Each fragment is decoded, classified and rendered as soon as it
//! lands; output interleaving across fragments is acceptable because every
//! rendered section is self-contained. A fragment failure is logged and
//! reported inline without cancelling its siblings, and the crawl only
//! returns once every in-flight request has completed.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{error, info};

use super::api::{fetch_text, scoreboard_url};
use super::builder::build_matches;
use super::classify::{FilterOptions, apply_filters, classify};
use super::wire::decode_scoreboard;
use crate::config::Config;
use crate::constants::{MAX_CONCURRENT_CRAWL, leagues};
use crate::renderer::Renderer;

/// Per-crawl tallies, reported in the trailing summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub rendered: usize,
    pub failed: usize,
}

/// Crawls every known league scoreboard and prints each fragment as it
/// completes. Infallible at the crawl level: request-level errors are
/// isolated per fragment and tallied in the outcome.
pub async fn crawl_leagues(
    client: &Client,
    config: &Config,
    options: &FilterOptions,
    renderer: &Renderer,
) -> CrawlOutcome {
    let mut fragments = stream::iter(leagues::KNOWN.iter().map(|(code, slug)| async move {
        (*code, fetch_fragment(client, config, slug, options, renderer).await)
    }))
    .buffer_unordered(MAX_CONCURRENT_CRAWL);

    let mut outcome = CrawlOutcome::default();
    // Drain to completion: the crawl is done only when every request is.
    while let Some((code, result)) = fragments.next().await {
        match result {
            Ok(section) => {
                print!("{section}");
                outcome.rendered += 1;
            }
            Err(e) => {
                error!("Crawl fragment {code} failed: {e}");
                eprintln!("[{code}] fetch failed: {e}");
                outcome.failed += 1;
            }
        }
    }

    info!(
        "Crawl finished: {} fragments rendered, {} failed",
        outcome.rendered, outcome.failed
    );
    outcome
}

/// One self-contained fragment: fetch, decode, build, filter, classify,
/// render. Errors propagate to the caller's tally, nowhere else.
async fn fetch_fragment(
    client: &Client,
    config: &Config,
    league_slug: &str,
    options: &FilterOptions,
    renderer: &Renderer,
) -> Result<String, crate::error::AppError> {
    let url = scoreboard_url(&config.api_domain, league_slug, None);
    let body = fetch_text(client, &url).await?;
    let envelope = decode_scoreboard(&body, &url)?;
    let matches = apply_filters(build_matches(envelope), options);
    let classified = classify(matches);
    Ok(renderer.render_crawl_fragment(league_slug, &classified))
}
