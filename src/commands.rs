//! Subcommand handlers: each builds the per-invocation query record and
//! drives the fetch → decode → build → classify → render pipeline.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::cli::{Cli, Command, OutputArgs};
use crate::config::Config;
use crate::constants::{ALL_COMPETITIONS_SLUG, leagues};
use crate::data_fetcher::api::{
    create_http_client, dump_debug_response, fetch_scoreboard, fetch_team_detail,
    fetch_team_directory, scoreboard_url,
};
use crate::data_fetcher::builder::build_matches;
use crate::data_fetcher::classify::{FilterOptions, apply_filters, classify, resolve_date_range};
use crate::data_fetcher::resolver::resolve_team;
use crate::data_fetcher::scrape::crawl_leagues;
use crate::data_fetcher::wire::decode_scoreboard;
use crate::error::AppError;
use crate::renderer::{OutputMode, Renderer};

/// Everything a query needs, constructed once per invocation and threaded
/// as a parameter. No process-wide mutable state.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: FilterOptions,
    pub output: OutputMode,
    pub plain: bool,
    pub debug_dump: bool,
}

impl QueryOptions {
    fn new(output: &OutputArgs, filter: FilterOptions) -> Self {
        Self {
            filter,
            output: if output.raw {
                OutputMode::Raw
            } else {
                OutputMode::Structured
            },
            plain: output.plain,
            debug_dump: output.debug_dump,
        }
    }
}

/// Routes a parsed invocation to its handler.
pub async fn dispatch(cli: Cli, config: Config) -> Result<(), AppError> {
    match cli.command {
        Command::Live {
            league,
            all_leagues,
            output,
        } => {
            let options = QueryOptions::new(
                &output,
                FilterOptions {
                    league,
                    ..Default::default()
                },
            );
            handle_live(&config, options, all_leagues).await
        }
        Command::Past {
            league,
            date,
            range,
            team,
            output,
        } => {
            let start = date.as_deref().map(parse_cli_date).transpose()?;
            let options = QueryOptions::new(
                &output,
                FilterOptions {
                    league,
                    team,
                    date: start,
                    date_range_days: range,
                },
            );
            handle_past(&config, options).await
        }
        Command::Team {
            name,
            league,
            output,
        } => {
            let options = QueryOptions::new(&output, FilterOptions::default());
            handle_team(&config, options, &name, league.as_deref()).await
        }
    }
}

/// `live`: one scoreboard pull covering every competition, or the
/// bounded-concurrency crawl with `--all-leagues`.
pub async fn handle_live(
    config: &Config,
    options: QueryOptions,
    all_leagues: bool,
) -> Result<(), AppError> {
    let client = create_http_client(config.http_timeout_seconds)?;
    let renderer = Renderer::new(options.plain);

    if all_leagues {
        if options.output == OutputMode::Raw {
            return Err(AppError::config_error(
                "Cannot combine --raw with --all-leagues",
            ));
        }
        let outcome = crawl_leagues(&client, config, &options.filter, &renderer).await;
        println!(
            "{} leagues rendered, {} failed",
            outcome.rendered, outcome.failed
        );
        return Ok(());
    }

    let body = fetch_scoreboard(&client, config, ALL_COMPETITIONS_SLUG, None).await?;
    if options.debug_dump {
        dump_debug_response(&body).await?;
    }
    // Raw mode bypasses normalization entirely; no canonical model is built.
    if options.output == OutputMode::Raw {
        println!("{body}");
        return Ok(());
    }

    let url = scoreboard_url(&config.api_domain, ALL_COMPETITIONS_SLUG, None);
    let matches = apply_filters(build_matches(decode_scoreboard(&body, &url)?), &options.filter);
    let classified = classify(matches);
    print!("{}", renderer.render_classified(&classified));
    Ok(())
}

/// `past`: resolves the calendar window (default: yesterday), pulls one
/// scoreboard per day sequentially, then filters and classifies the lot.
pub async fn handle_past(config: &Config, options: QueryOptions) -> Result<(), AppError> {
    let client = create_http_client(config.http_timeout_seconds)?;
    let renderer = Renderer::new(options.plain);

    let today = Local::now().date_naive();
    let window = resolve_date_range(options.filter.date, options.filter.date_range_days, today);
    info!(
        "Querying results from {} to {}",
        window[0],
        window[window.len() - 1]
    );

    let mut bodies = Vec::with_capacity(window.len());
    for day in &window {
        let body = fetch_scoreboard(&client, config, ALL_COMPETITIONS_SLUG, Some(*day)).await?;
        if options.debug_dump {
            dump_debug_response(&body).await?;
        }
        bodies.push((*day, body));
    }

    if options.output == OutputMode::Raw {
        for (_, body) in &bodies {
            println!("{body}");
        }
        return Ok(());
    }

    let mut matches = Vec::new();
    for (day, body) in &bodies {
        let url = scoreboard_url(&config.api_domain, ALL_COMPETITIONS_SLUG, Some(*day));
        matches.extend(build_matches(decode_scoreboard(body, &url)?));
    }

    // Anchor the filter window at the resolved start so the engine sees
    // the same dates the provider was queried for.
    let filter = FilterOptions {
        date: Some(window[0]),
        ..options.filter.clone()
    };
    let classified = classify(apply_filters(matches, &filter));
    print!("{}", renderer.render_classified(&classified));
    Ok(())
}

/// `team`: directory fetch, resolution, then the dependent detail fetch.
/// Two sequential round-trips; the second depends on the first's result.
pub async fn handle_team(
    config: &Config,
    options: QueryOptions,
    name: &str,
    league: Option<&str>,
) -> Result<(), AppError> {
    let client = create_http_client(config.http_timeout_seconds)?;
    let renderer = Renderer::new(options.plain);
    let slug = league
        .map(leagues::slug_for)
        .unwrap_or_else(|| leagues::DEFAULT_SLUG.to_string());

    let directory = fetch_team_directory(&client, config, &slug).await?;
    let team = resolve_team(name, &directory)?;
    info!("Resolved '{name}' to team id {}", team.id);

    let (detail, body) = fetch_team_detail(&client, config, &slug, &team.id).await?;
    if options.debug_dump {
        dump_debug_response(&body).await?;
    }
    if options.output == OutputMode::Raw {
        println!("{body}");
        return Ok(());
    }

    print!("{}", renderer.render_team_detail(&detail));
    Ok(())
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        AppError::date_parse_error(format!("Invalid date '{raw}' (expected YYYY-MM-DD): {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_date_accepts_iso_dates() {
        let date = parse_cli_date("2026-03-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }

    #[test]
    fn test_parse_cli_date_rejects_other_formats() {
        assert!(matches!(
            parse_cli_date("14.3.2026"),
            Err(AppError::DateParse(_))
        ));
        assert!(matches!(
            parse_cli_date("20260314"),
            Err(AppError::DateParse(_))
        ));
    }

    #[test]
    fn test_query_options_output_mode() {
        let raw = OutputArgs {
            raw: true,
            plain: false,
            debug_dump: false,
        };
        let options = QueryOptions::new(&raw, FilterOptions::default());
        assert_eq!(options.output, OutputMode::Raw);

        let structured = OutputArgs::default();
        let options = QueryOptions::new(&structured, FilterOptions::default());
        assert_eq!(options.output, OutputMode::Structured);
    }
}
