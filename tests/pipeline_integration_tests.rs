//! End-to-end pipeline tests over fixture envelopes: decode → build →
//! classify → render, without touching the network.

use matchday::data_fetcher::builder::build_matches;
use matchday::data_fetcher::classify::{FilterOptions, apply_filters, classify};
use matchday::data_fetcher::resolver::resolve_team;
use matchday::data_fetcher::wire::{decode_scoreboard, decode_team_directory};
use matchday::error::AppError;
use matchday::renderer::Renderer;

const URL: &str = "https://api.example.com/scoreboard";

fn event_json(id: &str, state: &str, detail: &str, home: &str, away: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "date": "2026-03-14T20:00Z",
            "name": "{home} at {away}",
            "status": {{ "type": {{ "state": "{state}", "detail": "{detail}" }} }},
            "competitions": [{{
                "competitors": [
                    {{ "homeAway": "home", "score": "1", "team": {{ "displayName": "{home}" }} }},
                    {{ "homeAway": "away", "score": "0", "team": {{ "displayName": "{away}" }} }}
                ]
            }}]
        }}"#
    )
}

fn envelope_json(events: &[String]) -> String {
    format!(r#"{{ "events": [{}] }}"#, events.join(","))
}

/// One live event with detail "45'" lands alone in the Live bucket and
/// the rendered line shows the detail string.
#[test]
fn scenario_live_event_classified_and_rendered() {
    let body = envelope_json(&[event_json("401", "in", "45'", "Chelsea", "Arsenal")]);

    let matches = build_matches(decode_scoreboard(&body, URL).unwrap());
    let classified = classify(matches);

    assert_eq!(classified.live.len(), 1);
    assert!(classified.upcoming.is_empty());
    assert!(classified.completed.is_empty());
    assert_eq!(classified.unknown, 0);

    let out = Renderer::new(true).render_classified(&classified);
    assert!(out.contains("45'"), "detail line missing from: {out}");
    assert!(out.contains("Chelsea 1-0 Arsenal"));
}

/// Zero events is a valid, reportable empty set, not an error.
#[test]
fn scenario_empty_envelope_reports_no_matches() {
    let body = r#"{ "events": [] }"#;

    let matches = build_matches(decode_scoreboard(body, URL).unwrap());
    let classified = classify(matches);

    assert!(classified.is_empty());
    let out = Renderer::new(true).render_classified(&classified);
    assert_eq!(out, "No matches found\n");
}

/// Resolver precedence over a realistic directory: "MUN" resolves to the
/// abbreviation-exact entry and its id drives the follow-up fetch.
#[test]
fn scenario_team_query_resolves_directory_entry() {
    let body = r#"{
        "sports": [{ "leagues": [{ "teams": [
            { "team": { "id": "382", "displayName": "Liverpool", "abbreviation": "LIV" } },
            { "team": { "id": "360", "displayName": "Manchester United", "abbreviation": "MUN" } },
            { "team": { "id": "361", "displayName": "Manchester City", "abbreviation": "MNC" } }
        ] }] }]
    }"#;

    let directory = matchday::data_fetcher::builder::build_team_directory(
        decode_team_directory(body, URL).unwrap(),
    );
    let resolved = resolve_team("MUN", &directory).unwrap();
    assert_eq!(resolved.id, "360");
    assert_eq!(resolved.display_name, "Manchester United");
}

/// Malformed body surfaces a decode error with a bounded sample.
#[test]
fn scenario_malformed_body_yields_bounded_decode_error() {
    let mut body = String::from("<html>bad gateway ");
    body.push_str(&"x".repeat(4000));

    let err = decode_scoreboard(&body, URL).unwrap_err();
    match err {
        AppError::Decode { sample, .. } => {
            assert!(sample.len() <= 1000);
            assert!(sample.starts_with("<html>bad gateway"));
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

/// Bucket counts reconcile with the envelope's event count for a mixed
/// envelope that includes an unknown state token.
#[test]
fn bucket_counts_reconcile_with_event_count() {
    let body = envelope_json(&[
        event_json("1", "pre", "Sat 20:00", "Arsenal", "Chelsea"),
        event_json("2", "in", "12'", "Liverpool", "Everton"),
        event_json("3", "post", "FT", "Fulham", "Brentford"),
        event_json("4", "suspended", "Suspended", "Leeds", "Burnley"),
        event_json("5", "in", "HT", "Spurs", "West Ham"),
    ]);

    let envelope = decode_scoreboard(&body, URL).unwrap();
    let event_count = envelope.events.len();
    let classified = classify(build_matches(envelope));

    assert_eq!(
        classified.upcoming.len()
            + classified.live.len()
            + classified.completed.len()
            + classified.unknown,
        event_count
    );
    assert_eq!(classified.unknown, 1);
}

/// Degenerate competitor lists survive the whole pipeline: retained,
/// flagged unresolved, and renderable.
#[test]
fn degenerate_competitors_survive_to_render() {
    let body = r#"{
        "events": [{
            "id": "401",
            "status": { "type": { "state": "post", "detail": "FT" } },
            "competitions": [{
                "competitors": [
                    { "score": "2", "team": { "displayName": "Arsenal" } }
                ]
            }]
        }]
    }"#;

    let matches = build_matches(decode_scoreboard(body, URL).unwrap());
    assert_eq!(matches.len(), 1);
    assert!(!matches[0].sides_resolved());

    let classified = classify(matches);
    assert_eq!(classified.completed.len(), 1);

    let out = Renderer::new(true).render_classified(&classified);
    assert!(out.contains("(sides tbc)"));
}

/// League filtering through the whole pipeline is idempotent.
#[test]
fn league_filter_idempotent_over_built_matches() {
    let body = envelope_json(&[
        event_json("1", "post", "FT", "Arsenal", "Chelsea"),
        event_json("2", "post", "FT", "Bayern", "Dortmund"),
    ]);
    let options = FilterOptions {
        league: Some("arsenal at chelsea".to_string()),
        ..Default::default()
    };

    let matches = build_matches(decode_scoreboard(&body, URL).unwrap());
    let once = apply_filters(matches, &options);
    let twice = apply_filters(once.clone(), &options);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}
