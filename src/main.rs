use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchday::analyze::{AnalysisInput, MatchAnalyzer};
use matchday::calculate::filter_within_days;
use matchday::config::AppConfig;
use matchday::ingest::{load_events_or_empty, load_fixture, load_season_events};
use matchday::models::{form_string, MatchEvent, MatchReport, Prediction, SeasonSpan, TeamId};
use matchday::normalize::{normalize_all, normalize_event};

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Match predictions from recent team history and head-to-head records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./matchday.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one fixture from already-fetched payloads
    Analyze {
        /// Fixture payload (first event is analyzed)
        #[arg(long)]
        fixture: PathBuf,

        /// Home team's recent results payload
        #[arg(long)]
        home_history: PathBuf,

        /// Away team's recent results payload
        #[arg(long)]
        away_history: PathBuf,

        /// League season payload; "PRIMARY,SECONDARY" tries the second if the first has no events
        #[arg(long = "league-season")]
        league_seasons: Vec<String>,

        /// League past results payload
        #[arg(long)]
        league_past: Option<PathBuf>,

        /// Print a plain-text summary instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Recent finished and upcoming matches for one team
    Team {
        /// Team id as used by the provider
        #[arg(long)]
        team_id: String,

        /// Team's last results payload
        #[arg(long)]
        last: PathBuf,

        /// Team's next fixtures payload
        #[arg(long)]
        next: Option<PathBuf>,
    },

    /// Print the season labels to fetch for head-to-head
    Seasons {
        /// Current season label, e.g. 2024-2025
        #[arg(long)]
        current: String,

        /// Prior seasons to include (defaults to the configured depth)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Finished league results within a trailing window
    Recent {
        /// League past results payload
        #[arg(long)]
        league_past: PathBuf,

        /// Window in days (defaults to the configured window)
        #[arg(long)]
        days: Option<u32>,
    },
}

fn load_events(path: &Path) -> Vec<MatchEvent> {
    normalize_all(&load_events_or_empty(path))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

fn fmt_pct(value: Option<u32>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{}%", v))
}

fn print_prediction(title: &str, p: &Prediction) {
    println!(
        "{:<10} YES {:>4}  NO {:>4}  pick {:<8} conf {}",
        title,
        fmt_pct(p.yes_pct),
        fmt_pct(p.no_pct),
        p.pick,
        p.confidence
    );
}

fn print_match_list(title: &str, events: &[MatchEvent], limit: usize, empty: &str) {
    println!("\n{}", title);
    if events.is_empty() {
        println!("  {}", empty);
        return;
    }
    for e in events.iter().take(limit) {
        println!(
            "  {:<40} {:<12} {}",
            e.display_name(),
            e.date.as_deref().unwrap_or(""),
            e.score_line()
        );
    }
}

fn print_report_text(report: &MatchReport, limit: usize) {
    println!("=== {} ===", report.title);
    println!(
        "{} {} {}",
        report.date.as_deref().unwrap_or(""),
        report.time.as_deref().unwrap_or(""),
        report.league_name.as_deref().unwrap_or("")
    );
    println!(
        "Data: {} (based on last {} finished matches: {} home + {} away)",
        report.data_quality,
        report.samples.total(),
        report.samples.home,
        report.samples.away
    );

    println!();
    print_prediction("Over 2.5", &report.predictions.over_25);
    print_prediction("BTTS", &report.predictions.btts);
    println!(
        "Avg total goals (match): {}",
        fmt_opt(report.match_average_total_goals)
    );

    for team in [&report.home, &report.away] {
        println!(
            "\n{}: form {}  GF {} / GA {}  clean sheets {}",
            team.name.as_deref().unwrap_or("?"),
            form_string(&team.form),
            fmt_opt(team.goals.goals_for),
            fmt_opt(team.goals.goals_against),
            fmt_pct(team.clean_sheet_pct)
        );
        println!(
            "  home games {}: GF {} / GA {}   away games {}: GF {} / GA {}",
            team.split.home.matches,
            fmt_opt(team.split.home.goals_for),
            fmt_opt(team.split.home.goals_against),
            team.split.away.matches,
            fmt_opt(team.split.away.goals_for),
            fmt_opt(team.split.away.goals_against)
        );
    }

    print_match_list(
        "Head-to-head",
        &report.head_to_head,
        limit,
        "No league head-to-head found.",
    );
    print_match_list(
        "Recent league results",
        &report.recent_results,
        limit,
        "No finished matches in the recent window.",
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    // Initialize tracing
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting matchday v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = MatchAnalyzer::new(config.analysis.clone());
    let pretty = config.output.pretty;

    match cli.command {
        Commands::Analyze {
            fixture,
            home_history,
            away_history,
            league_seasons,
            league_past,
            text,
        } => {
            let raw_fixture = load_fixture(&fixture)
                .with_context(|| format!("Failed to load fixture from {}", fixture.display()))?;
            let fixture = normalize_event(&raw_fixture);

            let home = load_events(&home_history);
            let away = load_events(&away_history);

            let expected = analyzer.season_chain(&fixture);
            if !expected.is_empty() && league_seasons.len() < expected.len() {
                tracing::warn!(
                    "Head-to-head expects seasons {:?}, got {} season payload(s)",
                    expected,
                    league_seasons.len()
                );
            }

            let mut season_events = Vec::new();
            for spec in &league_seasons {
                let candidates: Vec<PathBuf> = spec.split(',').map(PathBuf::from).collect();
                let refs: Vec<&Path> = candidates.iter().map(PathBuf::as_path).collect();
                season_events.extend(normalize_all(&load_season_events(&refs)));
            }

            let past = league_past.as_deref().map(load_events).unwrap_or_default();

            let report = analyzer.analyze(AnalysisInput {
                fixture: &fixture,
                home_history: &home,
                away_history: &away,
                league_season_events: &season_events,
                league_past: &past,
            });

            if text {
                print_report_text(&report, config.output.display_limit);
            } else {
                print_json(&report, pretty)?;
            }
        }

        Commands::Team { team_id, last, next } => {
            let team_id = TeamId::from(team_id);
            let last = load_events(&last);
            let next = next.as_deref().map(load_events).unwrap_or_default();

            let overview = analyzer.team_overview(&team_id, &last, &next);
            print_json(&overview, pretty)?;
        }

        Commands::Seasons { current, depth } => {
            let depth = depth.unwrap_or(config.analysis.season_depth);
            let span = SeasonSpan::walk(&current, depth);
            if span.prior.len() < depth {
                tracing::warn!(
                    "Stopped after {} prior season(s); '{}' is not a YYYY-YYYY chain",
                    span.prior.len(),
                    current
                );
            }
            print_json(&span.labels(), pretty)?;
        }

        Commands::Recent { league_past, days } => {
            let days = days.unwrap_or(config.analysis.recent_days);
            let events = load_events(&league_past);
            let recent = filter_within_days(&events, days);
            tracing::info!("{} finished result(s) in the last {} day(s)", recent.len(), days);
            print_json(&recent, pretty)?;
        }
    }

    Ok(())
}
