//! Match analysis pipeline.
//!
//! Runs every calculation over the inputs the caller fetched for one fixture
//! and assembles a [`MatchReport`]. The caller supplies:
//! - the fixture itself
//! - each team's recent history (most recent first)
//! - league events for every season of [`MatchAnalyzer::season_chain`]
//! - the league's past results
//!
//! Any of the lists may be empty; the report degrades to lower data quality
//! and undetermined predictions instead of failing.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::calculate::{
    average_for_and_against, average_total_goals, btts_percentage, clean_sheet_percentage,
    combine_average, data_quality, extract_head_to_head_at, filter_within_days_at, form_sequence,
    home_away_split, over_25_percentage, score_prediction,
};
use crate::config::AnalysisConfig;
use crate::models::{
    build_season_chain, MarketPredictions, MatchEvent, MatchReport, SampleSizes, TeamId,
    TeamOverview, TeamSummary,
};
use crate::normalize::{take_finished, take_upcoming};

/// Everything the caller fetched for one fixture.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub fixture: &'a MatchEvent,
    pub home_history: &'a [MatchEvent],
    pub away_history: &'a [MatchEvent],
    /// Union of league events across the season chain
    pub league_season_events: &'a [MatchEvent],
    pub league_past: &'a [MatchEvent],
}

/// Builds match reports and team overviews.
#[derive(Debug, Clone, Default)]
pub struct MatchAnalyzer {
    config: AnalysisConfig,
}

impl MatchAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Season labels the caller should fetch league events for.
    ///
    /// Empty when head-to-head cannot be reconstructed: the fixture needs a
    /// league, a season and both team ids.
    pub fn season_chain(&self, fixture: &MatchEvent) -> Vec<String> {
        match (
            &fixture.league_id,
            &fixture.season,
            &fixture.home_team_id,
            &fixture.away_team_id,
        ) {
            (Some(_), Some(season), Some(_), Some(_)) => {
                build_season_chain(season, self.config.season_depth)
            }
            _ => Vec::new(),
        }
    }

    /// Summary of one team from its history, limited to the form window.
    pub fn team_summary(
        &self,
        team_id: Option<&TeamId>,
        name: Option<&str>,
        history: &[MatchEvent],
    ) -> TeamSummary {
        let window = match team_id {
            Some(_) => take_finished(history, self.config.form_window),
            None => Vec::new(),
        };

        let (form, goals, clean_sheet_pct, split) = match team_id {
            Some(id) => (
                form_sequence(&window, id),
                average_for_and_against(&window, id),
                clean_sheet_percentage(&window, id),
                home_away_split(&window, id),
            ),
            None => Default::default(),
        };

        TeamSummary {
            team_id: team_id.cloned(),
            name: name.map(str::to_string),
            form,
            goals,
            average_total_goals: average_total_goals(&window),
            clean_sheet_pct,
            split,
            over_25_pct: over_25_percentage(&window),
            btts_pct: btts_percentage(&window),
            last_matches: window,
        }
    }

    /// Analyze a fixture against the wall clock.
    pub fn analyze(&self, input: AnalysisInput<'_>) -> MatchReport {
        self.analyze_at(input, Utc::now())
    }

    /// Analyze a fixture as of `now`.
    pub fn analyze_at(&self, input: AnalysisInput<'_>, now: DateTime<Utc>) -> MatchReport {
        let fixture = input.fixture;
        let now_ms = now.timestamp_millis();
        let title = fixture.display_name();

        info!("Analyzing {} ({})", title, fixture.id);

        if fixture.home_team_id.is_none() || fixture.away_team_id.is_none() {
            warn!("Fixture {} is missing a team id, team stats will be empty", fixture.id);
        }

        let home = self.team_summary(
            fixture.home_team_id.as_ref(),
            fixture.home_team.as_deref(),
            input.home_history,
        );
        let away = self.team_summary(
            fixture.away_team_id.as_ref(),
            fixture.away_team.as_deref(),
            input.away_history,
        );

        let samples = SampleSizes {
            home: home.sample_size(),
            away: away.sample_size(),
        };
        let quality = data_quality(samples.home, samples.away);
        debug!(
            "Form windows: home {}/{}, away {}/{} -> data quality {}",
            samples.home, self.config.form_window, samples.away, self.config.form_window, quality
        );

        let predictions = MarketPredictions {
            over_25: score_prediction(home.over_25_pct, away.over_25_pct, quality),
            btts: score_prediction(home.btts_pct, away.btts_pct, quality),
        };
        let match_average_total_goals =
            combine_average(home.average_total_goals, away.average_total_goals);

        let seasons_covered = self.season_chain(fixture);
        let head_to_head = match (&fixture.home_team_id, &fixture.away_team_id) {
            (Some(h), Some(a)) if !seasons_covered.is_empty() => {
                let meetings = extract_head_to_head_at(
                    input.league_season_events,
                    h,
                    a,
                    self.config.h2h_years,
                    now_ms,
                );
                debug!(
                    "Head-to-head: {} meetings across {} seasons",
                    meetings.len(),
                    seasons_covered.len()
                );
                meetings.into_iter().filter(MatchEvent::is_finished).collect()
            }
            _ => {
                if fixture.season.is_none() {
                    warn!("Fixture {} has no season, skipping head-to-head", fixture.id);
                }
                Vec::new()
            }
        };

        let recent_results = if fixture.league_id.is_some() {
            filter_within_days_at(input.league_past, self.config.recent_days, now_ms)
        } else {
            Vec::new()
        };
        debug!(
            "Recent league results in last {} days: {}",
            self.config.recent_days,
            recent_results.len()
        );

        info!(
            "Report ready: quality {}, over 2.5 {}, btts {}",
            quality, predictions.over_25.pick, predictions.btts.pick
        );

        MatchReport {
            event_id: fixture.id.clone(),
            title,
            date: fixture.date.clone(),
            time: fixture.time.clone(),
            venue: fixture.venue.clone(),
            league_name: fixture.league_name.clone(),
            season: fixture.season.clone(),
            computed_at: now,
            data_quality: quality,
            samples,
            predictions,
            match_average_total_goals,
            home,
            away,
            seasons_covered,
            head_to_head,
            recent_results,
        }
    }

    /// A team's latest finished matches and next fixtures.
    pub fn team_overview(
        &self,
        team_id: &TeamId,
        last: &[MatchEvent],
        next: &[MatchEvent],
    ) -> TeamOverview {
        let finished = take_finished(last, self.config.team_history_limit);
        let upcoming = take_upcoming(next, self.config.team_upcoming_limit);
        let form = form_sequence(&finished, team_id);

        info!(
            "Team {}: {} finished, {} upcoming",
            team_id,
            finished.len(),
            upcoming.len()
        );

        TeamOverview {
            team_id: team_id.clone(),
            finished,
            upcoming,
            form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confidence, DataQuality, FormResult, Pick};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn fixture() -> MatchEvent {
        MatchEvent::new("9000", "10", "20")
            .with_league("4328", "2024-2025")
            .with_team_names("Home FC", "Away FC")
            .with_date("2025-01-12")
    }

    /// Home team: 3 of 5 with 3+ goals, 4 clean sheets, one upcoming in front.
    fn home_history() -> Vec<MatchEvent> {
        vec![
            MatchEvent::new("h0", "10", "99"),
            MatchEvent::new("h1", "10", "31").with_score(3, 0),
            MatchEvent::new("h2", "32", "10").with_score(0, 4),
            MatchEvent::new("h3", "10", "33").with_score(1, 0),
            MatchEvent::new("h4", "34", "10").with_score(2, 1),
            MatchEvent::new("h5", "10", "35").with_score(0, 0),
            MatchEvent::new("h6", "10", "36").with_score(5, 5),
        ]
    }

    /// Away team: 2 of 5 with 3+ goals.
    fn away_history() -> Vec<MatchEvent> {
        vec![
            MatchEvent::new("a1", "20", "41").with_score(2, 1),
            MatchEvent::new("a2", "42", "20").with_score(1, 0),
            MatchEvent::new("a3", "20", "43").with_score(1, 1),
            MatchEvent::new("a4", "44", "20").with_score(0, 3),
            MatchEvent::new("a5", "20", "45").with_score(0, 0),
        ]
    }

    fn league_events() -> Vec<MatchEvent> {
        vec![
            MatchEvent::new("m1", "20", "10").with_score(1, 2).with_date("2023-11-05"),
            MatchEvent::new("m2", "10", "20").with_score(0, 0).with_date("2024-04-20"),
            MatchEvent::new("m3", "10", "20").with_date("2025-01-12"),
            MatchEvent::new("m4", "10", "20").with_score(4, 0).with_date("2021-03-01"),
            MatchEvent::new("m5", "10", "30").with_score(1, 0).with_date("2024-05-01"),
        ]
    }

    fn league_past() -> Vec<MatchEvent> {
        vec![
            MatchEvent::new("p1", "50", "51").with_score(1, 0).with_date("2025-01-08"),
            MatchEvent::new("p2", "52", "53").with_score(2, 2).with_date("2024-12-20"),
            MatchEvent::new("p3", "54", "55").with_score(0, 3).with_date("2025-01-09"),
        ]
    }

    #[test]
    fn test_analyze_full_report() {
        let fixture = fixture();
        let (home, away, league, past) =
            (home_history(), away_history(), league_events(), league_past());

        let report = MatchAnalyzer::default().analyze_at(
            AnalysisInput {
                fixture: &fixture,
                home_history: &home,
                away_history: &away,
                league_season_events: &league,
                league_past: &past,
            },
            now(),
        );

        assert_eq!(report.title, "Home FC vs Away FC");
        assert_eq!(report.samples, SampleSizes { home: 5, away: 5 });
        assert_eq!(report.data_quality, DataQuality::High);

        // 60% and 40% -> 50/50
        assert_eq!(report.home.over_25_pct, Some(60));
        assert_eq!(report.away.over_25_pct, Some(40));
        assert_eq!(report.predictions.over_25.yes_pct, Some(50));
        assert_eq!(report.predictions.over_25.pick, Pick::TossUp);
        assert_eq!(report.predictions.over_25.confidence, Confidence::Medium);

        // BTTS: home 1/5 = 20, away 2/5 = 40 -> 30
        assert_eq!(report.predictions.btts.yes_pct, Some(30));
        assert_eq!(report.predictions.btts.pick, Pick::No);
        assert_eq!(report.predictions.btts.confidence, Confidence::High);

        assert_eq!(report.home.clean_sheet_pct, Some(80));
        assert_eq!(
            report.home.form,
            vec![
                FormResult::Win,
                FormResult::Win,
                FormResult::Win,
                FormResult::Loss,
                FormResult::Draw
            ]
        );
        assert_eq!(report.home.last_matches.len(), 5);
        assert_eq!(report.home.last_matches[0].id.as_str(), "h1");

        // home 11/5 = 2.2, away 9/5 = 1.8
        assert_eq!(report.away.average_total_goals, Some(1.8));
        assert_eq!(report.match_average_total_goals, Some(2.0));

        assert_eq!(
            report.seasons_covered,
            vec!["2024-2025", "2023-2024", "2022-2023"]
        );
        let h2h: Vec<&str> = report.head_to_head.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(h2h, vec!["m2", "m1"]);

        let recent: Vec<&str> = report.recent_results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(recent, vec!["p3", "p1"]);
    }

    #[test]
    fn test_analyze_with_no_data() {
        let fixture = MatchEvent::new("9000", "10", "20");

        let report = MatchAnalyzer::default().analyze_at(
            AnalysisInput {
                fixture: &fixture,
                home_history: &[],
                away_history: &[],
                league_season_events: &[],
                league_past: &[],
            },
            now(),
        );

        assert_eq!(report.data_quality, DataQuality::Low);
        assert_eq!(report.predictions.over_25.pick, Pick::Undetermined);
        assert_eq!(report.predictions.btts.confidence, Confidence::Unrated);
        assert_eq!(report.match_average_total_goals, None);
        assert_eq!(report.home.goals.goals_for, None);
        assert_eq!(report.home.split.home.matches, 0);
        assert!(report.seasons_covered.is_empty());
        assert!(report.head_to_head.is_empty());
        assert!(report.recent_results.is_empty());
    }

    #[test]
    fn test_analyze_one_sided_sample() {
        let fixture = fixture();
        let home = home_history();

        let report = MatchAnalyzer::default().analyze_at(
            AnalysisInput {
                fixture: &fixture,
                home_history: &home,
                away_history: &[],
                league_season_events: &[],
                league_past: &[],
            },
            now(),
        );

        assert_eq!(report.data_quality, DataQuality::Low);
        assert_eq!(report.predictions.over_25.yes_pct, Some(60));
        assert_eq!(report.predictions.over_25.pick, Pick::Yes);
        // distance 10 -> 1, LOW -> 0
        assert_eq!(report.predictions.over_25.confidence, Confidence::Low);
        assert_eq!(report.match_average_total_goals, Some(2.2));
    }

    #[test]
    fn test_season_chain_needs_league_and_ids() {
        let analyzer = MatchAnalyzer::default();
        assert_eq!(analyzer.season_chain(&fixture()).len(), 3);

        let mut no_league = fixture();
        no_league.league_id = None;
        assert!(analyzer.season_chain(&no_league).is_empty());

        let mut malformed = fixture();
        malformed.season = Some("2025".to_string());
        assert_eq!(analyzer.season_chain(&malformed), vec!["2025"]);
    }

    #[test]
    fn test_custom_form_window() {
        let analyzer = MatchAnalyzer::new(AnalysisConfig {
            form_window: 3,
            ..AnalysisConfig::default()
        });
        let summary = analyzer.team_summary(Some(&TeamId::from("10")), None, &home_history());
        assert_eq!(summary.sample_size(), 3);
        assert_eq!(summary.over_25_pct, Some(67));
    }

    #[test]
    fn test_team_summary_without_id() {
        let summary = MatchAnalyzer::default().team_summary(None, Some("Ghost"), &home_history());
        assert_eq!(summary.sample_size(), 0);
        assert!(summary.form.is_empty());
        assert_eq!(summary.over_25_pct, None);
        assert_eq!(summary.name.as_deref(), Some("Ghost"));
    }

    #[test]
    fn test_team_overview() {
        let team = TeamId::from("10");
        let next = vec![
            MatchEvent::new("n1", "10", "70"),
            MatchEvent::new("n2", "71", "10").with_score(1, 1),
            MatchEvent::new("n3", "10", "72"),
        ];

        let overview = MatchAnalyzer::default().team_overview(&team, &home_history(), &next);
        assert_eq!(overview.finished.len(), 6);
        assert_eq!(overview.upcoming.len(), 2);
        assert_eq!(overview.form.len(), 6);
        assert_eq!(overview.form[5], FormResult::Draw);
    }
}
