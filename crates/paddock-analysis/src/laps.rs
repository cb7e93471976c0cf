//! Lap-time series and distributions over quick laps.

use paddock_errors::Outcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LapAnalysisConfig;
use crate::session::DriverSession;
use crate::stats::BoxSummary;

/// One point of a lap-time chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapPoint {
    /// Lap number.
    pub lap_number: u32,
    /// Lap time, seconds.
    pub lap_time: f64,
    /// Tyre compound, when the session recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<String>,
}

/// A driver's quick laps in session order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapSeries {
    /// Driver abbreviation.
    pub driver: String,
    /// Team name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Fastest lap time of the session.
    pub fastest: f64,
    /// Quick laps.
    pub laps: Vec<LapPoint>,
}

/// A driver's lap-time distribution over quick laps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapDistribution {
    /// Driver abbreviation.
    pub driver: String,
    /// Team name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Box-plot summary of the quick lap times.
    pub summary: BoxSummary,
    /// The same laps split by tyre compound, in order of first use. Laps
    /// without a compound count toward `summary` only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_compound: Vec<CompoundDistribution>,
}

/// Quick lap times of one driver on one tyre compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundDistribution {
    /// Compound name as recorded.
    pub compound: String,
    /// Box-plot summary of the laps on this compound.
    pub summary: BoxSummary,
}

/// Quick-lap series of every driver that has any, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapSeriesReport {
    /// One series per driver.
    pub series: Vec<LapSeries>,
}

/// Lap-time distributions of every driver with quick laps, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// One distribution per driver.
    pub distributions: Vec<LapDistribution>,
}

/// Quick-lap series for every driver that has any.
pub fn lap_series(sessions: &[DriverSession], config: &LapAnalysisConfig) -> Outcome<LapSeriesReport> {
    let series: Vec<LapSeries> = sessions
        .iter()
        .filter_map(|session| {
            let fastest = session.fastest_time()?;
            let laps: Vec<LapPoint> = session
                .quick_laps(config.quick_lap_threshold)
                .into_iter()
                .filter_map(|lap| {
                    lap.valid_time().map(|lap_time| LapPoint {
                        lap_number: lap.lap_number,
                        lap_time,
                        compound: lap.compound.clone(),
                    })
                })
                .collect();
            if laps.is_empty() {
                debug!(driver = %session.driver, "No quick laps; skipping driver");
                return None;
            }
            Some(LapSeries {
                driver: session.driver.clone(),
                team: session.team.clone(),
                fastest,
                laps,
            })
        })
        .collect();

    if series.is_empty() {
        return Outcome::insufficient_data("no driver has a quick lap");
    }
    Outcome::Ok(LapSeriesReport { series })
}

/// Box summaries of quick lap times, one per driver that has any.
pub fn lap_time_distribution(
    sessions: &[DriverSession],
    config: &LapAnalysisConfig,
) -> Outcome<DistributionReport> {
    lap_series(sessions, config).map(|report| DistributionReport {
        distributions: report
            .series
            .into_iter()
            .filter_map(|s| {
                let times: Vec<f64> = s.laps.iter().map(|p| p.lap_time).collect();
                BoxSummary::from_samples(&times, config.iqr_factor).map(|summary| LapDistribution {
                    by_compound: compound_breakdown(&s.laps, config.iqr_factor),
                    driver: s.driver,
                    team: s.team,
                    summary,
                })
            })
            .collect(),
    })
}

fn compound_breakdown(laps: &[LapPoint], iqr_factor: f64) -> Vec<CompoundDistribution> {
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    for lap in laps {
        let Some(compound) = lap.compound.as_deref() else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == compound) {
            Some((_, times)) => times.push(lap.lap_time),
            None => groups.push((compound, vec![lap.lap_time])),
        }
    }
    groups
        .into_iter()
        .filter_map(|(compound, times)| {
            BoxSummary::from_samples(&times, iqr_factor).map(|summary| CompoundDistribution {
                compound: compound.to_string(),
                summary,
            })
        })
        .collect()
}
