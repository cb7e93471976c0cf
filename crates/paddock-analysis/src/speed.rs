//! Team speed profiles: average speed against top speed.
//!
//! Each team is placed by the mean average speed and mean top speed of its
//! drivers' quickest laps. High top speed with a low average points to a low
//! downforce setup; the reverse to a high downforce one.

use std::collections::BTreeMap;

use paddock_errors::Outcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LapAnalysisConfig;
use crate::session::{DriverSession, SessionLap};
use crate::stats::{Fences, mean};

/// Speed figures of one lap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapSpeed {
    /// Mean of the lap's speed samples, km/h.
    pub average: f64,
    /// Largest speed sample, km/h.
    pub top: f64,
}

impl LapSpeed {
    /// Speed figures of `lap`; `None` without finite samples or when either
    /// figure is not positive.
    pub fn of(lap: &SessionLap) -> Option<Self> {
        let samples: Vec<f64> = lap.speed.iter().copied().filter(|v| v.is_finite()).collect();
        let average = mean(&samples)?;
        let top = samples.iter().copied().reduce(f64::max)?;
        (average > 0.0 && top > 0.0).then_some(Self { average, top })
    }
}

/// A team's position on the speed chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSpeed {
    /// Team name (the driver abbreviation for drivers without a team).
    pub team: String,
    /// Mean average speed over the retained laps, km/h.
    pub average_speed: f64,
    /// Mean top speed over the retained laps, km/h.
    pub top_speed: f64,
    /// Laps retained after outlier rejection.
    pub laps: usize,
    /// Laps dropped as outliers.
    pub outliers: usize,
}

/// Team speed chart with its centre point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedProfile {
    /// Teams in order of first appearance.
    pub teams: Vec<TeamSpeed>,
    /// Mean of the team positions.
    pub centroid: LapSpeed,
}

/// Builds the team speed chart from each driver's quickest laps.
pub fn team_speed_profile(
    sessions: &[DriverSession],
    config: &LapAnalysisConfig,
) -> Outcome<SpeedProfile> {
    let mut order: Vec<String> = Vec::new();
    let mut per_team: BTreeMap<String, Vec<LapSpeed>> = BTreeMap::new();

    for session in sessions {
        let team = session.team.clone().unwrap_or_else(|| session.driver.clone());
        let mut quick = session.quick_laps(config.quick_lap_threshold);
        quick.sort_by(|a, b| {
            let a = a.valid_time().unwrap_or(f64::INFINITY);
            let b = b.valid_time().unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        });
        let speeds: Vec<LapSpeed> = quick
            .into_iter()
            .take(config.fastest_laps_per_driver)
            .filter_map(LapSpeed::of)
            .collect();
        if speeds.is_empty() {
            debug!(driver = %session.driver, "No usable speed samples; skipping driver");
            continue;
        }
        if !per_team.contains_key(&team) {
            order.push(team.clone());
        }
        per_team.entry(team).or_default().extend(speeds);
    }

    let teams: Vec<TeamSpeed> = order
        .into_iter()
        .filter_map(|team| {
            let laps = per_team.remove(&team)?;
            summarize_team(team, &laps, config.iqr_factor)
        })
        .collect();

    let averages: Vec<f64> = teams.iter().map(|t| t.average_speed).collect();
    let tops: Vec<f64> = teams.iter().map(|t| t.top_speed).collect();
    match (mean(&averages), mean(&tops)) {
        (Some(average), Some(top)) => Outcome::Ok(SpeedProfile {
            teams,
            centroid: LapSpeed { average, top },
        }),
        _ => Outcome::insufficient_data("no team has laps with speed telemetry"),
    }
}

fn summarize_team(team: String, laps: &[LapSpeed], iqr_factor: f64) -> Option<TeamSpeed> {
    let averages: Vec<f64> = laps.iter().map(|l| l.average).collect();
    let tops: Vec<f64> = laps.iter().map(|l| l.top).collect();
    let average_fences = Fences::of(&averages, iqr_factor)?;
    let top_fences = Fences::of(&tops, iqr_factor)?;

    let kept: Vec<&LapSpeed> = laps
        .iter()
        .filter(|l| average_fences.contains(l.average) && top_fences.contains(l.top))
        .collect();
    let average_speed = mean(&kept.iter().map(|l| l.average).collect::<Vec<_>>());
    let top_speed = mean(&kept.iter().map(|l| l.top).collect::<Vec<_>>());
    let (Some(average_speed), Some(top_speed)) = (average_speed, top_speed) else {
        debug!(team = %team, "Every lap rejected as an outlier; skipping team");
        return None;
    };

    Some(TeamSpeed {
        team,
        average_speed,
        top_speed,
        laps: kept.len(),
        outliers: laps.len() - kept.len(),
    })
}
