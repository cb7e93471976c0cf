//! Championship points progression across a season.

use paddock_errors::Outcome;
use serde::{Deserialize, Serialize};

use crate::session::RoundResult;

/// A driver's running total after one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTotal {
    /// Round number.
    pub round: u32,
    /// Event name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Points scored in this round.
    pub scored: f64,
    /// Points accumulated up to and including this round.
    pub total: f64,
}

/// One driver's points progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsProgression {
    /// Driver abbreviation.
    pub driver: String,
    /// One entry per round with published results, in round order.
    pub rounds: Vec<RoundTotal>,
}

impl PointsProgression {
    /// Points after the last counted round.
    pub fn total(&self) -> f64 {
        self.rounds.last().map_or(0.0, |r| r.total)
    }
}

/// Points progressions of the requested drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsReport {
    /// Progressions in request order (or first appearance).
    pub drivers: Vec<PointsProgression>,
}

/// Cumulative points per driver.
///
/// Rounds are taken in round-number order; rounds without results are
/// skipped. A driver absent from a round's results scores zero in it. When
/// `drivers` is empty, every driver that appears in any result is included,
/// in order of first appearance.
pub fn cumulative_points(rounds: &[RoundResult], drivers: &[String]) -> Outcome<PointsReport> {
    let mut published: Vec<&RoundResult> = rounds.iter().filter(|r| !r.results.is_empty()).collect();
    if published.is_empty() {
        return Outcome::insufficient_data("no round has published results");
    }
    published.sort_by_key(|r| r.round);

    let drivers: Vec<String> = if drivers.is_empty() {
        let mut seen: Vec<String> = Vec::new();
        for result in published.iter().flat_map(|r| &r.results) {
            if !seen.contains(&result.driver) {
                seen.push(result.driver.clone());
            }
        }
        seen
    } else {
        drivers.to_vec()
    };

    let progressions = drivers
        .into_iter()
        .map(|driver| {
            let mut total = 0.0;
            let rounds = published
                .iter()
                .map(|round| {
                    let scored = round
                        .results
                        .iter()
                        .find(|r| r.driver == driver)
                        .map_or(0.0, |r| r.points);
                    total += scored;
                    RoundTotal {
                        round: round.round,
                        name: round.name.clone(),
                        scored,
                        total,
                    }
                })
                .collect();
            PointsProgression { driver, rounds }
        })
        .collect();
    Outcome::Ok(PointsReport {
        drivers: progressions,
    })
}
