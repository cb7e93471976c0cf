//! Session-level inputs: every lap a driver set, and season results.

use serde::{Deserialize, Serialize};

/// One timed lap in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLap {
    /// Lap number within the session, starting at 1.
    pub lap_number: u32,
    /// Lap time in seconds; `None` for laps without a valid time.
    #[serde(default)]
    pub lap_time: Option<f64>,
    /// Speed samples of the lap, km/h. May be empty.
    #[serde(default)]
    pub speed: Vec<f64>,
    /// Tyre compound the lap was set on, e.g. `SOFT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<String>,
}

impl SessionLap {
    /// A lap with a time and no speed trace.
    pub fn timed(lap_number: u32, lap_time: f64) -> Self {
        Self {
            lap_number,
            lap_time: Some(lap_time),
            speed: Vec::new(),
            compound: None,
        }
    }

    /// Sets the tyre compound.
    pub fn with_compound(mut self, compound: impl Into<String>) -> Self {
        self.compound = Some(compound.into());
        self
    }

    /// Attaches a speed trace.
    pub fn with_speed(mut self, speed: Vec<f64>) -> Self {
        self.speed = speed;
        self
    }

    /// The lap time, if present, finite and positive.
    pub fn valid_time(&self) -> Option<f64> {
        self.lap_time.filter(|t| t.is_finite() && *t > 0.0)
    }
}

/// All laps of one driver in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSession {
    /// Driver abbreviation.
    pub driver: String,
    /// Team name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Laps in session order.
    #[serde(default)]
    pub laps: Vec<SessionLap>,
}

impl DriverSession {
    /// Creates a session for `driver` with the given laps.
    pub fn new(driver: impl Into<String>, laps: Vec<SessionLap>) -> Self {
        Self {
            driver: driver.into(),
            team: None,
            laps,
        }
    }

    /// Sets the team name.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// The driver's fastest valid lap time.
    pub fn fastest_time(&self) -> Option<f64> {
        self.laps
            .iter()
            .filter_map(SessionLap::valid_time)
            .reduce(f64::min)
    }

    /// Laps faster than `threshold` times the fastest lap, in session order.
    pub fn quick_laps(&self, threshold: f64) -> Vec<&SessionLap> {
        let Some(fastest) = self.fastest_time() else {
            return Vec::new();
        };
        let cutoff = fastest * threshold;
        self.laps
            .iter()
            .filter(|lap| lap.valid_time().is_some_and(|t| t < cutoff))
            .collect()
    }
}

/// Points scored by one driver in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPoints {
    /// Driver abbreviation.
    pub driver: String,
    /// Points awarded.
    pub points: f64,
}

/// Published results of one championship round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number in the season.
    pub round: u32,
    /// Event name, for labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Points per classified driver. Empty for rounds not yet run.
    #[serde(default)]
    pub results: Vec<DriverPoints>,
}
