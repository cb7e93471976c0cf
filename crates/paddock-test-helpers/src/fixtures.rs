//! Synthetic laps with exactly known timing.
//!
//! A fixture lap runs around a circle of the given length. Elapsed time is
//! piecewise linear in distance: constant speed inside each official sector,
//! reaching the cumulative sector times exactly at the sector boundaries.
//! That makes every expected delta computable by hand.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use paddock_telemetry::{DriverLapRecord, LapTelemetry, SectorTimes};

/// Builder for a synthetic [`DriverLapRecord`].
///
/// ```
/// use paddock_test_helpers::fixtures::LapFixture;
///
/// let record = LapFixture::new("VER", 20.0, 35.0, 50.0).build();
/// assert_eq!(record.telemetry.len(), 501);
/// assert_eq!(record.lap_time, Some(50.0));
/// ```
#[derive(Debug, Clone)]
pub struct LapFixture {
    driver: String,
    team: Option<String>,
    lap_length: f64,
    samples: usize,
    boundary_fractions: (f64, f64),
    cumulative: [f64; 3],
    lap_time: Option<f64>,
    report_sectors: bool,
    include_position: bool,
}

impl LapFixture {
    /// A 5 km lap sampled every 10 m, with sector boundaries at 40 % and
    /// 70 % of the distance and the given cumulative sector times.
    pub fn new(driver: &str, s1: f64, s2: f64, s3: f64) -> Self {
        Self {
            driver: driver.to_string(),
            team: None,
            lap_length: 5_000.0,
            samples: 501,
            boundary_fractions: (0.4, 0.7),
            cumulative: [s1, s2, s3],
            lap_time: Some(s3),
            report_sectors: true,
            include_position: true,
        }
    }

    /// Overrides the lap length in meters.
    pub fn lap_length(mut self, meters: f64) -> Self {
        self.lap_length = meters;
        self
    }

    /// Overrides the number of telemetry samples.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Moves where this driver's telemetry crosses the sector boundaries.
    pub fn boundary_fractions(mut self, s1: f64, s2: f64) -> Self {
        self.boundary_fractions = (s1, s2);
        self
    }

    /// Overrides the official lap time (defaults to the cumulative S3 time).
    pub fn lap_time(mut self, lap_time: Option<f64>) -> Self {
        self.lap_time = lap_time;
        self
    }

    /// Drops the official sector splits from the record.
    pub fn without_sectors(mut self) -> Self {
        self.report_sectors = false;
        self
    }

    /// Drops the X/Y position columns.
    pub fn without_position(mut self) -> Self {
        self.include_position = false;
        self
    }

    /// Sets the team name.
    pub fn team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    /// Elapsed time at `distance` on this fixture's lap.
    pub fn time_at(&self, distance: f64) -> f64 {
        let [c1, c2, c3] = self.cumulative;
        let b1 = self.boundary_fractions.0 * self.lap_length;
        let b2 = self.boundary_fractions.1 * self.lap_length;
        if distance <= b1 {
            c1 * distance / b1
        } else if distance <= b2 {
            c1 + (c2 - c1) * (distance - b1) / (b2 - b1)
        } else {
            c2 + (c3 - c2) * (distance - b2) / (self.lap_length - b2)
        }
    }

    /// Sector speed in km/h at `distance`.
    pub fn speed_at(&self, distance: f64) -> f64 {
        let [c1, c2, c3] = self.cumulative;
        let b1 = self.boundary_fractions.0 * self.lap_length;
        let b2 = self.boundary_fractions.1 * self.lap_length;
        let meters_per_second = if distance <= b1 {
            b1 / c1
        } else if distance <= b2 {
            (b2 - b1) / (c2 - c1)
        } else {
            (self.lap_length - b2) / (c3 - c2)
        };
        meters_per_second * 3.6
    }

    /// The telemetry trace alone.
    pub fn telemetry(&self) -> LapTelemetry {
        let last = self.samples.saturating_sub(1).max(1) as f64;
        let distance: Vec<f64> = (0..self.samples)
            .map(|i| self.lap_length * i as f64 / last)
            .collect();
        let time = distance.iter().map(|&d| self.time_at(d)).collect();
        let speed = distance.iter().map(|&d| self.speed_at(d)).collect();

        let (x, y) = if self.include_position {
            let (x, y) = distance
                .iter()
                .map(|&d| circuit_point(self.lap_length, d))
                .unzip();
            (Some(x), Some(y))
        } else {
            (None, None)
        };

        let mut channels = BTreeMap::new();
        channels.insert("speed".to_string(), speed);
        channels.insert("throttle".to_string(), vec![100.0; distance.len()]);

        LapTelemetry {
            distance,
            time,
            x,
            y,
            channels,
        }
    }

    /// The complete driver record.
    pub fn build(&self) -> DriverLapRecord {
        let [c1, c2, c3] = self.cumulative;
        let sectors = if self.report_sectors {
            SectorTimes::from_cumulative(c1, c2, c3)
        } else {
            SectorTimes::missing()
        };
        DriverLapRecord {
            driver: self.driver.clone(),
            team: self.team.clone(),
            lap_time: self.lap_time,
            sectors,
            telemetry: self.telemetry(),
        }
    }
}

/// Position on a circular circuit of `lap_length` meters after `distance`.
pub fn circuit_point(lap_length: f64, distance: f64) -> (f64, f64) {
    let radius = lap_length / TAU;
    let angle = TAU * distance / lap_length;
    (radius * angle.cos(), radius * angle.sin())
}
