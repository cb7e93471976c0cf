//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use paddock_analysis::{
    ChannelComparison, DistributionReport, LapSeriesReport, PointsReport, SpeedProfile,
};
use paddock_delta::{Correction, DeltaReport};
use paddock_dominance::DominanceReport;
use paddock_errors::Outcome;
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let kind = error.downcast_ref::<CliError>().map_or("other", CliError::kind);
    let error_json = json!({
        "status": "error",
        "message": error.to_string(),
        "type": kind,
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print an engine outcome, rendering the ok payload with `render`.
pub fn print_outcome<T: Serialize>(
    outcome: &Outcome<T>,
    json: bool,
    render: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    match outcome {
        Outcome::Ok(value) => render(value),
        Outcome::InsufficientData { message } => {
            println!("{} {}", "Insufficient data:".yellow().bold(), message);
        }
        Outcome::Error { message } => {
            println!("{} {}", "Computation error:".red().bold(), message);
        }
    }
    Ok(())
}

/// Format a signed gap in seconds
fn format_gap(seconds: f64) -> String {
    format!("{:+.3}s", seconds)
}

pub fn print_delta(report: &DeltaReport) {
    println!(
        "{} {}",
        "Reference:".bold(),
        report.reference_driver.green().bold()
    );
    let boundaries = &report.sector_boundaries;
    if let (Some(s1), Some(s2)) = (boundaries.s1, boundaries.s2) {
        println!("  Sector boundaries: S1 {:.0} m, S2 {:.0} m", s1, s2);
    }
    println!(
        "  Grid: {} points over {:.0} m",
        report.distance.len(),
        report.distance.last().copied().unwrap_or_default()
    );

    for trace in &report.traces {
        let correction = match trace.correction {
            Correction::Reference => "reference".dimmed(),
            Correction::SectorAnchored => "sector anchored".green(),
            Correction::LinearFallback => "linear fallback".yellow(),
        };
        let final_delta = trace.final_delta().unwrap_or_default();
        println!(
            "  {} {:>10}  lap {:.3}s  ({})",
            trace.driver.bold(),
            format_gap(final_delta),
            trace.lap_time,
            correction
        );
    }
}

pub fn print_dominance(report: &DominanceReport) {
    println!(
        "{} {} ({} mini-sectors)",
        "Reference path:".bold(),
        report.reference_driver,
        report.segments.len()
    );
    for segment in &report.segments {
        println!(
            "  {:>2}  {:>6.0}-{:<6.0} m  {}  {:.3}s (+{:.3}s)",
            segment.index + 1,
            segment.start_distance,
            segment.end_distance,
            segment.winner.bold(),
            segment.sector_time,
            segment.margin
        );
    }
    println!("{}", "Wins:".bold());
    for wins in &report.wins {
        println!("  {} {}", wins.driver.bold(), wins.wins);
    }
}

pub fn print_lap_series(report: &LapSeriesReport) {
    for series in &report.series {
        println!(
            "{} fastest {:.3}s, {} quick laps",
            series.driver.bold(),
            series.fastest,
            series.laps.len()
        );
        for lap in &series.laps {
            println!("  lap {:>3}  {:.3}s", lap.lap_number, lap.lap_time);
        }
    }
}

pub fn print_distribution(report: &DistributionReport) {
    println!(
        "{:<6} {:>5} {:>9} {:>9} {:>9} {:>9} {:>9} {:>8}",
        "Driver".bold(),
        "Laps",
        "Min",
        "Q1",
        "Median",
        "Q3",
        "Max",
        "Outliers"
    );
    for entry in &report.distributions {
        let s = &entry.summary;
        println!(
            "{:<6} {:>5} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>8}",
            entry.driver,
            s.count,
            s.min,
            s.q1,
            s.median,
            s.q3,
            s.max,
            s.outliers.len()
        );
        for group in &entry.by_compound {
            let c = &group.summary;
            println!(
                "{:<6} {:>5} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>8}",
                group.compound.dimmed(),
                c.count,
                c.min,
                c.q1,
                c.median,
                c.q3,
                c.max,
                c.outliers.len()
            );
        }
    }
}

pub fn print_speed_profile(profile: &SpeedProfile) {
    println!(
        "{:<24} {:>10} {:>10} {:>5}",
        "Team".bold(),
        "Avg km/h",
        "Top km/h",
        "Laps"
    );
    for team in &profile.teams {
        let quadrant = match (
            team.average_speed >= profile.centroid.average,
            team.top_speed >= profile.centroid.top,
        ) {
            (true, true) => "efficient".green(),
            (true, false) => "high downforce".cyan(),
            (false, true) => "low downforce".yellow(),
            (false, false) => "draggy".red(),
        };
        println!(
            "{:<24} {:>10.1} {:>10.1} {:>5}  {}",
            team.team, team.average_speed, team.top_speed, team.laps, quadrant
        );
    }
    println!(
        "{} avg {:.1} km/h, top {:.1} km/h",
        "Centre:".dimmed(),
        profile.centroid.average,
        profile.centroid.top
    );
}

pub fn print_points(report: &PointsReport) {
    let mut ranked: Vec<_> = report.drivers.iter().collect();
    ranked.sort_by(|a, b| b.total().total_cmp(&a.total()));
    for progression in ranked {
        println!(
            "{:<6} {:>6.1} pts after {} rounds",
            progression.driver.bold(),
            progression.total(),
            progression.rounds.len()
        );
    }
}

pub fn print_channel(comparison: &ChannelComparison) {
    println!("{} {}", "Channel:".bold(), comparison.channel);
    for trace in &comparison.traces {
        let finite = || trace.values.iter().copied().filter(|v| v.is_finite());
        let min = finite().reduce(f64::min).unwrap_or(f64::NAN);
        let max = finite().reduce(f64::max).unwrap_or(f64::NAN);
        println!(
            "  {:<6} {:>5} samples  min {:>8.1}  max {:>8.1}",
            trace.driver.bold(),
            trace.values.len(),
            min,
            max
        );
    }
}
