//! Example of analyzing a season of activities in parallel and rolling up
//! weekly time-in-zone.
//!
//! Run with: cargo run --example batch_analysis --features parallel

use activity_analytics::{
    analyze_batch, analyze_batch_parallel, AnalysisConfig, HrZoneThresholds, Sample, SampleSeries,
    Zone, ZoneSummary,
};
use std::time::Instant;

fn main() {
    println!("Batch Activity Analysis Example\n");

    let thresholds = HrZoneThresholds::default();
    let mut activities = Vec::new();

    // 12 weeks, 4 activities per week with varying hill count and effort
    for week in 0..12 {
        for day in 0..4 {
            let hills = (week + day) % 4;
            let effort = 10 * (day as i32);
            match SampleSeries::new(synthetic_activity(3600, hills, effort)) {
                Ok(series) => activities.push(series.with_zones(&thresholds)),
                Err(e) => eprintln!("Skipping week {} day {}: {}", week, day, e),
            }
        }
    }

    let total_samples: usize = activities.iter().map(|a| a.len()).sum();
    println!("Created {} activities ({} samples)\n", activities.len(), total_samples);

    let config = AnalysisConfig::default();

    let start = Instant::now();
    let sequential = analyze_batch(&activities, &config);
    let sequential_time = start.elapsed();

    let start = Instant::now();
    let parallel = analyze_batch_parallel(&activities, &config);
    let parallel_time = start.elapsed();

    println!("Sequential: {:?}", sequential_time);
    println!("Parallel:   {:?}", parallel_time);
    println!("Results identical: {}\n", sequential == parallel);

    let recoveries: usize = parallel.iter().map(|a| a.hill_recoveries.len()).sum();
    println!("Hill recoveries found: {}", recoveries);

    println!("\nWeekly time in zones (minutes):");
    println!("  week  {:>6} {:>6} {:>6} {:>6} {:>6}", "z1", "z2", "z3", "z4", "z5");
    for (week, chunk) in parallel.chunks(4).enumerate() {
        let summary = ZoneSummary::from_tallies(chunk.iter().map(|a| &a.zones));
        let minutes: Vec<String> = Zone::ALL
            .iter()
            .map(|z| format!("{:>6.0}", summary.zones.get(*z) / 60.0))
            .collect();
        println!("  {:>4}  {}  ({} activities)", week + 1, minutes.join(" "), summary.activity_count);
    }
}

/// One hour at 1 Hz with `hills` evenly spaced 80 m climbs. Heart rate tracks
/// altitude, offset by `effort` bpm.
fn synthetic_activity(seconds: usize, hills: usize, effort: i32) -> Vec<Sample> {
    let segment = if hills == 0 { seconds } else { seconds / hills };
    (0..seconds)
        .map(|t| {
            let tf = t as f64;
            let altitude = if hills == 0 {
                400.0
            } else {
                // triangle wave: up for half a segment, down for the other half
                let phase = (t % segment) as f64 / segment as f64;
                400.0 + 80.0 * (1.0 - (2.0 * phase - 1.0).abs())
            };
            let heart_rate = (110.0 + (altitude - 400.0) * 0.6 + effort as f64).clamp(60.0, 200.0);
            Sample::new(tf)
                .with_altitude(altitude)
                .with_heart_rate(heart_rate.round() as u8)
                .with_speed(2.8)
                .with_distance(tf * 2.8)
        })
        .collect()
}
