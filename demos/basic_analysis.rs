//! Basic example of analyzing one recorded activity.
//!
//! Run with: cargo run --example basic_analysis

use activity_analytics::{
    analyze_activity, AnalysisConfig, GpsPoint, HrZoneThresholds, Pace, Sample, SampleSeries, Zone,
};

fn main() {
    // 30 minute trail run near Grindelwald: warm-up, a 120 m climb, descent, cool-down
    let samples: Vec<Sample> = (0..1800)
        .map(|t| {
            let tf = t as f64;
            let altitude = match t {
                0..=399 => 1030.0,
                400..=799 => 1030.0 + (tf - 400.0) * 0.3,
                800..=1199 => 1150.0 - (tf - 800.0) * 0.3,
                _ => 1030.0,
            };
            let heart_rate = match t {
                0..=399 => 128.0,
                400..=799 => 128.0 + (tf - 400.0) * 0.11,
                800..=1099 => 172.0 - (tf - 800.0) * 0.12,
                _ => 136.0,
            };
            let speed = if (400..800).contains(&t) { 1.6 } else { 3.1 };
            Sample::new(tf)
                .with_altitude(altitude)
                .with_heart_rate(heart_rate.round() as u8)
                .with_speed(speed)
                .with_position(GpsPoint::new(46.6242 + tf * 0.00001, 8.0414))
        })
        .collect();

    let series = match SampleSeries::new(samples) {
        Ok(series) => series.with_zones(&HrZoneThresholds::default()),
        Err(e) => {
            eprintln!("Invalid samples: {}", e);
            return;
        }
    };

    let config = AnalysisConfig::default();
    let analysis = analyze_activity(&series, &config);

    println!("Activity Analysis Example\n");
    println!("Config: max_points={}, peak window={}s, min prominence={}m\n",
        config.chart.max_points, config.peaks.peak_window_secs, config.peaks.min_prominence);

    let summary = &analysis.summary;
    println!("Summary:");
    println!("  Duration: {:.0}s over {} samples", summary.total_duration, summary.sample_count);
    if let Some(distance) = summary.total_distance {
        println!("  Distance: {:.0}m", distance);
    }
    println!("  Climb: +{:.0}m / -{:.0}m", summary.elevation_gain, summary.elevation_loss);
    if let (Some(avg), Some(max)) = (summary.avg_heart_rate, summary.max_heart_rate) {
        println!("  Heart rate: avg {:.0} bpm, max {} bpm\n", avg, max);
    }

    println!("Time in zones:");
    let percentages = analysis.zones.percentages();
    for (zone, pct) in Zone::ALL.iter().zip(percentages) {
        println!("  {}: {:>6.0}s ({:.1}%)", zone.as_str(), analysis.zones.get(*zone), pct);
    }

    println!("\nCharts: {} elevation points, {} pace points",
        analysis.elevation_chart.len(), analysis.pace_chart.len());
    if let Some(steepest) = analysis
        .elevation_chart
        .iter()
        .max_by(|a, b| a.vertical_rate.total_cmp(&b.vertical_rate))
    {
        println!("  Fastest climb: {:.0} m/h at {:.0}s", steepest.vertical_rate, steepest.elapsed_time);
    }
    if let Some(point) = analysis.pace_chart.iter().find(|p| p.elapsed_time >= 600.0) {
        match point.pace {
            Some(Pace::Moving { seconds_per_km }) => {
                println!("  Pace at 10 min: {:.0}:{:02.0} /km", (seconds_per_km / 60.0).floor(), seconds_per_km % 60.0)
            }
            Some(Pace::Stationary) => println!("  Pace at 10 min: stationary"),
            None => println!("  Pace at 10 min: no data"),
        }
    }

    println!("\nHill recoveries:");
    if analysis.hill_recoveries.is_empty() {
        println!("  None detected");
    }
    for record in &analysis.hill_recoveries {
        println!("  Summit at {:.0}s ({:.0}m, {} bpm)",
            record.peak.elapsed_time, record.peak.altitude, record.peak.heart_rate);
        println!("    -1 min: {:?}  -2 min: {:?}  -5 min: {:?}",
            record.recovery_at_60s, record.recovery_at_120s, record.recovery_at_300s);
    }
}
