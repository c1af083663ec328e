//! Quickstart example demonstrating basic usage of airguard.
//!
//! Run with: cargo run --example quickstart

use airguard::aqi::assess;
use airguard::forecaster::SequenceForecaster;
use airguard::station::{forecast_alert, StationSummary};
use airguard::synthetic::{diurnal_series, to_concentration_series, SyntheticConfig};
use chrono::{Duration, TimeZone, Utc};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== AIR GUARD - PM2.5 Forecasting ===\n");

    // 1. One week of hourly readings with a daytime peak
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let values = diurnal_series(&SyntheticConfig::daytime_peak(7, 42)).unwrap();
    let series = to_concentration_series(values, start, "ST001").unwrap();

    // 2. Station statistics
    let summary = StationSummary::from_series(&series).unwrap();
    println!("Station {}", summary.station_id.as_deref().unwrap_or("?"));
    println!("  Records:           {}", summary.records);
    println!("  Average PM2.5:     {:.1} µg/m³", summary.avg_pm25);
    println!("  Maximum PM2.5:     {:.1} µg/m³", summary.max_pm25);
    println!("  Minimum PM2.5:     {:.1} µg/m³", summary.min_pm25);
    println!("  Hours above limit: {}", summary.hours_above_limit);

    if let Some(alert) = summary.alert() {
        println!("\nALERT: PM2.5 exceeds safe limit ({} µg/m³)", alert.limit);
        for rec in &alert.recommendations {
            println!("  - {}", rec);
        }
    }

    // 3. Train on the full week with a one-day window
    println!("\n--- Training (window = 24h) ---");
    let mut forecaster = SequenceForecaster::new();
    let report = forecaster.train_series(&series, 24).unwrap();
    println!("Training MSE: {:.2}", report.mse);
    println!("Training MAE: {:.2}", report.mae);

    // 4. Forecast the next 12 hours with 95% intervals
    println!("\n--- Forecast (12 hours ahead) ---");
    let forecast = forecaster
        .forecast_with_intervals(series.tail(24), 12)
        .unwrap();
    let lower = forecast.lower().unwrap();
    let upper = forecast.upper().unwrap();
    let last = series.last_timestamp().unwrap();

    println!(
        "{:>17} {:>8} {:>8} {:>8} {:>5}  {}",
        "Time", "Lower", "PM2.5", "Upper", "AQI", "Category"
    );
    for (i, value) in forecast.values().iter().enumerate() {
        let time = last + Duration::hours(i as i64 + 1);
        match assess(value.max(0.0)) {
            Ok(reading) => println!(
                "{:>17} {:>8.1} {:>8.1} {:>8.1} {:>5}  {}",
                time.format("%Y-%m-%d %H:%M"),
                lower[i],
                value,
                upper[i],
                reading.aqi,
                reading.category
            ),
            Err(e) => println!("{:>17} {}", time.format("%Y-%m-%d %H:%M"), e),
        }
    }

    if let Some(mean) = forecast.mean() {
        println!("\nAverage forecast: {:.1} µg/m³", mean);
    }
    if forecast_alert(forecast.values()).is_some() {
        println!("Warning: forecast indicates poor air quality");
    }
}
