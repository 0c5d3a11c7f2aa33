//! # Meeting Time Planner Entry Point
//!
//! Terminal rendering collaborator for the planner core. It initializes
//! logging, loads configuration, seeds the selection list with the local
//! timezone plus the configured default, and prints the computed meeting
//! times for the configured base hour.

use anyhow::Result;
use meeting_time_planner::config::Config;
use meeting_time_planner::planner::MeetingPlanner;
use meeting_time_planner::store::catalog;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meeting_time_planner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting meeting time planner v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - default timezone: {}, base hour: {}",
        config.default_timezone, config.base_hour
    );

    let mut planner = MeetingPlanner::new();
    planner.seed(&config.default_timezone, &config.default_label);
    planner.add_timezone(catalog::DEFAULT_ADD_TIMEZONE, "");
    planner.set_base_hour(config.base_hour);

    render(&planner);
    Ok(())
}

fn render(planner: &MeetingPlanner) {
    let view = planner.view();
    println!("Base time: {}", view.base_time);
    println!();

    if view.slots.is_empty() {
        println!("Add timezones to see meeting times");
        return;
    }

    for (entry, slot) in planner.entries().iter().zip(&view.slots) {
        let marker = slot
            .classification
            .map(|c| c.as_str())
            .unwrap_or("unavailable");
        let zone = catalog::label_for(&entry.timezone_id).unwrap_or(&entry.timezone_id);
        println!(
            "{:<28} {:>8}  [{}]  {}",
            slot.location_name, slot.display_time, marker, zone
        );
    }
}
