use tracing::{debug, info};

/// Logs a selection list mutation with consistent format
pub fn log_store_op(operation: &str, id: &str, detail: Option<&str>) {
    match detail {
        Some(d) => info!("STORE_OP: {} entry {} - {}", operation, id, d),
        None => info!("STORE_OP: {} entry {}", operation, id),
    }
}

/// Logs a recompute pass with consistent format
pub fn log_recompute(entry_count: usize, base_time: &str) {
    debug!("RECOMPUTE: {} entries at base time {}", entry_count, base_time);
}

/// Logs the seeded local timezone with consistent format
pub fn log_seed(zone: &str) {
    info!("SEED: local timezone {}", zone);
}
