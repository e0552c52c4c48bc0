use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::info;

use crate::state::AppState;

/// Periodically prunes lapsed holds from the booking store so stale records
/// do not accumulate. Correctness never depends on this task: every read
/// already applies the expiry check.
pub async fn start_hold_sweeper(state: Arc<AppState>) {
    let interval = Duration::from_secs(state.config.sweep_interval_secs);
    info!("Starting hold expiry sweeper (interval {:?})", interval);

    loop {
        let now_ms = Utc::now().timestamp_millis();
        let removed = state.bookings.sweep_expired(now_ms);
        if removed > 0 {
            info!(removed, "lapsed holds removed from booking store");
        }
        sleep(interval).await;
    }
}
