use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;
use crate::domain::ports::SnapshotStore;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::status::DAY_MS;
use crate::domain::stores::{
    booking_store::BookingStore, event_store::EventStore, expense_store::ExpenseStore,
    planner_store::PlannerStore, vendor_store::VendorStore,
};
use crate::infra::persistence::{
    memory_snapshot::MemorySnapshotStore, sqlite_snapshot::SqliteSnapshotStore,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let snapshot: Arc<dyn SnapshotStore> = if config.database_url.starts_with("sqlite:") {
        info!("Initializing SQLite snapshot storage with WAL mode...");

        let opts = SqliteConnectOptions::from_str(&config.database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        Arc::new(SqliteSnapshotStore::new(pool))
    } else {
        info!("Initializing in-memory snapshot storage...");
        Arc::new(MemorySnapshotStore::new())
    };

    let bookings = Arc::new(
        BookingStore::bootstrap(snapshot.clone(), config.default_hold_days * DAY_MS).await,
    );
    let events = Arc::new(EventStore::bootstrap(snapshot.clone()).await);
    let expenses = Arc::new(ExpenseStore::bootstrap(snapshot.clone()).await);
    let planners = Arc::new(PlannerStore::bootstrap(snapshot.clone()).await);
    let vendors = Arc::new(VendorStore::bootstrap(snapshot.clone()).await);

    AppState {
        config: config.clone(),
        bookings,
        events,
        expenses,
        planners,
        vendors,
        auth_service: Arc::new(AuthService::new(config)),
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
