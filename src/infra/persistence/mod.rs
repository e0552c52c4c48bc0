pub mod memory_snapshot;
pub mod sqlite_snapshot;
