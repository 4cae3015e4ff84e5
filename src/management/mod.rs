mod snapshot;

pub use snapshot::SnapshotError;
pub use snapshot::SnapshotManager;
