use thiserror::Error;

/// Failure raised by a [`super::BlobStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A schedule record could not be loaded.
///
/// Any variant means the record must be discarded; the caller falls back to
/// an empty week rather than keeping partially-valid state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read the schedule record: {0}")]
    Store(#[from] StoreError),

    #[error("schedule record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A schedule record could not be written. The in-memory schedule is
/// unaffected; the save counts as not having happened.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write the schedule record: {0}")]
    Store(#[from] StoreError),

    #[error("failed to encode the schedule: {0}")]
    Encode(#[from] serde_json::Error),
}
