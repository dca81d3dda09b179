use super::domain::LeadRow;

/// Sink abstraction over the remote contact list so the gateway can be
/// exercised in isolation.
///
/// Implementations receive a ready-to-use capability; credential material
/// never passes through this crate. Appends are at-least-once: nothing here
/// deduplicates, and a retried call after a transport failure may land the
/// same contact twice.
pub trait ContactStore: Send + Sync {
    /// Appends one row to the end of the list.
    fn append(&self, row: LeadRow) -> Result<(), ContactStoreError>;

    /// First row whose email matches exactly, scanning top to bottom.
    fn find_by_email(&self, email: &str) -> Result<Option<LeadRow>, ContactStoreError>;

    /// Rewrites the webinar-interest field of the first row matching the
    /// email. There is no concurrency guard between the lookup and the
    /// write; a concurrent insertion or deletion can shift the target row.
    fn set_webinar_interest(&self, email: &str, interested: bool)
        -> Result<(), ContactStoreError>;
}

/// Failure modes surfaced by a contact store.
#[derive(Debug, thiserror::Error)]
pub enum ContactStoreError {
    #[error("contact store authentication failed: {0}")]
    Auth(String),
    #[error("contact store call failed: {0}")]
    Remote(String),
    #[error("no contact row matches that email")]
    NotFound,
}
