//! Use-case glue between services and session stores.

mod auth;
mod travel;

pub use auth::AuthWorkflow;
pub use travel::TravelWorkflow;

use tracing::warn;

use crate::storage::StorageOutcome;

/// Surface a store write that did not reach storage. The in-memory state
/// already holds the change, so the workflow carries on.
fn note_persistence(action: &'static str, outcome: StorageOutcome) {
    if let StorageOutcome::Failed(err) = outcome {
        warn!(action, error = %err, "session change kept in memory only");
    }
}
