//! Confirmation states and error definitions.

use thiserror::Error;

use crate::rpc::RpcError;

/// Lifecycle state of a submitted operation.
///
/// Classified fresh on every poll; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// The node has no record of the operation.
    NotFound,
    /// The operation sits in the submission pool.
    AwaitingInclusion,
    /// At least one block contains the operation, finality not yet reached.
    IncludedPending,
    /// The operation is final and irreversible.
    Final,
    /// The record matches none of the recognized shapes.
    Inconsistent,
}

/// Errors produced when a confirmation poll exhausts one of its budgets.
#[derive(Debug, Error)]
pub enum ConfirmationError {
    /// Consecutive lookup failures exceeded the budget. Carries the last
    /// underlying transport error.
    #[error("operation lookup failed {failures} consecutive times: {source}")]
    LookupFailed {
        failures: u32,
        #[source]
        source: RpcError,
    },

    /// The iteration budget ran out before the target status was observed.
    #[error("operation did not reach {target:?} within {iterations} polls ({budget_secs} seconds)")]
    Timeout {
        target: OperationStatus,
        iterations: u32,
        budget_secs: u64,
    },
}

/// Result type for confirmation polling.
pub type ConfirmationResult<T> = Result<T, ConfirmationError>;
