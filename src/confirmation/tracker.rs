//! Operation confirmation polling.
//!
//! # Responsibilities
//! - Classify one node lookup into an [`OperationStatus`]
//! - Poll until a caller-specified target status is reached or a budget runs
//!   out
//!
//! # Design Decisions
//! - Two independent budgets: consecutive lookup failures (transport-level)
//!   and total poll iterations (business-level). Neither resets the other.
//! - Every iteration sleeps the fixed interval before the next attempt,
//!   including right after a failed lookup, which throttles traffic toward a
//!   possibly-degraded node.
//! - The loop is an ordinary async fn: dropping the future cancels the poll.
//!   There is no internal wall-clock deadline; callers that need one wrap
//!   the call in `tokio::time::timeout`.

use std::time::Duration;
use tokio::time::sleep;

use crate::config::ConfirmationConfig;
use crate::confirmation::types::{ConfirmationError, ConfirmationResult, OperationStatus};
use crate::rpc::{OperationRecord, OperationRecordProvider, RpcResult};

/// Classify a node lookup result for one operation.
///
/// An empty record list means the node knows nothing about the operation.
/// Otherwise the first record is matched in strict priority order: final,
/// then included in a block, then present in the pool.
pub fn classify(records: &[OperationRecord]) -> OperationStatus {
    let Some(record) = records.first() else {
        return OperationStatus::NotFound;
    };
    if record.is_final {
        OperationStatus::Final
    } else if !record.in_blocks.is_empty() {
        OperationStatus::IncludedPending
    } else if record.in_pool {
        OperationStatus::AwaitingInclusion
    } else {
        OperationStatus::Inconsistent
    }
}

/// Progress of one `await_status` call.
#[derive(Debug, Clone, Copy, Default)]
struct PollState {
    /// Completed iterations, successful or not. Never resets.
    attempt: u32,
    /// Consecutive lookup failures. Resets on any successful lookup.
    error_count: u32,
}

/// Polls a record provider until an operation reaches a target status.
#[derive(Debug)]
pub struct ConfirmationTracker<P> {
    provider: P,
    config: ConfirmationConfig,
}

impl<P: OperationRecordProvider> ConfirmationTracker<P> {
    pub fn new(provider: P, config: ConfirmationConfig) -> Self {
        Self { provider, config }
    }

    /// The injected record provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Classify the operation's status from a single lookup.
    pub async fn current_status(&self, operation_id: &str) -> RpcResult<OperationStatus> {
        let ids = vec![operation_id.to_string()];
        let records = self.provider.fetch_operation_records(&ids).await?;
        Ok(classify(&records))
    }

    /// Poll until the operation reaches `target`.
    ///
    /// Returns the target status once observed. A lookup failure counts
    /// against the consecutive-failure budget; every iteration, failed or
    /// not, counts against the iteration budget and is followed by one fixed
    /// sleep. A first-poll match returns immediately without consuming any
    /// budget.
    pub async fn await_status(
        &self,
        operation_id: &str,
        target: OperationStatus,
    ) -> ConfirmationResult<OperationStatus> {
        let ids = vec![operation_id.to_string()];
        let interval = Duration::from_secs(self.config.poll_interval_secs);
        let mut state = PollState::default();

        loop {
            match self.provider.fetch_operation_records(&ids).await {
                Ok(records) => {
                    state.error_count = 0;
                    let status = classify(&records);
                    if status == target {
                        tracing::info!(
                            operation_id,
                            status = ?status,
                            iterations = state.attempt,
                            "Operation reached target status"
                        );
                        return Ok(status);
                    }
                    tracing::debug!(
                        operation_id,
                        status = ?status,
                        target = ?target,
                        iteration = state.attempt,
                        "Operation not yet at target status"
                    );
                }
                Err(err) => {
                    state.error_count += 1;
                    if state.error_count > self.config.max_lookup_failures {
                        tracing::error!(
                            operation_id,
                            failures = state.error_count,
                            error = %err,
                            "Lookup failure budget exhausted"
                        );
                        return Err(ConfirmationError::LookupFailed {
                            failures: state.error_count,
                            source: err,
                        });
                    }
                    tracing::warn!(
                        operation_id,
                        failures = state.error_count,
                        error = %err,
                        "Operation lookup failed"
                    );
                }
            }

            state.attempt += 1;
            if state.attempt > self.config.max_poll_iterations {
                let budget_secs =
                    self.config.poll_interval_secs * u64::from(self.config.max_poll_iterations);
                tracing::error!(
                    operation_id,
                    iterations = state.attempt,
                    "Iteration budget exhausted"
                );
                return Err(ConfirmationError::Timeout {
                    target,
                    iterations: self.config.max_poll_iterations,
                    budget_secs,
                });
            }

            sleep(interval).await;
        }
    }
}
