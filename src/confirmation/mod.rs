//! Operation confirmation tracking.
//!
//! # Data Flow
//! ```text
//! operation id (from send_operations)
//!     → tracker.rs await_status
//!         → provider.fetch_operation_records (injected)
//!         → classify → NotFound / AwaitingInclusion / IncludedPending /
//!                      Final / Inconsistent
//!     → target reached, or LookupFailed / Timeout after budget exhaustion
//! ```

pub mod tracker;
pub mod types;

pub use tracker::{classify, ConfirmationTracker};
pub use types::{ConfirmationError, ConfirmationResult, OperationStatus};
