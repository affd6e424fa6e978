//! Configuration management.
//!
//! # Design Decisions
//! - Config is immutable once loaded; callers clone what they hand to each
//!   subsystem
//! - All fields have defaults to allow minimal configs
//! - The confirmation budgets and poll interval live here rather than as
//!   hardcoded constants in the poll loop

pub mod schema;

pub use schema::{ClientConfig, ConfirmationConfig, RpcConfig};
