//! Structured error types for execinfo
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::collections::TryReserveError;
use thiserror::Error;

/// Why [`symbols`](crate::symbols) produced no collection.
///
/// Unresolved addresses are never an error; they degrade to address-only lines.
#[derive(Error, Debug)]
pub enum SymbolsError {
    #[error("no addresses to symbolize")]
    EmptyInput,

    #[error("out of memory while formatting symbols: {0}")]
    AllocationFailed(#[from] TryReserveError),
}
