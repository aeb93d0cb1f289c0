// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the pacer rate-control primitives
//!
//! Failures raised by a wrapped callable are never routed through this type: they
//! unwind to whoever drove the invocation (the caller for immediate invocations, the
//! scheduler turn for deferred ones). [`PacerError`] only covers the library's own
//! failure modes.
//!
//! # Examples
//!
//! ```
//! use pacer_core::{PacerError, Result};
//!
//! fn scheduler_for_tests() -> Result<()> {
//!     Err(PacerError::runtime_unavailable("no tokio reactor on this thread"))
//! }
//!
//! assert!(scheduler_for_tests().is_err());
//! ```

/// Root error type for all pacer operations
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// No async runtime is reachable from the current thread
    ///
    /// Raised when a runtime-backed scheduler is requested outside of the
    /// runtime that should drive its deferred calls.
    #[error("Async runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Why the runtime could not be reached
        context: String,
    },
}

impl PacerError {
    /// Create a runtime-unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }
}

/// Specialized Result type for pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;
