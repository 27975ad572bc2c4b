//! Request Counter
//!
//! Process-wide hit counter for the static client bundle.
//!
//! The counter lives in the application state and is injected into the
//! middleware and admin handlers; there is no global instance. Every
//! operation is a single atomic access, so concurrent increments are never
//! lost and a reset racing with increments resolves to whichever store
//! lands last.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::DeploymentMode;
use crate::shared::error::AppError;

/// Counter errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("Reset is only allowed in the dev environment")]
    ResetForbidden,
}

impl From<CounterError> for AppError {
    fn from(err: CounterError) -> Self {
        AppError::Forbidden(err.to_string())
    }
}

/// Atomic visit counter with a deployment-gated reset.
#[derive(Debug)]
pub struct RequestCounter {
    hits: AtomicU64,
    mode: DeploymentMode,
}

impl RequestCounter {
    /// Create a counter starting at zero.
    pub fn new(mode: DeploymentMode) -> Self {
        Self {
            hits: AtomicU64::new(0),
            mode,
        }
    }

    /// Record one hit.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current number of hits.
    pub fn value(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Zero the counter. Refused outside dev mode, leaving the value unchanged.
    pub fn reset(&self) -> Result<(), CounterError> {
        if !self.mode.is_dev() {
            return Err(CounterError::ResetForbidden);
        }

        self.hits.store(0, Ordering::Relaxed);
        Ok(())
    }
}
