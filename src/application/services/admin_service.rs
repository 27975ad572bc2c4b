//! Admin Service
//!
//! Hit counter readout and the destructive dev-only operations.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DeploymentMode, UserRepository};
use crate::infrastructure::metrics::RequestCounter;
use crate::shared::error::AppError;

pub struct AdminService {
    user_repo: Arc<dyn UserRepository>,
    hits: Arc<RequestCounter>,
    mode: DeploymentMode,
}

impl AdminService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hits: Arc<RequestCounter>,
        mode: DeploymentMode,
    ) -> Self {
        Self {
            user_repo,
            hits,
            mode,
        }
    }

    /// Number of counted hits since start or the last reset.
    pub fn hits(&self) -> u64 {
        self.hits.value()
    }

    /// Delete all users and zero the hit counter. Dev mode only.
    ///
    /// The counter is left untouched if the deletion fails.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.mode.require_dev("Reset")?;

        let removed = self.user_repo.delete_all().await?;
        self.hits.reset()?;

        info!(users_removed = removed, "State reset");
        Ok(())
    }

    /// Delete all users. Dev mode only.
    pub async fn delete_all_users(&self) -> Result<u64, AppError> {
        self.mode.require_dev("Deleting users")?;

        let removed = self.user_repo.delete_all().await?;
        info!(users_removed = removed, "All users deleted");

        Ok(removed)
    }
}
