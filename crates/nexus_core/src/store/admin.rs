//! Moderation and instance administration.
//!
//! # Responsibility
//! - Report intake and status transitions.
//! - Instance settings maintenance and admin-side account creation.
//!
//! # Invariants
//! - Reports enter as `Pending`; later transitions go through
//!   `update_report`.
//! - Admin-created accounts obey the same case-insensitive username
//!   uniqueness rule as self-registration.

use crate::model::admin::{AdminSettings, Report, ReportId};
use crate::model::user::{User, UserId};
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::store::{NexusStore, StoreError, StoreResult};

impl<R: SnapshotRepository> NexusStore<R> {
    /// Files a moderation report and returns its id.
    pub fn add_report(&mut self, report: Report) -> StoreResult<ReportId> {
        let id = report.id;
        self.state.reports.push(report);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching report; moderation moves
    /// status to `Reviewed` or `Resolved` through this.
    pub fn update_report(
        &mut self,
        id: ReportId,
        mutate: impl FnOnce(&mut Report),
    ) -> StoreResult<()> {
        let index = self
            .state
            .reports
            .iter()
            .position(|report| report.id == id)
            .ok_or(StoreError::NotFound {
                entity: "report",
                id,
            })?;
        mutate(&mut self.state.reports[index]);
        self.commit()
    }

    /// All reports in filing order.
    pub fn reports(&self) -> &[Report] {
        &self.state.reports
    }

    /// The singleton instance settings record.
    pub fn admin_settings(&self) -> &AdminSettings {
        &self.state.admin_settings
    }

    /// Applies a partial update to the instance settings.
    pub fn update_admin_settings(
        &mut self,
        mutate: impl FnOnce(&mut AdminSettings),
    ) -> StoreResult<()> {
        mutate(&mut self.state.admin_settings);
        self.commit()
    }

    /// Creates an account without touching the active session.
    ///
    /// Returns `None` when the username collides case-insensitively with
    /// an existing account, the same rule `register` applies.
    pub fn create_user_as_admin(&mut self, user: User) -> StoreResult<Option<UserId>> {
        if self.username_taken(&user.username) {
            return Ok(None);
        }
        let id = user.id;
        self.state.users.push(user);
        self.commit()?;
        Ok(Some(id))
    }
}
