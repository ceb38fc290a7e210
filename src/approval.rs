//! Manager approval gate.
//!
//! A two-state machine (`pending` / `approved`) gating schedule mutation.
//! Both transitions require a shared manager secret compared verbatim; the
//! comparison is not a security control and lives behind this type so a
//! real authorization backend could replace it without touching the state
//! machine.

use chrono::NaiveDate;

use crate::config::ApprovalConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ApprovalStatus, ScheduleState};

/// Gates the approval transitions and the edit lock.
///
/// Operates on immutable snapshots: each transition returns the next state
/// and leaves the input untouched, so a rejected transition has no effect.
#[derive(Debug, Clone)]
pub struct ApprovalGate {
    config: ApprovalConfig,
}

impl ApprovalGate {
    /// Creates a gate with the given settings.
    pub fn new(config: ApprovalConfig) -> Self {
        Self { config }
    }

    /// Transitions `pending -> approved`.
    ///
    /// Requires the shared secret and a total at or below the approval cap.
    /// `today` becomes the recorded approval date; it is a parameter so the
    /// transition stays deterministic under test.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidSecret`] on a secret mismatch,
    /// [`ScheduleError::ScheduleLocked`] when already approved, and
    /// [`ScheduleError::ApprovalCapExceeded`] when the total is above the
    /// approval cap.
    pub fn approve(
        &self,
        state: &ScheduleState,
        secret: &str,
        today: NaiveDate,
    ) -> ScheduleResult<ScheduleState> {
        self.check_secret(secret)?;
        if state.is_approved() {
            return Err(ScheduleError::ScheduleLocked);
        }
        if state.total_hours > self.config.max_total_hours {
            return Err(ScheduleError::ApprovalCapExceeded {
                total: state.total_hours,
                cap: self.config.max_total_hours,
            });
        }

        let mut next = state.clone();
        next.approval_status = ApprovalStatus::Approved;
        next.approval_date = Some(today);
        Ok(next)
    }

    /// Transitions back to `pending`, clearing the approval fields.
    ///
    /// Requires the shared secret. Resetting an already pending schedule is
    /// permitted and simply clears any stale approval fields.
    pub fn reset(&self, state: &ScheduleState, secret: &str) -> ScheduleResult<ScheduleState> {
        self.check_secret(secret)?;

        let mut next = state.clone();
        next.approval_status = ApprovalStatus::Pending;
        next.approval_date = None;
        next.approved_by = String::new();
        Ok(next)
    }

    /// Rejects any normal-path mutation while the schedule is approved.
    ///
    /// The lock is uniform: every field and every shift edit goes through
    /// this check.
    pub fn ensure_editable(state: &ScheduleState) -> ScheduleResult<()> {
        if state.is_approved() {
            return Err(ScheduleError::ScheduleLocked);
        }
        Ok(())
    }

    fn check_secret(&self, secret: &str) -> ScheduleResult<()> {
        if secret != self.config.secret {
            return Err(ScheduleError::InvalidSecret);
        }
        Ok(())
    }
}
