//! Schedule editor.
//!
//! `ScheduleEditor` wires the pure calculation and approval functions to a
//! [`ScheduleStore`]: every user action validates against the current
//! snapshot, and only a fully validated next snapshot is persisted and
//! committed. A store failure therefore leaves the in-memory state exactly
//! as it was, alongside the error the caller surfaces to the user.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::approval::ApprovalGate;
use crate::calculation::{compute_shift_hours, reset_day_slot};
use crate::config::EngineConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::export;
use crate::models::{Month, SLOT_COUNT, ScheduleState, parse_time_of_day};
use crate::storage::ScheduleStore;

/// The scalar fields reachable through the generic field-edit path.
///
/// `totalHours` is deliberately absent: the total is derived from the day
/// slots and cannot be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    /// `employeeName`.
    EmployeeName,
    /// `position`.
    Position,
    /// `manager`.
    Manager,
    /// `month`.
    Month,
    /// `year`.
    Year,
    /// `timeOff`.
    TimeOff,
    /// `notes`.
    Notes,
    /// `approvedBy`.
    ApprovedBy,
    /// `approvalDate`.
    ApprovalDate,
}

impl FromStr for ScheduleField {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employeeName" => Ok(Self::EmployeeName),
            "position" => Ok(Self::Position),
            "manager" => Ok(Self::Manager),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "timeOff" => Ok(Self::TimeOff),
            "notes" => Ok(Self::Notes),
            "approvedBy" => Ok(Self::ApprovedBy),
            "approvalDate" => Ok(Self::ApprovalDate),
            other => Err(ScheduleError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// Owns one schedule and the store it persists to.
pub struct ScheduleEditor<S: ScheduleStore> {
    state: ScheduleState,
    store: S,
    config: EngineConfig,
    gate: ApprovalGate,
}

impl<S: ScheduleStore> ScheduleEditor<S> {
    /// Creates an editor, rehydrating a previously saved schedule when one
    /// exists.
    ///
    /// Malformed or unreadable saved data is logged and replaced by the
    /// default schedule; it never fails the session.
    pub fn new(store: S, config: EngineConfig) -> Self {
        let state = match store.load() {
            Ok(Some(raw)) => match ScheduleState::from_value(raw) {
                Ok(state) => {
                    debug!(store = %store.location(), "rehydrated saved schedule");
                    state
                }
                Err(err) => {
                    warn!(
                        store = %store.location(),
                        error = %err,
                        "saved schedule is malformed, starting from defaults"
                    );
                    ScheduleState::default()
                }
            },
            Ok(None) => ScheduleState::default(),
            Err(err) => {
                warn!(
                    store = %store.location(),
                    error = %err,
                    "failed to load saved schedule, starting from defaults"
                );
                ScheduleState::default()
            }
        };

        let gate = ApprovalGate::new(config.approval.clone());
        Self {
            state,
            store,
            config,
            gate,
        }
    }

    /// Returns the current schedule snapshot.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Edits one scalar field, named by its wire name (e.g. `employeeName`).
    ///
    /// Rejected while the schedule is approved. `totalHours` is refused:
    /// the total is strictly derived.
    pub fn set_field(&mut self, field: &str, value: &str) -> ScheduleResult<()> {
        ApprovalGate::ensure_editable(&self.state)?;

        if field == "totalHours" {
            return Err(ScheduleError::InvalidFieldValue {
                field: field.to_string(),
                message: "totalHours is derived from the day slots".to_string(),
            });
        }

        let field: ScheduleField = field.parse()?;
        let mut next = self.state.clone();
        match field {
            ScheduleField::EmployeeName => next.employee_name = value.to_string(),
            ScheduleField::Position => next.position = value.to_string(),
            ScheduleField::Manager => next.manager = value.to_string(),
            ScheduleField::TimeOff => next.time_off = value.to_string(),
            ScheduleField::Notes => next.notes = value.to_string(),
            ScheduleField::ApprovedBy => next.approved_by = value.to_string(),
            ScheduleField::Month => {
                next.month = value.parse::<Month>().map_err(|message| {
                    ScheduleError::InvalidFieldValue {
                        field: "month".to_string(),
                        message,
                    }
                })?;
            }
            ScheduleField::Year => {
                next.year =
                    value
                        .parse::<i32>()
                        .map_err(|err| ScheduleError::InvalidFieldValue {
                            field: "year".to_string(),
                            message: err.to_string(),
                        })?;
            }
            ScheduleField::ApprovalDate => {
                next.approval_date = if value.is_empty() {
                    None
                } else {
                    Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|err| {
                        ScheduleError::InvalidFieldValue {
                            field: "approvalDate".to_string(),
                            message: err.to_string(),
                        }
                    })?)
                };
            }
        }
        self.commit(next)
    }

    /// Records a day's start and/or end time without computing hours,
    /// mirroring typing into the two time inputs.
    ///
    /// A provided empty string unsets the corresponding time; `None` leaves
    /// it unchanged.
    pub fn set_shift_times(
        &mut self,
        day: usize,
        start: Option<&str>,
        end: Option<&str>,
    ) -> ScheduleResult<()> {
        ApprovalGate::ensure_editable(&self.state)?;
        if day >= SLOT_COUNT {
            return Err(ScheduleError::DayOutOfRange { day });
        }

        let mut next = self.state.clone();
        if let Some(raw) = start {
            next.shifts[day].start_time = parse_time_of_day(raw)?;
        }
        if let Some(raw) = end {
            next.shifts[day].end_time = parse_time_of_day(raw)?;
        }
        self.commit(next)
    }

    /// Computes and stores the hours for a day from its recorded times
    /// (the "Done" action).
    ///
    /// All validation rules apply; on rejection nothing changes. Returns
    /// the day's computed hours.
    pub fn calculate_day(&mut self, day: usize) -> ScheduleResult<Decimal> {
        ApprovalGate::ensure_editable(&self.state)?;
        if day >= SLOT_COUNT {
            return Err(ScheduleError::DayOutOfRange { day });
        }

        let slot = &self.state.shifts[day];
        let update = compute_shift_hours(
            day,
            slot.start_time,
            slot.end_time,
            &self.state.shifts,
            &self.config.limits,
        )?;

        let hours = update.slot.hours;
        let mut next = self.state.clone();
        next.shifts[day] = update.slot;
        next.total_hours = update.month_total;
        self.commit(next)?;
        Ok(hours)
    }

    /// Clears a day back to unset and recomputes the total.
    pub fn reset_day(&mut self, day: usize) -> ScheduleResult<()> {
        ApprovalGate::ensure_editable(&self.state)?;
        let update = reset_day_slot(day, &self.state.shifts)?;

        let mut next = self.state.clone();
        next.shifts[day] = update.slot;
        next.total_hours = update.month_total;
        self.commit(next)
    }

    /// Approves the schedule, stamping today's date.
    pub fn approve(&mut self, secret: &str) -> ScheduleResult<()> {
        self.approve_on(secret, Utc::now().date_naive())
    }

    /// Approves the schedule with an explicit approval date.
    pub fn approve_on(&mut self, secret: &str, today: NaiveDate) -> ScheduleResult<()> {
        let next = self.gate.approve(&self.state, secret, today)?;
        self.commit(next)
    }

    /// Resets the approval back to pending.
    pub fn reset_approval(&mut self, secret: &str) -> ScheduleResult<()> {
        let next = self.gate.reset(&self.state, secret)?;
        self.commit(next)
    }

    /// Exports the schedule workbook into `dir`, returning the written
    /// path. Read-only: works regardless of approval state.
    pub fn export_to<P: AsRef<Path>>(&self, dir: P) -> ScheduleResult<PathBuf> {
        export::write_schedule(&self.state, dir)
    }

    /// Persists `next` and commits it as the current snapshot.
    ///
    /// Save failures propagate to the caller and leave the current state
    /// untouched, so a storage problem is visible instead of silently
    /// losing the edit.
    fn commit(&mut self, next: ScheduleState) -> ScheduleResult<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }
}
