//! Leave records and calendar-day queries.
//!
//! Leave ranges are inclusive on both ends and compared as timezone-free
//! calendar dates: a leave from the 20th to the 22nd covers the 20th, 21st
//! and 22nd and nothing else.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A leave taken by one person over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leave {
    id: u32,
    user_name: String,
    start: NaiveDate,
    end: NaiveDate,
    reason: Option<String>,
    status: LeaveStatus,
}

impl Leave {
    pub fn new(id: u32, user_name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            start,
            end,
            reason: None,
            status: LeaveStatus::default(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn status(&self) -> LeaveStatus {
        self.status
    }

    /// Returns true if the leave covers `date`, both ends included.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Granularity of the calendar view asking for a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarView {
    Month,
    Year,
    Decade,
    Century,
}

/// Marker attached to a calendar day that has at least one leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDecoration {
    leave_count: usize,
}

impl DayDecoration {
    /// CSS class tag applied to decorated days.
    pub const CLASS_NAME: &'static str = "has-leave";

    /// Returns the number of leaves covering the day.
    pub fn leave_count(&self) -> usize {
        self.leave_count
    }

    pub fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }
}

/// Returns all leaves covering `date`, in input order.
pub fn leaves_on(leaves: &[Leave], date: NaiveDate) -> Vec<&Leave> {
    leaves.iter().filter(|leave| leave.covers(date)).collect()
}

/// Returns the decoration for a calendar day, if any.
///
/// Only days in the month view are decorated.
pub fn decorate_day(leaves: &[Leave], date: NaiveDate, view: CalendarView) -> Option<DayDecoration> {
    if view != CalendarView::Month {
        return None;
    }
    let leave_count = leaves.iter().filter(|leave| leave.covers(date)).count();
    (leave_count > 0).then_some(DayDecoration { leave_count })
}

/// Returns up to `limit` leaves starting on or after `today`, earliest first.
pub fn upcoming(leaves: &[Leave], today: NaiveDate, limit: usize) -> Vec<&Leave> {
    let mut upcoming: Vec<&Leave> = leaves.iter().filter(|leave| leave.start >= today).collect();
    upcoming.sort_by_key(|leave| leave.start);
    upcoming.truncate(limit);
    upcoming
}
