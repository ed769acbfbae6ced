pub mod text;

use chrono::{Datelike, Days, Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const APPROVAL_THRESHOLD_HOURS: f64 = 48.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const WEDNESDAY_OPEN_HOUR: u32 = 17;
const SUNDAY_CLOSE_HOUR: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalReason {
    None,
    Duration,
    WeekendException,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    pub requires_approval: bool,
    pub reason: ApprovalReason,
}

impl ApprovalDecision {
    fn granted(reason: ApprovalReason) -> Self {
        Self { requires_approval: false, reason }
    }

    fn manager_required() -> Self {
        Self { requires_approval: true, reason: ApprovalReason::Duration }
    }
}

/// Decides whether an alert-ignore request needs manager sign-off.
///
/// Windows of 48 hours or less are always auto-approved. Longer windows
/// require approval unless the request was created inside the weekend
/// window (Wednesday 17:00 through Sunday 08:00, local wall clock) and
/// expires by the next Sunday 08:00.
pub fn check_approval_required(
    created_at: NaiveDateTime,
    ignore_until: NaiveDateTime,
) -> ApprovalDecision {
    let duration_hours = (ignore_until - created_at).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    if duration_hours <= APPROVAL_THRESHOLD_HOURS {
        return ApprovalDecision::granted(ApprovalReason::None);
    }

    if is_within_weekend_window(created_at, ignore_until) {
        return ApprovalDecision::granted(ApprovalReason::WeekendException);
    }

    ApprovalDecision::manager_required()
}

pub fn is_within_weekend_window(created_at: NaiveDateTime, ignore_until: NaiveDateTime) -> bool {
    let day_of_week = created_at.weekday().num_days_from_sunday();
    let hour = created_at.hour();

    if !is_within_creation_window(day_of_week, hour) {
        return false;
    }

    // The ceiling is always relative to created_at: the exception covers
    // the current weekend only, however long the requested window is.
    ignore_until <= next_sunday_at_0800(created_at)
}

/// Creation-window table, 0 = Sunday .. 6 = Saturday.
pub fn is_within_creation_window(day_of_week: u32, hour: u32) -> bool {
    match day_of_week {
        3 => hour >= WEDNESDAY_OPEN_HOUR,
        4..=6 => true,
        0 => hour < SUNDAY_CLOSE_HOUR,
        _ => false,
    }
}

/// Next Sunday 08:00:00 local, at or after `instant`. A Sunday morning
/// input maps to the same day's 08:00; once past 08:00 on Sunday the
/// window has closed and the boundary is a full week out.
pub fn next_sunday_at_0800(instant: NaiveDateTime) -> NaiveDateTime {
    let days_ahead = match instant.weekday().num_days_from_sunday() {
        0 if instant.hour() < SUNDAY_CLOSE_HOUR => 0,
        0 => 7,
        day_of_week => u64::from(7 - day_of_week),
    };

    let date = instant.date() + Days::new(days_ahead);
    date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(SUNDAY_CLOSE_HOUR))
}
