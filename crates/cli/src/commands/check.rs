use handoff_core::{
    approval_reason_text, check_approval_required, status_on_submit, ApprovalReason, IgnoreStatus,
    Locale,
};
use serde::Serialize;

use super::{parse_instant, serialize_payload, CommandResult};

#[derive(Debug, Serialize)]
struct CheckPayload {
    command: String,
    status: String,
    requires_approval: bool,
    reason: ApprovalReason,
    duration_hours: f64,
    banner: String,
    submit_status: IgnoreStatus,
}

pub fn run(created_at: &str, ignore_until: &str, admin: bool, locale: Locale) -> CommandResult {
    let created_at = match parse_instant(created_at) {
        Ok(instant) => instant,
        Err(error) => return CommandResult::failure("check", "invalid_timestamp", error.to_string(), 2),
    };
    let ignore_until = match parse_instant(ignore_until) {
        Ok(instant) => instant,
        Err(error) => return CommandResult::failure("check", "invalid_timestamp", error.to_string(), 2),
    };

    let decision = check_approval_required(created_at, ignore_until);
    let submit_status = status_on_submit(&decision, admin);
    let duration_hours = (ignore_until - created_at).num_milliseconds() as f64 / 3_600_000.0;

    tracing::debug!(
        requires_approval = decision.requires_approval,
        reason = ?decision.reason,
        duration_hours,
        admin,
        "approval decision computed"
    );

    let payload = CheckPayload {
        command: "check".to_string(),
        status: "ok".to_string(),
        requires_approval: decision.requires_approval,
        reason: decision.reason,
        duration_hours,
        banner: approval_reason_text(decision.reason, locale).to_string(),
        submit_status,
    };

    CommandResult { exit_code: 0, output: serialize_payload(payload) }
}
