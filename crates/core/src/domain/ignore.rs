use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::policy::{check_approval_required, ApprovalDecision, ApprovalReason};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreStatus {
    Active,
    Pending,
}

/// Status the submit handler persists for a new ignore record. Admins
/// bypass the approval queue entirely.
pub fn status_on_submit(decision: &ApprovalDecision, is_admin: bool) -> IgnoreStatus {
    if decision.requires_approval && !is_admin {
        IgnoreStatus::Pending
    } else {
        IgnoreStatus::Active
    }
}

/// What this core contributes to a newly submitted ignore record. The
/// surrounding storage layer owns everything else (alert identity, author,
/// team, comments).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertIgnoreDraft {
    pub created_at: NaiveDateTime,
    pub ignore_until: NaiveDateTime,
    pub status: IgnoreStatus,
    pub approval_reason: ApprovalReason,
}

impl AlertIgnoreDraft {
    pub fn from_submission(
        created_at: NaiveDateTime,
        ignore_until: NaiveDateTime,
        is_admin: bool,
    ) -> Self {
        let decision = check_approval_required(created_at, ignore_until);

        Self {
            created_at,
            ignore_until,
            status: status_on_submit(&decision, is_admin),
            approval_reason: decision.reason,
        }
    }
}
