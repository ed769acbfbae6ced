pub mod config;
pub mod domain;
pub mod policy;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::ignore::{status_on_submit, AlertIgnoreDraft, IgnoreStatus};
pub use policy::text::{approval_reason_text, Locale};
pub use policy::{
    check_approval_required, is_within_creation_window, is_within_weekend_window,
    next_sunday_at_0800, ApprovalDecision, ApprovalReason,
};
