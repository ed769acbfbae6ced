use serde::{Deserialize, Serialize};

use super::ApprovalReason;

/// Banner locales supported by the dashboard: English plus the Russian
/// alternate the operations team runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Ru,
}

/// Human-readable banner label for a decision reason. `ApprovalReason::None`
/// renders as an empty label, meaning no banner is shown.
pub fn approval_reason_text(reason: ApprovalReason, locale: Locale) -> &'static str {
    match (reason, locale) {
        (ApprovalReason::None, _) => "",
        (ApprovalReason::Duration, Locale::En) => {
            "Ignore window exceeds 48 hours and needs manager approval"
        }
        (ApprovalReason::Duration, Locale::Ru) => {
            "Окно игнорирования превышает 48 часов и требует одобрения руководителя"
        }
        (ApprovalReason::WeekendException, Locale::En) => {
            "Weekend exception: auto-approved until Sunday 08:00"
        }
        (ApprovalReason::WeekendException, Locale::Ru) => {
            "Исключение выходных: одобрено автоматически до воскресенья 08:00"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{approval_reason_text, Locale};
    use crate::policy::ApprovalReason;

    #[test]
    fn no_reason_renders_no_banner() {
        assert_eq!(approval_reason_text(ApprovalReason::None, Locale::En), "");
        assert_eq!(approval_reason_text(ApprovalReason::None, Locale::Ru), "");
    }

    #[test]
    fn duration_banner_is_localized() {
        assert!(approval_reason_text(ApprovalReason::Duration, Locale::En)
            .contains("manager approval"));
        assert!(approval_reason_text(ApprovalReason::Duration, Locale::Ru).contains("48"));
    }

    #[test]
    fn weekend_banner_names_the_cutoff() {
        assert!(approval_reason_text(ApprovalReason::WeekendException, Locale::En)
            .contains("Sunday 08:00"));
        assert!(approval_reason_text(ApprovalReason::WeekendException, Locale::Ru)
            .contains("08:00"));
    }

    #[test]
    fn locale_serializes_with_snake_case_tags() {
        assert_eq!(serde_json::to_string(&Locale::En).expect("serialize"), "\"en\"");
        assert_eq!(serde_json::to_string(&Locale::Ru).expect("serialize"), "\"ru\"");
    }
}
