//! Authentication and account form catalog.

use std::fmt;

use crate::mailbox::Mailbox;
use crate::routing::{ConditionId, Message};

/// Conditions a sign-in or account form can report.
///
/// The discriminant is the condition id used in the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FormCondition {
    EmailNotFound = 0,
    AccountSuspended = 1,
    WrongPassword = 2,
    CaptchaFailed = 3,
    TooManyLoginAttempts = 4,
    IpBlocked = 5,
    LocationAnomaly = 6,
    DeviceUnauthorized = 7,
    AccountDeactivatedByUser = 8,
    EmailDeliveryFailed = 9,
    AccountLockedDueToFailedLogins = 10,
}

impl FormCondition {
    pub const ALL: [FormCondition; 11] = [
        FormCondition::EmailNotFound,
        FormCondition::AccountSuspended,
        FormCondition::WrongPassword,
        FormCondition::CaptchaFailed,
        FormCondition::TooManyLoginAttempts,
        FormCondition::IpBlocked,
        FormCondition::LocationAnomaly,
        FormCondition::DeviceUnauthorized,
        FormCondition::AccountDeactivatedByUser,
        FormCondition::EmailDeliveryFailed,
        FormCondition::AccountLockedDueToFailedLogins,
    ];

    pub fn id(self) -> ConditionId {
        ConditionId(self as u32)
    }

    pub fn from_id(id: ConditionId) -> Option<Self> {
        Self::ALL.get(id.0 as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            FormCondition::EmailNotFound => "email_not_found",
            FormCondition::AccountSuspended => "account_suspended",
            FormCondition::WrongPassword => "wrong_password",
            FormCondition::CaptchaFailed => "captcha_failed",
            FormCondition::TooManyLoginAttempts => "too_many_login_attempts",
            FormCondition::IpBlocked => "ip_blocked",
            FormCondition::LocationAnomaly => "location_anomaly",
            FormCondition::DeviceUnauthorized => "device_unauthorized",
            FormCondition::AccountDeactivatedByUser => "account_deactivated_by_user",
            FormCondition::EmailDeliveryFailed => "email_delivery_failed",
            FormCondition::AccountLockedDueToFailedLogins => {
                "account_locked_due_to_failed_logins"
            }
        }
    }
}

impl From<FormCondition> for ConditionId {
    fn from(condition: FormCondition) -> Self {
        condition.id()
    }
}

impl fmt::Display for FormCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn form_message(text: &str, priority: i64, conditions: &[FormCondition]) -> Message {
    Message::new(text, priority, conditions.iter().map(|c| c.id()))
}

/// The form catalog, in insertion order.
pub fn form_messages() -> Vec<Message> {
    use FormCondition::*;

    vec![
        form_message("E-mail not found", 1, &[EmailNotFound]),
        form_message("Account suspended", 1, &[AccountSuspended]),
        form_message("Captcha verification failed", 1, &[CaptchaFailed]),
        form_message("Too many login attempts", 2, &[TooManyLoginAttempts]),
        form_message("IP address blocked", 4, &[IpBlocked]),
        form_message("Location anomaly detected", 1, &[LocationAnomaly]),
        form_message("Device unauthorized", 3, &[DeviceUnauthorized]),
        form_message(
            "Too many attempts. If you forgot your password, try resetting it.",
            3,
            &[WrongPassword, TooManyLoginAttempts],
        ),
        // Security concern, outranks everything else in the table.
        form_message(
            "Account possibly compromised",
            5,
            &[TooManyLoginAttempts, IpBlocked, LocationAnomaly],
        ),
        form_message(
            "You can't send an e-mail to this account",
            2,
            &[AccountDeactivatedByUser, EmailDeliveryFailed],
        ),
        form_message(
            "Maybe a bot trying to brute-force it",
            2,
            &[CaptchaFailed, AccountLockedDueToFailedLogins],
        ),
    ]
}

impl Mailbox {
    /// Mailbox preloaded with the authentication/account form catalog.
    pub fn form(fallback: Option<&str>) -> Self {
        Self::new(form_messages(), fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::FormCondition::*;
    use crate::routing::ActiveConditions;

    fn active(conditions: &[FormCondition]) -> ActiveConditions {
        conditions.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_condition_ids_round_trip() {
        for condition in FormCondition::ALL {
            assert_eq!(FormCondition::from_id(condition.id()), Some(condition));
        }
        assert_eq!(FormCondition::from_id(ConditionId(11)), None);
        assert_eq!(IpBlocked.id(), ConditionId(5));
        assert_eq!(
            AccountLockedDueToFailedLogins.to_string(),
            "account_locked_due_to_failed_logins"
        );
    }

    #[test]
    fn test_form_catalog_loaded() {
        let mailbox = Mailbox::form(None);
        assert_eq!(mailbox.len(), 11);
    }

    #[test]
    fn test_email_not_found_matches() {
        let mailbox = Mailbox::form(Some("No condition matched your request"));
        assert_eq!(
            mailbox.best_match(&active(&[EmailNotFound])).text(),
            "E-mail not found"
        );
    }

    #[test]
    fn test_compromised_account_outranks_parts() {
        let mailbox = Mailbox::form(None);
        let chosen =
            mailbox.best_match(&active(&[LocationAnomaly, IpBlocked, TooManyLoginAttempts]));
        assert_eq!(chosen.text(), "Account possibly compromised");
        assert_eq!(chosen.priority(), 5);
    }

    #[test]
    fn test_partial_combination_falls_back_to_single() {
        let mailbox = Mailbox::form(None);
        assert_eq!(
            mailbox.best_match(&active(&[TooManyLoginAttempts, IpBlocked])).text(),
            "IP address blocked"
        );
        assert_eq!(
            mailbox.best_match(&active(&[WrongPassword, TooManyLoginAttempts])).text(),
            "Too many attempts. If you forgot your password, try resetting it."
        );
    }

    #[test]
    fn test_wrong_password_alone_has_no_message() {
        let mailbox = Mailbox::form(Some("fallback"));
        assert_eq!(
            mailbox.best_match(&active(&[WrongPassword])).text(),
            "fallback"
        );
    }
}
