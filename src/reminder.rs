//! Reminder scheduling: fire a localized notification payload after a
//! user-chosen delay.
//!
//! The pipeline validates the request (positive minute count, prior
//! notification permission grant) and schedules the delayed payload on the
//! tokio runtime. Delivering the payload to the OS/browser notification
//! layer is the embedder's job.

use crate::error::{InputError, PermissionError, ScanError};
use crate::i18n::Language;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// State of the notification permission, mirroring the browser API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// Never asked. Treated like Denied for scheduling purposes; the UI is
    /// expected to request the grant first.
    Default,
}

/// The localized notification content handed to the notification layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderNotification {
    pub title: String,
    pub body: String,
}

/// Build the localized title/body for a medicine reminder.
pub fn build_notification(
    medicine_name: &str,
    usage: &str,
    language: Language,
) -> ReminderNotification {
    let strings = language.strings();
    ReminderNotification {
        title: format!("{}{}", strings.reminder_title_prefix, medicine_name),
        body: strings.reminder_body.replace("{usage}", usage),
    }
}

/// Localized confirmation text shown right after scheduling.
pub fn confirmation(language: Language) -> &'static str {
    language.strings().reminder_set
}

/// Schedule a reminder notification `minutes` from now.
///
/// Rejects a non-positive minute count with `InputError` and a missing
/// permission grant with `PermissionError` (each carrying a localized user
/// message); nothing is scheduled in either case. On success, the returned
/// handle resolves to the notification payload once the delay elapses.
pub fn schedule(
    medicine_name: &str,
    usage: &str,
    minutes: i64,
    permission: NotificationPermission,
    language: Language,
) -> Result<JoinHandle<ReminderNotification>, ScanError> {
    if minutes <= 0 {
        return Err(InputError::InvalidMinutes(minutes).into());
    }
    if permission != NotificationPermission::Granted {
        return Err(PermissionError::NotificationsDenied.into());
    }

    let notification = build_notification(medicine_name, usage, language);
    let delay = Duration::from_secs(minutes as u64 * 60);
    info!(minutes, "reminder scheduled for {}", medicine_name);

    Ok(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        notification
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;

    // ==================== Notification Content Tests ====================

    #[test]
    fn test_notification_english() {
        let notification =
            build_notification("Paracetamol", "For fever and pain relief", Language::ENGLISH);
        assert_eq!(notification.title, "Medicine Reminder: Paracetamol");
        assert_eq!(
            notification.body,
            "It's time to take your medicine. Usage: For fever and pain relief"
        );
    }

    #[test]
    fn test_notification_hindi() {
        let notification =
            build_notification("पैरासिटामोल", "बुखार और दर्द से राहत के लिए", Language::HINDI);
        assert_eq!(notification.title, "दवा अनुस्मारक: पैरासिटामोल");
        assert!(notification.body.contains("उपयोग: बुखार और दर्द से राहत के लिए"));
    }

    // ==================== Validation Tests ====================

    #[tokio::test]
    async fn test_zero_minutes_rejected() {
        let result = schedule(
            "Paracetamol",
            "usage",
            0,
            NotificationPermission::Granted,
            Language::ENGLISH,
        );
        let err = result.err().expect("expected InputError");
        assert!(matches!(err, ScanError::Input(InputError::InvalidMinutes(0))));
        assert_eq!(
            err.user_message(Language::ENGLISH),
            "Please enter a valid number of minutes."
        );
    }

    #[tokio::test]
    async fn test_negative_minutes_rejected() {
        let result = schedule(
            "Paracetamol",
            "usage",
            -30,
            NotificationPermission::Granted,
            Language::ENGLISH,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_denied_permission_rejected_with_localized_message() {
        let result = schedule(
            "Paracetamol",
            "usage",
            60,
            NotificationPermission::Denied,
            Language::HINDI,
        );
        let err = result.err().expect("expected PermissionError");
        assert!(matches!(err, ScanError::Permission(_)));
        assert!(err.user_message(Language::HINDI).contains("अनुस्मारक"));
    }

    #[tokio::test]
    async fn test_default_permission_treated_as_not_granted() {
        let result = schedule(
            "Paracetamol",
            "usage",
            60,
            NotificationPermission::Default,
            Language::ENGLISH,
        );
        assert!(matches!(result, Err(ScanError::Permission(_))));
    }

    // ==================== Scheduling Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_reminder_fires_with_payload() {
        let handle = schedule(
            "Metformin",
            "For type 2 diabetes",
            60,
            NotificationPermission::Granted,
            Language::ENGLISH,
        )
        .expect("should schedule");

        // Paused clock auto-advances through the one-hour sleep
        let notification = handle.await.expect("task should complete");
        assert_eq!(notification.title, "Medicine Reminder: Metformin");
        assert!(notification.body.contains("For type 2 diabetes"));
    }

    #[test]
    fn test_confirmation_is_localized() {
        assert_eq!(
            confirmation(Language::ENGLISH),
            "Reminder set! You will receive a notification."
        );
        assert_ne!(confirmation(Language::ENGLISH), confirmation(Language::HINDI));
    }
}
