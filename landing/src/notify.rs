//! Browser acknowledgment for contact form submissions.

use aquaflow_core::{FormState, NotifyError, SubmissionNotifier};

pub const THANK_YOU: &str = "Thank you! We will contact you soon.";

/// Logs the submission to the console and shows a blocking alert.
pub struct BrowserNotifier;

impl SubmissionNotifier for BrowserNotifier {
    fn notify(&self, submission: &FormState) -> Result<(), NotifyError> {
        match serde_json::to_string(submission) {
            Ok(payload) => tracing::info!(%payload, "Form submitted"),
            Err(err) => tracing::warn!(%err, "Form submitted (payload not serializable)"),
        }

        let window = web_sys::window().ok_or_else(|| NotifyError::Host("no window".into()))?;
        window
            .alert_with_message(THANK_YOU)
            .map_err(|err| NotifyError::Host(format!("{err:?}")))
    }
}
