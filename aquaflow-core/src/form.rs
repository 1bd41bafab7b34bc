//! Contact form state and submission.
//!
//! The form never talks to a server. Submitting hands the captured values to a
//! [`SubmissionNotifier`] (in the browser: a console diagnostic plus an alert)
//! and clears the form. Field validation (presence, email/phone syntax) is left
//! to the browser's native constraint checks on the rendered inputs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FormError, NotifyError};

/// The four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

/// Render order of the form inputs.
pub const FIELDS: [FormField; 4] = [
    FormField::Name,
    FormField::Email,
    FormField::Phone,
    FormField::Message,
];

impl FormField {
    /// Value of the element's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// `type` attribute for single-line inputs; `None` for the textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Name => Some("text"),
            FormField::Email => Some("email"),
            FormField::Phone => Some("tel"),
            FormField::Message => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Phone => "Your Phone",
            FormField::Message => "Describe your needs...",
        }
    }

    /// Every field carries the `required` attribute.
    pub fn required(self) -> bool {
        true
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "message" => Ok(FormField::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Current value of every form field. `Default` is the empty form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
        tracing::trace!(field = %field, "form field updated");
    }

    /// Change handler keyed by the input's `name` attribute.
    pub fn edit(&mut self, field_name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = field_name.parse::<FormField>()?;
        self.set(field, value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        FIELDS.iter().all(|field| self.get(*field).is_empty())
    }

    /// Hand the captured values to `notifier` and clear the form.
    ///
    /// The form is empty when this returns, including when the notifier fails.
    pub fn submit<N>(&mut self, notifier: &N) -> Result<(), NotifyError>
    where
        N: SubmissionNotifier + ?Sized,
    {
        let acknowledged = notifier.notify(self);
        *self = FormState::default();
        tracing::debug!(
            acknowledged = acknowledged.is_ok(),
            "contact form reset after submit"
        );
        acknowledged
    }
}

/// Receives a submitted form. Implementations must not assume the values were validated
/// beyond the browser's native constraints.
pub trait SubmissionNotifier {
    fn notify(&self, submission: &FormState) -> Result<(), NotifyError>;
}

impl<F> SubmissionNotifier for F
where
    F: Fn(&FormState) -> Result<(), NotifyError>,
{
    fn notify(&self, submission: &FormState) -> Result<(), NotifyError> {
        self(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines for ordering checks.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn jane() -> FormState {
        FormState {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: "555-0100".into(),
            message: "leak".into(),
        }
    }

    #[test]
    fn starts_empty() {
        let form = FormState::default();
        assert!(form.is_empty());
        for field in FIELDS {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut form = jane();
        form.set(FormField::Phone, "555-0199");
        assert_eq!(
            form,
            FormState {
                phone: "555-0199".into(),
                ..jane()
            }
        );
    }

    #[test]
    fn last_write_per_field_wins_regardless_of_interleaving() {
        let edits = [
            (FormField::Name, "J"),
            (FormField::Email, "j@"),
            (FormField::Name, "Jane"),
            (FormField::Message, "drip"),
            (FormField::Email, "jane@x.com"),
            (FormField::Phone, "555-0100"),
            (FormField::Message, "leak"),
        ];

        let mut forward = FormState::default();
        for (field, value) in edits {
            forward.set(field, value);
        }

        // Reorder across distinct fields while keeping per-field order.
        let mut grouped = FormState::default();
        for target in FIELDS.iter().rev() {
            for (field, value) in edits.iter().filter(|(f, _)| f == target) {
                grouped.set(*field, *value);
            }
        }

        assert_eq!(forward, jane());
        assert_eq!(grouped, forward);
    }

    #[test]
    fn edit_parses_dom_names() {
        let mut form = FormState::default();
        form.edit("email", "jane@x.com").unwrap();
        form.edit("message", "leak").unwrap();
        assert_eq!(form.email, "jane@x.com");
        assert_eq!(form.message, "leak");
    }

    #[test]
    fn edit_rejects_unknown_field_without_side_effects() {
        let mut form = jane();
        let err = form.edit("address", "1 Main St").unwrap_err();
        assert_eq!(err, FormError::UnknownField("address".into()));
        assert_eq!(form, jane());
    }

    #[test]
    fn submit_hands_over_values_then_resets() {
        let seen = RefCell::new(None);
        let notifier = |submission: &FormState| -> Result<(), NotifyError> {
            *seen.borrow_mut() = Some(submission.clone());
            Ok(())
        };

        let mut form = jane();
        form.submit(&notifier).unwrap();

        assert_eq!(seen.into_inner(), Some(jane()));
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn failing_notifier_still_resets() {
        let notifier =
            |_: &FormState| -> Result<(), NotifyError> { Err(NotifyError::Host("blocked".into())) };

        let mut form = jane();
        let result = form.submit(&notifier);

        assert_eq!(result, Err(NotifyError::Host("blocked".into())));
        assert!(form.is_empty());
    }

    #[test]
    fn reset_is_logged_after_notifier_runs() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        let notifier = |submission: &FormState| -> Result<(), NotifyError> {
            tracing::info!(name = %submission.name, "acknowledged");
            Ok(())
        };
        let mut form = jane();
        tracing::subscriber::with_default(subscriber, || form.submit(&notifier)).unwrap();

        let output = logs.contents();
        let acknowledged = output.find("acknowledged name=Jane").expect("notifier log");
        let reset = output.find("contact form reset after submit").expect("reset log");
        assert!(acknowledged < reset, "unexpected log order:\n{output}");
        assert!(output.contains("acknowledged=true"));
        assert!(form.is_empty());
    }

    #[test]
    fn field_metadata_matches_inputs() {
        assert_eq!(FormField::Email.input_type(), Some("email"));
        assert_eq!(FormField::Phone.input_type(), Some("tel"));
        assert_eq!(FormField::Message.input_type(), None);
        assert_eq!(FormField::Message.placeholder(), "Describe your needs...");
        assert!(FIELDS.iter().all(|f| f.required()));
        for field in FIELDS {
            assert_eq!(field.name().parse::<FormField>(), Ok(field));
        }
    }

    #[test]
    fn serializes_for_diagnostics() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["phone"], "555-0100");
        assert_eq!(json["message"], "leak");
    }
}
