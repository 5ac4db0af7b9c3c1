//! Contact form field validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed length of the message body.
pub const MESSAGE_MIN_LEN: usize = 10;

const NAME_MIN_LEN: usize = 2;
const SUBJECT_MIN_LEN: usize = 3;

pub const NAME_ERROR: &str = "Name must be at least 2 characters";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const SUBJECT_ERROR: &str = "Subject must be at least 3 characters";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Form field name, also used as the DOM id.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "subject" => Some(Field::Subject),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "John Smith",
            Field::Email => "john@example.com",
            Field::Subject => "Let's work together!",
            Field::Message => {
                "Tell me about your project or just say hello! I'd love to hear from you."
            }
        }
    }

    /// HTML input type; the message renders as a textarea.
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Subject, Field::Message]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw values of the four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }
}

/// Error messages keyed by field. Only failing fields are present.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Validates one field.
pub fn validate_field(field: Field, raw: &str) -> Option<&'static str> {
    match field {
        Field::Name => (trimmed_len(raw) < NAME_MIN_LEN).then_some(NAME_ERROR),
        Field::Email => (!EMAIL_RE.is_match(raw)).then_some(EMAIL_ERROR),
        Field::Subject => (trimmed_len(raw) < SUBJECT_MIN_LEN).then_some(SUBJECT_ERROR),
        Field::Message => (trimmed_len(raw) < MESSAGE_MIN_LEN).then_some(MESSAGE_ERROR),
    }
}

/// Validates a field by name. Unknown names always pass.
pub fn validate(field_name: &str, raw: &str) -> Option<&'static str> {
    Field::from_name(field_name).and_then(|field| validate_field(field, raw))
}

/// Validates every field and returns the failing ones.
pub fn validate_all(values: &FormValues) -> FieldErrors {
    Field::all()
        .iter()
        .filter_map(|field| validate_field(*field, values.get(*field)).map(|e| (*field, e)))
        .collect()
}

/// Character count of the message and whether it meets the minimum,
/// for the "n/10 minimum" counter.
pub fn message_progress(message: &str) -> (usize, bool) {
    let count = message.chars().count();
    (count, count >= MESSAGE_MIN_LEN)
}

fn trimmed_len(raw: &str) -> usize {
    raw.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_threshold() {
        assert_eq!(validate("name", "A"), Some(NAME_ERROR));
        assert_eq!(validate("name", "Al"), None);
        assert_eq!(validate("name", "  A  "), Some(NAME_ERROR));
    }

    #[test]
    fn test_subject_threshold() {
        assert_eq!(validate("subject", "Hi"), Some(SUBJECT_ERROR));
        assert_eq!(validate("subject", "Hey"), None);
    }

    #[test]
    fn test_message_threshold() {
        assert_eq!(validate("message", "123456789"), Some(MESSAGE_ERROR));
        assert_eq!(validate("message", "1234567890"), None);
        assert_eq!(validate("message", "   123456789   "), Some(MESSAGE_ERROR));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(validate("email", "a@b.c"), None);
        assert_eq!(validate("email", "first.last@sub.example.org"), None);
        assert_eq!(validate("email", "not-an-email"), Some(EMAIL_ERROR));
        assert_eq!(validate("email", "a@b"), Some(EMAIL_ERROR));
        assert_eq!(validate("email", "a@@b.c"), Some(EMAIL_ERROR));
        assert_eq!(validate("email", "a b@c.d"), Some(EMAIL_ERROR));
        assert_eq!(validate("email", ""), Some(EMAIL_ERROR));
    }

    #[test]
    fn test_unknown_field_passes() {
        assert_eq!(validate("phone", ""), None);
    }

    #[test]
    fn test_multibyte_counts_characters() {
        assert_eq!(validate("name", "李"), Some(NAME_ERROR));
        assert_eq!(validate("name", "李明"), None);
    }

    #[test]
    fn test_validate_all_returns_only_failures() {
        let values = FormValues {
            name: "Richie".into(),
            email: "bad".into(),
            subject: "Hey".into(),
            message: "short".into(),
        };
        let errors = validate_all(&values);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(&Field::Email), Some(&EMAIL_ERROR));
        assert_eq!(errors.get(&Field::Message), Some(&MESSAGE_ERROR));
        assert!(!errors.contains_key(&Field::Name));
    }

    #[test]
    fn test_message_progress() {
        assert_eq!(message_progress("hello"), (5, false));
        assert_eq!(message_progress("hello world"), (11, true));
    }
}
