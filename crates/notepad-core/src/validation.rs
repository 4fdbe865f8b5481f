//! Form validation rules shared by the HTTP layer and the seed tooling.
//!
//! Missing fields and empty (whitespace-only) fields are treated the same.

use crate::defaults::{MAX_TITLE_LENGTH, MIN_PASSWORD_LENGTH};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (`title`, `body`, `email`, `password`).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collected validation failures for a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }
}

/// Raw notepad form input as submitted.
#[derive(Debug, Clone, Default)]
pub struct NotepadInput {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Notepad input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNotepad {
    pub title: String,
    pub body: String,
}

impl NotepadInput {
    /// Validate title and body.
    ///
    /// Both are required; the title is trimmed and limited to
    /// [`MAX_TITLE_LENGTH`] characters. The body keeps its inner formatting
    /// but is trimmed at both ends.
    pub fn validate(&self) -> Result<ValidNotepad, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = non_blank(self.title.as_deref());
        match title {
            None => errors.push("title", "Title is required."),
            Some(t) if t.chars().count() > MAX_TITLE_LENGTH => errors.push(
                "title",
                format!("Title must be at most {} characters.", MAX_TITLE_LENGTH),
            ),
            Some(_) => {}
        }

        let body = non_blank(self.body.as_deref());
        if body.is_none() {
            errors.push("body", "Body is required.");
        }

        match (title, body) {
            (Some(title), Some(body)) if errors.is_empty() => Ok(ValidNotepad {
                title: title.to_string(),
                body: body.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Raw signup form input.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    /// Normalized email.
    pub email: String,
    pub password: String,
}

impl SignupInput {
    pub fn validate(&self) -> Result<ValidSignup, FieldErrors> {
        let mut errors = FieldErrors::default();

        let email = non_blank(self.email.as_deref()).map(normalize_email);
        match &email {
            None => errors.push("email", "Email is required."),
            Some(e) if !looks_like_email(e) => {
                errors.push("email", "Enter a valid email address.")
            }
            Some(_) => {}
        }

        // Passwords are taken verbatim, whitespace included.
        let password = self.password.as_deref().filter(|p| !p.is_empty());
        match password {
            None => errors.push("password", "Password is required."),
            Some(p) if p.chars().count() < MIN_PASSWORD_LENGTH => errors.push(
                "password",
                format!(
                    "Password must be at least {} characters.",
                    MIN_PASSWORD_LENGTH
                ),
            ),
            Some(_) => {}
        }

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(ValidSignup {
                email,
                password: password.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Canonical form of an email address used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: Option<&str>, body: Option<&str>) -> NotepadInput {
        NotepadInput {
            title: title.map(String::from),
            body: body.map(String::from),
        }
    }

    #[test]
    fn test_valid_notepad() {
        let valid = input(Some("sample title"), Some("sample body"))
            .validate()
            .unwrap();
        assert_eq!(valid.title, "sample title");
        assert_eq!(valid.body, "sample body");
    }

    #[test]
    fn test_missing_fields_rejected() {
        let errors = input(None, None).validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required."));
        assert_eq!(errors.get("body"), Some("Body is required."));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let errors = input(Some("   "), Some("\n\t")).validate().unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("body").is_some());
    }

    #[test]
    fn test_only_body_missing() {
        let errors = input(Some("title"), None).validate().unwrap_err();
        assert!(errors.get("title").is_none());
        assert!(errors.get("body").is_some());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let valid = input(Some("  hello  "), Some("\nline one\nline two\n"))
            .validate()
            .unwrap();
        assert_eq!(valid.title, "hello");
        assert_eq!(valid.body, "line one\nline two");
    }

    #[test]
    fn test_title_length_limit() {
        let at_limit = "a".repeat(MAX_TITLE_LENGTH);
        assert!(input(Some(&at_limit), Some("b")).validate().is_ok());

        let too_long = "a".repeat(MAX_TITLE_LENGTH + 1);
        let errors = input(Some(&too_long), Some("b")).validate().unwrap_err();
        assert!(errors.get("title").unwrap().contains("at most"));
    }

    #[test]
    fn test_title_length_counts_chars_not_bytes() {
        let title = "é".repeat(MAX_TITLE_LENGTH);
        assert!(input(Some(&title), Some("b")).validate().is_ok());
    }

    #[test]
    fn test_signup_valid_normalizes_email() {
        let valid = SignupInput {
            email: Some("  User@Example.COM ".to_string()),
            password: Some("test1234".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(valid.email, "user@example.com");
        assert_eq!(valid.password, "test1234");
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        for bad in ["", "nobody", "@example.com", "user@", "us er@example.com"] {
            let errors = SignupInput {
                email: Some(bad.to_string()),
                password: Some("long enough".to_string()),
            }
            .validate()
            .unwrap_err();
            assert!(errors.get("email").is_some(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let errors = SignupInput {
            email: Some("user@example.com".to_string()),
            password: Some("short".to_string()),
        }
        .validate()
        .unwrap_err();
        assert!(errors.get("password").unwrap().contains("at least"));
    }

    #[test]
    fn test_signup_missing_everything() {
        let errors = SignupInput::default().validate().unwrap_err();
        assert_eq!(errors.iter().count(), 2);
    }
}
