use serde::{Deserialize, Serialize};

use super::Tone;

/// Raw values submitted with the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub age: String,
}

/// Status line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    pub message: String,
    pub tone: Tone,
}

impl FormStatus {
    fn new(message: &str, tone: Tone) -> Self {
        Self {
            message: message.to_string(),
            tone,
        }
    }

    pub fn is_success(&self) -> bool {
        self.tone == Tone::Positive
    }
}

/// Check fields in order; the first empty one decides the message.
pub fn validate_login(form: &LoginForm) -> FormStatus {
    if form.email.is_empty() {
        FormStatus::new("Enter an email", Tone::Negative)
    } else if form.password.is_empty() {
        FormStatus::new("Enter a password", Tone::Notice)
    } else if form.age.is_empty() {
        FormStatus::new("Enter your age", Tone::Warning)
    } else {
        FormStatus::new("Login successful", Tone::Positive)
    }
}
