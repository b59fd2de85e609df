use teller::domain::{validate_login, LoginForm, Tone};

fn status_for(email: &str, password: &str, age: &str) -> (String, Tone) {
    let status = validate_login(&LoginForm {
        email: email.to_string(),
        password: password.to_string(),
        age: age.to_string(),
    });
    (status.message, status.tone)
}

#[test]
fn test_fields_are_checked_in_order() {
    assert_eq!(
        status_for("", "secret", "40"),
        ("Enter an email".to_string(), Tone::Negative)
    );
    assert_eq!(
        status_for("me@example.com", "", ""),
        ("Enter a password".to_string(), Tone::Notice)
    );
    assert_eq!(
        status_for("me@example.com", "secret", ""),
        ("Enter your age".to_string(), Tone::Warning)
    );
    assert_eq!(
        status_for("me@example.com", "secret", "40"),
        ("Login successful".to_string(), Tone::Positive)
    );
}

#[test]
fn test_only_empty_strings_count_as_missing() {
    let (message, _) = status_for(" ", " ", " ");
    assert_eq!(message, "Login successful");
}
