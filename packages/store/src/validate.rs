//! # Form validation and password strength scoring
//!
//! Pure functions, no side effects. Each `validate_*` entry point returns a
//! [`FieldErrors`] map from field name to a human-readable message; fields
//! that pass are simply absent. Running the relevant entry point is the sole
//! gate in front of every mutating operation — the views refuse to submit
//! while the map is non-empty.
//!
//! The strength classifier is separate and non-blocking: it feeds the meter
//! under the signup password field but never rejects a submission beyond the
//! six-character minimum enforced by [`validate_signup`].

use std::collections::BTreeMap;

use crate::models::StudentDraft;

/// Field name → error message for every field that failed its rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drop the message for one field. The views call this as the user
    /// starts typing into a field that previously failed.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Insert `message` and return false when `value` is blank after
    /// trimming.
    fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            false
        } else {
            true
        }
    }
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace,
/// exactly one `@`, a non-empty local part, and a domain containing a dot
/// with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // A dot anywhere except the first or last character of the domain.
    let bytes = domain.as_bytes();
    (1..bytes.len().saturating_sub(1)).any(|i| bytes[i] == b'.')
}

/// 7 to 15 characters drawn from digits, spaces, hyphens, parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let len = phone.chars().count();
    (7..=15).contains(&len)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if errors.require("email", email, "Email is required") && !is_valid_email(email.trim()) {
        errors.insert("email", "Please enter a valid email address");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.len() < 6 {
        errors.insert("password", "Password must be at least 6 characters long");
    }
}

/// Validate the login form.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors
}

/// Validate the signup form.
pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("firstName", first_name, "First name is required");
    errors.require("lastName", last_name, "Last name is required");
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    if confirm_password.is_empty() {
        errors.insert("confirmPassword", "Please confirm your password");
    } else if confirm_password != password {
        errors.insert("confirmPassword", "Passwords do not match");
    }
    errors
}

/// Validate the add/edit student dialog.
pub fn validate_student(draft: &StudentDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("firstname", &draft.firstname, "First name is required");
    errors.require("lastname", &draft.lastname, "Last name is required");
    if errors.require("age", &draft.age, "Age is required") {
        match draft.age.trim().parse::<i64>() {
            Ok(age) if age > 0 => {}
            _ => errors.insert("age", "Age must be a positive number"),
        }
    }
    if errors.require("phone", &draft.phone, "Phone is required")
        && !is_valid_phone(draft.phone.trim())
    {
        errors.insert("phone", "Please enter a valid phone number");
    }
    if errors.require("mail", &draft.mail, "Email is required") && !is_valid_email(draft.mail.trim())
    {
        errors.insert("mail", "Please enter a valid email address");
    }
    errors.require("role", &draft.role, "Role is required");
    errors
}

/// Password strength bucket shown next to the signup meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    TooShort,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Score length plus character-class diversity (upper/lower/digit/
    /// special). Informational only.
    pub fn classify(password: &str) -> Self {
        if password.len() < 6 {
            return PasswordStrength::TooShort;
        }
        if password.len() < 8 {
            return PasswordStrength::Weak;
        }

        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c));
        let classes = [has_upper, has_lower, has_digit, has_special]
            .iter()
            .filter(|present| **present)
            .count();

        match classes {
            0 | 1 => PasswordStrength::Weak,
            2 | 3 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::TooShort => "Too short",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// 0..=3, used for the meter fill width.
    pub fn score(self) -> u8 {
        match self {
            PasswordStrength::TooShort => 0,
            PasswordStrength::Weak => 1,
            PasswordStrength::Medium => 2,
            PasswordStrength::Strong => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        for good in ["a@b.c", "jane.doe@example.com", "x@sub.domain.org", "a@.x.y"] {
            assert!(is_valid_email(good), "{good} should pass");
        }
        for bad in [
            "",
            "not-an-email",
            "a@b",
            "a@b.",
            "a@.c",
            "a b@c.d",
            "a@b@c.d",
            "@b.c",
            "a@",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn phone_shape() {
        assert!(is_valid_phone("555-0100-22"));
        assert!(is_valid_phone("(01) 234 5678"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("555-0100x"));
    }

    #[test]
    fn login_rules() {
        let errors = validate_login("", "");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let errors = validate_login("not-an-email", "abcde");
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters long")
        );

        assert!(validate_login("jane@example.com", "abcdef").is_empty());
    }

    #[test]
    fn signup_rules() {
        let errors = validate_signup("", "", "jane@example.com", "abcdef", "abcdeg");
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("lastName"), Some("Last name is required"));
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert!(errors.get("email").is_none());

        assert!(validate_signup("Jane", "Doe", "jane@example.com", "abcdef", "abcdef").is_empty());
    }

    #[test]
    fn student_rules() {
        let draft = StudentDraft::default();
        let errors = validate_student(&draft);
        assert_eq!(errors.len(), 6);

        let draft = StudentDraft {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            age: "-3".into(),
            phone: "555-0100".into(),
            mail: "ada@example.com".into(),
            role: "student".into(),
        };
        let errors = validate_student(&draft);
        assert_eq!(errors.get("age"), Some("Age must be a positive number"));
        assert_eq!(errors.len(), 1);

        let draft = StudentDraft { age: "28".into(), ..draft };
        assert!(validate_student(&draft).is_empty());
    }

    #[test]
    fn errors_clear_per_field() {
        let mut errors = validate_login("", "");
        errors.clear("email");
        assert!(errors.get("email").is_none());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn strength_buckets() {
        assert_eq!(PasswordStrength::classify("abcde"), PasswordStrength::TooShort);
        assert_eq!(PasswordStrength::classify("abcdef"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("abcdefg1"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::classify("Abcdef1!"), PasswordStrength::Strong);
    }
}
