//! Login boundary validation
//!
//! Input shape checks performed before any store operation runs. The store
//! itself never validates; rejected input stays at the boundary and store
//! state is untouched.

/// Username length limits, inclusive.
const USERNAME_MIN_CHARS: usize = 1;
const USERNAME_MAX_CHARS: usize = 7;

/// Minimum length of the digits/spaces/dashes body of a phone contact.
const PHONE_MIN_CHARS: usize = 10;

/// Result of validating login input.
///
/// All problems are collected so the UI can surface them at once rather
/// than one per submit attempt.
#[derive(Debug, Clone)]
pub struct LoginValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a login form submission.
///
/// Contact must look like an email or a phone number; username must be
/// between 1 and 7 characters. Characters, not bytes.
pub fn validate_login(username: &str, contact: &str) -> LoginValidation {
    let mut errors = Vec::new();

    if !is_email_shaped(contact) && !is_phone_shaped(contact) {
        errors.push("Contact must be a valid email or phone number".to_string());
    }

    let username_chars = username.chars().count();
    if username_chars < USERNAME_MIN_CHARS {
        errors.push(format!(
            "Username must be at least {} character",
            USERNAME_MIN_CHARS
        ));
    } else if username_chars > USERNAME_MAX_CHARS {
        errors.push(format!(
            "Username cannot be more than {} characters",
            USERNAME_MAX_CHARS
        ));
    }

    LoginValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// `local@domain.tld` shape: exactly one `@`, non-empty local part, a dot
/// somewhere after the first character of the domain, no whitespace.
fn is_email_shaped(contact: &str) -> bool {
    if contact.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = contact.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with something on both sides.
    match domain.find('.') {
        Some(idx) => idx > 0 && idx + 1 < domain.len(),
        None => false,
    }
}

/// Optional leading `+`, then at least ten digits, spaces, or dashes.
fn is_phone_shaped(contact: &str) -> bool {
    let body = contact.strip_prefix('+').unwrap_or(contact);

    body.chars().count() >= PHONE_MIN_CHARS
        && body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_contact() {
        let result = validate_login("Maya", "maya@example.com");
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_valid_phone_contact() {
        assert!(validate_login("Maya", "410-555-0134").valid);
        assert!(validate_login("Maya", "+1 410 555 0134").valid);
        assert!(validate_login("Maya", "4105550134").valid);
    }

    #[test]
    fn test_rejects_contact_that_is_neither() {
        let result = validate_login("Maya", "not-a-contact");
        assert!(!result.valid);
        assert!(result.errors[0].contains("valid email or phone"));
    }

    #[test]
    fn test_rejects_email_without_domain_dot() {
        assert!(!validate_login("Maya", "maya@example").valid);
    }

    #[test]
    fn test_rejects_email_with_empty_local_part() {
        assert!(!validate_login("Maya", "@example.com").valid);
    }

    #[test]
    fn test_rejects_email_with_whitespace() {
        assert!(!validate_login("Maya", "ma ya@example.com").valid);
    }

    #[test]
    fn test_rejects_email_with_two_at_signs() {
        assert!(!validate_login("Maya", "maya@@example.com").valid);
    }

    #[test]
    fn test_rejects_dot_at_domain_edge() {
        assert!(!validate_login("Maya", "maya@.com").valid);
        assert!(!validate_login("Maya", "maya@example.").valid);
    }

    #[test]
    fn test_rejects_short_phone() {
        assert!(!validate_login("Maya", "555-0134").valid);
    }

    #[test]
    fn test_rejects_phone_with_letters() {
        assert!(!validate_login("Maya", "410-555-CALL").valid);
    }

    #[test]
    fn test_rejects_empty_username() {
        let result = validate_login("", "maya@example.com");
        assert!(!result.valid);
        assert!(result.errors[0].contains("at least 1 character"));
    }

    #[test]
    fn test_rejects_long_username() {
        let result = validate_login("Historian", "maya@example.com");
        assert!(!result.valid);
        assert!(result.errors[0].contains("more than 7 characters"));
    }

    #[test]
    fn test_username_limits_are_inclusive() {
        assert!(validate_login("M", "maya@example.com").valid);
        assert!(validate_login("MayaLee", "maya@example.com").valid);
    }

    #[test]
    fn test_username_length_counts_characters_not_bytes() {
        // Seven characters, far more than seven bytes.
        assert!(validate_login("写真クラブです", "maya@example.com").valid);
    }

    #[test]
    fn test_collects_all_errors_at_once() {
        let result = validate_login("", "nope");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
    }
}
