use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("password must not contain the user's name")]
    PasswordContainsName,

    #[error("email must contain '@'")]
    InvalidEmail,

    #[error("phone number must contain exactly 10 digits")]
    InvalidPhone,

    #[error("a user is already registered with this email")]
    DuplicateEmail,
}

//
// ─── USER ──────────────────────────────────────────────────────────────────────
//

/// A registered quiz player.
///
/// Passwords are held and persisted in plain text; this mirrors the user
/// store format and is a known limitation, not something to harden here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    password: String,
    email: String,
    phone_number: String,
}

impl User {
    /// Creates a new user, enforcing the registration invariants.
    ///
    /// Checks run in order and stop at the first failure: the password must
    /// not contain the name (case-sensitive), the email must contain `@`,
    /// and the phone number must be exactly 10 ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError`.
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let password = password.into();
        let email = email.into();
        let phone_number = phone_number.into();

        if password.contains(&name) {
            return Err(ValidationError::PasswordContainsName);
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if phone_number.len() != 10 || !phone_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self {
            name,
            password,
            email,
            phone_number,
        })
    }

    /// Rehydrate a user from persisted storage without re-validating.
    ///
    /// Load tolerance: records written by earlier runs are trusted as-is.
    #[must_use]
    pub fn from_persisted(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_new_happy_path() {
        let user = User::new("Ana", "s3cret", "ana@example.com", "0612345678").unwrap();

        assert_eq!(user.name(), "Ana");
        assert_eq!(user.password(), "s3cret");
        assert_eq!(user.email(), "ana@example.com");
        assert_eq!(user.phone_number(), "0612345678");
    }

    #[test]
    fn rejects_password_containing_name() {
        let err = User::new("Ana", "Ana1234", "ana@example.com", "0612345678").unwrap_err();
        assert_eq!(err, ValidationError::PasswordContainsName);
    }

    #[test]
    fn name_check_is_case_sensitive() {
        // "ana" != "Ana": lowercase embedding passes the containment check.
        let user = User::new("Ana", "ana1234", "ana@example.com", "0612345678");
        assert!(user.is_ok());
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let err = User::new("Ana", "s3cret", "ana.example.com", "0612345678").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn rejects_malformed_phone_numbers() {
        for phone in ["12345", "12345678901", "12345abcde", ""] {
            let err = User::new("Ana", "s3cret", "ana@example.com", phone).unwrap_err();
            assert_eq!(err, ValidationError::InvalidPhone, "phone: {phone:?}");
        }
    }

    #[test]
    fn validation_stops_at_first_failure() {
        // Both the password and the email are bad; the password check wins.
        let err = User::new("Ana", "Ana", "no-at-sign", "123").unwrap_err();
        assert_eq!(err, ValidationError::PasswordContainsName);
    }

    #[test]
    fn from_persisted_skips_validation() {
        let user = User::from_persisted("Ana", "Ana", "no-at-sign", "123");
        assert_eq!(user.email(), "no-at-sign");
    }
}
