use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use std::{borrow::Cow, collections::HashMap};
#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_INVALID: &str = "Name must not contain digits or spaces.";
pub const UNIVERSITY_ID_INVALID: &str = "University ID must be at least 8 digits.";

/// Login form values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(
            email(message = "Please enter a valid email address."),
            custom(function = "validate_email_domain")
        )
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters."))
    )]
    pub password: String,
}

/// Registration form values. Only validated client side; nothing is sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(
            length(min = 1, message = "Name is required."),
            custom(function = "validate_name_letters")
        )
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            email(message = "Please enter a valid email address."),
            custom(function = "validate_email_domain")
        )
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters."))
    )]
    pub password: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_university_id")))]
    pub university_id: String,
}

impl RegisterRequest {
    /// Everything but the password, for logging.
    pub fn redacted(&self) -> String {
        format!(
            "name={} email={} university_id={}",
            self.name, self.email, self.university_id
        )
    }
}

/// Form body of `POST /api/auth/token/`. The API calls the email `username`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl From<&LoginRequest> for TokenRequest {
    fn from(req: &LoginRequest) -> Self {
        Self {
            username: req.email.clone(),
            password: req.password.clone(),
        }
    }
}

/// Letters only. Empty input is left to the `length` rule.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic())
}

/// The domain needs a dot followed by a top-level label of two or more letters.
pub fn has_dotted_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

pub fn is_valid_university_id(id: &str) -> bool {
    id.len() >= 8 && id.chars().all(|c| c.is_ascii_digit())
}

#[cfg(feature = "validation")]
fn validate_name_letters(name: &str) -> Result<(), ValidationError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new("name_letters").with_message(Cow::Borrowed(NAME_INVALID)))
    }
}

#[cfg(feature = "validation")]
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    if has_dotted_domain(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain").with_message(Cow::Borrowed(INVALID_EMAIL)))
    }
}

#[cfg(feature = "validation")]
fn validate_university_id(id: &str) -> Result<(), ValidationError> {
    if is_valid_university_id(id) {
        Ok(())
    } else {
        Err(ValidationError::new("university_id")
            .with_message(Cow::Borrowed(UNIVERSITY_ID_INVALID)))
    }
}

/// Run `Validate` and flatten the result to the first message per field.
#[cfg(feature = "validation")]
pub fn validate_fields<T: Validate>(value: &T) -> HashMap<String, String> {
    match value.validate() {
        Ok(()) => HashMap::new(),
        Err(errors) => crate::AppError::from(errors).field_errors,
    }
}
