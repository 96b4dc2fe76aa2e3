//! User rows and the insert payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::require_text;
use super::{Email, ValidationError};

const MAX_NAME_LEN: usize = 255;
const MAX_PASSWORD_LEN: usize = 255;

/// User record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Password hash; opaque to this layer
    pub password: String,
}

/// Validated fields for inserting a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawNewUser")]
pub struct NewUser {
    name: String,
    email: Email,
    password: String,
}

#[derive(Deserialize)]
struct RawNewUser {
    name: String,
    email: String,
    password: String,
}

impl TryFrom<RawNewUser> for NewUser {
    type Error = ValidationError;

    fn try_from(raw: RawNewUser) -> Result<Self, Self::Error> {
        Self::new(&raw.name, &raw.email, raw.password)
    }
}

impl NewUser {
    pub fn new(
        name: &str,
        email: &str,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        require_text("name", name, MAX_NAME_LEN)?;
        let email = Email::new(email)?;
        let password = password.into();
        if password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        if password.len() > MAX_PASSWORD_LEN {
            return Err(ValidationError::TooLong {
                field: "password",
                max: MAX_PASSWORD_LEN,
            });
        }

        Ok(Self {
            name: name.trim().to_owned(),
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_user() {
        let user = NewUser::new(" Devin Sanders ", "tristanjacobs@gmail.com", "$2a$10$hash").unwrap();
        assert_eq!(user.name(), "Devin Sanders");
        assert_eq!(user.email().as_str(), "tristanjacobs@gmail.com");
        assert_eq!(user.password(), "$2a$10$hash");
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(matches!(
            NewUser::new("", "a@b.co", "pw"),
            Err(ValidationError::Empty { field: "name" })
        ));
        assert!(matches!(
            NewUser::new("Ada", "a@b.co", ""),
            Err(ValidationError::Empty { field: "password" })
        ));
        assert!(matches!(
            NewUser::new("Ada", "ada", "pw"),
            Err(ValidationError::InvalidFormat { field: "email", .. })
        ));
    }

    #[test]
    fn deserializes_from_json_payload() {
        let user: NewUser = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(user.email().as_str(), "ada@example.com");

        let err = serde_json::from_str::<NewUser>(
            r#"{"name":"Ada","email":"broken","password":"pw"}"#,
        );
        assert!(err.is_err());
    }
}
