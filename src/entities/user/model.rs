//! User entity model

use crate::core::Entity;
use crate::core::PharmacyResult;
use crate::core::validation::filters::{required, trim};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named identity referenced by purchase requests and demands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub username: String,
}

impl Entity for User {
    type Fields = UserFields;

    fn resource_name() -> &'static str {
        "user"
    }

    fn from_parts(
        id: i64,
        fields: UserFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: fields.username,
            created_at,
            updated_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn unique_key(fields: &UserFields) -> Option<(&'static str, String)> {
        Some(("username", fields.username.clone()))
    }
}

/// Request body for registering a user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 150, message = "Ensure this field has between 1 and 150 characters.")
    )]
    pub username: Option<String>,
}

impl UserPayload {
    pub fn into_fields(self) -> PharmacyResult<UserFields> {
        let payload = Self {
            username: trim(self.username),
        };
        payload.validate()?;

        Ok(UserFields {
            username: required(payload.username, "username")?,
        })
    }
}
