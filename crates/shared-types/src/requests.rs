use crate::error::AppError;
use crate::user::User;
use serde::{Deserialize, Serialize};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both email and password";

/// Body of `POST /v1/api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be filled in before a login request is sent.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation(
                MISSING_CREDENTIALS_MESSAGE,
                Default::default(),
            ));
        }
        Ok(())
    }
}

/// `data` payload of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginData {
    pub user: User,
    pub token: String,
}

/// Envelope every backend response is wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Body of `POST /v1/api/tickets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTicketRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Body of `PATCH /v1/api/tickets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateTicketRequest {
    #[serde(rename = "isValidated")]
    pub is_validated: bool,
}
