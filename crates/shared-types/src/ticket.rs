use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const INVALID_USER_ID_MESSAGE: &str = "Please enter a valid User ID";

/// Role summary embedded in ticket party records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RoleName {
    pub name: String,
}

/// Ticket holder or validator summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TicketParty {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: RoleName,
}

/// Validation record tying a user to a validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "validatedBy", default)]
    pub validated_by: Option<i64>,
    #[serde(rename = "isValidated")]
    pub is_validated: bool,
    #[serde(rename = "validatedAt", default)]
    pub validated_at: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user: TicketParty,
    #[serde(default)]
    pub validator: Option<TicketParty>,
}

impl Ticket {
    /// UTC calendar day the ticket was created on.
    pub fn created_day(&self) -> Option<NaiveDate> {
        parse_day(&self.created_at)
    }

    /// Name of the validator, only meaningful once validated.
    pub fn validator_name(&self) -> Option<&str> {
        if !self.is_validated {
            return None;
        }
        self.validator.as_ref().map(|v| v.full_name.as_str())
    }
}

fn parse_day(timestamp: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    timestamp
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Counters shown above the ticket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketStats {
    pub total: usize,
    pub validated: usize,
    pub pending: usize,
    pub today: usize,
}

impl TicketStats {
    /// Count `tickets`; "today" means created on `today` (UTC).
    pub fn compute(tickets: &[Ticket], today: NaiveDate) -> Self {
        let validated = tickets.iter().filter(|t| t.is_validated).count();
        Self {
            total: tickets.len(),
            validated,
            pending: tickets.len() - validated,
            today: tickets
                .iter()
                .filter(|t| t.created_day() == Some(today))
                .count(),
        }
    }
}

/// Parse a user id typed into a form. Rejects blanks, non-numbers and
/// non-positive values before anything is sent.
pub fn parse_user_id(input: &str) -> Result<i64, AppError> {
    match input.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::field("userId", INVALID_USER_ID_MESSAGE)),
    }
}

/// Parse the optional user-id search filter. Blank means "all tickets".
pub fn parse_user_filter(input: &str) -> Result<Option<i64>, AppError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_user_id(input).map(Some)
}
