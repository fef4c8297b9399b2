use crate::client::ApiClient;
use reqwest::Method;
use shared_types::{
    parse_user_filter, parse_user_id, AppError, CreateTicketRequest, Ticket, UpdateTicketRequest,
};

pub const TICKETS_PATH: &str = "/v1/api/tickets";

const LIST_FAILED_MESSAGE: &str = "Failed to load tickets";
const CREATE_FAILED_MESSAGE: &str = "Failed to create ticket";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update ticket";

impl ApiClient {
    /// `GET /v1/api/tickets`, optionally filtered by holder.
    #[tracing::instrument(skip(self))]
    pub async fn list_tickets(&self, user_id: Option<i64>) -> Result<Vec<Ticket>, AppError> {
        let mut builder = self.request(Method::GET, TICKETS_PATH);
        if let Some(user_id) = user_id {
            builder = builder.query(&[("userId", user_id)]);
        }
        let tickets: Vec<Ticket> = self.send(builder, LIST_FAILED_MESSAGE).await?;
        tracing::debug!(count = tickets.len(), "tickets loaded");
        Ok(tickets)
    }

    /// `POST /v1/api/tickets`.
    #[tracing::instrument(skip(self))]
    pub async fn create_ticket(&self, user_id: i64) -> Result<Ticket, AppError> {
        let builder = self
            .request(Method::POST, TICKETS_PATH)
            .json(&CreateTicketRequest { user_id });
        let ticket: Ticket = self.send(builder, CREATE_FAILED_MESSAGE).await?;
        tracing::info!(ticket_id = ticket.id, user_id, "ticket created");
        Ok(ticket)
    }

    /// `PATCH /v1/api/tickets/{id}`.
    #[tracing::instrument(skip(self))]
    pub async fn update_ticket(&self, ticket_id: i64, is_validated: bool) -> Result<Ticket, AppError> {
        let builder = self
            .request(Method::PATCH, &format!("{TICKETS_PATH}/{ticket_id}"))
            .json(&UpdateTicketRequest { is_validated });
        let ticket: Ticket = self.send(builder, UPDATE_FAILED_MESSAGE).await?;
        tracing::info!(ticket_id, is_validated, "ticket updated");
        Ok(ticket)
    }
}

/// Load tickets for the raw search-box value. A malformed filter is
/// rejected before any request is made.
pub async fn fetch_tickets(client: &ApiClient, raw_filter: &str) -> Result<Vec<Ticket>, AppError> {
    let filter = parse_user_filter(raw_filter)?;
    client.list_tickets(filter).await
}

/// Create a ticket for the raw user-id input. A malformed id is rejected
/// before any request is made.
pub async fn submit_new_ticket(client: &ApiClient, raw_user_id: &str) -> Result<Ticket, AppError> {
    let user_id = parse_user_id(raw_user_id)?;
    client.create_ticket(user_id).await
}

/// Flip a ticket's validation status.
pub async fn toggle_validation(client: &ApiClient, ticket: &Ticket) -> Result<Ticket, AppError> {
    client.update_ticket(ticket.id, !ticket.is_validated).await
}
