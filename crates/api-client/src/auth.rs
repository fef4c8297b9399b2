use crate::client::ApiClient;
use reqwest::Method;
use shared_types::{AppError, LoginData, LoginRequest};

pub const LOGIN_PATH: &str = "/v1/api/auth/login";

/// Shown when a login failure carries no message from the backend.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Exchanges credentials for a user and token.
///
/// Implementations perform exactly one remote call and never touch the
/// session; storing the result is the caller's job.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, AppError>;
}

impl AuthGateway for ApiClient {
    #[tracing::instrument(skip_all, fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, AppError> {
        let builder = self.anonymous_request(Method::POST, LOGIN_PATH).json(request);
        let data: LoginData = self.send(builder, LOGIN_FAILED_MESSAGE).await?;
        tracing::info!(user_id = data.user.id, role = data.user.role().as_str(), "login succeeded");
        Ok(data)
    }
}

/// Validate the form locally, then log in through `gateway`.
///
/// Empty fields fail with a validation error before any request is made.
pub async fn authenticate<G: AuthGateway>(
    gateway: &G,
    email: &str,
    password: &str,
) -> Result<LoginData, AppError> {
    let request = LoginRequest::new(email.trim(), password);
    request.validate()?;
    gateway.login(&request).await
}
