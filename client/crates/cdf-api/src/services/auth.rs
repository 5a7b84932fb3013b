use crate::models::{LoginData, LoginRequest, RegisterRequest, User};
use crate::{ApiError, Client, ClientResult, ErrorKind};

use cdf_session::DecodedIdentity;

use log::{info, warn};
use reqwest::Method;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const REGISTER_FAILED: &str = "Registration failed.";
const STORE_FAILED: &str = "Could not save the session. Please try again.";

impl Client {
    /// Exchange credentials for a token and store it.
    ///
    /// Returns the identity decoded from the new token; `None` if the backend
    /// issued something that doesn't decode (it is stored regardless).
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Option<DecodedIdentity>> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.request(Method::POST, "/api/auth/login").json(&body);
        let data: LoginData = self.execute(req, LOGIN_FAILED).await?;

        self.session().set_token(&data.token).map_err(|e| {
            warn!("Failed to store session token: {e}");
            ApiError::rejected(ErrorKind::Unknown, STORE_FAILED)
        })?;

        let identity = self.session().current_identity();
        match &identity {
            Some(identity) => info!(
                "Logged in as user {} ({})",
                identity.user_id, identity.role
            ),
            None => warn!("Logged in, but the issued token could not be decoded"),
        }

        Ok(identity)
    }

    /// Forget the stored token. Purely local.
    pub fn logout(&self) {
        self.session().clear_token();
        info!("Logged out");
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        let req = self
            .request(Method::POST, "/api/auth/register")
            .json(request);
        self.execute(req, REGISTER_FAILED).await
    }
}
