//! HTTP implementation of [`AuthApi`] against the remote HR API.
//!
//! Browser builds (`csr`): real requests via `gloo-net`, raced against a
//! `gloo-timers` deadline. Native builds: stubs that fail with a transport
//! error, since there is no browser to talk from.
//!
//! ERROR HANDLING
//! ==============
//! 2xx bodies go to the session store for validation; 4xx become
//! `AuthError::Rejected` with the server's message; 5xx and network failures
//! are transport errors. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::api::{LOGIN_ENDPOINT, LOGOUT_ENDPOINT};
use access::{AuthApi, AuthError, Credentials, LoginResponse};

use crate::config::ClientConfig;

/// Auth service client bound to a base URL and timeout.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map an HTTP status and (possibly unreadable) body to a login result.
///
/// # Errors
///
/// `InvalidResponseFormat` for a 2xx without a readable body, `Rejected` for
/// 4xx, and `Transport` for anything else.
pub fn classify_login_response(status: u16, body: Option<LoginResponse>) -> Result<LoginResponse, AuthError> {
    match status {
        200..=299 => body.ok_or(AuthError::InvalidResponseFormat),
        400..=499 => Err(AuthError::Rejected {
            status,
            message: body.and_then(|b| b.message).unwrap_or_default(),
        }),
        _ => Err(AuthError::Transport(format!("server responded with {status}"))),
    }
}

#[cfg(feature = "csr")]
async fn with_timeout<F: std::future::Future>(secs: u64, fut: F) -> Result<F::Output, AuthError> {
    use futures::future::{Either, select};

    let deadline = gloo_timers::future::sleep(std::time::Duration::from_secs(secs));
    futures::pin_mut!(fut);
    match select(fut, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(AuthError::Timeout(secs)),
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(LOGIN_ENDPOINT);
            let exchange = async {
                let resp = gloo_net::http::Request::post(&url)
                    .json(credentials)
                    .map_err(|e| AuthError::Transport(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| AuthError::Transport(e.to_string()))?;
                let status = resp.status();
                let body = resp.json::<LoginResponse>().await.ok();
                classify_login_response(status, body)
            };
            with_timeout(self.config.request_timeout_secs, exchange).await?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, self.config.endpoint(LOGIN_ENDPOINT));
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn logout(&self, token: Option<&str>) {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(LOGOUT_ENDPOINT);
            let mut request = gloo_net::http::Request::post(&url);
            if let Some(token) = token {
                request = request.header("Authorization", &bearer(token));
            }
            match with_timeout(self.config.request_timeout_secs, request.send()).await {
                Ok(Ok(resp)) if resp.ok() => log::debug!("remote logout acknowledged"),
                Ok(Ok(resp)) => log::warn!("remote logout returned {}", resp.status()),
                Ok(Err(e)) => log::warn!("remote logout failed: {e}"),
                Err(e) => log::warn!("remote logout failed: {e}"),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, self.config.endpoint(LOGOUT_ENDPOINT));
        }
    }
}
