//! Authentication routes.
//!
//! These all skip the bearer header: a stale stored token would get the
//! call rejected by auth middleware before the handler ever saw it.

use {reqwest::Method, serde_json::json};

use crate::{
    client::{ApiClient, RequestOptions},
    error::Result,
    model::{Credentials, RegisterUser, TwoFactorCode},
    payload::Payload,
};

const SKIP_AUTH: RequestOptions = RequestOptions { skip_auth: true };

impl ApiClient {
    /// `POST /auth/register`.
    pub async fn register(&self, user: &RegisterUser) -> Result<Payload> {
        self.request(
            Method::POST,
            "/auth/register",
            Some(serde_json::to_value(user)?),
            SKIP_AUTH,
        )
        .await
    }

    /// `POST /auth/login`.
    ///
    /// On success the body is a token grant; accounts with 2FA enabled
    /// answer with a challenge instead, to be completed via
    /// [`ApiClient::verify_2fa`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Payload> {
        self.request(
            Method::POST,
            "/auth/login",
            Some(serde_json::to_value(credentials)?),
            SKIP_AUTH,
        )
        .await
    }

    /// `POST /auth/verify-2fa`.
    pub async fn verify_2fa(&self, code: &TwoFactorCode) -> Result<Payload> {
        self.request(
            Method::POST,
            "/auth/verify-2fa",
            Some(serde_json::to_value(code)?),
            SKIP_AUTH,
        )
        .await
    }

    /// `POST /auth/resend-otp`.
    pub async fn resend_otp(&self, email: &str) -> Result<Payload> {
        self.request(
            Method::POST,
            "/auth/resend-otp",
            Some(json!({"email": email})),
            SKIP_AUTH,
        )
        .await
    }

    /// `POST /auth/validate-token`. The token under test travels as a
    /// query parameter, not a header, per the backend contract.
    pub async fn validate_token(&self, token: &str) -> Result<Payload> {
        let path = format!("/auth/validate-token?token={}", urlencoding::encode(token));
        self.request(Method::POST, &path, None, SKIP_AUTH).await
    }
}
