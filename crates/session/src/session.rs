use {
    secrecy::{ExposeSecret, SecretString},
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

use crate::secret::serialize_option_secret;

/// Bearer token plus the cached user profile returned by the backend.
///
/// The two fields are written and cleared together; partial updates are not
/// representable. An absent or empty token means logged out.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_option_secret"
    )]
    pub access_token: Option<SecretString>,
    #[serde(default)]
    pub user: Map<String, Value>,
}

impl Session {
    /// Create an authenticated session.
    pub fn new(token: impl Into<String>, user: Map<String, Value>) -> Self {
        Self {
            access_token: Some(SecretString::new(token.into())),
            user,
        }
    }

    /// True iff a non-empty token is held. An empty string counts as logged
    /// out, matching the truthiness check the web client applied.
    pub fn is_authenticated(&self) -> bool {
        self.bearer().is_some()
    }

    /// The raw bearer token, when authenticated.
    pub fn bearer(&self) -> Option<&str> {
        self.access_token
            .as_ref()
            .map(|t| t.expose_secret().as_str())
            .filter(|t| !t.is_empty())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user", &self.user)
            .finish()
    }
}
