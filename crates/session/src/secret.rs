//! Serde helpers for `secrecy` values.
//!
//! `secrecy` deliberately does not implement `Serialize`; persisting a token
//! to the session file requires exposing it on purpose.

use {
    secrecy::{ExposeSecret, SecretString},
    serde::Serializer,
};

/// Serialize a `SecretString`, exposing its value.
pub fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

/// Serialize an optional `SecretString`, exposing the value when present.
pub fn serialize_option_secret<S>(
    secret: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match secret {
        Some(s) => serializer.serialize_str(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}
