use {
    serde::de::{DeserializeOwned, Error as _},
    serde_json::Value,
};

use crate::error::{Error, Result};

/// A successful response body.
///
/// The backend mostly answers JSON, but some routes answer plain text
/// (health probes behind proxies, bare error pages). Both shapes are
/// preserved as received rather than coerced; callers must not assume
/// JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Borrow the JSON value, if this payload is JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Borrow the raw text, if this payload was not JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(t) => Some(t),
        }
    }

    /// Deserialize a JSON payload into a concrete type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(v) => Ok(serde_json::from_value(v)?),
            Self::Text(t) => Err(Error::Parse(serde_json::Error::custom(format!(
                "expected a JSON body, got text: {t:?}"
            )))),
        }
    }
}
