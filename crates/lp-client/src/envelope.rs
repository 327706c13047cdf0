//! Response envelope decoding
//!
//! Every backend endpoint wraps its payload in `{status, data, errors}`.
//! `status == false` or an absent `data` is a failure; the first entry of
//! `errors` carries the human-readable reason when the backend supplies one.

use serde::Deserialize;

use crate::error::{Error, Result};

/// The `{status, data, errors}` wrapper shared by all backend responses
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into a `Result`.
    ///
    /// `default_msg` is surfaced when the backend fails without providing
    /// an error message of its own.
    pub fn into_result(self, default_msg: &str) -> Result<T> {
        let Envelope {
            status,
            data,
            errors,
        } = self;

        if status {
            if let Some(data) = data {
                return Ok(data);
            }
        }

        let message = errors
            .into_iter()
            .find(|e| !e.is_empty())
            .unwrap_or_else(|| default_msg.to_string());
        Err(Error::Api(message))
    }
}
