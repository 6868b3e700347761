// src/request.rs
//! Request dispatch — the boundary between transport and the cipher core
//!
//! A transport hands over the four request fields; this module picks the
//! cipher, parses the Caesar key, and shapes the `{"result"}` /
//! `{"error"}` payload. It never sees HTTP or sockets.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::INVALID_METHOD_RESULT;
use crate::core::{caesar, clean_playfair_output, playfair, vigenere, Result};
use crate::enums::{CipherMethod, CipherMode};
use crate::error::CoreError;

/// The four fields a transport extracts from an incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub method: String,
    pub mode: String,
    pub text: String,
    pub key: String,
}

impl CipherRequest {
    pub fn new(
        method: impl Into<String>,
        mode: impl Into<String>,
        text: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        CipherRequest {
            method: method.into(),
            mode: mode.into(),
            text: text.into(),
            key: key.into(),
        }
    }
}

/// Outgoing payload: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherResponse {
    Result(String),
    Error(String),
}

impl CipherResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, CipherResponse::Result(_))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Result<String>> for CipherResponse {
    fn from(outcome: Result<String>) -> Self {
        match outcome {
            Ok(text) => CipherResponse::Result(text),
            Err(err) => CipherResponse::Error(err.to_string()),
        }
    }
}

/// Parse a Caesar key the way C's `stoi` reads it.
///
/// Leading whitespace and one sign are allowed, then at least one digit;
/// anything after the digits is ignored (`"3abc"` → 3). Values outside
/// `i32` are rejected.
pub fn parse_shift(key: &str) -> Result<i32> {
    let trimmed = key.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    // An empty or sign-only prefix still goes through `parse` so the error
    // carries the right `IntErrorKind`.
    trimmed[..sign_len + digit_len]
        .parse::<i32>()
        .map_err(|source| CoreError::InvalidShift {
            key: key.to_owned(),
            source,
        })
}

/// Run a request through the matching cipher.
///
/// An unrecognised method is *not* an error: it succeeds with the literal
/// text `"Invalid method"`. Playfair decodes are passed through
/// [`clean_playfair_output`].
pub fn process(request: &CipherRequest) -> Result<String> {
    let mode = CipherMode::from_request(&request.mode);
    let Ok(method) = request.method.parse::<CipherMethod>() else {
        debug!(method = %request.method, "unrecognised cipher method");
        return Ok(INVALID_METHOD_RESULT.to_owned());
    };

    debug!(%method, %mode, text_len = request.text.len(), "dispatching cipher request");

    let output = match method {
        CipherMethod::Caesar => caesar(&request.text, i64::from(parse_shift(&request.key)?), mode),
        CipherMethod::Vigenere => vigenere(&request.text, &request.key, mode),
        CipherMethod::Playfair => {
            let raw = playfair(&request.text, &request.key, mode);
            match mode {
                CipherMode::Encode => raw,
                CipherMode::Decode => clean_playfair_output(&raw),
            }
        }
    };
    Ok(output)
}

/// [`process`], with failures folded into the error payload.
pub fn respond(request: &CipherRequest) -> CipherResponse {
    let response = CipherResponse::from(process(request));
    if let CipherResponse::Error(message) = &response {
        warn!(method = %request.method, %message, "cipher request failed");
    }
    response
}

/// Decode a JSON request body and respond to it.
///
/// A body that is not valid JSON, or lacks one of the four string fields,
/// yields the error payload.
pub fn handle_json(body: &str) -> CipherResponse {
    match serde_json::from_str::<CipherRequest>(body) {
        Ok(request) => respond(&request),
        Err(err) => {
            warn!(error = %err, "malformed cipher request");
            CipherResponse::Error(CoreError::from(err).to_string())
        }
    }
}
