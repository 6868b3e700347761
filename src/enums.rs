// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices carried by a request:
//! which cipher to run and in which direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMethod {
    Caesar,
    Vigenere,
    Playfair,
}

impl CipherMethod {
    pub const ALL: [CipherMethod; 3] = [Self::Caesar, Self::Vigenere, Self::Playfair];

    pub fn as_str(self) -> &'static str {
        match self {
            CipherMethod::Caesar => "caesar",
            CipherMethod::Vigenere => "vigenere",
            CipherMethod::Playfair => "playfair",
        }
    }
}

impl fmt::Display for CipherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a method name outside [`CipherMethod::ALL`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cipher method {0:?}")]
pub struct UnknownMethod(pub String);

impl FromStr for CipherMethod {
    type Err = UnknownMethod;

    /// Exact, case-sensitive match on the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

/// Direction of a cipher run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    #[default]
    Encode,
    Decode,
}

impl CipherMode {
    /// Only the literal `"encode"` encodes; any other value decodes.
    pub fn from_request(mode: &str) -> Self {
        if mode == "encode" {
            CipherMode::Encode
        } else {
            CipherMode::Decode
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CipherMode::Encode => "encode",
            CipherMode::Decode => "decode",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
