// src/lib.rs
//! classic-ciphers — Caesar, Vigenère and Playfair as pure text transforms
//!
//! Features:
//! - ASCII sanitization shared by every cipher
//! - Caesar with any integer shift, Vigenère with a repeating keyword
//! - Playfair key squares, digraph segmentation and filler cleanup
//! - JSON request dispatch for transports (`{"result"}` / `{"error"}`)
//!
//! These are classroom ciphers. They offer no security.
//!
//! ```
//! use classic_ciphers::{caesar, CipherMode};
//!
//! assert_eq!(caesar("Hello, World!", 3, CipherMode::Encode), "KHOORZRUOG");
//! ```

pub mod batch;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod request;

// Re-export everything users need at the crate root
pub use batch::{run as run_batch, BatchSummary};
pub use config::load as load_config;
pub use crate::core::{
    caesar, clean_playfair_output, playfair, sanitize, segment, vigenere, Digraph, KeySquare,
    Position, Result as CoreResult,
};
pub use enums::{CipherMethod, CipherMode};
pub use error::CoreError;
pub use request::{handle_json, process, respond, CipherRequest, CipherResponse};
