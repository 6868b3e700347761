// src/consts.rs
//! Shared constants — alphabet geometry and boundary literals

/// Size of the cyclic A–Z alphabet Caesar and Vigenère shift within
pub const ALPHABET_LEN: u8 = 26;

/// Side length of the Playfair key square
pub const GRID_SIZE: usize = 5;

/// Letters in a Playfair key square (A–Z without J)
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Filler inserted between repeated letters and used as odd-length padding
pub const FILLER: u8 = b'X';

/// Playfair has no J; it is read as I everywhere
pub const FOLDED_LETTER: u8 = b'J';
pub const FOLD_TARGET: u8 = b'I';

/// Result text returned (as a success!) for an unrecognised method
pub const INVALID_METHOD_RESULT: &str = "Invalid method";

/// Environment variable pointing at the TOML config file
pub const CONFIG_ENV_VAR: &str = "CLASSIC_CIPHERS_CONFIG";

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "classic-ciphers";
pub const CONFIG_FILE_NAME: &str = "config.toml";
