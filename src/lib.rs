//! Yakuzadle: daily character guessing game
//!
//! A guess is compared field by field against the hidden daily target:
//! catalog → daily target → comparator → verdict record.

pub mod core;
pub mod types;

// =============================================================================
// COMPARISON RULES
// =============================================================================

/// Game title present in the catalog that never drives a games verdict
pub const EXCLUDED_GAME: &str = "Ryu Ga Gotoku Online";

/// Fighting styles sharing this token are treated as a partial match
pub const LEGEND_TOKEN: &str = "Legend";

/// Literal treated as "no information" (case-insensitive, trimmed)
pub const UNKNOWN_LITERAL: &str = "unknown";

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default listen address for `--serve`
pub const DEFAULT_ADDR: &str = "127.0.0.1:3001";

/// Default catalog location
pub const DEFAULT_CATALOG_PATH: &str = "./characters.json";

/// Prefix joined with a character's first image file name
pub const DEFAULT_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/nievesdom/DiscordBot/main/yakuzadle/img_yakuzadle";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
