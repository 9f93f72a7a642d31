//! Extraction of the `window.gameData` payload inlined in puzzle pages.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{decode::exactly_one, error::DecodeError};

/// Literal prefix of the script element carrying the payload.
pub const GAME_DATA_PREFIX: &str = "window.gameData = ";

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>(.*?)</script\s*>").expect("invalid script regex")
});

/// Return the JSON text assigned to `window.gameData` in `html`.
///
/// Exactly one script element may start with [`GAME_DATA_PREFIX`]. The
/// returned text excludes the prefix along with any trailing `;`.
pub fn extract_game_data(html: &str) -> Result<&str, DecodeError> {
    let payloads: Vec<&str> = SCRIPT_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|text| text.as_str().strip_prefix(GAME_DATA_PREFIX))
        .collect();

    let payload = exactly_one("`window.gameData` script element", payloads)?;
    Ok(payload.trim_end().trim_end_matches(';'))
}
