//! Letter Boxed.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{decode::from_json, error::DecodeError};

use super::PublicationInformation;

/// A day's Letter Boxed square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoxed {
    /// Publication details.
    pub info: PublicationInformation,
    /// Letter groups, one per side of the square.
    pub sides: Vec<String>,
    /// The publisher's own solution, in play order.
    pub solution: Vec<String>,
    /// Target number of words.
    pub par: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLetterBoxed {
    id: i64,
    print_date: NaiveDate,
    editor: Option<String>,
    sides: Vec<String>,
    our_solution: Vec<String>,
    par: i64,
}

/// Decode the `window.gameData` object of the Letter Boxed page.
pub fn decode(text: &str) -> Result<LetterBoxed, DecodeError> {
    let raw: RawLetterBoxed = from_json(text)?;
    Ok(LetterBoxed {
        info: PublicationInformation::new(raw.id, raw.print_date, raw.editor, None),
        sides: raw.sides,
        solution: raw.our_solution,
        par: raw.par,
    })
}
