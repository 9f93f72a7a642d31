//! Strands.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{decode::from_json, error::DecodeError};

use super::{PublicationInformation, RawConstructors};

/// A day's Strands board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strands {
    /// Publication details.
    pub info: PublicationInformation,
    /// Theme clue shown above the board.
    pub clue: String,
    /// Word spanning the board.
    pub spangram: String,
    /// Theme words in publisher order.
    pub theme_words: Vec<String>,
    /// Starting letter grid, one string per row.
    pub board: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStrands {
    id: i64,
    print_date: NaiveDate,
    editor: Option<String>,
    constructors: Option<RawConstructors>,
    clue: String,
    spangram: String,
    theme_words: Vec<String>,
    starting_board: Vec<String>,
}

/// Decode the `svc/strands/v2/<date>.json` payload.
pub fn decode(text: &str) -> Result<Strands, DecodeError> {
    let raw: RawStrands = from_json(text)?;
    Ok(Strands {
        info: PublicationInformation::new(raw.id, raw.print_date, raw.editor, raw.constructors),
        clue: raw.clue,
        spangram: raw.spangram,
        theme_words: raw.theme_words,
        board: raw.starting_board,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_board_and_words() {
        let game = decode(
            r#"{
                "status": "OK",
                "id": 140,
                "printDate": "2024-07-15",
                "editor": "Tracy Bennett",
                "constructors": "Robert Fisher",
                "clue": "Take a seat",
                "spangram": "CHAIRS",
                "themeWords": ["STOOL", "BENCH"],
                "startingBoard": ["ABCDEF", "GHIJKL"]
            }"#,
        )
        .unwrap();
        assert_eq!(game.clue, "Take a seat");
        assert_eq!(game.spangram, "CHAIRS");
        assert_eq!(game.theme_words, vec!["STOOL", "BENCH"]);
        assert_eq!(game.board, vec!["ABCDEF", "GHIJKL"]);
        assert_eq!(game.info.constructors, vec!["Robert Fisher"]);
    }

    #[test]
    fn missing_board_fails() {
        let err = decode(
            r#"{"id":1,"printDate":"2024-07-15","clue":"c","spangram":"s","themeWords":[]}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "at $: missing field `startingBoard`");
    }
}
