//! Typed puzzle records and their decoders.
//!
//! Each game module exposes its record type and a `decode` function taking the
//! raw JSON text. Decoding is all-or-nothing: either the whole record is
//! populated or a [`DecodeError`](crate::error::DecodeError) is returned.

pub mod connections;
pub mod crossword;
pub mod letter_boxed;
pub mod spelling_bee;
pub mod strands;
pub mod sudoku;
pub mod wordle;

use chrono::NaiveDate;
use serde::Deserialize;

pub use connections::{Category, Connections};
pub use crossword::{Clue, Crossword, Direction};
pub use letter_boxed::LetterBoxed;
pub use spelling_bee::SpellingBee;
pub use strands::Strands;
pub use sudoku::{Difficulty, SkippedPuzzle, Sudoku, SudokuSet};
pub use wordle::Wordle;

/// Publication details shared by every puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationInformation {
    /// Publisher's puzzle id.
    pub id: i64,
    /// Date the puzzle is published for.
    pub print_date: NaiveDate,
    /// Puzzle editor, when credited.
    pub editor: Option<String>,
    /// Constructors in credit order; may be empty.
    pub constructors: Vec<String>,
}

/// Constructor credits as published: a list, or one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawConstructors {
    List(Vec<String>),
    Joined(String),
}

impl PublicationInformation {
    /// Build from raw payload fields. Blank names are dropped.
    pub(crate) fn new(
        id: i64,
        print_date: NaiveDate,
        editor: Option<String>,
        constructors: Option<RawConstructors>,
    ) -> Self {
        let editor = editor
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let constructors = match constructors {
            None => Vec::new(),
            Some(RawConstructors::List(names)) => names,
            Some(RawConstructors::Joined(names)) => {
                names.split(',').map(str::to_string).collect()
            }
        }
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

        Self {
            id,
            print_date,
            editor,
            constructors,
        }
    }
}
