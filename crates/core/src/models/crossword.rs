//! The Mini and the daily Crossword, served by the same v6 puzzle endpoint.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    decode::{exactly_one, from_json, reshape},
    error::DecodeError,
};

use super::{PublicationInformation, RawConstructors};

/// Clue direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        })
    }
}

/// A numbered clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    /// Across or down.
    pub direction: Direction,
    /// Grid number the entry starts at.
    pub label: i64,
    /// Clue text.
    pub hint: String,
}

/// A solved crossword grid with its clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    /// Publication details.
    pub info: PublicationInformation,
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// `height` rows of `width` cells; `None` marks a block.
    pub solution: Vec<Vec<Option<char>>>,
    /// Clues in publisher order.
    pub clues: Vec<Clue>,
}

impl Crossword {
    /// Clues running in `direction`, in publisher order.
    pub fn clues_in(&self, direction: Direction) -> impl Iterator<Item = &Clue> {
        self.clues
            .iter()
            .filter(move |clue| clue.direction == direction)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPuzzle {
    id: i64,
    publication_date: NaiveDate,
    editor: Option<String>,
    constructors: Option<RawConstructors>,
    body: Vec<RawBody>,
}

#[derive(Debug, Deserialize)]
struct RawBody {
    dimensions: RawDimensions,
    cells: Vec<RawCell>,
    clues: Vec<RawClue>,
}

#[derive(Debug, Deserialize)]
struct RawDimensions {
    height: usize,
    width: usize,
}

// Blocks are empty objects; filled squares carry `answer`.
#[derive(Debug, Deserialize)]
struct RawCell {
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawClue {
    direction: Direction,
    label: RawLabel,
    text: RawClueText,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawClueText {
    Plain(String),
    Parts(Vec<RawTextPart>),
}

#[derive(Debug, Deserialize)]
struct RawTextPart {
    plain: String,
}

/// Decode a `svc/crosswords/v6/puzzle/<name>.json` payload.
pub fn decode(text: &str) -> Result<Crossword, DecodeError> {
    let raw: RawPuzzle = from_json(text)?;
    let body = exactly_one("puzzle body entry", raw.body)?;

    let RawDimensions { height, width } = body.dimensions;
    let expected = height.checked_mul(width).ok_or_else(|| {
        DecodeError::shape(
            "$.body[0].dimensions",
            format!("{height}x{width} grid is too large"),
        )
    })?;
    if body.cells.len() != expected {
        return Err(DecodeError::shape(
            "$.body[0].cells",
            format!(
                "expected {height}x{width} = {expected} cells, found {}",
                body.cells.len()
            ),
        ));
    }

    // Rebus squares keep their first letter.
    let cells = body
        .cells
        .into_iter()
        .map(|cell| cell.answer.and_then(|answer| answer.chars().next()))
        .collect();

    let clues = body
        .clues
        .into_iter()
        .enumerate()
        .map(|(index, clue)| decode_clue(index, clue))
        .collect::<Result<_, _>>()?;

    Ok(Crossword {
        info: PublicationInformation::new(
            raw.id,
            raw.publication_date,
            raw.editor,
            raw.constructors,
        ),
        height,
        width,
        solution: reshape(cells, width),
        clues,
    })
}

fn decode_clue(index: usize, clue: RawClue) -> Result<Clue, DecodeError> {
    let label = match clue.label {
        RawLabel::Number(label) => label,
        RawLabel::Text(label) => label.trim().parse().map_err(|_| {
            DecodeError::shape(
                format!("$.body[0].clues[{index}].label"),
                format!("expected a number, found \"{label}\""),
            )
        })?,
    };

    let hint = match clue.text {
        RawClueText::Plain(plain) => plain,
        RawClueText::Parts(parts) => parts
            .into_iter()
            .next()
            .map(|part| part.plain)
            .ok_or_else(|| {
                DecodeError::shape(format!("$.body[0].clues[{index}].text"), "clue has no text")
            })?,
    };

    Ok(Clue {
        direction: clue.direction,
        label,
        hint,
    })
}
