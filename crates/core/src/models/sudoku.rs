//! Sudoku, published in three difficulties on one page.
//!
//! Each difficulty is decoded on its own. A difficulty that fails to decode is
//! left out of [`SudokuSet::puzzles`] and recorded in [`SudokuSet::skipped`]
//! instead of failing the whole page.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    decode::{from_json, from_value},
    error::DecodeError,
};

use super::PublicationInformation;

/// Side length of a grid.
pub const SIZE: usize = 9;

/// Published difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Difficulty {
    /// Easy.
    Easy,
    /// Medium.
    Medium,
    /// Hard.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Key of this difficulty in the page payload.
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// One difficulty's puzzle and solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sudoku {
    /// Publication details.
    pub info: PublicationInformation,
    /// Difficulty of this puzzle.
    pub difficulty: Difficulty,
    /// Givens; `None` marks an empty square.
    pub puzzle: [[Option<u8>; SIZE]; SIZE],
    /// Completed grid.
    pub solution: [[u8; SIZE]; SIZE],
}

/// A difficulty that could not be decoded.
#[derive(Debug)]
pub struct SkippedPuzzle {
    /// Difficulty that was dropped.
    pub difficulty: Difficulty,
    /// Why it was dropped.
    pub reason: DecodeError,
}

/// Every difficulty that decoded successfully.
#[derive(Debug, Default)]
pub struct SudokuSet {
    /// Puzzles keyed by difficulty.
    pub puzzles: BTreeMap<Difficulty, Sudoku>,
    /// Difficulties left out, with the reason.
    pub skipped: Vec<SkippedPuzzle>,
}

#[derive(Debug, Deserialize)]
struct RawSudoku {
    puzzle_id: i64,
    print_date: NaiveDate,
    difficulty: Difficulty,
    puzzle_data: RawPuzzleData,
}

#[derive(Debug, Deserialize)]
struct RawPuzzleData {
    puzzle: Vec<u8>,
    solution: Vec<u8>,
}

/// Decode the `window.gameData` object of the Sudoku page.
///
/// Fails only when the payload is not a JSON object; per-difficulty failures
/// end up in [`SudokuSet::skipped`].
pub fn decode(text: &str) -> Result<SudokuSet, DecodeError> {
    let page: Map<String, Value> = from_json(text)?;

    Ok(Difficulty::ALL
        .into_iter()
        .fold(SudokuSet::default(), |mut set, difficulty| {
            match decode_difficulty(&page, difficulty) {
                Ok(puzzle) => {
                    set.puzzles.insert(difficulty, puzzle);
                }
                Err(reason) => {
                    warn!("Skipping {difficulty} sudoku: {reason}");
                    set.skipped.push(SkippedPuzzle { difficulty, reason });
                }
            }
            set
        }))
}

fn decode_difficulty(
    page: &Map<String, Value>,
    difficulty: Difficulty,
) -> Result<Sudoku, DecodeError> {
    let key = difficulty.key();
    let value = page
        .get(key)
        .ok_or_else(|| DecodeError::shape("$", format!("missing field `{key}`")))?;
    let root = format!("$.{key}");
    let raw: RawSudoku = from_value(value, &root)?;

    if raw.difficulty != difficulty {
        return Err(DecodeError::shape(
            format!("{root}.difficulty"),
            format!("expected `{difficulty}`, found `{}`", raw.difficulty),
        ));
    }

    let data = raw.puzzle_data;
    let puzzle_path = format!("{root}.puzzle_data.puzzle");
    let mut puzzle = [[None; SIZE]; SIZE];
    for (index, digit) in grid_cells(&puzzle_path, data.puzzle)?.into_iter().enumerate() {
        puzzle[index / SIZE][index % SIZE] = match digit {
            0 => None,
            1..=9 => Some(digit),
            other => {
                return Err(DecodeError::shape(
                    format!("{puzzle_path}[{index}]"),
                    format!("expected 0-9, found {other}"),
                ))
            }
        };
    }

    let solution_path = format!("{root}.puzzle_data.solution");
    let mut solution = [[0; SIZE]; SIZE];
    for (index, digit) in grid_cells(&solution_path, data.solution)?.into_iter().enumerate() {
        solution[index / SIZE][index % SIZE] = match digit {
            1..=9 => digit,
            other => {
                return Err(DecodeError::shape(
                    format!("{solution_path}[{index}]"),
                    format!("expected 1-9, found {other}"),
                ))
            }
        };
    }

    Ok(Sudoku {
        info: PublicationInformation::new(raw.puzzle_id, raw.print_date, None, None),
        difficulty,
        puzzle,
        solution,
    })
}

fn grid_cells(path: &str, cells: Vec<u8>) -> Result<Vec<u8>, DecodeError> {
    if cells.len() != SIZE * SIZE {
        return Err(DecodeError::shape(
            path,
            format!("expected {} cells, found {}", SIZE * SIZE, cells.len()),
        ));
    }
    Ok(cells)
}
