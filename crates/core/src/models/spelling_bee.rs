//! Spelling Bee.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{decode::from_json, error::DecodeError};

use super::PublicationInformation;

/// A day's Spelling Bee hive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingBee {
    /// Publication details.
    pub info: PublicationInformation,
    /// Letter every answer must use.
    pub center_letter: char,
    /// The six surrounding letters.
    pub outer_letters: Vec<char>,
    /// Accepted answers in publisher order.
    pub answers: Vec<String>,
}

impl SpellingBee {
    /// Answers upper-cased, longest first; equal lengths keep publisher order.
    pub fn ranked_answers(&self) -> Vec<String> {
        let mut answers: Vec<String> = self
            .answers
            .iter()
            .map(|answer| answer.to_uppercase())
            .collect();
        answers.sort_by_key(|answer| Reverse(answer.chars().count()));
        answers
    }
}

// The page carries several days; only `today` is read.
#[derive(Debug, Deserialize)]
struct RawPage {
    today: RawHive,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHive {
    id: i64,
    print_date: NaiveDate,
    editor: Option<String>,
    center_letter: char,
    outer_letters: Vec<char>,
    answers: Vec<String>,
}

/// Decode the `window.gameData` object of the Spelling Bee page.
pub fn decode(text: &str) -> Result<SpellingBee, DecodeError> {
    let RawPage { today } = from_json(text)?;
    Ok(SpellingBee {
        info: PublicationInformation::new(today.id, today.print_date, today.editor, None),
        center_letter: today.center_letter,
        outer_letters: today.outer_letters,
        answers: today.answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "today": {
            "displayWeekday": "Monday",
            "printDate": "2024-04-01",
            "centerLetter": "l",
            "outerLetters": ["a", "c", "e", "i", "p", "s"],
            "pangrams": ["specials"],
            "answers": ["cat", "spelling", "dog", "lapse"],
            "id": 21000,
            "editor": "Sam Ezersky"
        },
        "yesterday": {}
    }"#;

    #[test]
    fn decodes_today() {
        let game = decode(PAYLOAD).unwrap();
        assert_eq!(game.center_letter, 'l');
        assert_eq!(game.outer_letters, vec!['a', 'c', 'e', 'i', 'p', 's']);
        assert_eq!(game.info.id, 21000);
    }

    #[test]
    fn answers_rank_by_length_then_original_order() {
        let game = decode(PAYLOAD).unwrap();
        assert_eq!(game.ranked_answers(), vec!["SPELLING", "LAPSE", "CAT", "DOG"]);
    }

    #[test]
    fn multi_letter_center_fails() {
        let err = decode(
            r#"{"today":{"id":1,"printDate":"2024-04-01","centerLetter":"ab","outerLetters":[],"answers":[]}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "at $.today.centerLetter: invalid value: string \"ab\", expected a character"
        );
    }
}
