//! Wordle.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{decode::from_json, error::DecodeError};

use super::PublicationInformation;

/// A day's Wordle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordle {
    /// Publication details.
    pub info: PublicationInformation,
    /// Upper-cased answer.
    pub solution: String,
}

#[derive(Debug, Deserialize)]
struct RawWordle {
    id: i64,
    solution: String,
    print_date: NaiveDate,
    editor: Option<String>,
}

/// Decode the `svc/wordle/v2/<date>.json` payload.
pub fn decode(text: &str) -> Result<Wordle, DecodeError> {
    let raw: RawWordle = from_json(text)?;
    Ok(Wordle {
        info: PublicationInformation::new(raw.id, raw.print_date, raw.editor, None),
        solution: raw.solution.to_uppercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_is_upper_cased() {
        let wordle = decode(
            r#"{"id":1234,"solution":"crane","print_date":"2024-06-01","days_since_launch":1078,"editor":"Tracy Bennett"}"#,
        )
        .unwrap();
        assert_eq!(wordle.solution, "CRANE");
        assert_eq!(wordle.info.id, 1234);
        assert_eq!(
            wordle.info.print_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(wordle.info.editor.as_deref(), Some("Tracy Bennett"));
    }

    #[test]
    fn missing_solution_fails() {
        let err = decode(r#"{"id":1,"print_date":"2024-06-01"}"#).unwrap_err();
        assert_eq!(err.to_string(), "at $: missing field `solution`");
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(decode("{"), Err(DecodeError::Syntax(_))));
    }
}
