//! Shared decoding helpers.
//!
//! Payloads are deserialized into `#[derive(Deserialize)]` raw structs through
//! `serde_path_to_error`, so a schema mismatch is reported as
//! [`DecodeError::Shape`] carrying the JSON path of the offending value.

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};

use crate::error::DecodeError;

/// Date format used by every endpoint and print date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Deserialize a response body into `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| located("$", err))?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize an already parsed value found at `root`, e.g. `$.hard`.
pub fn from_value<T: DeserializeOwned>(value: &Value, root: &str) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize(value).map_err(|err| located(root, err))
}

fn located(root: &str, err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let path = json_path(root, err.path());
    let inner = err.into_inner();
    if inner.is_syntax() || inner.is_eof() {
        return DecodeError::Syntax(inner);
    }
    DecodeError::shape(path, without_location(&inner))
}

/// Render a deserializer path below `root`, e.g. `$.categories[1].title`.
pub fn json_path(root: &str, path: &Path) -> String {
    let mut out = root.to_string();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => out.push_str(&format!("[{index}]")),
            Segment::Map { key } => out.push_str(&format!(".{key}")),
            Segment::Enum { variant } => out.push_str(&format!(".{variant}")),
            Segment::Unknown => out.push_str(".?"),
        }
    }
    out
}

// serde_json appends the source position; the path already locates the value.
fn without_location(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&suffix) {
        Some(trimmed) => trimmed.to_string(),
        None => message,
    }
}

/// Drop every non-ASCII character from a response body.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Require that `items` holds exactly one entry and return it.
pub fn exactly_one<T>(what: &str, items: Vec<T>) -> Result<T, DecodeError> {
    let actual = items.len();
    let mut items = items.into_iter();
    match (items.next(), actual) {
        (Some(item), 1) => Ok(item),
        _ => Err(DecodeError::Cardinality {
            what: what.to_string(),
            expected: 1,
            actual,
        }),
    }
}

/// Split a row-major cell list into rows of `width` cells.
pub fn reshape<T>(cells: Vec<T>, width: usize) -> Vec<Vec<T>> {
    if width == 0 {
        return Vec::new();
    }
    let mut rows = Vec::with_capacity(cells.len().div_ceil(width));
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        rows.push(cells.by_ref().take(width).collect());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Deserialize;
    use serde_json::json;

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    struct Board {
        categories: Vec<Category>,
    }

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    struct Category {
        title: String,
    }

    #[derive(Debug, Deserialize)]
    struct Dated {
        print_date: NaiveDate,
    }

    #[test]
    fn missing_field_reports_full_path() {
        let err = from_json::<Board>(r#"{"categories":[{"title":"A"},{"cards":[]}]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "at $.categories[1]: missing field `title`"
        );
    }

    #[test]
    fn wrong_type_names_the_field() {
        let err = from_json::<Board>(r#"{"categories":[{"title":5}]}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("at $.categories[0].title: invalid type"), "{message}");
        assert!(!message.contains("line 1"), "{message}");
    }

    #[test]
    fn syntax_errors_are_not_shape_errors() {
        assert!(matches!(
            from_json::<Board>(r#"{"categories":["#),
            Err(DecodeError::Syntax(_))
        ));
        assert!(matches!(
            from_json::<Board>(r#"{"categories":[]} trailing"#),
            Err(DecodeError::Syntax(_))
        ));
    }

    #[test]
    fn values_decode_below_their_root() {
        let value = json!({ "print_date": "03/05/2024" });
        let err = from_value::<Dated>(&value, "$.easy").unwrap_err();
        assert!(err.to_string().starts_with("at $.easy.print_date: "), "{err}");

        let value = json!({ "print_date": "2024-03-05" });
        let dated: Dated = from_value(&value, "$.easy").unwrap();
        assert_eq!(dated.print_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn strips_non_ascii_characters() {
        assert_eq!(strip_non_ascii("caf\u{e9} \u{201c}ok\u{201d}"), "caf ok");
    }

    #[test]
    fn exactly_one_reports_actual_count() {
        assert_eq!(exactly_one("body entry", vec![3]).unwrap(), 3);

        let err = exactly_one::<u8>("body entry", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "expected exactly 1 body entry, found 0");

        let err = exactly_one("body entry", vec![1, 2]).unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn reshape_round_trips_row_major_order() {
        for width in 1..=7 {
            let cells: Vec<usize> = (0..width * 5).collect();
            let rows = reshape(cells.clone(), width);
            assert_eq!(rows.len(), cells.len().div_ceil(width));
            assert!(rows.iter().all(|row| row.len() == width));
            assert_eq!(rows.concat(), cells);
        }
    }

    #[test]
    fn reshape_zero_width_is_empty() {
        assert!(reshape(vec![1, 2, 3], 0).is_empty());
    }
}
