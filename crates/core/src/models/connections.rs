//! Connections and its Sports Edition, which share a payload shape.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{decode::from_json, error::DecodeError};

use super::PublicationInformation;

/// A group of four related cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Group title revealed once solved.
    pub title: String,
    /// Card texts in publisher order.
    pub cards: Vec<String>,
}

/// A day's Connections grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connections {
    /// Publication details.
    pub info: PublicationInformation,
    /// Categories from easiest to hardest.
    pub categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct RawConnections {
    id: i64,
    print_date: NaiveDate,
    editor: Option<String>,
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    title: String,
    cards: Vec<RawCard>,
}

// Picture cards carry alt text instead of content.
#[derive(Debug, Deserialize)]
struct RawCard {
    content: Option<String>,
    image_alt_text: Option<String>,
}

/// Decode a Connections payload.
pub fn decode(text: &str) -> Result<Connections, DecodeError> {
    let raw: RawConnections = from_json(text)?;
    let categories = raw
        .categories
        .into_iter()
        .enumerate()
        .map(|(category_index, category)| {
            let cards = category
                .cards
                .into_iter()
                .enumerate()
                .map(|(card_index, card)| {
                    card.content.or(card.image_alt_text).ok_or_else(|| {
                        DecodeError::shape(
                            format!("$.categories[{category_index}].cards[{card_index}]"),
                            "card has neither `content` nor `image_alt_text`",
                        )
                    })
                })
                .collect::<Result<_, _>>()?;
            Ok(Category {
                title: category.title,
                cards,
            })
        })
        .collect::<Result<_, DecodeError>>()?;

    Ok(Connections {
        info: PublicationInformation::new(raw.id, raw.print_date, raw.editor, None),
        categories,
    })
}
