//! Markdown rendering of decoded puzzles.
//!
//! Each game renderer writes everything below the section heading: the
//! editor/constructor credits followed by the game's body. Every line ends in
//! `\n` and no renderer leaves a trailing blank line.

use chrono::NaiveDate;

use crate::models::{
    crossword::Direction, Connections, Crossword, LetterBoxed, PublicationInformation,
    SpellingBee, Strands, SudokuSet, Wordle,
};

/// Top-level report title, e.g. `# Word Games - July 4, 2024`.
pub fn title(date: NaiveDate) -> String {
    format!("# Word Games - {}\n", date.format("%B %-d, %Y"))
}

/// Section heading for a game.
pub fn heading(name: &str, out: &mut String) {
    out.push_str(&format!("\n## {name}\n\n"));
}

/// Editor line and constructor byline; each is omitted when absent.
pub fn credits(info: &PublicationInformation, out: &mut String) {
    if let Some(editor) = &info.editor {
        out.push_str(&format!("Edited by {editor}\n\n"));
    }
    if !info.constructors.is_empty() {
        out.push_str("By:\n\n");
        for constructor in &info.constructors {
            out.push_str(&format!("- {constructor}\n"));
        }
        out.push('\n');
    }
}

/// Fenced text block of space-joined cells; `None` renders as a space.
pub fn grid<T: ToString>(rows: &[Vec<Option<T>>], out: &mut String) {
    out.push_str("```text\n");
    for row in rows {
        let line = row
            .iter()
            .map(|cell| {
                cell.as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| " ".to_string())
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("```\n");
}

fn bullets<S: AsRef<str>>(items: &[S], out: &mut String) {
    for item in items {
        out.push_str(&format!("- {}\n", item.as_ref()));
    }
}

/// Wordle: the answer in inline code.
pub fn wordle(game: &Wordle, out: &mut String) {
    credits(&game.info, out);
    out.push_str(&format!("`{}`\n", game.solution));
}

/// Connections: numbered categories with their cards nested below.
pub fn connections(game: &Connections, out: &mut String) {
    credits(&game.info, out);
    for (index, category) in game.categories.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, category.title));
        for card in &category.cards {
            out.push_str(&format!("   - {card}\n"));
        }
    }
}

/// Letter Boxed: sides, par and the publisher's solution.
pub fn letter_boxed(game: &LetterBoxed, out: &mut String) {
    credits(&game.info, out);
    out.push_str(&format!("Sides: {}\n\n", game.sides.join(", ")));
    out.push_str(&format!("Par: {}\n\n", game.par));
    out.push_str(&format!("`{}`\n", game.solution.join(" - ")));
}

/// Strands: clue, spangram, theme words and the starting board.
pub fn strands(game: &Strands, out: &mut String) {
    credits(&game.info, out);
    out.push_str(&format!("Clue: {}\n\n", game.clue));
    out.push_str(&format!("Spangram: `{}`\n\n", game.spangram));
    bullets(&game.theme_words, out);
    out.push('\n');
    let board: Vec<Vec<Option<char>>> = game
        .board
        .iter()
        .map(|row| row.chars().map(Some).collect())
        .collect();
    grid(&board, out);
}

/// Mini and Crossword: the solved grid, then clues grouped by direction.
pub fn crossword(game: &Crossword, out: &mut String) {
    credits(&game.info, out);
    grid(&game.solution, out);
    for direction in [Direction::Across, Direction::Down] {
        out.push_str(&format!("\n### {direction}\n\n"));
        for clue in game.clues_in(direction) {
            out.push_str(&format!("- **{}** {}\n", clue.label, clue.hint));
        }
    }
}

/// Spelling Bee: the hive letters and every answer, longest first.
pub fn spelling_bee(game: &SpellingBee, out: &mut String) {
    credits(&game.info, out);
    let outer = game
        .outer_letters
        .iter()
        .map(|letter| letter.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!(
        "Letters: **{}** {outer}\n\n",
        game.center_letter.to_uppercase()
    ));
    bullets(&game.ranked_answers(), out);
}

/// Sudoku: one solved grid per difficulty that decoded.
pub fn sudoku(set: &SudokuSet, out: &mut String) {
    for (index, puzzle) in set.puzzles.values().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("### {}\n\n", puzzle.difficulty));
        let rows: Vec<Vec<Option<u8>>> = puzzle
            .solution
            .iter()
            .map(|row| row.iter().copied().map(Some).collect())
            .collect();
        grid(&rows, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn info(editor: Option<&str>, constructors: &[&str]) -> PublicationInformation {
        PublicationInformation {
            id: 1,
            print_date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            editor: editor.map(str::to_string),
            constructors: constructors.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn title_uses_long_month_and_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(title(date), "# Word Games - July 4, 2024\n");
    }

    #[test]
    fn byline_only_when_constructors_present() {
        let mut out = String::new();
        credits(&info(Some("Will Shortz"), &[]), &mut out);
        assert_eq!(out, "Edited by Will Shortz\n\n");

        let mut out = String::new();
        credits(&info(None, &["A", "B"]), &mut out);
        assert_eq!(out, "By:\n\n- A\n- B\n\n");
    }

    #[test]
    fn blank_cells_render_as_spaces() {
        let mut out = String::new();
        grid(&[vec![Some('A'), None, Some('B')], vec![None, None, Some('C')]], &mut out);
        assert_eq!(out, "```text\nA   B\n    C\n```\n");
    }

    #[test]
    fn connections_nest_cards_under_numbered_titles() {
        let game = Connections {
            info: info(None, &[]),
            categories: vec![
                Category {
                    title: "FISH".to_string(),
                    cards: vec!["BASS".to_string(), "PIKE".to_string()],
                },
                Category {
                    title: "TREES".to_string(),
                    cards: vec!["ASH".to_string()],
                },
            ],
        };
        let mut out = String::new();
        connections(&game, &mut out);
        assert_eq!(out, "1. FISH\n   - BASS\n   - PIKE\n2. TREES\n   - ASH\n");
    }

    #[test]
    fn spelling_bee_lists_longest_first() {
        let game = SpellingBee {
            info: info(None, &[]),
            center_letter: 'l',
            outer_letters: vec!['a', 'b'],
            answers: vec!["cat".to_string(), "spelling".to_string(), "dog".to_string()],
        };
        let mut out = String::new();
        spelling_bee(&game, &mut out);
        assert_eq!(out, "Letters: **L** A B\n\n- SPELLING\n- CAT\n- DOG\n");
    }
}
