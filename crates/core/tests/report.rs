use anyhow::Result;
use chrono::NaiveDate;
use nytgames_core::{
    assemble,
    games::Pipeline,
    report::{report_path, write_report},
    Endpoints, GameErrorKind, StaticFetcher,
};
use serde_json::json;
use tempfile::tempdir;

const BASE_URL: &str = "https://games.test";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 4).expect("valid date")
}

fn pipeline() -> Pipeline {
    Pipeline {
        endpoints: Endpoints::new(BASE_URL),
        strip_non_ascii: true,
    }
}

fn fixtures() -> StaticFetcher {
    StaticFetcher::new()
        .with(
            format!("{BASE_URL}/svc/wordle/v2/2024-07-04.json"),
            include_str!("fixtures/wordle.json"),
        )
        .with(
            format!("{BASE_URL}/svc/connections/v2/2024-07-04.json"),
            include_str!("fixtures/connections.json"),
        )
        .with(
            format!("{BASE_URL}/games-assets/sports-connections/2024-07-04.json"),
            include_str!("fixtures/sports_connections.json"),
        )
        .with(
            format!("{BASE_URL}/puzzles/letter-boxed"),
            include_str!("fixtures/letter_boxed.html"),
        )
        .with(
            format!("{BASE_URL}/svc/strands/v2/2024-07-04.json"),
            include_str!("fixtures/strands.json"),
        )
        .with(
            format!("{BASE_URL}/svc/crosswords/v6/puzzle/mini.json"),
            include_str!("fixtures/mini.json"),
        )
        .with(
            format!("{BASE_URL}/svc/crosswords/v6/puzzle/daily.json"),
            include_str!("fixtures/crossword.json"),
        )
        .with(
            format!("{BASE_URL}/puzzles/spelling-bee"),
            include_str!("fixtures/spelling_bee.html"),
        )
}

#[tokio::test]
async fn report_matches_fixture() -> Result<()> {
    let text = assemble(&fixtures(), &pipeline(), date(), false).await?;
    assert_eq!(text, include_str!("fixtures/report.md"));
    Ok(())
}

#[tokio::test]
async fn first_failure_aborts_the_run() -> Result<()> {
    let fetcher = fixtures().with(
        format!("{BASE_URL}/svc/strands/v2/2024-07-04.json"),
        r#"{"id":140,"printDate":"2024-07-04"}"#,
    );
    let err = assemble(&fetcher, &pipeline(), date(), false)
        .await
        .expect_err("strands payload is incomplete");
    assert_eq!(err.game, "Strands");
    assert!(matches!(err.kind, GameErrorKind::Decode(_)));
    assert!(err.to_string().contains("missing field `clue`"), "{err}");
    Ok(())
}

#[tokio::test]
async fn sudoku_section_is_appended_on_request() -> Result<()> {
    let solution: Vec<u8> = (0..81u8).map(|i| i % 9 + 1).collect();
    let entry = |difficulty: &str| {
        json!({
            "difficulty": difficulty,
            "print_date": "2024-07-04",
            "puzzle_id": 5,
            "puzzle_data": { "puzzle": vec![0u8; 81], "solution": solution.clone() }
        })
    };
    let payload = json!({
        "easy": entry("Easy"),
        "medium": entry("Medium"),
        "hard": { "difficulty": "Hard" }
    });
    let page = format!("<html><script>window.gameData = {payload}</script></html>");
    let fetcher = fixtures().with(format!("{BASE_URL}/puzzles/sudoku"), page);

    let text = assemble(&fetcher, &pipeline(), date(), true).await?;
    let expected = include_str!("fixtures/report.md");
    assert!(text.starts_with(expected));

    let sudoku = &text[expected.len()..];
    assert!(sudoku.starts_with("\n## Sudoku\n\n### Easy\n\n```text\n1 2 3 4 5 6 7 8 9\n"));
    assert!(sudoku.contains("\n### Medium\n"));
    assert!(!sudoku.contains("Hard"));
    Ok(())
}

#[tokio::test]
async fn report_is_written_to_dated_file() -> Result<()> {
    let temp = tempdir()?;
    let text = assemble(&fixtures(), &pipeline(), date(), false).await?;
    let path = write_report(temp.path(), date(), &text)?;
    assert_eq!(path, report_path(temp.path(), date()));
    assert!(path.ends_with("nytgames.2024-07-04.md"));
    assert_eq!(std::fs::read_to_string(path)?, text);
    Ok(())
}
