//! Daily report assembly and persistence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::{
    decode::DATE_FORMAT,
    error::GameError,
    fetch::Fetch,
    games::{self, fetch_game, GameSpec, Pipeline},
    render,
};

/// Markdown report being built in memory.
pub struct Report<'a, F> {
    fetcher: &'a F,
    pipeline: &'a Pipeline,
    date: NaiveDate,
    text: String,
}

impl<'a, F: Fetch> Report<'a, F> {
    /// Start a report for `date` with its title line.
    pub fn new(fetcher: &'a F, pipeline: &'a Pipeline, date: NaiveDate) -> Self {
        Self {
            fetcher,
            pipeline,
            date,
            text: render::title(date),
        }
    }

    /// Fetch a game and append its section. Any failure is returned as-is.
    pub async fn add<T>(&mut self, spec: &GameSpec<T>) -> Result<&mut Self, GameError> {
        let game = fetch_game(self.fetcher, self.pipeline, spec, self.date).await?;
        render::heading(spec.name, &mut self.text);
        (spec.render)(&game, &mut self.text);
        Ok(self)
    }

    /// The finished markdown text.
    pub fn finish(self) -> String {
        self.text
    }
}

/// Build the full report for `date`, stopping at the first failing game.
///
/// Sections follow a fixed order; Sudoku is appended last when requested.
pub async fn assemble<F: Fetch>(
    fetcher: &F,
    pipeline: &Pipeline,
    date: NaiveDate,
    include_sudoku: bool,
) -> Result<String, GameError> {
    let mut report = Report::new(fetcher, pipeline, date);
    report.add(&games::WORDLE).await?;
    report.add(&games::CONNECTIONS).await?;
    report.add(&games::SPORTS_CONNECTIONS).await?;
    report.add(&games::LETTER_BOXED).await?;
    report.add(&games::STRANDS).await?;
    report.add(&games::MINI).await?;
    report.add(&games::CROSSWORD).await?;
    report.add(&games::SPELLING_BEE).await?;
    if include_sudoku {
        report.add(&games::SUDOKU).await?;
    }
    Ok(report.finish())
}

/// Location of the report for `date` inside `dir`.
pub fn report_path(dir: impl AsRef<Path>, date: NaiveDate) -> PathBuf {
    dir.as_ref()
        .join(format!("nytgames.{}.md", date.format(DATE_FORMAT)))
}

/// Write a finished report, replacing any existing file for the same date.
pub fn write_report(dir: impl AsRef<Path>, date: NaiveDate, text: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory {}", dir.display()))?;

    let path = report_path(dir, date);
    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote report to {}", path.display());
    Ok(path)
}
