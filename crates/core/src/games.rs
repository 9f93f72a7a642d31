//! Per-game configuration and the shared fetch/decode pipeline.
//!
//! Every game is described by a [`GameSpec`]: where to fetch it, whether the
//! payload is served directly or embedded in a page script, how to decode it,
//! and how to render it. [`fetch_game`] runs any spec.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::{
    decode::strip_non_ascii,
    endpoint::{Endpoints, Request, AUTH_BYPASS_HEADER},
    error::{DecodeError, GameError},
    fetch::Fetch,
    models::{
        connections, crossword, letter_boxed, spelling_bee, strands, sudoku, wordle, Connections,
        Crossword, LetterBoxed, SpellingBee, Strands, SudokuSet, Wordle,
    },
    render,
    script::extract_game_data,
};

/// How a game's JSON is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The response body is the JSON payload.
    Json,
    /// The response is an HTML page carrying `window.gameData = ...`.
    Script,
}

/// Everything needed to fetch, decode and render one game.
pub struct GameSpec<T> {
    /// Display name used as the report heading.
    pub name: &'static str,
    /// Payload delivery.
    pub source: Source,
    /// Request for a given date; fixed-URL games ignore the date.
    pub request: fn(&Endpoints, NaiveDate) -> Request,
    /// Payload decoder.
    pub decode: fn(&str) -> Result<T, DecodeError>,
    /// Markdown renderer for everything below the heading.
    pub render: fn(&T, &mut String),
}

/// Wordle, addressed by date.
pub const WORDLE: GameSpec<Wordle> = GameSpec {
    name: "Wordle",
    source: Source::Json,
    request: |endpoints, date| Request::get(endpoints.svc("wordle", 2, date)),
    decode: wordle::decode,
    render: render::wordle,
};

/// Connections, addressed by date.
pub const CONNECTIONS: GameSpec<Connections> = GameSpec {
    name: "Connections",
    source: Source::Json,
    request: |endpoints, date| Request::get(endpoints.svc("connections", 2, date)),
    decode: connections::decode,
    render: render::connections,
};

/// Connections: Sports Edition, addressed by date.
pub const SPORTS_CONNECTIONS: GameSpec<Connections> = GameSpec {
    name: "Connections: Sports Edition",
    source: Source::Json,
    request: |endpoints, date| Request::get(endpoints.sports_connections(date)),
    decode: connections::decode,
    render: render::connections,
};

/// Letter Boxed, read from today's page.
pub const LETTER_BOXED: GameSpec<LetterBoxed> = GameSpec {
    name: "Letter Boxed",
    source: Source::Script,
    request: |endpoints, _| Request::get(endpoints.page("letter-boxed")),
    decode: letter_boxed::decode,
    render: render::letter_boxed,
};

/// Strands, addressed by date.
pub const STRANDS: GameSpec<Strands> = GameSpec {
    name: "Strands",
    source: Source::Json,
    request: |endpoints, date| Request::get(endpoints.svc("strands", 2, date)),
    decode: strands::decode,
    render: render::strands,
};

/// The Mini, current puzzle only.
pub const MINI: GameSpec<Crossword> = GameSpec {
    name: "The Mini",
    source: Source::Json,
    request: |endpoints, _| Request::get(endpoints.crossword("mini")),
    decode: crossword::decode,
    render: render::crossword,
};

/// The daily Crossword, current puzzle only.
pub const CROSSWORD: GameSpec<Crossword> = GameSpec {
    name: "The Crossword",
    source: Source::Json,
    request: |endpoints, _| {
        Request::get(endpoints.crossword("daily")).with_header(AUTH_BYPASS_HEADER)
    },
    decode: crossword::decode,
    render: render::crossword,
};

/// Spelling Bee, read from today's page.
pub const SPELLING_BEE: GameSpec<SpellingBee> = GameSpec {
    name: "Spelling Bee",
    source: Source::Script,
    request: |endpoints, _| Request::get(endpoints.page("spelling-bee")),
    decode: spelling_bee::decode,
    render: render::spelling_bee,
};

/// Sudoku in every difficulty, read from today's page.
pub const SUDOKU: GameSpec<SudokuSet> = GameSpec {
    name: "Sudoku",
    source: Source::Script,
    request: |endpoints, _| Request::get(endpoints.page("sudoku")),
    decode: sudoku::decode,
    render: render::sudoku,
};

/// Options applied to every fetched body.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Host the requests are sent to.
    pub endpoints: Endpoints,
    /// Drop non-ASCII characters from bodies before decoding.
    pub strip_non_ascii: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            strip_non_ascii: true,
        }
    }
}

/// Fetch and decode the game published for `date`.
pub async fn fetch_game<F, T>(
    fetcher: &F,
    pipeline: &Pipeline,
    spec: &GameSpec<T>,
    date: NaiveDate,
) -> Result<T, GameError>
where
    F: Fetch,
{
    let request = (spec.request)(&pipeline.endpoints, date);
    debug!("fetching {} from {}", spec.name, request.url);

    let body = fetcher
        .get(&request)
        .await
        .map_err(|err| GameError::new(spec.name, err))?;
    let body = if pipeline.strip_non_ascii {
        strip_non_ascii(&body)
    } else {
        body
    };

    let payload = match spec.source {
        Source::Json => body.as_str(),
        Source::Script => {
            extract_game_data(&body).map_err(|err| GameError::new(spec.name, err))?
        }
    };

    let game = (spec.decode)(payload).map_err(|err| GameError::new(spec.name, err))?;
    info!("fetched {}", spec.name);
    Ok(game)
}

/// Fetch and decode today's game.
pub async fn fetch_current<F, T>(
    fetcher: &F,
    pipeline: &Pipeline,
    spec: &GameSpec<T>,
) -> Result<T, GameError>
where
    F: Fetch,
{
    fetch_game(fetcher, pipeline, spec, today()).await
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
