//! Error types shared by the fetch layer, decoders and report assembly.

use thiserror::Error;

/// Failure to retrieve a response body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// No response is available for the URL (in-memory fetchers).
    #[error("no response available for {url}")]
    Missing {
        /// Requested URL.
        url: String,
    },
}

/// Failure to turn a response body into a typed record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// A field is missing, has the wrong type, or holds an unrecognised value.
    #[error("at {path}: {message}")]
    Shape {
        /// JSON path of the offending value, e.g. `$.body[0].clues[3].direction`.
        path: String,
        /// What was expected or found.
        message: String,
    },
    /// A selection that must match exactly once did not.
    #[error("expected exactly {expected} {what}, found {actual}")]
    Cardinality {
        /// What was being counted.
        what: String,
        /// Required count.
        expected: usize,
        /// Observed count.
        actual: usize,
    },
}

impl DecodeError {
    /// Build a shape error for the given path.
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Which stage of the pipeline failed for a game.
#[derive(Debug, Error)]
pub enum GameErrorKind {
    /// Fetching the page or endpoint failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Decoding the payload failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A fetch or decode failure attributed to a single game.
#[derive(Debug, Error)]
#[error("{game}: {kind}")]
pub struct GameError {
    /// Display name of the game.
    pub game: &'static str,
    /// Underlying failure.
    pub kind: GameErrorKind,
}

impl GameError {
    /// Attribute a failure to the named game.
    pub fn new(game: &'static str, kind: impl Into<GameErrorKind>) -> Self {
        Self {
            game,
            kind: kind.into(),
        }
    }
}
