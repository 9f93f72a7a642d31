#![warn(clippy::all, missing_docs)]

//! Core logic for the daily word-games report.
//!
//! This crate hosts the puzzle data models and decoders, the HTTP fetch
//! layer, the per-game pipeline, markdown rendering, configuration and the
//! report writer used by the command-line frontend.

pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod games;
pub mod models;
pub mod render;
pub mod report;
pub mod script;

pub use config::AppConfig;
pub use endpoint::{Endpoints, Request};
pub use error::{DecodeError, FetchError, GameError, GameErrorKind};
pub use fetch::{Fetch, HttpFetcher, StaticFetcher};
pub use games::{fetch_current, fetch_game, GameSpec, Pipeline, Source};
pub use models::PublicationInformation;
pub use report::{assemble, write_report, Report};
