//! # Download Module
//!
//! Concurrent acquisition of a playlist's tracks.
//!
//! ## Overview
//!
//! - [`run`] - the download orchestrator: a bounded pool of workers drains the
//!   playlist's track queue, each track is attempted exactly once, and one
//!   [`crate::types::DownloadResult`] is produced per track regardless of
//!   individual failures. The per-track pipeline is injected as an async
//!   closure, so orchestration carries no collaborator wiring of its own.
//! - [`fetch_audio`] - the media fetcher: materializes one track's audio file
//!   via the external yt-dlp tool.
//! - [`build_tag_set`] / [`write_tags`] - the tag assembler: maps a track onto
//!   an abstract set of named tag fields (cover art fetched from the selected
//!   thumbnail URL at assembly time) and writes those fields into the audio
//!   file's ID3 container.
//!
//! ## Failure containment
//!
//! A fetch or tag-write failure is recorded in that track's result and never
//! aborts or blocks sibling workers. Only the inability to create the output
//! directory is fatal to the whole run.

mod fetcher;
mod orchestrator;
mod tags;

pub use fetcher::FetchError;
pub use fetcher::fetch_audio;
pub use orchestrator::OrchestratorError;
pub use orchestrator::run;
pub use tags::ARTIST_DELIMITER;
pub use tags::TagError;
pub use tags::build_tag_set;
pub use tags::write_tags;
