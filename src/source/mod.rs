//! # Source Module
//!
//! The playlist source provider: everything that talks to the external yt-dlp
//! tool to obtain raw playlist metadata, plus snapshot-file loading for
//! offline runs.
//!
//! ## Overview
//!
//! - [`ensure_binary`] - resolves a usable yt-dlp executable. Resolution order:
//!   explicit `PLDCLI_YTDLP` override, a working binary on `PATH`, a previously
//!   provisioned copy in the local data directory, and finally a one-time
//!   download of the latest release asset from GitHub.
//! - [`fetch_entries`] - runs yt-dlp in flat-playlist JSON mode against a
//!   playlist URL and parses one raw entry record per output line.
//! - [`parse_entries`] - the pure line parser; malformed lines are skipped with
//!   a warning rather than failing the response.
//! - [`load_snapshot`] - reads raw entries from a previously saved snapshot
//!   file (JSON array or JSON lines) as a substitute for a live fetch.
//!
//! The provider returns raw records only; filtering and index assignment are
//! the aggregator's job.

mod binary;
mod provider;

pub use binary::BinaryError;
pub use binary::ensure_binary;
pub use provider::SourceError;
pub use provider::fetch_entries;
pub use provider::load_snapshot;
pub use provider::parse_entries;
