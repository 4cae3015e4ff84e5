//! # CLI Module
//!
//! This module provides the command-line interface layer for Pldcli, a tool
//! for downloading remote media playlists as tagged audio files. It implements
//! the user-facing commands and coordinates between the playlist source
//! provider, the normalization pipeline, the download orchestrator, and the
//! manifest writer.
//!
//! ## Overview
//!
//! The CLI module is the only layer that talks to the user. It resolves the
//! playlist metadata (live fetch, cached snapshot fallback, or an explicit
//! snapshot file), aggregates it into the canonical playlist model, drives the
//! concurrent downloads with progress feedback, prints a per-track result
//! summary, and writes the playback manifest.
//!
//! ## Command
//!
//! - [`download`] - the acquisition pipeline end to end. Flags toggle metadata
//!   embedding (`--no-meta`), manifest writing (`--no-m3u`), manifest-only mode
//!   (`--m3u-only`), worker concurrency (`--workers`), snapshot input
//!   (`--snapshot`, `--title`), and the output directory (`--output`). When no
//!   playlist URL is given and no snapshot is used, the URL is prompted for
//!   interactively.
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal conditions** (unusable playlist response, output directory
//!   unavailable, manifest write failure) terminate the run through the
//!   `error!` macro before or instead of further work.
//! - **Per-track failures** are isolated: they surface as entries in the result
//!   summary and warnings, never aborting sibling downloads.
//! - **Policy defaults** fill silently: placeholder title/artist/album values,
//!   skipped cover art, omitted date frames.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (flags, prompt, progress, summary)
//!     ↓
//! Source Layer (yt-dlp flat-playlist fetch / snapshot)
//!     ↓
//! Playlist Layer (normalize + aggregate)
//!     ↓
//! Download Layer (bounded worker pool, fetch + tag per track)
//!     ↓
//! Manifest Writer (index-ordered m3u8)
//! ```

mod download;

pub use download::download;
