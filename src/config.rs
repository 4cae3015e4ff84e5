//! Configuration management for the Playlist Downloader CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration such as the yt-dlp binary location and the default output
//! directory.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, handled by the CLI layer)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `pldcli/.env`. A missing `.env` file is not an
/// error: every configuration value has a usable default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/pldcli/.env`
/// - macOS: `~/Library/Application Support/pldcli/.env`
/// - Windows: `%LOCALAPPDATA%/pldcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready, or an error string if
/// directory creation or file parsing fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pldcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the explicitly configured yt-dlp binary path, if any.
///
/// Reads the `PLDCLI_YTDLP` environment variable. When set, binary resolution
/// uses this path verbatim and skips the `PATH` lookup and the on-demand
/// download.
///
/// # Example
///
/// ```
/// let path = ytdlp_override(); // e.g., Some("/usr/local/bin/yt-dlp")
/// ```
pub fn ytdlp_override() -> Option<String> {
    env::var("PLDCLI_YTDLP").ok().filter(|v| !v.is_empty())
}

/// Returns the default output root directory.
///
/// Reads the `PLDCLI_OUTPUT_DIR` environment variable; the playlist directory
/// and manifest are placed beneath it. Defaults to the current working
/// directory. The `--output` CLI flag takes precedence over this value.
///
/// # Example
///
/// ```
/// let root = output_root(); // e.g., "/home/user/music"
/// ```
pub fn output_root() -> PathBuf {
    env::var("PLDCLI_OUTPUT_DIR")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
