use std::{io::Error, path::Path, process::Stdio};

use tokio::process::Command;

use crate::{types::RawEntry, warning};

#[derive(Debug)]
pub enum SourceError {
    IoError(Error),
    ToolError(String),
    SerdeError(serde_json::Error),
}

impl From<Error> for SourceError {
    fn from(err: Error) -> Self {
        SourceError::IoError(err)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::IoError(e) => write!(f, "{}", e),
            SourceError::ToolError(e) => write!(f, "{}", e),
            SourceError::SerdeError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SourceError {}

/// Fetches the raw entry records for a playlist URL.
///
/// Runs yt-dlp in flat-playlist mode, emitting one JSON record per entry on
/// stdout, and parses each line into a [`RawEntry`]. A nonzero exit status
/// surfaces the tool's last stderr line as a [`SourceError::ToolError`].
pub async fn fetch_entries(binary: &Path, url: &str) -> Result<Vec<RawEntry>, SourceError> {
    let output = Command::new(binary)
        .args(["--flat-playlist", "-j"])
        .arg(url)
        .stdin(Stdio::null())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("playlist source tool exited with an error")
            .to_string();
        return Err(SourceError::ToolError(diagnostic));
    }

    Ok(parse_entries(&String::from_utf8_lossy(&output.stdout)))
}

/// Parses newline-delimited raw entry records.
///
/// Lines that fail to parse are skipped with a warning; an empty result is the
/// aggregator's `EmptyPlaylist` condition, not this parser's.
pub fn parse_entries(raw: &str) -> Vec<RawEntry> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str::<RawEntry>(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warning!("Skipping playlist entry with malformed metadata: {}", e);
                None
            }
        })
        .collect()
}

/// Loads raw entries from a snapshot file instead of a live fetch.
///
/// Accepts either a JSON array of entry records or newline-delimited records,
/// matching the two shapes a snapshot may have been saved in.
pub async fn load_snapshot(path: &Path) -> Result<Vec<RawEntry>, SourceError> {
    let content = async_fs::read_to_string(path).await?;

    if content.trim_start().starts_with('[') {
        return serde_json::from_str(&content).map_err(SourceError::SerdeError);
    }

    Ok(parse_entries(&content))
}
