use std::{io::Error, path::Path, process::Stdio};

use tokio::process::Command;

#[derive(Debug)]
pub enum FetchError {
    IoError(Error),
    ToolError(String),
}

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        FetchError::IoError(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::IoError(e) => write!(f, "{}", e),
            FetchError::ToolError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Materializes one track's audio at `dest` via the external yt-dlp tool.
///
/// Extracts the best audio stream and transcodes it to mp3 in place. A nonzero
/// exit status surfaces the tool's last stderr line as the diagnostic.
pub async fn fetch_audio(binary: &Path, source_url: &str, dest: &Path) -> Result<(), FetchError> {
    let output = Command::new(binary)
        .args([
            "--no-update",
            "--extract-audio",
            "--audio-format",
            "mp3",
            "--audio-quality",
            "0",
            "--output",
        ])
        .arg(dest)
        .arg(source_url)
        .stdin(Stdio::null())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("media fetch tool exited with an error")
            .to_string();
        return Err(FetchError::ToolError(diagnostic));
    }

    Ok(())
}
