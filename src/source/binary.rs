use std::{io::Error, path::PathBuf, process::Stdio};

use reqwest::Client;
use tokio::process::Command;

use crate::{config, info};

const DOWNLOAD_BASE: &str = "https://github.com/yt-dlp/yt-dlp/releases/latest/download";

#[cfg(target_os = "windows")]
const ASSET: &str = "yt-dlp.exe";
#[cfg(not(target_os = "windows"))]
const ASSET: &str = "yt-dlp";

#[derive(Debug)]
pub enum BinaryError {
    IoError(Error),
    HttpError(reqwest::Error),
}

impl From<Error> for BinaryError {
    fn from(err: Error) -> Self {
        BinaryError::IoError(err)
    }
}

impl From<reqwest::Error> for BinaryError {
    fn from(err: reqwest::Error) -> Self {
        BinaryError::HttpError(err)
    }
}

impl std::fmt::Display for BinaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryError::IoError(e) => write!(f, "{}", e),
            BinaryError::HttpError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BinaryError {}

/// Resolves a usable yt-dlp executable, provisioning one when necessary.
///
/// Resolution order: the `PLDCLI_YTDLP` override, a working binary on `PATH`,
/// a previously provisioned copy in the local data directory, and finally a
/// one-time download of the latest release asset from GitHub into that
/// directory.
pub async fn ensure_binary() -> Result<PathBuf, BinaryError> {
    if let Some(path) = config::ytdlp_override() {
        return Ok(PathBuf::from(path));
    }

    if let Ok(output) = Command::new(ASSET)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .await
    {
        if output.status.success() {
            return Ok(PathBuf::from(ASSET));
        }
    }

    let local = local_binary_path();
    if local.is_file() {
        return Ok(local);
    }

    info!("{} not found. Downloading executable from github.com...", ASSET);
    if let Some(parent) = local.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let url = format!("{DOWNLOAD_BASE}/{ASSET}");
    let client = Client::new();
    let response = client.get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    async_fs::write(&local, &bytes).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = async_fs::metadata(&local).await?.permissions();
        permissions.set_mode(0o755);
        async_fs::set_permissions(&local, permissions).await?;
    }

    Ok(local)
}

fn local_binary_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(format!("pldcli/bin/{ASSET}"));
    path
}
