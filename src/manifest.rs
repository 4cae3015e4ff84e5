//! Extended-M3U playlist manifest writer.
//!
//! Serializes an aggregated playlist into a playback manifest: a format header,
//! a playlist-level title line, and one entry-info/path pair per track in
//! ascending track-index order, regardless of the order downloads completed.
//! Paths are the tracks' local paths, which are relative to the manifest's own
//! location, so a moved output tree stays playable.

use std::{
    io::Error,
    path::{Path, PathBuf},
};

use crate::types::{Playlist, Track};

#[derive(Debug)]
pub enum ManifestError {
    IoError(Error),
}

impl From<Error> for ManifestError {
    fn from(err: Error) -> Self {
        ManifestError::IoError(err)
    }
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ManifestError {}

/// The manifest file name for a playlist, placed next to its track directory.
pub fn file_name(playlist: &Playlist) -> String {
    format!("{}.m3u8", playlist.slug)
}

/// Renders the manifest content for a playlist.
///
/// Entries are sorted by ascending track index at render time, so the output is
/// byte-identical for the same playlist state no matter when or how often it is
/// rendered.
pub fn render(playlist: &Playlist) -> String {
    let mut tracks: Vec<&Track> = playlist.tracks.iter().collect();
    tracks.sort_by_key(|track| track.index);

    let mut content = String::from("#EXTM3U\n");
    content.push_str(&format!("#PLAYLIST:{}\n", playlist.title));
    for track in tracks {
        content.push_str(&format!(
            "#EXTINF:-1, {title}\n{path}\n",
            title = track.title,
            path = track.local_path
        ));
    }

    content
}

/// Writes the manifest next to the playlist's track directory.
pub async fn write(playlist: &Playlist, output_root: &Path) -> Result<PathBuf, ManifestError> {
    let path = output_root.join(file_name(playlist));
    async_fs::write(&path, render(playlist)).await?;
    Ok(path)
}
