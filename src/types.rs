use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One raw per-track record as emitted by the playlist source provider.
///
/// Every field is optional: flat-playlist records are heterogeneous and
/// routinely omit metadata. The normalizer resolves each field through an
/// explicit fallback chain, so absence here is never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub url: Option<String>,
    pub webpage_url: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub artists: Option<Vec<String>>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub composers: Option<Vec<String>>,
    pub composer: Option<String>,
    pub genres: Option<Vec<String>>,
    pub genre: Option<String>,
    pub release_date: Option<String>,
    pub thumbnails: Option<Vec<RawThumbnail>>,
    pub thumbnail: Option<String>,
    pub playlist_title: Option<String>,
}

/// One cover-art candidate attached to a raw entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawThumbnail {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The selected cover-art source for a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub mime_type: String,
}

/// A calendar date from an 8-digit `YYYYMMDD` source string.
///
/// Stored as an explicit triple; parsing validates the components against a
/// real calendar and malformed input is treated as an absent date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Normalized, canonical representation of one playable item in a playlist.
///
/// Immutable after normalization; read concurrently by download workers.
/// `local_path` is relative to the manifest location and embeds the zero-padded
/// track index so duplicate title slugs cannot collide on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub slug: String,
    pub source_url: String,
    pub comment: String,
    pub album: String,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub composers: Vec<String>,
    pub index: u32,
    pub release_date: Option<ReleaseDate>,
    pub thumbnail: Option<Thumbnail>,
    pub local_path: String,
}

/// An aggregated playlist: derived title/slug plus the ordered track set.
///
/// `tracks` is ordered by `index` ascending, 1-based and contiguous over the
/// retained (non-unavailable) entries. Read-only after aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub title: String,
    pub slug: String,
    pub tracks: Vec<Track>,
}

/// Outcome classification for one attempted track download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Success,
    FetchFailed,
    TagFailed,
}

impl std::fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadStatus::Success => write!(f, "ok"),
            DownloadStatus::FetchFailed => write!(f, "fetch failed"),
            DownloadStatus::TagFailed => write!(f, "tagging failed"),
        }
    }
}

/// The per-track result record produced by the download orchestrator.
#[derive(Debug, Clone)]
pub struct DownloadResult {
    pub track: Track,
    pub status: DownloadStatus,
    pub error: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub track: u32,
    pub title: String,
    pub status: String,
}

/// Abstract set of named tag fields destined for an audio file's tag container.
///
/// Optional fields that are absent produce no tag frame at all.
#[derive(Debug, Clone)]
pub struct TagSet {
    pub title: String,
    pub comment: String,
    pub album: String,
    pub artists: Vec<String>,
    pub composers: Vec<String>,
    pub genres: Vec<String>,
    pub release_date: Option<ReleaseDate>,
    pub track_number: (u32, u32),
    pub cover: Option<CoverArt>,
}

/// Cover-art bytes fetched from the selected thumbnail URL.
#[derive(Debug, Clone)]
pub struct CoverArt {
    pub mime_type: String,
    pub data: Vec<u8>,
}
