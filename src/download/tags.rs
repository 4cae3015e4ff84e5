use std::path::Path;

use id3::{Content, Frame, Tag, TagLike, Timestamp, Version, frame};
use reqwest::Client;

use crate::{
    types::{CoverArt, TagSet, Thumbnail, Track},
    warning,
};

/// Delimiter joining multi-valued fields (artists, composers, genres) into a
/// single tag frame.
pub const ARTIST_DELIMITER: &str = ", ";

#[derive(Debug)]
pub enum TagError {
    WriteError(id3::Error),
}

impl From<id3::Error> for TagError {
    fn from(err: id3::Error) -> Self {
        TagError::WriteError(err)
    }
}

impl std::fmt::Display for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagError::WriteError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TagError {}

/// Builds the abstract tag set for a track.
///
/// A pure mapping from the track plus the playlist's total track count, except
/// for the cover image: the selected thumbnail URL is fetched here, and any
/// fetch failure degrades to an omitted cover rather than failing assembly.
pub async fn build_tag_set(track: &Track, playlist_total: u32) -> TagSet {
    let cover = match &track.thumbnail {
        Some(thumbnail) => fetch_cover(thumbnail).await,
        None => None,
    };

    TagSet {
        title: track.title.clone(),
        comment: track.comment.clone(),
        album: track.album.clone(),
        artists: track.artists.clone(),
        composers: track.composers.clone(),
        genres: track.genres.clone(),
        release_date: track.release_date,
        track_number: (track.index, playlist_total),
        cover,
    }
}

async fn fetch_cover(thumbnail: &Thumbnail) -> Option<CoverArt> {
    let client = Client::new();
    let response = match client.get(&thumbnail.url).send().await {
        Ok(resp) => match resp.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(e) => {
                warning!("Cover art request failed: {}", e);
                return None;
            }
        },
        Err(e) => {
            warning!("Cover art request failed: {}", e);
            return None;
        }
    };

    match response.bytes().await {
        Ok(bytes) => Some(CoverArt {
            mime_type: thumbnail.mime_type.clone(),
            data: bytes.to_vec(),
        }),
        Err(e) => {
            warning!("Cover art download failed: {}", e);
            None
        }
    }
}

/// Writes an assembled tag set into the audio file's ID3 container in place.
///
/// Absent optional fields write no frame at all: no composer frame for an empty
/// composer list, no date frame for an absent release date, no picture frame
/// without cover bytes.
pub fn write_tags(path: &Path, tags: &TagSet) -> Result<(), TagError> {
    let mut tag = Tag::new();

    let artist = tags.artists.join(ARTIST_DELIMITER);
    tag.set_title(tags.title.as_str());
    tag.set_artist(artist.as_str());
    tag.set_album(tags.album.as_str());
    tag.set_album_artist(artist.as_str());

    let (number, total) = tags.track_number;
    tag.set_track(number);
    tag.set_total_tracks(total);

    if !tags.comment.is_empty() {
        tag.add_frame(frame::Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: tags.comment.clone(),
        });
    }

    if !tags.genres.is_empty() {
        tag.set_genre(tags.genres.join(ARTIST_DELIMITER));
    }

    if !tags.composers.is_empty() {
        tag.add_frame(Frame::with_content(
            "TCOM",
            Content::Text(tags.composers.join(ARTIST_DELIMITER)),
        ));
    }

    if let Some(date) = tags.release_date {
        tag.set_date_released(Timestamp {
            year: date.year,
            month: Some(date.month as u8),
            day: Some(date.day as u8),
            hour: None,
            minute: None,
            second: None,
        });
    }

    if let Some(cover) = &tags.cover {
        tag.add_frame(frame::Picture {
            mime_type: cover.mime_type.clone(),
            picture_type: frame::PictureType::CoverFront,
            description: "cover".to_string(),
            data: cover.data.clone(),
        });
    }

    tag.write_to_path(path, Version::Id3v24)?;
    Ok(())
}
