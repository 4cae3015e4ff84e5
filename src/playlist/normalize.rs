use crate::{
    types::{RawEntry, Track},
    utils,
};

pub const TITLE_PLACEHOLDER: &str = "Unknown";
pub const ARTIST_PLACEHOLDER: &str = "Unknown Artist";
pub const ALBUM_PLACEHOLDER: &str = "Unknown Album";

/// Converts one raw entry into a canonical [`Track`].
///
/// Total and independent of other entries: every optional source field resolves
/// through its fallback chain or collapses to an empty list, so any entry yields
/// a usable track. `index` is the 1-based position within the already-filtered
/// playlist sequence and `playlist_slug` the directory component of the track's
/// local path.
pub fn normalize(entry: &RawEntry, index: u32, playlist_slug: &str) -> Track {
    let title = resolve_title(entry);
    let slug = utils::slugify(&title);
    let source_url = resolve_source_url(entry);

    // Zero-padded index keeps duplicate title slugs from colliding on disk.
    let local_path = format!("{playlist_slug}/{index:02}-{slug}.mp3");

    Track {
        comment: source_url.clone(),
        title,
        slug,
        source_url,
        album: resolve_album(entry),
        artists: resolve_artists(entry),
        genres: resolve_list(&entry.genres, &entry.genre),
        composers: resolve_list(&entry.composers, &entry.composer),
        index,
        release_date: entry
            .release_date
            .as_deref()
            .and_then(utils::parse_release_date),
        thumbnail: utils::select_thumbnail(
            entry.thumbnails.as_deref().unwrap_or(&[]),
            entry.thumbnail.as_deref(),
        ),
        local_path,
    }
}

/// Title precedence: entry title, else placeholder.
fn resolve_title(entry: &RawEntry) -> String {
    entry
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

/// Artist precedence: explicit artist list, singular artist string, uploader,
/// channel, placeholder. Never empty.
fn resolve_artists(entry: &RawEntry) -> Vec<String> {
    if let Some(artists) = &entry.artists {
        if !artists.is_empty() {
            return artists.clone();
        }
    }

    let single = entry
        .artist
        .as_deref()
        .or(entry.uploader.as_deref())
        .or(entry.channel.as_deref())
        .filter(|v| !v.is_empty())
        .unwrap_or(ARTIST_PLACEHOLDER);

    vec![single.to_string()]
}

/// Album precedence: album, channel, placeholder.
fn resolve_album(entry: &RawEntry) -> String {
    entry
        .album
        .as_deref()
        .or(entry.channel.as_deref())
        .filter(|v| !v.is_empty())
        .unwrap_or(ALBUM_PLACEHOLDER)
        .to_string()
}

/// Source URL precedence: canonical entry url, webpage url. An empty result is
/// legal and fails at fetch time for this track only.
fn resolve_source_url(entry: &RawEntry) -> String {
    entry
        .url
        .as_deref()
        .or(entry.webpage_url.as_deref())
        .unwrap_or_default()
        .to_string()
}

/// List-valued metadata: plural list, else the singular string as a one-element
/// list, else empty. Singular strings are kept unsplit so the joined tag output
/// matches the source's own joining.
fn resolve_list(plural: &Option<Vec<String>>, singular: &Option<String>) -> Vec<String> {
    if let Some(values) = plural {
        if !values.is_empty() {
            return values.clone();
        }
    }

    singular
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| vec![v.to_string()])
        .unwrap_or_default()
}
