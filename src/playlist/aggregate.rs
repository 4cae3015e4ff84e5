use crate::{
    playlist::normalize::{TITLE_PLACEHOLDER, normalize},
    types::{Playlist, RawEntry},
    utils,
};

/// Titles marking an entry as unavailable at the source; such entries are
/// dropped before track indices are assigned.
pub const UNAVAILABLE_MARKERS: [&str; 2] = ["[Deleted video]", "[Private video]"];

#[derive(Debug)]
pub enum AggregateError {
    EmptyPlaylist,
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::EmptyPlaylist => {
                write!(f, "could not fetch playlist or playlist is empty")
            }
        }
    }
}

impl std::error::Error for AggregateError {}

/// Converts the full raw entry sequence into a [`Playlist`].
///
/// Unavailable entries are filtered out first, then 1-based track indices are
/// assigned over the retained set so they stay contiguous. The playlist title
/// comes from `title_override` (snapshot-driven runs), else the first retained
/// entry's playlist-level title; the slug is derived once from the title and
/// immutable afterwards.
///
/// Fails with [`AggregateError::EmptyPlaylist`] when no usable entries remain.
pub fn aggregate(
    entries: &[RawEntry],
    title_override: Option<String>,
) -> Result<Playlist, AggregateError> {
    let retained: Vec<&RawEntry> = entries.iter().filter(|e| !is_unavailable(e)).collect();
    if retained.is_empty() {
        return Err(AggregateError::EmptyPlaylist);
    }

    let title = title_override
        .filter(|t| !t.is_empty())
        .or_else(|| retained[0].playlist_title.clone().filter(|t| !t.is_empty()))
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());
    let slug = utils::slugify(&title);

    let tracks = retained
        .iter()
        .enumerate()
        .map(|(position, entry)| normalize(entry, position as u32 + 1, &slug))
        .collect();

    Ok(Playlist {
        title,
        slug,
        tracks,
    })
}

fn is_unavailable(entry: &RawEntry) -> bool {
    matches!(entry.title.as_deref(), Some(title) if UNAVAILABLE_MARKERS.contains(&title))
}
