use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Datelike, NaiveDate};
use sha2::{Digest, Sha256};

use crate::types::{RawThumbnail, ReleaseDate, Thumbnail};

/// Derives a filesystem/URL-safe slug from a title.
///
/// ASCII-folds, lowercases, strips everything outside `[a-z0-9_\s-]`, collapses
/// runs of whitespace and hyphens into a single hyphen, and trims leading and
/// trailing hyphens/underscores. Idempotent: `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(input: &str) -> String {
    let folded = deunicode::deunicode(input).to_lowercase();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_separator = false;
    for c in folded.chars() {
        if c.is_whitespace() || c == '-' {
            pending_separator = !slug.is_empty();
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(c);
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Parses a raw 8-digit `YYYYMMDD` date string.
///
/// Wrong length, non-numeric input, or a calendar-invalid combination is
/// malformed and yields `None`; tag embedding then omits the date frame.
pub fn parse_release_date(raw: &str) -> Option<ReleaseDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let date = NaiveDate::parse_from_str(raw, "%Y%m%d").ok()?;
    Some(ReleaseDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

/// Picks the best cover-art candidate for a track.
///
/// Candidates are scanned from last to first (sources order them by ascending
/// fidelity); the first square candidate with positive dimensions wins and is
/// tagged `image/jpeg`. Without a square candidate the single fallback URL is
/// used as `image/webp`. `None` means cover embedding is skipped for the track.
pub fn select_thumbnail(candidates: &[RawThumbnail], fallback: Option<&str>) -> Option<Thumbnail> {
    for candidate in candidates.iter().rev() {
        let (Some(url), Some(width), Some(height)) =
            (candidate.url.as_deref(), candidate.width, candidate.height)
        else {
            continue;
        };

        if width > 0 && width == height {
            return Some(Thumbnail {
                url: url.to_string(),
                mime_type: "image/jpeg".to_string(),
            });
        }
    }

    fallback.map(|url| Thumbnail {
        url: url.to_string(),
        mime_type: "image/webp".to_string(),
    })
}

/// Digest of a playlist URL used as its snapshot cache key.
pub fn snapshot_cache_key(url: &str) -> String {
    let hash = Sha256::digest(url.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}
