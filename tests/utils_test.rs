use pldcli::types::RawThumbnail;
use pldcli::utils::*;

// Helper function to create a thumbnail candidate
fn create_candidate(width: u32, height: u32) -> RawThumbnail {
    RawThumbnail {
        url: Some(format!("https://img.example/{}x{}.jpg", width, height)),
        width: Some(width),
        height: Some(height),
    }
}

#[test]
fn test_slugify_basic() {
    assert_eq!(slugify("Song A"), "song-a");
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("Already-Slugged"), "already-slugged");
}

#[test]
fn test_slugify_folds_non_ascii() {
    // Accented latin folds to plain ASCII
    assert_eq!(slugify("Beyoncé"), "beyonce");
    assert_eq!(slugify("Motörhead"), "motorhead");
}

#[test]
fn test_slugify_collapses_separator_runs() {
    // Runs of whitespace and hyphens become a single hyphen
    assert_eq!(slugify("Hello   --  World"), "hello-world");
    assert_eq!(slugify("a - b - c"), "a-b-c");
}

#[test]
fn test_slugify_keeps_internal_underscores() {
    assert_eq!(slugify("foo_bar baz"), "foo_bar-baz");
}

#[test]
fn test_slugify_trims_edges() {
    assert_eq!(slugify("-Song-"), "song");
    assert_eq!(slugify("_Song_"), "song");
    assert_eq!(slugify("  Song  "), "song");
}

#[test]
fn test_slugify_strips_disallowed_characters() {
    assert_eq!(slugify("AC/DC: Back In Black (Live) [2012]"), "acdc-back-in-black-live-2012");
    // Titles with nothing usable collapse to an empty slug
    assert_eq!(slugify("???"), "");
}

#[test]
fn test_slugify_is_idempotent() {
    for input in [
        "Song A",
        "Beyoncé — Halo",
        "foo_bar baz",
        "Hello   --  World",
        "-Song-",
        "???",
    ] {
        let once = slugify(input);
        assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_parse_release_date_valid() {
    let date = parse_release_date("20231215").unwrap();
    assert_eq!(date.year, 2023);
    assert_eq!(date.month, 12);
    assert_eq!(date.day, 15);
}

#[test]
fn test_parse_release_date_wrong_length() {
    assert!(parse_release_date("2023121").is_none());
    assert!(parse_release_date("202312150").is_none());
    assert!(parse_release_date("").is_none());
}

#[test]
fn test_parse_release_date_non_numeric() {
    assert!(parse_release_date("2023121a").is_none());
    assert!(parse_release_date("abcdefgh").is_none());
}

#[test]
fn test_parse_release_date_invalid_calendar_date() {
    // Right shape, not a real date
    assert!(parse_release_date("20231340").is_none());
    assert!(parse_release_date("20230230").is_none());
}

#[test]
fn test_select_thumbnail_prefers_last_square_candidate() {
    let candidates = vec![
        create_candidate(100, 100),
        create_candidate(200, 150),
        create_candidate(300, 300),
    ];

    let selected = select_thumbnail(&candidates, Some("https://img.example/fallback.webp")).unwrap();
    assert_eq!(selected.url, "https://img.example/300x300.jpg");
    assert_eq!(selected.mime_type, "image/jpeg");
}

#[test]
fn test_select_thumbnail_falls_back_without_square_candidate() {
    let candidates = vec![create_candidate(200, 150)];

    let selected = select_thumbnail(&candidates, Some("https://img.example/fallback.webp")).unwrap();
    assert_eq!(selected.url, "https://img.example/fallback.webp");
    assert_eq!(selected.mime_type, "image/webp");
}

#[test]
fn test_select_thumbnail_none_without_any_information() {
    assert!(select_thumbnail(&[], None).is_none());

    let candidates = vec![create_candidate(200, 150)];
    assert!(select_thumbnail(&candidates, None).is_none());
}

#[test]
fn test_select_thumbnail_skips_incomplete_candidates() {
    // Missing dimensions or url never match, zero-sized squares neither
    let candidates = vec![
        create_candidate(100, 100),
        RawThumbnail {
            url: None,
            width: Some(500),
            height: Some(500),
        },
        RawThumbnail {
            url: Some("https://img.example/no-dims.jpg".to_string()),
            width: None,
            height: None,
        },
        create_candidate(0, 0),
    ];

    let selected = select_thumbnail(&candidates, None).unwrap();
    assert_eq!(selected.url, "https://img.example/100x100.jpg");
}

#[test]
fn test_select_thumbnail_is_deterministic() {
    let candidates = vec![
        create_candidate(100, 100),
        create_candidate(200, 150),
        create_candidate(300, 300),
    ];

    let first = select_thumbnail(&candidates, None);
    let second = select_thumbnail(&candidates, None);
    assert_eq!(first, second);
}

#[test]
fn test_snapshot_cache_key_deterministic() {
    let key = snapshot_cache_key("https://example.com/playlist?list=abc");
    let again = snapshot_cache_key("https://example.com/playlist?list=abc");
    assert_eq!(key, again);

    let other = snapshot_cache_key("https://example.com/playlist?list=def");
    assert_ne!(key, other);
}

#[test]
fn test_snapshot_cache_key_is_filesystem_safe() {
    let key = snapshot_cache_key("https://example.com/playlist?list=abc&x=1/2\\3");
    assert!(!key.is_empty());
    assert!(
        key.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}
