use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use pldcli::download;
use pldcli::types::{DownloadResult, DownloadStatus, Playlist, Track};

// Helper function to create a playlist of n synthetic tracks
fn create_playlist(n: u32) -> Playlist {
    let tracks = (1..=n)
        .map(|index| Track {
            title: format!("Song {}", index),
            slug: format!("song-{}", index),
            source_url: format!("https://media.example/watch?v={}", index),
            comment: String::new(),
            album: "Test Album".to_string(),
            artists: vec!["Test Artist".to_string()],
            genres: Vec::new(),
            composers: Vec::new(),
            index,
            release_date: None,
            thumbnail: None,
            local_path: format!("test-mix/{:02}-song-{}.mp3", index, index),
        })
        .collect();

    Playlist {
        title: "Test Mix".to_string(),
        slug: "test-mix".to_string(),
        tracks,
    }
}

fn success_result(track: Track) -> DownloadResult {
    DownloadResult {
        track,
        status: DownloadStatus::Success,
        error: None,
    }
}

#[tokio::test]
async fn test_run_produces_one_result_per_track() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = create_playlist(5);

    let results = download::run(&playlist, dir.path(), 2, |track: Track| async move {
        // A little jitter so completion order differs from dispatch order
        tokio::time::sleep(Duration::from_millis((6 - track.index) as u64)).await;
        success_result(track)
    })
    .await
    .unwrap();

    assert_eq!(results.len(), 5);

    let indices: HashSet<u32> = results.iter().map(|r| r.track.index).collect();
    assert_eq!(indices, (1..=5).collect::<HashSet<u32>>());
}

#[tokio::test]
async fn test_run_attempts_each_track_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = create_playlist(8);

    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let process = move |track: Track| {
        let attempts = Arc::clone(&counter);
        async move {
            attempts.fetch_add(1, Ordering::SeqCst);
            success_result(track)
        }
    };

    let results = download::run(&playlist, dir.path(), 3, process).await.unwrap();

    assert_eq!(results.len(), 8);
    assert_eq!(attempts.load(Ordering::SeqCst), 8);
}

#[tokio::test]
async fn test_run_isolates_track_failures() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = create_playlist(5);

    let results = download::run(&playlist, dir.path(), 2, |track: Track| async move {
        if track.index == 2 {
            return DownloadResult {
                track,
                status: DownloadStatus::FetchFailed,
                error: Some("forced failure".to_string()),
            };
        }
        success_result(track)
    })
    .await
    .unwrap();

    assert_eq!(results.len(), 5);

    let failed: Vec<&DownloadResult> = results
        .iter()
        .filter(|r| r.status == DownloadStatus::FetchFailed)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].track.index, 2);
    assert_eq!(failed[0].error.as_deref(), Some("forced failure"));

    let succeeded = results
        .iter()
        .filter(|r| r.status == DownloadStatus::Success)
        .count();
    assert_eq!(succeeded, 4);
}

#[tokio::test]
async fn test_run_with_empty_playlist() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = create_playlist(0);

    let results = download::run(&playlist, dir.path(), 4, |track: Track| async move {
        success_result(track)
    })
    .await
    .unwrap();

    assert!(results.is_empty());
    assert!(dir.path().join("test-mix").is_dir());
}

#[tokio::test]
async fn test_run_with_more_workers_than_tracks() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = create_playlist(2);

    let results = download::run(&playlist, dir.path(), 16, |track: Track| async move {
        success_result(track)
    })
    .await
    .unwrap();

    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_run_with_single_worker() {
    let dir = tempfile::tempdir().unwrap();
    let playlist = create_playlist(3);

    let results = download::run(&playlist, dir.path(), 1, |track: Track| async move {
        success_result(track)
    })
    .await
    .unwrap();

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_run_creates_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output_root = dir.path().join("nested").join("deeper");
    let playlist = create_playlist(1);

    let results = download::run(&playlist, &output_root, 1, |track: Track| async move {
        success_result(track)
    })
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert!(output_root.join("test-mix").is_dir());
}

#[tokio::test]
async fn test_run_fails_when_directory_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    // A plain file where the output root should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let playlist = create_playlist(2);
    let result = download::run(&playlist, &blocker, 2, |track: Track| async move {
        success_result(track)
    })
    .await;

    assert!(matches!(
        result,
        Err(download::OrchestratorError::DirectoryUnavailable(_))
    ));
}
