use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, download, error, info, manifest,
    management::SnapshotManager,
    playlist, source, success,
    types::{DownloadResult, DownloadStatus, Playlist, RawEntry, Track, TrackTableRow},
    warning,
};

pub async fn download(
    url: Option<String>,
    snapshot: Option<PathBuf>,
    title: Option<String>,
    output: Option<PathBuf>,
    workers: usize,
    embed_metadata: bool,
    write_manifest: bool,
    manifest_only: bool,
) {
    let output_root = output.unwrap_or_else(config::output_root);

    let entries = resolve_entries(url, snapshot.as_deref()).await;

    let playlist = match playlist::aggregate(&entries, title) {
        Ok(playlist) => playlist,
        Err(e) => error!("{}", e),
    };

    info!(
        "Playlist \"{title}\" with {count} tracks.",
        title = playlist.title,
        count = playlist.tracks.len()
    );

    if !manifest_only {
        run_downloads(&playlist, &output_root, workers, embed_metadata).await;
    }

    if write_manifest {
        match manifest::write(&playlist, &output_root).await {
            Ok(path) => success!("Playlist manifest written to {}.", path.display()),
            Err(e) => error!("Cannot write playlist manifest: {}", e),
        }
    }
}

/// Resolves the raw entry set: an explicit snapshot file wins, otherwise a live
/// fetch whose result refreshes the snapshot cache. A failed live fetch falls
/// back to the cached snapshot for the same URL when one exists.
async fn resolve_entries(url: Option<String>, snapshot: Option<&Path>) -> Vec<RawEntry> {
    if let Some(path) = snapshot {
        match source::load_snapshot(path).await {
            Ok(entries) => return entries,
            Err(e) => error!("Cannot load playlist snapshot: {}", e),
        }
    }

    let url = match url.filter(|u| !u.trim().is_empty()) {
        Some(url) => url,
        None => prompt_for_url(),
    };

    let pb = spinner("Getting playlist data...");

    let binary = match source::ensure_binary().await {
        Ok(binary) => binary,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot provision the playlist source tool: {}", e);
        }
    };

    match source::fetch_entries(&binary, &url).await {
        Ok(entries) => {
            pb.finish_and_clear();
            match SnapshotManager::new(&url, Some(entries.clone()))
                .save_to_cache()
                .await
            {
                Ok(_) => {}
                Err(e) => warning!("Cannot cache playlist snapshot. Err: {:?}", e),
            }
            entries
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch playlist: {}", e);
            match SnapshotManager::new(&url, None).load_from_cache().await {
                Ok(manager) => {
                    info!("Using cached playlist snapshot.");
                    manager.get_entries()
                }
                Err(_) => error!("Could not fetch playlist and no cached snapshot exists."),
            }
        }
    }
}

async fn run_downloads(
    playlist: &Playlist,
    output_root: &Path,
    workers: usize,
    embed_metadata: bool,
) {
    let binary = match source::ensure_binary().await {
        Ok(binary) => binary,
        Err(e) => error!("Cannot provision the media fetch tool: {}", e),
    };

    let playlist_total = playlist.tracks.len() as u32;
    let pb = ProgressBar::new(playlist.tracks.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let process = {
        let binary = binary.clone();
        let output_root = output_root.to_path_buf();
        let pb = pb.clone();
        move |track: Track| {
            let binary = binary.clone();
            let output_root = output_root.clone();
            let pb = pb.clone();
            async move {
                pb.set_message(format!("Processing {}...", track.title));
                let result =
                    process_track(&binary, &output_root, track, playlist_total, embed_metadata)
                        .await;
                pb.inc(1);
                result
            }
        }
    };

    let results = match download::run(playlist, output_root, workers, process).await {
        Ok(results) => results,
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };

    pb.finish_and_clear();
    report_results(&results);
}

/// The per-track pipeline handed to the orchestrator: fetch the audio, then
/// embed tags when enabled. Every failure is captured in the track's result.
async fn process_track(
    binary: &Path,
    output_root: &Path,
    track: Track,
    playlist_total: u32,
    embed_metadata: bool,
) -> DownloadResult {
    let dest = output_root.join(&track.local_path);

    if let Err(e) = download::fetch_audio(binary, &track.source_url, &dest).await {
        return DownloadResult {
            track,
            status: DownloadStatus::FetchFailed,
            error: Some(e.to_string()),
        };
    }

    if embed_metadata {
        let tag_set = download::build_tag_set(&track, playlist_total).await;
        if let Err(e) = download::write_tags(&dest, &tag_set) {
            return DownloadResult {
                track,
                status: DownloadStatus::TagFailed,
                error: Some(e.to_string()),
            };
        }
    }

    DownloadResult {
        track,
        status: DownloadStatus::Success,
        error: None,
    }
}

fn report_results(results: &[DownloadResult]) {
    let mut rows: Vec<TrackTableRow> = results
        .iter()
        .map(|result| TrackTableRow {
            track: result.track.index,
            title: result.track.title.clone(),
            status: match &result.error {
                Some(message) => format!("{} ({})", result.status, message),
                None => result.status.to_string(),
            },
        })
        .collect();
    rows.sort_by_key(|row| row.track);

    let table = Table::new(rows);
    println!("{}", table);

    let failed = results
        .iter()
        .filter(|result| result.status != DownloadStatus::Success)
        .count();
    if failed == 0 {
        success!("Downloaded {} tracks.", results.len());
    } else {
        warning!("{failed} of {total} tracks failed.", total = results.len());
    }
}

fn prompt_for_url() -> String {
    use std::io::Write;

    print!("Input playlist link: ");
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        error!("Cannot read playlist link from stdin.");
    }

    let url = input.trim().to_string();
    if url.is_empty() {
        error!("No playlist link provided.");
    }
    url
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
