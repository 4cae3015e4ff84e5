use std::{collections::VecDeque, future::Future, io::Error, path::Path, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    types::{DownloadResult, Playlist, Track},
    warning,
};

#[derive(Debug)]
pub enum OrchestratorError {
    DirectoryUnavailable(Error),
}

impl std::fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorError::DirectoryUnavailable(e) => {
                write!(f, "cannot create output directory: {}", e)
            }
        }
    }
}

impl std::error::Error for OrchestratorError {}

/// Drives concurrent acquisition of a playlist's tracks.
///
/// Spawns a bounded pool of workers draining a shared FIFO queue; each track is
/// handed to the injected `process` pipeline exactly once and its result
/// appended to a shared collection. All workers are awaited before returning,
/// so the result set is complete: one [`DownloadResult`] per track, in no
/// particular order (the manifest writer restores index order).
///
/// The playlist's output directory is created idempotently before any worker
/// starts; failure to create it is fatal for the whole run.
pub async fn run<F, Fut>(
    playlist: &Playlist,
    output_root: &Path,
    concurrency: usize,
    process: F,
) -> Result<Vec<DownloadResult>, OrchestratorError>
where
    F: Fn(Track) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = DownloadResult> + Send + 'static,
{
    async_fs::create_dir_all(output_root.join(&playlist.slug))
        .await
        .map_err(|e| OrchestratorError::DirectoryUnavailable(e))?;

    let queue: Arc<Mutex<VecDeque<Track>>> =
        Arc::new(Mutex::new(playlist.tracks.iter().cloned().collect()));
    let results: Arc<Mutex<Vec<DownloadResult>>> =
        Arc::new(Mutex::new(Vec::with_capacity(playlist.tracks.len())));
    let process = Arc::new(process);

    let workers = concurrency.max(1).min(playlist.tracks.len().max(1));
    let mut handles = Vec::with_capacity(workers);

    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let results = Arc::clone(&results);
        let process = Arc::clone(&process);

        handles.push(tokio::spawn(async move {
            loop {
                let track = queue.lock().await.pop_front();
                let Some(track) = track else {
                    break;
                };

                let result = process.as_ref()(track).await;
                results.lock().await.push(result);
            }
        }));
    }

    for handle in handles {
        if let Err(e) = handle.await {
            warning!("Worker task join error: {}", e);
        }
    }

    let mut results = results.lock().await;
    Ok(std::mem::take(&mut *results))
}
