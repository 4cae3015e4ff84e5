use std::{io::Error, path::PathBuf};

use crate::{types::RawEntry, utils};

#[derive(Debug)]
pub enum SnapshotError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for SnapshotError {
    fn from(err: Error) -> Self {
        SnapshotError::IoError(err)
    }
}

pub struct SnapshotManager {
    key: String,
    entries: Vec<RawEntry>,
}

impl SnapshotManager {
    pub fn new(url: &str, entries: Option<Vec<RawEntry>>) -> Self {
        Self {
            key: utils::snapshot_cache_key(url),
            entries: entries.unwrap_or(Vec::new()),
        }
    }

    pub async fn load_from_cache(&self) -> Result<Self, SnapshotError> {
        let path = Self::get_path(&self);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| SnapshotError::IoError(e))?;
        let entries = serde_json::from_str(&content).map_err(|e| SnapshotError::SerdeError(e))?;
        Ok(Self {
            key: self.key.clone(),
            entries,
        })
    }

    pub async fn save_to_cache(&self) -> Result<(), SnapshotError> {
        let path = Self::get_path(&self);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapshotError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.entries.clone())
            .map_err(|e| SnapshotError::SerdeError(e))?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| SnapshotError::IoError(e))
    }

    pub fn get_entries(&self) -> Vec<RawEntry> {
        self.entries.clone()
    }

    fn get_path(&self) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("pldcli/snapshots/{key}.json", key = self.key));
        path
    }
}
