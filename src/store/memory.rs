use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    foundation::error::{BlueboardError, BlueboardResult},
    scene::model::AnimationObject,
    store::records::{
        ContentRecord, NewContent, NewProgress, ProgressRecord, ProgressWithContent,
    },
};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreData {
    next_content_id: i64,
    next_progress_id: i64,
    content: BTreeMap<i64, ContentRecord>,
    progress: BTreeMap<i64, ProgressRecord>,
}

impl StoreData {
    fn allocate_content_id(&mut self) -> i64 {
        self.next_content_id += 1;
        self.next_content_id
    }

    fn allocate_progress_id(&mut self) -> i64 {
        self.next_progress_id += 1;
        self.next_progress_id
    }
}

/// Content and progress tables held in memory, optionally mirrored to a JSON file
/// after every write.
#[derive(Debug)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
    snapshot: Option<PathBuf>,
}

impl MemoryStore {
    pub fn in_memory() -> Self {
        Self {
            data: RwLock::new(StoreData::default()),
            snapshot: None,
        }
    }

    /// Loads `path` when it exists; later writes are saved back to it.
    pub async fn open(path: impl Into<PathBuf>) -> BlueboardResult<Self> {
        let path = path.into();
        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                BlueboardError::storage(format!("parse snapshot '{}': {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(e) => {
                return Err(BlueboardError::storage(format!(
                    "read snapshot '{}': {e}",
                    path.display()
                )));
            }
        };
        tracing::info!(
            path = %path.display(),
            content = data.content.len(),
            progress = data.progress.len(),
            "store opened"
        );
        Ok(Self {
            data: RwLock::new(data),
            snapshot: Some(path),
        })
    }

    /// Saves `next` and only then makes it the live state. A failed write leaves
    /// `live` untouched.
    async fn commit(&self, live: &mut StoreData, next: StoreData) -> BlueboardResult<()> {
        if let Some(path) = &self.snapshot {
            write_snapshot(path, &next).await?;
        }
        *live = next;
        Ok(())
    }

    pub async fn create_content(&self, new: NewContent) -> BlueboardResult<ContentRecord> {
        new.validate()?;
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let now = Utc::now();
        let record = ContentRecord {
            id: next.allocate_content_id(),
            title: new.title,
            description: new.description,
            subject: new.subject,
            prompt: new.prompt,
            animation_config: new.animation_config,
            created_at: now,
            updated_at: now,
            created_by: new.created_by,
            is_public: new.is_public,
        };
        next.content.insert(record.id, record.clone());
        self.commit(&mut data, next).await?;
        tracing::debug!(id = record.id, "content created");
        Ok(record)
    }

    pub async fn get_content(&self, id: i64) -> Option<ContentRecord> {
        self.data.read().await.content.get(&id).cloned()
    }

    /// Replaces the objects of a content record. `None` when the id is unknown.
    pub async fn update_objects(
        &self,
        id: i64,
        objects: Vec<AnimationObject>,
    ) -> BlueboardResult<Option<ContentRecord>> {
        for obj in &objects {
            obj.validate()?;
        }
        let mut data = self.data.write().await;
        let Some(mut record) = data.content.get(&id).cloned() else {
            return Ok(None);
        };
        record.animation_config.objects = objects;
        record.updated_at = Utc::now();

        let mut next = data.clone();
        next.content.insert(id, record.clone());
        self.commit(&mut data, next).await?;
        Ok(Some(record))
    }

    /// All content, newest first.
    pub async fn list_content(&self) -> Vec<ContentRecord> {
        let data = self.data.read().await;
        let mut out: Vec<ContentRecord> = data.content.values().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out
    }

    pub async fn create_progress(&self, new: NewProgress) -> BlueboardResult<ProgressRecord> {
        new.validate()?;
        let mut data = self.data.write().await;
        if !data.content.contains_key(&new.content_id) {
            return Err(BlueboardError::not_found(format!(
                "content {} does not exist",
                new.content_id
            )));
        }
        let mut next = data.clone();
        let record = ProgressRecord {
            id: next.allocate_progress_id(),
            user_id: new.user_id,
            content_id: new.content_id,
            completed: new.completed,
            last_interaction: Utc::now(),
            notes: new.notes,
            feedback: new.feedback.unwrap_or(0),
        };
        next.progress.insert(record.id, record.clone());
        self.commit(&mut data, next).await?;
        Ok(record)
    }

    /// Progress of one user, most recent interaction first, joined with content.
    pub async fn list_progress(&self, user_id: i64) -> Vec<ProgressWithContent> {
        let data = self.data.read().await;
        let mut out: Vec<ProgressWithContent> = data
            .progress
            .values()
            .filter(|p| p.user_id == user_id)
            .map(|p| ProgressWithContent {
                progress: p.clone(),
                content: data.content.get(&p.content_id).cloned(),
            })
            .collect();
        out.sort_by(|a, b| {
            b.progress
                .last_interaction
                .cmp(&a.progress.last_interaction)
                .then(b.progress.id.cmp(&a.progress.id))
        });
        out
    }
}

async fn write_snapshot(path: &Path, data: &StoreData) -> BlueboardResult<()> {
    let bytes = serde_json::to_vec_pretty(data)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            BlueboardError::storage(format!("create dir '{}': {e}", parent.display()))
        })?;
    }
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| BlueboardError::storage(format!("write '{}': {e}", tmp.display())))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| BlueboardError::storage(format!("replace '{}': {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/store/memory.rs"]
mod tests;
