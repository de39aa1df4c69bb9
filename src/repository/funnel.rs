use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::FunnelConfig;
use crate::repository::errors::{FindAllError, FindError};

#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_funnel(&self, slug: &str) -> Result<FunnelConfig, FindError>;
    async fn find_all_funnels(&self) -> Result<Vec<FunnelConfig>, FindAllError>;
}

/// Funnels live as flat JSON documents, one `<slug>.json` per funnel.
/// Documents are read per lookup so edits show up without a restart.
pub struct FileRepository {
    dir: PathBuf,
}

impl FileRepository {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: PathBuf::from(dir),
        }
    }
}

#[async_trait]
impl Repository for FileRepository {
    async fn find_funnel(&self, slug: &str) -> Result<FunnelConfig, FindError> {
        // Slugs come straight from the URL path; only plain names may reach
        // the filesystem.
        if slug.is_empty()
            || !slug
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FindError::NotFound);
        }

        let path = self.dir.join(format!("{}.json", slug));
        let raw = fs::read_to_string(path)?;
        let funnel = serde_json::from_str(&raw)?;
        Ok(funnel)
    }

    async fn find_all_funnels(&self) -> Result<Vec<FunnelConfig>, FindAllError> {
        let mut funnels: Vec<FunnelConfig> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(funnel) => funnels.push(funnel),
                Err(err) => {
                    log::warn!("skipping malformed funnel config {}: {}", path.display(), err);
                }
            }
        }
        funnels.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(funnels)
    }
}

pub struct InMemoryRepository {
    funnels: Mutex<Vec<FunnelConfig>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            funnels: Mutex::new(vec![]),
        }
    }

    pub fn insert(&self, funnel: FunnelConfig) {
        let mut lock = match self.funnels.lock() {
            Ok(lock) => lock,
            Err(..) => return,
        };
        lock.push(funnel);
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn find_funnel(&self, slug: &str) -> Result<FunnelConfig, FindError> {
        let lock = match self.funnels.lock() {
            Ok(lock) => lock,
            Err(..) => return Err(FindError::Unknown),
        };
        lock.iter()
            .find(|funnel| funnel.slug == slug)
            .cloned()
            .ok_or(FindError::NotFound)
    }

    async fn find_all_funnels(&self) -> Result<Vec<FunnelConfig>, FindAllError> {
        let lock = match self.funnels.lock() {
            Ok(lock) => lock,
            Err(..) => return Err(FindAllError::Unknown),
        };
        Ok(lock.clone())
    }
}
