// Flat-file dedup store — one notified link per line, append-only.
//
// A missing file is an empty store. The file is created (with any missing
// parent directories) on the first `record`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::traits::DedupStore;

pub struct FileDedupStore {
    path: PathBuf,
}

impl FileDedupStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DedupStore for FileDedupStore {
    async fn read(&self) -> Result<HashSet<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read sent log at {}", self.path.display())
                })
            }
        };

        Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn record(&self, link: &str) -> Result<()> {
        if link.contains('\n') || link.contains('\r') {
            anyhow::bail!("Refusing to record a link containing a line break: {link:?}");
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create directory for sent log: {}", self.path.display())
                })?;
            }
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open sent log at {}", self.path.display()))?;

        file.write_all(format!("{link}\n").as_bytes())
            .await
            .with_context(|| format!("Failed to append to sent log at {}", self.path.display()))?;
        file.flush().await?;

        debug!(link = link, path = %self.path.display(), "Recorded notified link");
        Ok(())
    }
}
