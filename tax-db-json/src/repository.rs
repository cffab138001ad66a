use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tax_core::{LedgerDocument, LedgerRepository, RepositoryError};
use tracing::debug;

/// Ledger stored as a single pretty-printed JSON file.
///
/// Each write goes to its own uniquely named sibling temporary file that is
/// then renamed over the target, so readers never observe a half-written
/// document and concurrent writers never share a temp file. Separate
/// processes sharing one file still overwrite each other's changes: the
/// last rename wins.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Points at `path` without touching the filesystem. A missing file
    /// loads as an empty document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Like [`JsonFileRepository::new`], but creates the file (and its
    /// parent directories) with an empty document if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self::new(path);
        if !tokio::fs::try_exists(&repo.path)
            .await
            .with_context(|| format!("Failed to check store file '{}'", repo.path.display()))?
        {
            repo.write_document(&LedgerDocument::default())
                .await
                .with_context(|| format!("Failed to initialise store '{}'", repo.path.display()))?;
            debug!(path = %repo.path.display(), "created empty ledger file");
        }
        Ok(repo)
    }

    async fn write_document(
        &self,
        document: &LedgerDocument,
    ) -> Result<()> {
        let dir = self.directory();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

        let payload =
            serde_json::to_vec_pretty(document).context("Failed to encode ledger document")?;
        let target = self.path.clone();

        tokio::task::spawn_blocking(move || replace_file(&dir, &target, &payload))
            .await
            .context("Store writer task failed")?
    }

    fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Writes `payload` to a fresh temp file in `dir` and renames it over
/// `target`. The temp file is removed if anything fails before the rename.
fn replace_file(
    dir: &Path,
    target: &Path,
    payload: &[u8],
) -> Result<()> {
    let mut temp = tempfile::Builder::new()
        .prefix(".ledger-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temp file in '{}'", dir.display()))?;
    temp.write_all(payload)
        .and_then(|()| temp.as_file().sync_all())
        .with_context(|| format!("Failed to write '{}'", temp.path().display()))?;
    temp.persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace '{}'", target.display()))?;
    Ok(())
}

#[async_trait]
impl LedgerRepository for JsonFileRepository {
    async fn load(&self) -> Result<LedgerDocument, RepositoryError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LedgerDocument::default());
            }
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "Failed to read '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&raw).map_err(|e| {
            RepositoryError::Serialization(format!(
                "Failed to parse '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(
        &self,
        document: &LedgerDocument,
    ) -> Result<(), RepositoryError> {
        self.write_document(document)
            .await
            .map_err(|e| RepositoryError::Storage(format!("{e:#}")))
    }
}
