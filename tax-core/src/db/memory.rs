use async_trait::async_trait;
use tokio::sync::RwLock;

use super::factory::{RepositoryFactory, StoreConfig};
use super::repository::{LedgerRepository, RepositoryError};
use crate::models::LedgerDocument;

/// Process-local ledger storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    document: RwLock<LedgerDocument>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing document, e.g. a test fixture.
    pub fn with_document(document: LedgerDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl LedgerRepository for MemoryRepository {
    async fn load(&self) -> Result<LedgerDocument, RepositoryError> {
        Ok(self.document.read().await.clone())
    }

    async fn save(
        &self,
        document: &LedgerDocument,
    ) -> Result<(), RepositoryError> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}

/// [`RepositoryFactory`] for the `"memory"` backend. The store location
/// is ignored.
pub struct MemoryRepositoryFactory;

#[async_trait]
impl RepositoryFactory for MemoryRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(
        &self,
        _config: &StoreConfig,
    ) -> Result<Box<dyn LedgerRepository>, RepositoryError> {
        Ok(Box::new(MemoryRepository::new()))
    }
}
