use async_trait::async_trait;
use thiserror::Error;

use crate::models::LedgerDocument;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Whole-document storage for the net income ledger.
///
/// Callers load the document, mutate it in memory and save it back. Nothing
/// arbitrates between concurrent writers: the last `save` wins.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Returns the stored document, or an empty one if nothing is stored yet.
    async fn load(&self) -> Result<LedgerDocument, RepositoryError>;

    /// Replaces the stored document.
    async fn save(
        &self,
        document: &LedgerDocument,
    ) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<T: LedgerRepository + ?Sized> LedgerRepository for Box<T> {
    async fn load(&self) -> Result<LedgerDocument, RepositoryError> {
        (**self).load().await
    }

    async fn save(
        &self,
        document: &LedgerDocument,
    ) -> Result<(), RepositoryError> {
        (**self).save(document).await
    }
}
