use async_trait::async_trait;

use tax_core::db::{LedgerRepository, RepositoryError, RepositoryFactory, StoreConfig};

use crate::repository::JsonFileRepository;

/// [`RepositoryFactory`] for JSON files.
///
/// Register this with a [`tax_core::db::RepositoryRegistry`] to make the
/// `"json"` backend available:
///
/// ```rust,no_run
/// use tax_core::db::RepositoryRegistry;
/// use tax_db_json::JsonRepositoryFactory;
///
/// let mut registry = RepositoryRegistry::new();
/// registry.register(Box::new(JsonRepositoryFactory));
/// ```
pub struct JsonRepositoryFactory;

#[async_trait]
impl RepositoryFactory for JsonRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "json"
    }

    /// Open the file named by `config.location`, creating it with an empty
    /// ledger if it does not exist yet.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn LedgerRepository>, RepositoryError> {
        if config.location.trim().is_empty() {
            return Err(RepositoryError::Configuration(
                "json backend needs a file location".to_string(),
            ));
        }

        let repo = JsonFileRepository::open(&config.location)
            .await
            .map_err(|e| RepositoryError::Storage(format!("{e:#}")))?;
        Ok(Box::new(repo))
    }
}
