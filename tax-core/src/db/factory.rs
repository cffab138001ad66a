use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use super::repository::{LedgerRepository, RepositoryError};

/// Backend-agnostic storage configuration.
///
/// `backend` must match the [`RepositoryFactory::backend_name`] of a
/// registered factory. `location` is passed through to that factory
/// unchanged; its meaning is backend-specific.
///
/// | backend  | location examples                   |
/// |----------|-------------------------------------|
/// | `json`   | `data/finance.json`                 |
/// | `memory` | ignored                             |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"json"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub location: String,
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self {
            backend: "memory".to_string(),
            location: String::new(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "json".to_string(),
            location: "data/finance.json".to_string(),
        }
    }
}

/// One implementation per storage backend, registered with a
/// [`RepositoryRegistry`] at startup.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the store and return a ready-to-use repository.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn LedgerRepository>, RepositoryError>;
}

/// Registry of [`RepositoryFactory`] instances, keyed by backend name.
pub struct RepositoryRegistry {
    factories: HashMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn RepositoryFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`RepositoryError::Configuration`] if no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn LedgerRepository>, RepositoryError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                RepositoryError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for RepositoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::{LedgerRepository, RepositoryError, RepositoryFactory, RepositoryRegistry, StoreConfig};
    use crate::db::MemoryRepository;

    // ── stub factory ─────────────────────────────────────────────────────
    /// Flips an `AtomicBool` when `create` runs so tests can prove the
    /// registry dispatched to it.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl RepositoryFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &StoreConfig,
        ) -> Result<Box<dyn LedgerRepository>, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(MemoryRepository::new()))
        }
    }

    struct FailingFactory;

    #[async_trait]
    impl RepositoryFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        async fn create(
            &self,
            _config: &StoreConfig,
        ) -> Result<Box<dyn LedgerRepository>, RepositoryError> {
            Err(RepositoryError::Storage("intentional failure".to_string()))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn RepositoryFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    fn config(backend: &str) -> StoreConfig {
        StoreConfig {
            backend: backend.to_string(),
            location: "x".to_string(),
        }
    }

    // ── StoreConfig ──────────────────────────────────────────────────────
    #[test]
    fn store_config_default_is_json_file() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.backend, "json");
        assert_eq!(cfg.location, "data/finance.json");
    }

    // ── registration ─────────────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(RepositoryRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = RepositoryRegistry::new();
        let (f1, _) = stub_factory("memory");
        let (f2, _) = stub_factory("json");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["json", "memory"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = RepositoryRegistry::new();
        let (old, _) = stub_factory("json");
        let (new, _) = stub_factory("json");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["json"]);
    }

    // ── dispatch ─────────────────────────────────────────────────────────
    #[tokio::test]
    async fn create_calls_matching_factory_only() {
        let mut reg = RepositoryRegistry::new();
        let (json, json_called) = stub_factory("json");
        let (memory, memory_called) = stub_factory("memory");
        reg.register(json);
        reg.register(memory);

        let result = reg.create(&config("json")).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err().map(|e| e.to_string()));
        assert!(json_called.load(Ordering::SeqCst));
        assert!(!memory_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn configuration_error_names_requested_and_available_backends() {
        let mut reg = RepositoryRegistry::new();
        let (f, _) = stub_factory("json");
        reg.register(f);

        match reg.create(&config("postgres")).await {
            Err(RepositoryError::Configuration(msg)) => {
                assert!(msg.contains("postgres"), "error should name the requested backend");
                assert!(msg.contains("json"), "error should list available backends");
            }
            Err(other) => panic!("expected Configuration error, got {other:#?}"),
            Ok(_) => panic!("expected Configuration error, got a repository"),
        }
    }

    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut reg = RepositoryRegistry::new();
        reg.register(Box::new(FailingFactory));

        let err = reg.create(&config("failing")).await.err();

        assert_eq!(
            err,
            Some(RepositoryError::Storage("intentional failure".to_string()))
        );
    }
}
