pub mod factory;
pub mod memory;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryRegistry, StoreConfig};
pub use memory::{MemoryRepository, MemoryRepositoryFactory};
pub use repository::{LedgerRepository, RepositoryError};
