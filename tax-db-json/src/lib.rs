//! JSON-file storage backend for the net income ledger.

pub mod factory;
pub mod repository;

pub use factory::JsonRepositoryFactory;
pub use repository::JsonFileRepository;
