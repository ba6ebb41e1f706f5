pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tables;

mod file_store;
mod memory;
pub use file_store::FileStore;
pub use memory::MemoryStore;

pub use config::AppConfig;
pub use error::{StoreError, StoreResult};
pub use models::{Directory, Entity, EntityId, Message};
pub use service::{CrudService, Directories, DirectoryService, MessageService, Messages};
pub use tables::{TableStore, Tables};
