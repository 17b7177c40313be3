#![forbid(unsafe_code)]

pub mod memory;
pub mod store;

pub use memory::MemoryContactStore;
pub use store::{ContactStore, StorageError};
