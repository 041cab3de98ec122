//! Key-value storage backends.

mod atomic_io;
mod file_store;
mod memory_store;

pub use file_store::{DOCUMENT_NAME, FileKeyValueStore};
pub use memory_store::MemoryKeyValueStore;
