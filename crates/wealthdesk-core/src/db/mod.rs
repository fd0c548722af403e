pub mod keys;
pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{Storage, StorageError};
