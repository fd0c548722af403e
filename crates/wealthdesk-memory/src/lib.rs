//! In-memory [`Storage`](wealthdesk_core::Storage) backend with simulated
//! persistence latency. The default backend for local runs and tests.

mod adapter;

pub use adapter::MemoryStorage;
