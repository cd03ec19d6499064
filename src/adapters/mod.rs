// Adapters layer: concrete implementations for the broker HTTP API and local storage.

pub mod http;
pub mod storage;

pub use http::AccountzClient;
pub use storage::LocalStorage;
