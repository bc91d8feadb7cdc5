pub mod api;
pub mod balance;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;

pub use error::DivvyError;
pub use service::DivvyService;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
