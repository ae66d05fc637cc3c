// Global state management
// Stores provide shared state across the application

pub mod auth_store;
pub mod notifications;
pub mod payment;
pub mod query_cache;
