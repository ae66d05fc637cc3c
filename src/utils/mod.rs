// Utility functions
// Helpers shared by stores, hooks and components

pub mod clipboard;
pub mod cookie;
pub mod data_state;
pub mod format;
pub mod time;
pub mod validation;

pub use data_state::DataState;
pub use format::{format_count, format_price, truncate_address};
pub use time::{format_relative_time, sleep_ms};
