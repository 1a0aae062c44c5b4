pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod export;
pub mod messages;
pub mod period;
pub mod render;
pub mod session;
pub mod view;
