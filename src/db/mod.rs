pub mod db;
pub mod employees;
pub mod managers;
pub mod time_entries;
