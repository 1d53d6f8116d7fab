pub mod config;
pub mod db;
pub mod export;
pub mod ingest;
pub mod init;
pub mod list;
pub mod log;
