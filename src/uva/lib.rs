pub mod cache;
pub(crate) mod config;
pub mod encoding;
pub mod error;
pub mod judge;
pub mod skeleton;
pub mod submitter;
pub mod tester;
pub mod types;
