pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod prompt;
pub mod workflow;
