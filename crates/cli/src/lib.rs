//! icons-dump CLI library.

pub mod cli;
pub mod config;
