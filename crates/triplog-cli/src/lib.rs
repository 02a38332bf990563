//! Trip log reporter CLI library.
//!
//! This crate provides the command-line interface around
//! `triplog-core`: argument parsing, configuration, file reading, and
//! error-to-exit-code mapping.

mod cli;
pub mod commands;
mod config;
pub mod error;

pub use cli::Cli;
pub use config::Config;
