//! NovaOps CLI library.
//!
//! Command-line interface, environment configuration and the interactive
//! REPL for the NovaOps command center.

pub mod cli;
pub mod commands;
pub mod config;
pub mod repl;
