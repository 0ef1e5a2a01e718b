//! timesum CLI library.
//!
//! This crate provides the command-line interface for summing time expressions.

mod cli;
pub mod commands;

pub use cli::{Cli, route_tokens};
