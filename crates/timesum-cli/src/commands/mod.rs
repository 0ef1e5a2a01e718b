//! CLI command implementations.

pub mod sum;
