//! Core logic for summing time expressions.
//!
//! This crate contains:
//! - Token grammars: clock ranges, clock times and decimal hours
//! - The running total and its `HH:MM` rendering

mod digits;
mod error;
pub mod token;
mod total;

pub use error::BadToken;
pub use token::{ClockTime, TimeExpr};
pub use total::{Total, sum};
