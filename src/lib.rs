//! Interactive lab for the longest increasing subsequence problem: a
//! quadratic dynamic-programming solver, an O(n log n) patience-sorting
//! solver, and the parsing, history, and timing layers the driver uses to
//! race them.

pub mod bench;
pub mod chart;
pub mod error;
pub mod history;
pub mod input;
pub mod lis;

pub use error::{Error, Result};
pub use lis::{lis_dp, lis_dp_length, lis_patience, lis_patience_length};
