//! The two longest-increasing-subsequence solvers at the heart of the lab.

pub mod dp;
pub mod patience;

// Re-export both solvers with descriptive names
pub use dp::{lis_dp, lis_dp_length};
pub use patience::{lis_patience, lis_patience_length};
