//! RFC repository tools.
//!
//! Finds RFC documents missing from the index and scaffolds new RFCs.

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod scaffold;

pub use error::Error;
