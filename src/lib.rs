//! Mölkky Master (workspace facade crate).
//!
//! Re-exports the member crates as `molkky_master::{core,input,report,term,types}`
//! and carries the host-side plumbing shared by both binaries.

pub mod app;
pub mod config;
pub mod logging;

pub use molkky_core as core;
pub use molkky_input as input;
pub use molkky_report as report;
pub use molkky_term as term;
pub use molkky_types as types;
