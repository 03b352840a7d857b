//! Input/output plumbing around the per-frame transform

/// Command-line parsing and the frame batch driver
pub mod cli;
/// Fixed constants and command-line defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG decoding and export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Frame progress display
pub mod progress;
/// Output resolution parsing
pub mod resolution;
/// Sequential frame file naming
pub mod sequence;
