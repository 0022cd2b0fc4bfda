/// Command-line parsing and command dispatch
pub mod cli;
/// Default paths, part names and display settings
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// PNG loading and saving with path-aware errors
pub mod image;
/// Per-stage progress display
pub mod progress;
