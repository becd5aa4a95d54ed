//! Videocue Core Engine
//!
//! Core widget module.
//! Holds the caption track, the session state container, the timecode codec,
//! and the playback bridge abstraction.

pub mod captions;
pub mod playback;
pub mod session;
pub mod settings;
pub mod timecode;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;

#[cfg(test)]
mod tests_scenarios;
