//! Videocue Error Definitions
//!
//! Defines error types used throughout the project.

use thiserror::Error;

use super::{CaptionId, TimeSec};

/// Core widget error types
///
/// Every variant is a user-facing rejection; none is fatal to the widget.
/// There is no retry logic — the only recovery path is resubmission.
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Caption Input Errors
    // =========================================================================
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("Start time must be less than end time: {0}~{1} seconds")]
    InvalidInterval(u32, u32),

    #[error("Malformed timecode (expected HH:MM:SS): {0}")]
    MalformedTimecode(String),

    #[error(
        "Caption overlap: {new_start}~{new_end}s conflicts with caption {existing_id}"
    )]
    CaptionOverlap {
        existing_id: CaptionId,
        new_start: u32,
        new_end: u32,
    },

    // =========================================================================
    // Playback Errors
    // =========================================================================
    #[error("Invalid playback position: {0} seconds")]
    InvalidPosition(TimeSec),

    #[error("Media source rejected: {0}")]
    SourceRejected(String),
}

/// Core widget result type
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Convert to a user-friendly error message for IPC
    pub fn to_ipc_error(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let err = CoreError::InvalidInterval(10, 5);
        assert_eq!(
            err.to_ipc_error(),
            "Start time must be less than end time: 10~5 seconds"
        );

        let err = CoreError::MissingInput("caption text");
        assert!(err.to_ipc_error().contains("caption text"));

        let err = CoreError::MalformedTimecode("1:2".to_string());
        assert!(err.to_ipc_error().contains("HH:MM:SS"));
    }
}
