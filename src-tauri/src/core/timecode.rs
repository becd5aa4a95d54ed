//! Timecode Codec
//!
//! Lossless conversion between `"HH:MM:SS"` strings and whole-second counts,
//! used for caption input parsing and list display.
//!
//! Parsing is strict about shape (exactly three base-10 fields) but tolerant
//! about field ranges: `"00:99:00"` is accepted as 5940 seconds, matching the
//! plain positional arithmetic the widget has always used. The round-trip law
//! `parse(format(s)) == s` holds for every `s` in `[0, 359999]`.

use crate::core::{CoreError, CoreResult};

/// Parses an `"HH:MM:SS"` timecode into total seconds.
///
/// Rejects wrong field counts, empty or non-numeric components, and values
/// that overflow `u32` with [`CoreError::MalformedTimecode`].
pub fn parse_timecode(timecode: &str) -> CoreResult<u32> {
    let trimmed = timecode.trim();
    let malformed = || CoreError::MalformedTimecode(timecode.to_string());

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let mut fields = [0u32; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *slot = part.parse::<u32>().map_err(|_| malformed())?;
    }

    let [hours, minutes, seconds] = fields;
    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(malformed)
}

/// Formats total seconds as an `"HH:MM:SS"` timecode.
///
/// Each field is zero-padded to two digits; the hours field widens naturally
/// past 99 hours.
pub fn format_timecode(total_sec: u32) -> String {
    let hours = total_sec / 3600;
    let minutes = (total_sec % 3600) / 60;
    let seconds = total_sec % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

// =============================================================================
// Tests
// =============================================================================
