//! Caption Data Models
//!
//! Defines the caption entry and the append-only track that stores it.

use serde::{Deserialize, Serialize};

use crate::core::{CaptionId, CoreError, CoreResult, TimeSec};

// =============================================================================
// Caption Entry
// =============================================================================

/// A single user-authored caption with whole-second timing.
///
/// Invariant: `start_sec < end_sec`, enforced at construction. Violating
/// input is rejected and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionEntry {
    /// Unique identifier
    pub id: CaptionId,
    /// Caption text (non-blank)
    pub text: String,
    /// Start time in whole seconds
    pub start_sec: u32,
    /// End time in whole seconds (exclusive of nothing — both bounds shown)
    pub end_sec: u32,
}

impl CaptionEntry {
    /// Creates a validated caption entry with an auto-generated ID.
    pub fn new(text: &str, start_sec: u32, end_sec: u32) -> CoreResult<Self> {
        Self::with_id(&ulid::Ulid::new().to_string(), text, start_sec, end_sec)
    }

    /// Creates a validated caption entry with the given ID.
    pub fn with_id(id: &str, text: &str, start_sec: u32, end_sec: u32) -> CoreResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::MissingInput("caption text"));
        }
        if start_sec >= end_sec {
            return Err(CoreError::InvalidInterval(start_sec, end_sec));
        }

        Ok(Self {
            id: id.to_string(),
            text: text.to_string(),
            start_sec,
            end_sec,
        })
    }

    /// Returns the duration of this caption in seconds.
    pub fn duration(&self) -> u32 {
        self.end_sec - self.start_sec
    }

    /// Returns true if the caption is shown at the given playback position.
    ///
    /// Both bounds are inclusive: a caption spanning 10~20 is active at
    /// exactly 10.0 and exactly 20.0.
    pub fn contains(&self, position_sec: TimeSec) -> bool {
        position_sec >= self.start_sec as TimeSec && position_sec <= self.end_sec as TimeSec
    }

    /// Returns true if this caption's interval overlaps another's.
    pub fn overlaps(&self, other: &CaptionEntry) -> bool {
        self.start_sec <= other.end_sec && self.end_sec >= other.start_sec
    }
}

// =============================================================================
// Caption Track
// =============================================================================

/// An append-only, insertion-ordered collection of caption entries.
///
/// Entries are not required to be mutually non-overlapping or sorted by
/// time; [`CaptionTrack::active_caption_at`] resolves overlap ambiguity
/// deterministically by returning the earliest-inserted match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Entries in submission order
    pub entries: Vec<CaptionEntry>,
}

impl CaptionTrack {
    /// Creates an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, preserving submission order.
    pub fn push(&mut self, entry: CaptionEntry) {
        self.entries.push(entry);
    }

    /// Gets an entry by ID.
    pub fn get(&self, caption_id: &str) -> Option<&CaptionEntry> {
        self.entries.iter().find(|e| e.id == caption_id)
    }

    /// Returns the caption active at the given playback position.
    ///
    /// Scans in insertion order and returns the first entry whose interval
    /// contains the position (inclusive on both bounds), or `None` when no
    /// entry matches. O(N) per query; the expected track size is tens to low
    /// hundreds of entries.
    pub fn active_caption_at(&self, position_sec: TimeSec) -> Option<&CaptionEntry> {
        self.entries.iter().find(|e| e.contains(position_sec))
    }

    /// Returns the earliest-inserted entry overlapping the candidate, if any.
    ///
    /// Used by the opt-in overlap rejection policy.
    pub fn find_overlap(&self, candidate: &CaptionEntry) -> Option<&CaptionEntry> {
        self.entries.iter().find(|e| e.overlaps(candidate))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the track has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Caption Entry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn entry_creation() {
        let entry = CaptionEntry::with_id("cap1", "Hello World", 5, 10).unwrap();
        assert_eq!(entry.id, "cap1");
        assert_eq!(entry.text, "Hello World");
        assert_eq!(entry.start_sec, 5);
        assert_eq!(entry.end_sec, 10);
        assert_eq!(entry.duration(), 5);
    }

    #[test]
    fn entry_rejects_blank_text() {
        let err = CaptionEntry::new("", 0, 10).unwrap_err();
        assert!(matches!(err, CoreError::MissingInput("caption text")));

        let err = CaptionEntry::new("   ", 0, 10).unwrap_err();
        assert!(matches!(err, CoreError::MissingInput("caption text")));
    }

    #[test]
    fn entry_rejects_inverted_interval() {
        let err = CaptionEntry::new("x", 10, 5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInterval(10, 5)));
    }

    #[test]
    fn entry_rejects_zero_length_interval() {
        let err = CaptionEntry::new("x", 10, 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInterval(10, 10)));
    }

    #[test]
    fn entry_trims_surrounding_whitespace() {
        let entry = CaptionEntry::new("  Hello  ", 0, 1).unwrap();
        assert_eq!(entry.text, "Hello");
    }

    #[test]
    fn entry_contains_is_inclusive_on_both_bounds() {
        let entry = CaptionEntry::new("x", 10, 20).unwrap();

        assert!(!entry.contains(9.0));
        assert!(!entry.contains(9.999));
        assert!(entry.contains(10.0));
        assert!(entry.contains(15.5));
        assert!(entry.contains(20.0));
        assert!(!entry.contains(20.001));
        assert!(!entry.contains(21.0));
    }

    #[test]
    fn entry_overlap() {
        let a = CaptionEntry::new("A", 0, 100).unwrap();
        let b = CaptionEntry::new("B", 50, 150).unwrap();
        let c = CaptionEntry::new("C", 101, 200).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        // Shared boundary counts as overlap: both are shown at that second.
        let d = CaptionEntry::new("D", 100, 110).unwrap();
        assert!(a.overlaps(&d));
    }

    // -------------------------------------------------------------------------
    // Caption Track Tests
    // -------------------------------------------------------------------------

    #[test]
    fn track_starts_empty() {
        let track = CaptionTrack::new();
        assert!(track.is_empty());
        assert_eq!(track.len(), 0);
        assert!(track.active_caption_at(0.0).is_none());
    }

    #[test]
    fn track_preserves_insertion_order() {
        let mut track = CaptionTrack::new();
        track.push(CaptionEntry::new("Second by time", 50, 60).unwrap());
        track.push(CaptionEntry::new("First by time", 0, 10).unwrap());

        // No sorting: submission order is the storage order.
        assert_eq!(track.entries[0].text, "Second by time");
        assert_eq!(track.entries[1].text, "First by time");
    }

    #[test]
    fn track_lookup_inclusivity() {
        let mut track = CaptionTrack::new();
        track.push(CaptionEntry::new("only", 10, 20).unwrap());

        assert_eq!(track.active_caption_at(10.0).unwrap().text, "only");
        assert_eq!(track.active_caption_at(20.0).unwrap().text, "only");
        assert!(track.active_caption_at(9.0).is_none());
        assert!(track.active_caption_at(21.0).is_none());
    }

    #[test]
    fn track_overlap_tie_break_prefers_earliest_inserted() {
        let mut track = CaptionTrack::new();
        track.push(CaptionEntry::new("A", 0, 100).unwrap());
        track.push(CaptionEntry::new("B", 50, 150).unwrap());

        assert_eq!(track.active_caption_at(75.0).unwrap().text, "A");
        // Outside A, B still wins.
        assert_eq!(track.active_caption_at(120.0).unwrap().text, "B");
    }

    #[test]
    fn track_get_by_id() {
        let mut track = CaptionTrack::new();
        let entry = CaptionEntry::new("findable", 0, 5).unwrap();
        let id = entry.id.clone();
        track.push(entry);

        assert_eq!(track.get(&id).unwrap().text, "findable");
        assert!(track.get("nonexistent").is_none());
    }

    #[test]
    fn track_find_overlap() {
        let mut track = CaptionTrack::new();
        track.push(CaptionEntry::new("A", 0, 10).unwrap());
        track.push(CaptionEntry::new("B", 20, 30).unwrap());

        let overlapping = CaptionEntry::new("X", 25, 40).unwrap();
        assert_eq!(track.find_overlap(&overlapping).unwrap().text, "B");

        let disjoint = CaptionEntry::new("Y", 12, 18).unwrap();
        assert!(track.find_overlap(&disjoint).is_none());
    }

    #[test]
    fn entry_serialization() {
        let entry = CaptionEntry::with_id("cap1", "Hello", 1, 4).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("startSec"));

        let parsed: CaptionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
