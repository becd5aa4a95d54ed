//! Widget Settings
//!
//! In-memory widget configuration with schema defaults and tolerant
//! normalization. Nothing here is persisted — the widget owns no files and
//! its state is discarded on teardown; a host that wants durable settings
//! stores them itself and hands them back at session creation.

use serde::{Deserialize, Serialize};
use specta::Type;

/// Settings schema version
pub const SETTINGS_VERSION: u32 = 1;

/// Widget settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Type)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Caption authoring behavior
    #[serde(default)]
    pub behavior: BehaviorSettings,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            behavior: BehaviorSettings::default(),
        }
    }
}

impl WidgetSettings {
    /// Normalizes settings so host-supplied state is always valid.
    ///
    /// Intentionally tolerant: corrects bad values instead of failing, so a
    /// stale host config never bricks the widget.
    pub fn normalize(&mut self) {
        self.version = SETTINGS_VERSION;
    }
}

/// Caption authoring behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Type)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSettings {
    /// How overlapping caption intervals are handled at submission time
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,

    /// Whether the pending caption form is cleared after a successful add
    #[serde(default = "default_true")]
    pub clear_draft_on_add: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::default(),
            clear_draft_on_add: true,
        }
    }
}

/// Overlap handling policy for caption submission.
///
/// `Allow` preserves the widget's historical behavior: overlapping entries
/// are stored without warning and the active-caption query prefers the
/// earliest-inserted match. `Reject` refuses overlapping submissions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Type)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    #[default]
    Allow,
    Reject,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = WidgetSettings::default();
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.behavior.overlap_policy, OverlapPolicy::Allow);
        assert!(settings.behavior.clear_draft_on_add);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: WidgetSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, WidgetSettings::default());

        let settings: WidgetSettings =
            serde_json::from_str(r#"{"behavior":{"overlapPolicy":"reject"}}"#).unwrap();
        assert_eq!(settings.behavior.overlap_policy, OverlapPolicy::Reject);
        assert!(settings.behavior.clear_draft_on_add);
    }

    #[test]
    fn normalize_resets_version() {
        let mut settings = WidgetSettings::default();
        settings.version = 999;
        settings.normalize();
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn overlap_policy_serialization() {
        let json = serde_json::to_string(&OverlapPolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
    }
}
