use std::time::Duration;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::requirements::PartialRequirements;

/// How long a stored draft stays valid after its last write.
pub const DRAFT_EXPIRY: Duration = Duration::from_secs(24 * 60 * 60);

/// The single persisted snapshot of in-progress wizard data.
///
/// `step` and `current_step` always carry the same value; the stored layout
/// keeps both fields because two consumers of the serialized form read
/// different names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    pub step: u32,
    #[serde(rename = "currentStep")]
    pub current_step: u32,
    pub data: PartialRequirements,
    /// Milliseconds since epoch at the time of the write that produced this
    /// draft, not of its creation.
    pub timestamp: i64,
}

impl FormDraft {
    pub fn new(step: u32, data: PartialRequirements, now_ms: i64) -> Self {
        Self {
            step,
            current_step: step,
            data,
            timestamp: now_ms,
        }
    }

    /// Age-based expiry decision: a draft strictly older than `expiry`
    /// relative to `now_ms` is treated as absent by readers.
    pub fn is_expired(&self, now_ms: i64, expiry: Duration) -> bool {
        now_ms.saturating_sub(self.timestamp) > expiry.as_millis() as i64
    }

    /// `YYYY/MM/DD HH:MM` rendering of the write time in the local
    /// timezone. `None` when the timestamp does not map to a single local
    /// instant.
    pub fn saved_at_local(&self) -> Option<String> {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .map(|at| at.format("%Y/%m/%d %H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn step_fields_carry_the_same_value() {
        let draft = FormDraft::new(3, PartialRequirements::default(), 1_000);
        assert_eq!(draft.step, 3);
        assert_eq!(draft.current_step, 3);
    }

    #[test]
    fn stored_layout_matches_the_wire_format() {
        let data = PartialRequirements {
            project_type: Some("web".into()),
            ..Default::default()
        };
        let draft = FormDraft::new(2, data, 1_700_000_000_000);

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["step"], 2);
        assert_eq!(json["currentStep"], 2);
        assert_eq!(json["data"]["projectType"], "web");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn expiry_is_strict_on_the_boundary() {
        let draft = FormDraft::new(1, PartialRequirements::default(), 0);

        assert!(!draft.is_expired(DAY_MS, DRAFT_EXPIRY));
        assert!(!draft.is_expired(DAY_MS - 1, DRAFT_EXPIRY));
        assert!(draft.is_expired(DAY_MS + 1, DRAFT_EXPIRY));
    }

    #[test]
    fn clock_going_backwards_never_expires_a_draft() {
        let draft = FormDraft::new(1, PartialRequirements::default(), DAY_MS);
        assert!(!draft.is_expired(0, DRAFT_EXPIRY));
    }

    #[test]
    fn saved_at_uses_slash_separated_date_and_minutes() {
        let draft = FormDraft::new(1, PartialRequirements::default(), 1_700_000_000_000);
        let rendered = draft.saved_at_local().unwrap();
        // 2023/11/1x HH:MM in every timezone.
        assert!(rendered.starts_with("2023/11/1"));
        assert_eq!(rendered.len(), "2023/11/14 22:13".len());
    }
}
