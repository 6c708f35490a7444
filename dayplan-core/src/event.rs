//! Calendar event types.
//!
//! `Event` is the persisted record; `EventDraft` is what forms submit before
//! the backend has assigned an id. Recurring events are materialized as
//! independent sibling records that share a `series_id`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};

/// A calendar event occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Local calendar date (no time zone).
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub category: Category,
    pub repeat: RepeatRule,
    /// Lead minutes before `start_time` at which to notify. 0 = no notification.
    pub notification_minutes: i64,
    /// Identity shared by every occurrence materialized from one repeat rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

impl Event {
    /// The occurrence's start as a local date-time.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn is_recurring(&self) -> bool {
        self.repeat.is_recurring()
    }
}

/// Event data as submitted by a form, before the backend assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub repeat: RepeatRule,
    #[serde(default)]
    pub notification_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

impl EventDraft {
    pub fn is_recurring(&self) -> bool {
        self.repeat.is_recurring()
    }

    /// Validate form-level invariants before anything touches the network.
    pub fn validate(&self) -> PlanResult<()> {
        if self.title.trim().is_empty() {
            return Err(PlanError::Validation("title must not be empty".into()));
        }
        if self.start_time >= self.end_time {
            return Err(PlanError::Validation(
                "start time must be before end time".into(),
            ));
        }
        if self.notification_minutes < 0 {
            return Err(PlanError::Validation(
                "notification lead time must not be negative".into(),
            ));
        }
        match self.repeat.kind {
            RepeatKind::None => {
                if self.repeat.interval != 0 {
                    return Err(PlanError::Validation(
                        "non-repeating events must have interval 0".into(),
                    ));
                }
            }
            _ => {
                if self.repeat.interval < 1 {
                    return Err(PlanError::Validation(
                        "repeat interval must be at least 1".into(),
                    ));
                }
                if let Some(end) = self.repeat.end_date
                    && end < self.date
                {
                    return Err(PlanError::Validation(
                        "repeat end date must not be before the event date".into(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Promote the draft to a full record with a backend-assigned id.
    pub fn into_event(self, id: Uuid) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            category: self.category,
            repeat: self.repeat,
            notification_minutes: self.notification_minutes,
            series_id: self.series_id,
        }
    }
}

/// Fixed category set from the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Family,
    #[default]
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Family => "family",
            Category::Other => "other",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "family" => Ok(Category::Family),
            "other" => Ok(Category::Other),
            _ => Err(format!(
                "unknown category '{s}' (expected work, personal, family or other)"
            )),
        }
    }
}

/// How (and how long) an event repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub kind: RepeatKind,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RepeatRule {
    /// A rule that never repeats.
    pub fn none() -> Self {
        RepeatRule {
            kind: RepeatKind::None,
            interval: 0,
            end_date: None,
        }
    }

    pub fn new(kind: RepeatKind, interval: u32, end_date: Option<NaiveDate>) -> Self {
        RepeatRule {
            kind,
            interval,
            end_date,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.kind != RepeatKind::None && self.interval >= 1
    }
}

impl Default for RepeatRule {
    fn default() -> Self {
        RepeatRule::none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatKind {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::str::FromStr for RepeatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RepeatKind::None),
            "daily" => Ok(RepeatKind::Daily),
            "weekly" => Ok(RepeatKind::Weekly),
            "monthly" => Ok(RepeatKind::Monthly),
            "yearly" => Ok(RepeatKind::Yearly),
            _ => Err(format!(
                "unknown repeat type '{s}' (expected daily, weekly, monthly or yearly)"
            )),
        }
    }
}

/// Field-level update applied to one occurrence or a whole series.
///
/// Repeat rules are intentionally absent: edits never re-rule an event.
/// Editing a single occurrence of a series detaches it instead (the
/// repository clears `repeat` and `series_id`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_minutes: Option<i64>,
}

impl EventPatch {
    /// A patch that only moves the event to a new date.
    pub fn move_to(date: NaiveDate) -> Self {
        EventPatch {
            date: Some(date),
            ..EventPatch::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }

    /// Apply every set field to `event`.
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start) = self.start_time {
            event.start_time = start;
        }
        if let Some(end) = self.end_time {
            event.end_time = end;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(minutes) = self.notification_minutes {
            event.notification_minutes = minutes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            title: "Team standup".to_string(),
            description: String::new(),
            location: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            category: Category::Work,
            repeat: RepeatRule::none(),
            notification_minutes: 10,
            series_id: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(d.validate(), Err(PlanError::Validation(_))));
    }

    #[test]
    fn equal_times_rejected() {
        let mut d = draft();
        d.end_time = d.start_time;
        assert!(d.validate().is_err());
    }

    #[test]
    fn reversed_times_rejected() {
        let mut d = draft();
        d.start_time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        d.end_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(d.validate().is_err());
    }

    #[test]
    fn repeating_draft_needs_interval() {
        let mut d = draft();
        d.repeat = RepeatRule::new(RepeatKind::Daily, 0, None);
        assert!(d.validate().is_err());

        d.repeat = RepeatRule::new(RepeatKind::Daily, 1, None);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn repeat_end_before_date_rejected() {
        let mut d = draft();
        d.repeat = RepeatRule::new(
            RepeatKind::Daily,
            1,
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
        );
        assert!(d.validate().is_err());
    }

    #[test]
    fn none_rule_with_interval_rejected() {
        let mut d = draft();
        d.repeat = RepeatRule {
            kind: RepeatKind::None,
            interval: 2,
            end_date: None,
        };
        assert!(d.validate().is_err());
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut event = draft().into_event(Uuid::new_v4());
        let patch = EventPatch {
            title: Some("Renamed".to_string()),
            date: Some(NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()),
            ..EventPatch::default()
        };
        patch.apply_to(&mut event);

        assert_eq!(event.title, "Renamed");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 3, 21).unwrap());
        assert_eq!(event.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(event.category, Category::Work);
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = draft().into_event(Uuid::new_v4());
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn repeat_rule_wire_format_uses_type_tag() {
        let rule = RepeatRule::new(RepeatKind::Weekly, 2, None);
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"type\":\"weekly\""));
        assert!(json.contains("\"interval\":2"));
    }
}
