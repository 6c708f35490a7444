//! Repeat-rule expansion for recurring events.
//!
//! A repeat rule is rendered to an iCalendar RRULE and enumerated with the
//! `rrule` crate. The RFC 5545 stepping gives the calendar semantics we
//! want for free: daily/weekly rules step by a fixed number of days,
//! monthly rules preserve the day-of-month and skip months that are too
//! short (Jan 31 recurs on Mar 31, never Feb 28), and yearly rules from
//! Feb 29 only land on leap years.

use chrono::{Duration, NaiveDate};
use rrule::RRuleSet;

use crate::error::{PlanError, PlanResult};
use crate::event::{RepeatKind, RepeatRule};

/// Horizon used when a rule has no end date, so expansion stays finite.
pub const FALLBACK_HORIZON_DAYS: i64 = 730;

/// Hard cap on generated occurrences, guarding against runaway rules.
pub const MAX_OCCURRENCES: u16 = 1000;

/// Render the rule as an RRULE block for the `rrule` parser.
///
/// Dates carry no time zone, so DTSTART/UNTIL are pinned to midnight UTC
/// (end of day for UNTIL, keeping the end date itself inclusive).
fn build_rrule_string(base: NaiveDate, rule: &RepeatRule, until: NaiveDate) -> String {
    let freq = match rule.kind {
        RepeatKind::Daily => "DAILY",
        RepeatKind::Weekly => "WEEKLY",
        RepeatKind::Monthly => "MONTHLY",
        RepeatKind::Yearly => "YEARLY",
        RepeatKind::None => unreachable!("non-recurring rules are not rendered"),
    };

    format!(
        "DTSTART:{}T000000Z\nRRULE:FREQ={};INTERVAL={};UNTIL={}T235959Z",
        base.format("%Y%m%d"),
        freq,
        rule.interval,
        until.format("%Y%m%d"),
    )
}

/// Expand a repeat rule into the concrete dates an event occurs on.
///
/// The sequence starts at `base`, is strictly increasing and duplicate-free,
/// and never goes past the rule's end date (or the fallback horizon when no
/// end date is given). Non-recurring rules yield just the base date.
pub fn expand_dates(base: NaiveDate, rule: &RepeatRule) -> PlanResult<Vec<NaiveDate>> {
    if !rule.is_recurring() {
        return Ok(vec![base]);
    }

    let until = rule
        .end_date
        .unwrap_or_else(|| base + Duration::days(FALLBACK_HORIZON_DAYS));

    let rrule_str = build_rrule_string(base, rule, until);

    let rrule_set: RRuleSet = rrule_str
        .parse()
        .map_err(|e| PlanError::Recurrence(format!("failed to parse repeat rule: {e}")))?;

    let result = rrule_set.all(MAX_OCCURRENCES);

    Ok(result.dates.iter().map(|dt| dt.date_naive()).collect())
}
