//! Pure date predicates backing the date filter
//!
//! Each predicate has an `*_at` form taking an explicit "now" so the
//! calendar math stays deterministic under test; the plain forms read the
//! local wall clock.
//!
//! Weeks run Monday through Sunday. Range containment floors the candidate
//! date and the lower bound to start of day and ceils only the upper bound
//! to 23:59:59.999; the asymmetry is deliberate and boundary days stay
//! inclusive on both ends.

use chrono::{Datelike, Duration, Local, NaiveDateTime};

use super::DateRange;
use crate::utils::datetime::{end_of_day, start_of_day};

/// True iff `date` falls on today's local calendar day
#[must_use]
pub fn is_today(date: NaiveDateTime) -> bool {
    is_today_at(date, Local::now().naive_local())
}

/// `is_today` against an explicit clock
#[must_use]
pub fn is_today_at(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date.date() == now.date()
}

/// True iff `date` falls within the Monday–Sunday week containing now
#[must_use]
pub fn is_this_week(date: NaiveDateTime) -> bool {
    is_this_week_at(date, Local::now().naive_local())
}

/// `is_this_week` against an explicit clock
#[must_use]
pub fn is_this_week_at(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    let (start_of_week, end_of_week) = week_bounds(now);
    date >= start_of_week && date <= end_of_week
}

/// True iff `date`'s calendar day falls within `range`, inclusive
///
/// Returns false whenever either bound is unset: an incomplete range
/// never matches.
#[must_use]
pub fn is_in_date_range(date: NaiveDateTime, range: &DateRange) -> bool {
    let (Some(from), Some(to)) = (range.from, range.to) else {
        return false;
    };

    let target = start_of_day(date.date());
    let from = start_of_day(from.date());
    let to = end_of_day(to.date());

    target >= from && target <= to
}

/// The bounds `is_today` checks against, for pre-filling the range editor
#[must_use]
pub fn date_range_for_today() -> DateRange {
    date_range_for_today_at(Local::now().naive_local())
}

/// `date_range_for_today` against an explicit clock
#[must_use]
pub fn date_range_for_today_at(now: NaiveDateTime) -> DateRange {
    DateRange {
        from: Some(start_of_day(now.date())),
        to: Some(end_of_day(now.date())),
    }
}

/// The bounds `is_this_week` checks against
#[must_use]
pub fn date_range_for_this_week() -> DateRange {
    date_range_for_this_week_at(Local::now().naive_local())
}

/// `date_range_for_this_week` against an explicit clock
#[must_use]
pub fn date_range_for_this_week_at(now: NaiveDateTime) -> DateRange {
    let (start_of_week, end_of_week) = week_bounds(now);
    DateRange {
        from: Some(start_of_week),
        to: Some(end_of_week),
    }
}

/// Monday 00:00:00.000 through Sunday 23:59:59.999 of the week holding `now`
fn week_bounds(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let days_since_monday = i64::from(now.date().weekday().num_days_from_monday());
    let monday = now.date() - Duration::days(days_since_monday);
    (start_of_day(monday), end_of_day(monday + Duration::days(6)))
}
