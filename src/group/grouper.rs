//! Partitioning of raw observation records into date-keyed sessions.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::foundation::error::{FormError, FormResult};
use crate::scene::model::ObservationRecord;

/// Maximum number of observation sessions (distinct dates) printed on one form.
pub const MAX_SESSIONS: usize = 8;

/// Time zone whose calendar days define session boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayBoundary {
    /// The system's local time zone.
    #[default]
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DayBoundary {
    /// Calendar day containing `timestamp_ms` (milliseconds since the Unix epoch).
    pub fn date_key(self, timestamp_ms: i64) -> FormResult<NaiveDate> {
        let utc = DateTime::from_timestamp_millis(timestamp_ms).ok_or_else(|| {
            FormError::render(format!("timestamp {timestamp_ms} ms is out of range"))
        })?;
        Ok(match self {
            Self::Local => utc.with_timezone(&chrono::Local).date_naive(),
            Self::Fixed(offset) => utc.with_timezone(&offset).date_naive(),
        })
    }
}

/// All records observed on one calendar date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateGroup<'a> {
    /// 1-based rank of `date` among the retained dates.
    pub session_number: usize,
    /// Calendar date shared by every record in the group.
    pub date: NaiveDate,
    /// Records in input order.
    pub records: Vec<&'a ObservationRecord>,
}

/// Group records by calendar date, ascending, keeping only the first [`MAX_SESSIONS`] dates.
///
/// Within a group, records keep their input order. Records on later dates are dropped without
/// error.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn group_records(
    records: &[ObservationRecord],
    day: DayBoundary,
) -> FormResult<Vec<DateGroup<'_>>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ObservationRecord>> = BTreeMap::new();
    for record in records {
        let date = day.date_key(record.timestamp)?;
        by_date.entry(date).or_default().push(record);
    }

    let distinct = by_date.len();
    if distinct > MAX_SESSIONS {
        tracing::warn!(
            distinct,
            kept = MAX_SESSIONS,
            "more observation dates than the form has sessions; dropping the latest"
        );
    }

    let groups: Vec<DateGroup<'_>> = by_date
        .into_iter()
        .take(MAX_SESSIONS)
        .enumerate()
        .map(|(i, (date, records))| DateGroup {
            session_number: i + 1,
            date,
            records,
        })
        .collect();

    tracing::debug!(sessions = groups.len(), "grouped records");
    Ok(groups)
}

#[cfg(test)]
#[path = "../../tests/unit/group/grouper.rs"]
mod tests;
