use chrono::{DateTime, TimeDelta, Utc};

use super::response::ForecastEntry;
use crate::error::AppError;

/// Finds the entry whose timestamp is closest to `reference`.
///
/// Entries are scanned in order and a later entry only wins with a strictly
/// smaller distance, so ties go to the earliest one. Every timestamp must be
/// valid RFC 3339.
pub fn select_nearest<'a>(
    entries: &'a [ForecastEntry],
    reference: DateTime<Utc>,
) -> Result<&'a ForecastEntry, AppError> {
    let mut nearest: Option<(&ForecastEntry, TimeDelta)> = None;

    for entry in entries {
        let distance = (parse_time(&entry.time)? - reference).abs();
        match nearest {
            Some((_, best)) if best <= distance => {}
            _ => nearest = Some((entry, distance)),
        }
    }

    nearest.map(|(entry, _)| entry).ok_or(AppError::EmptyForecast)
}

fn parse_time(timestamp: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| AppError::TimeParse {
            timestamp: timestamp.to_string(),
            source,
        })
}
