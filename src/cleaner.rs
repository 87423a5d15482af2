use crate::models::{ReviewRecord, ReviewSeries};
use chrono::Datelike;
use tracing::info;

/// A day whose recorded count is known to be wrong.
struct CountOverride {
    year: i32,
    month: u32,
    day: u32,
    /// Counts above this are replaced; anything at or below is trusted.
    threshold: u64,
    corrected: u64,
}

const KNOWN_ANOMALIES: &[CountOverride] = &[CountOverride {
    year: 2024,
    month: 10,
    day: 17,
    threshold: 1000,
    corrected: 196,
}];

pub fn clean(series: ReviewSeries) -> ReviewSeries {
    series.into_iter().map(clean_record).collect()
}

fn clean_record(record: ReviewRecord) -> ReviewRecord {
    let date = record.date();
    let fix = KNOWN_ANOMALIES.iter().find(|fix| {
        fix.year == date.year() && fix.month == date.month() && fix.day == date.day()
    });

    match fix {
        Some(fix) if record.count() > fix.threshold => {
            info!(
                "fixing data for {date}: changing {} to {}",
                record.count(),
                fix.corrected
            );
            ReviewRecord(date, fix.corrected)
        }
        _ => record,
    }
}
