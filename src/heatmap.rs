//! Calendar heatmap rendered as inline SVG, one block per year.
//!
//! Columns are Monday-start weeks, rows are weekdays. Only years holding at
//! least one record are drawn; within those, every day gets a cell and days
//! missing from the series count as zero. Colours come from a blue ramp
//! normalised against the busiest day.

use crate::models::ReviewRecord;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

const CELL: i64 = 12;
const GAP: i64 = 1;
const LEFT_MARGIN: i64 = 32;
const TOP_MARGIN: i64 = 18;

const COLOR_STOPS: [(f64, [u8; 3]); 4] = [
    (0.0, [220, 240, 255]),
    (0.25, [120, 180, 255]),
    (0.5, [60, 120, 255]),
    (1.0, [0, 80, 255]),
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn render_heatmap(series: &[ReviewRecord]) -> String {
    // Later records for the same day replace earlier ones.
    let days: BTreeMap<NaiveDate, u64> = series.iter().map(|r| (r.date(), r.count())).collect();
    if days.is_empty() {
        return r#"<div class="heatmap heatmap-empty">No reviews recorded yet.</div>"#.to_string();
    }

    let max = days.values().copied().max().unwrap_or(0);
    let years: BTreeSet<i32> = days.keys().map(|date| date.year()).collect();

    let mut out = String::from(r#"<div class="heatmap">"#);
    for year in years {
        out.push_str(&render_year(year, &days, max));
    }
    out.push_str("</div>");
    out
}

fn render_year(year: i32, days: &BTreeMap<NaiveDate, u64>, max: u64) -> String {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return String::new();
    };
    let origin = start - Duration::days(i64::from(start.weekday().num_days_from_monday()));
    let weeks = week_index(origin, end) + 1;
    let width = LEFT_MARGIN + weeks * (CELL + GAP);
    let height = TOP_MARGIN + 7 * (CELL + GAP);

    let mut out = format!(
        r#"<h3 class="heatmap-year">{year}</h3><svg class="heatmap-grid" viewBox="0 0 {width} {height}" width="{width}" height="{height}" role="img" aria-label="Reviews in {year}">"#
    );

    for (month, label) in MONTHS.iter().enumerate() {
        if let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month as u32 + 1, 1) {
            let x = LEFT_MARGIN + week_index(origin, first_of_month) * (CELL + GAP);
            out.push_str(&format!(
                r#"<text class="heatmap-label" x="{x}" y="12">{label}</text>"#
            ));
        }
    }
    for (row, label) in [(0, "Mon"), (2, "Wed"), (4, "Fri")] {
        let y = TOP_MARGIN + row * (CELL + GAP) + CELL - 2;
        out.push_str(&format!(
            r#"<text class="heatmap-label" x="0" y="{y}">{label}</text>"#
        ));
    }

    for date in start.iter_days().take_while(|date| *date <= end) {
        let count = days.get(&date).copied().unwrap_or(0);
        let x = LEFT_MARGIN + week_index(origin, date) * (CELL + GAP);
        let y = TOP_MARGIN + i64::from(date.weekday().num_days_from_monday()) * (CELL + GAP);
        let noun = if count == 1 { "review" } else { "reviews" };
        out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" rx="2" fill="{fill}"><title>{date}: {count} {noun}</title></rect>"#,
            fill = color_for(normalize(count, max)),
        ));
    }

    out.push_str("</svg>");
    out
}

fn week_index(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days() / 7
}

fn normalize(count: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        count as f64 / max as f64
    }
}

/// Colour for a value in `[0, 1]`, linearly interpolated between ramp stops.
pub fn color_for(value: f64) -> String {
    let value = value.clamp(0.0, 1.0);
    let upper = COLOR_STOPS
        .iter()
        .position(|(stop, _)| value <= *stop)
        .unwrap_or(COLOR_STOPS.len() - 1);
    if upper == 0 {
        return rgb(COLOR_STOPS[0].1);
    }

    let (lo_at, lo) = COLOR_STOPS[upper - 1];
    let (hi_at, hi) = COLOR_STOPS[upper];
    let t = (value - lo_at) / (hi_at - lo_at);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    rgb([mix(lo[0], hi[0]), mix(lo[1], hi[1]), mix(lo[2], hi[2])])
}

fn rgb([r, g, b]: [u8; 3]) -> String {
    format!("rgb({r}, {g}, {b})")
}
