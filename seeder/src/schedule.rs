//! Dates the sample records are spread over.
//!
//! Five calendar months back from now, the current month included, with
//! records on the 2nd, 7th, 12th, 17th and 22nd at local midnight. Dates
//! after `now` are dropped, so the current month is usually partial.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// Number of calendar months covered, current month included.
pub const MONTHS: u32 = 5;

/// Days of the month a record is placed on: `2 + 5 * index`.
pub const DAYS_OF_MONTH: [u32; 5] = [2, 7, 12, 17, 22];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDate {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Position in [`DAYS_OF_MONTH`].
    pub index: u32,
    pub at: DateTime<Utc>,
}

/// Step used to walk forward out of a DST gap, and how many steps to try.
const GAP_STEP_MINUTES: i64 = 15;
const GAP_MAX_STEPS: i64 = 16;

/// First instant of `year-month-day` in `tz`. Usually midnight; when midnight
/// falls in a DST gap, the first local time after the gap.
fn start_of_day<Tz: TimeZone>(tz: &Tz, year: i32, month: u32, day: u32) -> Option<DateTime<Tz>> {
    let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    (0..=GAP_MAX_STEPS).find_map(|step| {
        let local = midnight + Duration::minutes(step * GAP_STEP_MINUTES);
        tz.from_local_datetime(&local).earliest()
    })
}

/// Sample dates up to `now`, current month first and days ascending.
///
/// Midnights are resolved in `now`'s time zone. A day whose midnight does not
/// exist there (a DST gap) starts at the first valid local time after it.
pub fn sample_dates<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<SampleDate> {
    let tz = now.timezone();
    let current = now.year() * 12 + now.month0() as i32;
    let mut dates = Vec::with_capacity((MONTHS as usize) * DAYS_OF_MONTH.len());

    for offset in 0..MONTHS as i32 {
        let months = current - offset;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as u32 + 1;

        for (index, day) in DAYS_OF_MONTH.iter().enumerate() {
            let Some(at) = start_of_day(&tz, year, month, *day) else {
                continue;
            };
            if at > *now {
                continue;
            }
            dates.push(SampleDate {
                year,
                month,
                index: index as u32,
                at: at.with_timezone(&Utc),
            });
        }
    }

    dates
}
