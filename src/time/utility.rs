use chrono::{
    Datelike,
    NaiveDate,
    NaiveDateTime
};

pub const MINUTES_PER_DAY: i64 = 1440;

pub const DAYS_PER_WEEK: i64 = 7;

pub const SATURDAY_NUMBER: u32 = 6;

pub const SUNDAY_NUMBER: u32 = 7;

/// Weekday number with Monday = 1 ... Sunday = 7.
#[inline]
pub fn iso_weekday_number (d: NaiveDate) -> u32 {
    d.weekday().number_from_monday()
}

/// Calendar date of a timestamp, time-of-day dropped.
#[inline]
pub fn start_of_day (dt: NaiveDateTime) -> NaiveDate {
    dt.date()
}

/// Whole minutes elapsed from `first` to `last`, truncated toward zero.
/// Negative when `last` precedes `first`.
#[inline]
pub fn elapsed_minutes (first: NaiveDateTime, last: NaiveDateTime) -> i64 {
    (last - first).num_minutes()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ndt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_iso_weekday_number() {
        // 2024-01-01 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(iso_weekday_number(monday), 1);
        assert_eq!(iso_weekday_number(saturday), SATURDAY_NUMBER);
        assert_eq!(iso_weekday_number(sunday), SUNDAY_NUMBER);
    }

    #[test]
    fn test_start_of_day() {
        let dt = ndt(2024, 3, 15, 23, 59, 59);
        assert_eq!(start_of_day(dt), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_elapsed_minutes_truncates_seconds() {
        let first = ndt(2024, 3, 15, 9, 0, 0);
        assert_eq!(elapsed_minutes(first, ndt(2024, 3, 15, 9, 1, 59)), 1);
        assert_eq!(elapsed_minutes(first, ndt(2024, 3, 15, 8, 58, 30)), -1);
        assert_eq!(elapsed_minutes(first, ndt(2024, 3, 16, 9, 0, 0)), MINUTES_PER_DAY);
    }
}
