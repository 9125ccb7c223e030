use chrono::{
    NaiveDate,
    NaiveDateTime
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{
    elapsed_minutes,
    iso_weekday_number,
    start_of_day,
    DAYS_PER_WEEK,
    MINUTES_PER_DAY,
    SATURDAY_NUMBER,
    SUNDAY_NUMBER
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessMinutesError {
    #[error("incorrect last day {last_day}: it precedes first day {first_day}")]
    InvalidRange {
        first_day: NaiveDate,
        last_day: NaiveDate
    }
}

/// Weekend days that fall inside the days left over after whole weeks
/// are taken out of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainderWeekend {
    NoWeekend,
    SaturdayOnly,
    SundayOnly,
    SaturdayAndSunday
}

impl RemainderWeekend {
    /// Classifies the remainder window running from weekday number
    /// `first_day_of_week` to `last_day_of_week` (Monday = 1 ... Sunday = 7).
    pub fn from_weekday_numbers(first_day_of_week: u32, last_day_of_week: u32) -> RemainderWeekend {
        let last_day_of_week = if last_day_of_week < first_day_of_week {
            last_day_of_week + DAYS_PER_WEEK as u32
        } else {
            last_day_of_week
        };

        if first_day_of_week <= SATURDAY_NUMBER {
            if last_day_of_week >= SUNDAY_NUMBER {
                RemainderWeekend::SaturdayAndSunday
            } else if last_day_of_week >= SATURDAY_NUMBER {
                RemainderWeekend::SaturdayOnly
            } else {
                RemainderWeekend::NoWeekend
            }
        } else if last_day_of_week >= SUNDAY_NUMBER {
            RemainderWeekend::SundayOnly
        } else {
            RemainderWeekend::NoWeekend
        }
    }

    pub fn weekend_days(&self) -> i64 {
        match self {
            RemainderWeekend::NoWeekend => 0,
            RemainderWeekend::SaturdayOnly | RemainderWeekend::SundayOnly => 1,
            RemainderWeekend::SaturdayAndSunday => 2
        }
    }
}

/// Day-count breakdown of the dates between a first and a last day,
/// both included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDaySpan {
    range: RangeOfDates,
    full_week_count: i64,
    remainder_weekend: RemainderWeekend,
    holiday_count: i64
}

impl BusinessDaySpan {
    pub fn new(
        first_day: NaiveDate,
        last_day: NaiveDate,
        holidays: &[NaiveDate]
    ) -> Result<BusinessDaySpan, BusinessMinutesError> {
        let range = RangeOfDates::new(first_day, last_day).ok_or_else(|| {
            warn!(%first_day, %last_day, "rejected business day span with reversed dates");
            BusinessMinutesError::InvalidRange { first_day, last_day }
        })?;

        let remainder_weekend = if range.remainder_days() > 0 {
            RemainderWeekend::from_weekday_numbers(
                iso_weekday_number(first_day),
                iso_weekday_number(last_day)
            )
        } else {
            RemainderWeekend::NoWeekend
        };

        Ok(BusinessDaySpan {
            range,
            full_week_count: range.full_week_count(),
            remainder_weekend,
            holiday_count: range.count_contained(holidays)
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.range.start_date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.range.end_date()
    }

    /// Calendar days spanned, both ends included.
    pub fn span_days(&self) -> i64 {
        self.range.len()
    }

    pub fn full_week_count(&self) -> i64 {
        self.full_week_count
    }

    pub fn remainder_weekend(&self) -> RemainderWeekend {
        self.remainder_weekend
    }

    /// Holiday entries inside the span. Weekend holidays and duplicates are counted too.
    pub fn holiday_count(&self) -> i64 {
        self.holiday_count
    }

    pub fn business_days(&self) -> i64 {
        self.span_days()
            - self.remainder_weekend.weekend_days()
            - 2 * self.full_week_count
            - self.holiday_count
    }

    /// Applies the weekend deduction to a raw elapsed minute count.
    ///
    /// Only the remainder weekend is deducted here: holidays and the weekends
    /// of whole weeks never reduce the minute count, and a span within a
    /// single calendar day is returned as is.
    pub fn reduce_elapsed_minutes(&self, elapsed: i64) -> i64 {
        if self.range.is_single_day() {
            return elapsed;
        }
        match self.remainder_weekend {
            RemainderWeekend::SaturdayOnly | RemainderWeekend::SundayOnly => elapsed - MINUTES_PER_DAY,
            RemainderWeekend::SaturdayAndSunday => elapsed - 2 * MINUTES_PER_DAY * (self.full_week_count + 1),
            RemainderWeekend::NoWeekend => elapsed
        }
    }
}

/// Business minutes from `first` to `last`.
///
/// Fails with [`BusinessMinutesError::InvalidRange`] when the date of `first`
/// is after the date of `last`. Only dates are compared, so `last` may be
/// earlier on the same day, which yields a negative count.
pub fn business_minutes_until(
    first: NaiveDateTime,
    last: NaiveDateTime,
    holidays: &[NaiveDate]
) -> Result<i64, BusinessMinutesError> {
    let span = BusinessDaySpan::new(start_of_day(first), start_of_day(last), holidays)?;
    let elapsed = elapsed_minutes(first, last);
    let minutes = span.reduce_elapsed_minutes(elapsed);
    debug!(
        first_day = %span.first_day(),
        last_day = %span.last_day(),
        span_days = span.span_days(),
        full_week_count = span.full_week_count(),
        remainder_weekend = ?span.remainder_weekend(),
        holiday_count = span.holiday_count(),
        elapsed,
        minutes,
        "computed business minutes"
    );
    Ok(minutes)
}

/// Business days from the date of `first` to the date of `last`, both included,
/// with weekends and holiday entries removed.
pub fn business_days_until(
    first: NaiveDateTime,
    last: NaiveDateTime,
    holidays: &[NaiveDate]
) -> Result<i64, BusinessMinutesError> {
    let span = BusinessDaySpan::new(start_of_day(first), start_of_day(last), holidays)?;
    Ok(span.business_days())
}

pub trait BusinessMinutes {
    fn business_minutes_until(&self, last: NaiveDateTime, holidays: &[NaiveDate]) -> Result<i64, BusinessMinutesError>;

    fn business_days_until(&self, last: NaiveDateTime, holidays: &[NaiveDate]) -> Result<i64, BusinessMinutesError>;
}

impl BusinessMinutes for NaiveDateTime {
    fn business_minutes_until(&self, last: NaiveDateTime, holidays: &[NaiveDate]) -> Result<i64, BusinessMinutesError> {
        business_minutes_until(*self, last, holidays)
    }

    fn business_days_until(&self, last: NaiveDateTime, holidays: &[NaiveDate]) -> Result<i64, BusinessMinutesError> {
        business_days_until(*self, last, holidays)
    }
}
