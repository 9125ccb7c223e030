use chrono::{
    Days,
    NaiveDate
};

use crate::time::utility::DAYS_PER_WEEK;

/// Inclusive range of calendar dates, `start_date <= end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    /// Returns `None` when `start_date` is after `end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Option<RangeOfDates> {
        if start_date > end_date {
            None
        } else {
            Some(RangeOfDates { start_date, end_date })
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of calendar days spanned, both ends included.
    pub fn len(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    pub fn full_week_count(&self) -> i64 {
        self.len() / DAYS_PER_WEEK
    }

    /// Days left over once whole weeks are taken out.
    pub fn remainder_days(&self) -> i64 {
        self.len() - self.full_week_count() * DAYS_PER_WEEK
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Counts entries of `dates` inside the range. Duplicates count once per entry.
    pub fn count_contained(&self, dates: &[NaiveDate]) -> i64 {
        dates.iter().filter(|d| self.contain(**d)).count() as i64
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: u64,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if (self.index as i64) < self.range_of_dates.len() {
            let d = self.range_of_dates.start_date.checked_add_days(Days::new(self.index));
            self.index += 1;
            d
        } else {
            None
        }
    }
}
