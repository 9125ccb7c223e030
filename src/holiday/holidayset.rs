use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::start_of_day;

/// Holiday dates kept in the order given. Duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: Vec<NaiveDate>
}

impl HolidaySet {
    pub fn new(dates: Vec<NaiveDate>) -> HolidaySet {
        HolidaySet { dates }
    }

    /// Builds a set from timestamps, keeping only their dates.
    pub fn from_datetimes<I>(datetimes: I) -> HolidaySet
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        HolidaySet { dates: datetimes.into_iter().map(start_of_day).collect() }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.dates.contains(&d)
    }

    pub fn push(&mut self, d: NaiveDate) {
        self.dates.push(d);
    }

    pub fn count_within(&self, range: &RangeOfDates) -> i64 {
        range.count_contained(&self.dates)
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        HolidaySet { dates: iter.into_iter().collect() }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
