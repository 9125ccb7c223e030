pub mod configuration;

pub mod holiday {
    pub mod holidayset;
    pub mod holidaysetmanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod businessminutes;
}

pub use configuration::Configuration;
pub use holiday::holidayset::HolidaySet;
pub use time::businessminutes::{
    BusinessDaySpan,
    BusinessMinutes,
    BusinessMinutesError,
    RemainderWeekend,
    business_days_until,
    business_minutes_until
};
