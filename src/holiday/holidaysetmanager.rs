use std::sync::Arc;

use serde::Deserialize;

use crate::holiday::holidayset::HolidaySet;
use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};

#[derive(Deserialize)]
struct HolidaySetJsonProp {
    #[serde(default)]
    holidays: HolidaySet
}

fn holiday_set_from_json(json_value: serde_json::Value) -> Result<Arc<HolidaySet>, ManagerError> {
    let json_prop: HolidaySetJsonProp = parse_json_value(json_value)?;
    Ok(Arc::new(json_prop.holidays))
}

pub type HolidaySetManager = Manager<Arc<HolidaySet>>;

/// Expects objects shaped as `{"name": "...", "holidays": ["YYYY-MM-DD", ...]}`.
/// A missing `holidays` field gives an empty set.
pub fn new_holiday_set_manager() -> HolidaySetManager {
    Manager::new(holiday_set_from_json)
}
