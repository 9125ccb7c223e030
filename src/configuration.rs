use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use crate::holiday::holidayset::HolidaySet;
use crate::holiday::holidaysetmanager::{HolidaySetManager, new_holiday_set_manager};
use crate::manager::managererror::ManagerError;
use crate::time::businessminutes::{business_days_until, business_minutes_until};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_sets: Vec<serde_json::Value>
}

/// Named holiday sets loaded from a JSON document of the form
/// `{"holiday_sets": [{"name": "...", "holidays": [...]}, ...]}`.
pub struct Configuration {
    holiday_set_manager: HolidaySetManager
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { holiday_set_manager: new_holiday_set_manager() }
    }

    pub fn holiday_set_manager(&self) -> &HolidaySetManager {
        &self.holiday_set_manager
    }

    pub fn holiday_set(&self, name: &str) -> Result<Arc<HolidaySet>, ManagerError> {
        self.holiday_set_manager.get(name)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let config = Configuration::from_json_prop(json_prop)?;
        info!(
            path = %file_path.as_ref().display(),
            holiday_sets = config.holiday_set_manager.len(),
            "loaded business time configuration"
        );
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let mut config = Configuration::new();
        config.holiday_set_manager.insert_obj_from_json_vec(&json_prop.holiday_sets)?;
        Ok(config)
    }

    /// Business minutes from `first` to `last` using the holiday set registered as `holiday_set_name`.
    pub fn business_minutes_until(
        &self,
        first: NaiveDateTime,
        last: NaiveDateTime,
        holiday_set_name: &str
    ) -> Result<i64, ManagerError> {
        let holidays = self.holiday_set(holiday_set_name)?;
        Ok(business_minutes_until(first, last, holidays.dates())?)
    }

    pub fn business_days_until(
        &self,
        first: NaiveDateTime,
        last: NaiveDateTime,
        holiday_set_name: &str
    ) -> Result<i64, ManagerError> {
        let holidays = self.holiday_set(holiday_set_name)?;
        Ok(business_days_until(first, last, holidays.dates())?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    use crate::time::businessminutes::BusinessMinutesError;

    const CONFIG_JSON: &str = r#"{
        "holiday_sets": [
            {"name": "UK", "holidays": ["2024-01-01", "2024-03-29", "2024-04-01"]},
            {"name": "Empty", "holidays": []}
        ],
        "comment": "ignored"
    }"#;

    fn ndt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_from_json_str() {
        let config = Configuration::from_json_str(CONFIG_JSON).unwrap();
        assert_eq!(config.holiday_set_manager().names(), vec!["Empty", "UK"]);
        assert_eq!(config.holiday_set("UK").unwrap().len(), 3);
    }

    #[test]
    fn test_from_reader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG_JSON.as_bytes()).unwrap();
        let config = Configuration::from_reader(file.path()).unwrap();
        assert!(config.holiday_set_manager().contains("UK"));

        let missing = Configuration::from_reader("/nonexistent/config.json");
        assert!(matches!(missing, Err(ManagerError::IOError(_))));
    }

    #[test]
    fn test_empty_document() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert!(config.holiday_set_manager().is_empty());
    }

    #[test]
    fn test_duplicate_set_name() {
        let json = r#"{"holiday_sets": [{"name": "UK"}, {"name": "UK"}]}"#;
        let err = Configuration::from_json_str(json).err().unwrap();
        assert!(matches!(err, ManagerError::DuplicateNameError(name) if name == "UK"));
    }

    #[test]
    fn test_business_time_with_named_set() {
        let config = Configuration::from_json_str(CONFIG_JSON).unwrap();
        // Thursday 2024-03-28 to Tuesday 2024-04-02 with Good Friday and Easter Monday
        let first = ndt(2024, 3, 28, 9, 0);
        let last = ndt(2024, 4, 2, 9, 0);
        assert_eq!(config.business_days_until(first, last, "UK").unwrap(), 2);
        assert_eq!(config.business_days_until(first, last, "Empty").unwrap(), 4);
        // minute count is only reduced by the weekend
        assert_eq!(config.business_minutes_until(first, last, "UK").unwrap(), 5 * 1440 - 2880);
    }

    #[test]
    fn test_business_time_errors() {
        let config = Configuration::from_json_str(CONFIG_JSON).unwrap();
        let first = ndt(2024, 3, 28, 9, 0);
        let last = ndt(2024, 3, 27, 9, 0);
        assert!(matches!(
            config.business_minutes_until(first, last, "UK"),
            Err(ManagerError::BusinessMinutes(BusinessMinutesError::InvalidRange { .. }))
        ));
        assert!(matches!(
            config.business_minutes_until(first, first, "US"),
            Err(ManagerError::NameNotFoundError(_))
        ));
    }
}
