use serde::Deserialize;
use thiserror::Error;

use crate::time::businessminutes::BusinessMinutesError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("key '{0}' defined more than once")]
    DuplicateNameError(String),
    #[error(transparent)]
    BusinessMinutes(#[from] BusinessMinutesError)
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: for<'de> Deserialize<'de>,
{
    Ok(serde_json::from_value(json_value)?)
}
