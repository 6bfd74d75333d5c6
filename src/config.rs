use std::env;

use crate::error::AppError;

const LATITUDE_VAR: &str = "WEATHER_LATITUDE";
const LONGITUDE_VAR: &str = "WEATHER_LONGITUDE";
const API_KEY_VAR: &str = "TOMORROW_API_KEY";

/// Location and credentials needed to query the forecast API.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    pub api_key: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Config, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Arguments
    /// * `lookup` - returns the value of a variable, or `None` when it is not set
    pub fn from_lookup<F>(lookup: F) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::EnvVarNotSet(name.to_string()))
        };

        let latitude = parse_coordinate(LATITUDE_VAR, &required(LATITUDE_VAR)?, 90.0)?;
        let longitude = parse_coordinate(LONGITUDE_VAR, &required(LONGITUDE_VAR)?, 180.0)?;
        let api_key = required(API_KEY_VAR)?;

        Ok(Config {
            latitude,
            longitude,
            api_key,
        })
    }
}

fn parse_coordinate(name: &str, raw: &str, limit: f64) -> Result<f64, AppError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| AppError::InvalidConfig(format!("{} is not a number: {}", name, raw)))?;

    if !value.is_finite() || value.abs() > limit {
        return Err(AppError::InvalidConfig(format!(
            "{} must be within ±{}: {}",
            name, limit, raw
        )));
    }
    Ok(value)
}
