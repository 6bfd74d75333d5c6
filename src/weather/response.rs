/// Response structure for the Tomorrow.io forecast endpoint
/// Represents the JSON structure returned by api.tomorrow.io/v4/weather/forecast
#[derive(serde::Deserialize, Debug)]
pub struct ForecastResponse {
    /// Forecast timelines, only the hourly one is requested
    pub timelines: Timelines,
}

#[derive(serde::Deserialize, Debug)]
pub struct Timelines {
    /// Hourly forecast entries in the order the API sent them
    #[serde(default)]
    pub hourly: Vec<ForecastEntry>,
}

/// One timestamped hourly forecast
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// ISO-8601 timestamp (e.g., "2024-05-01T10:00:00Z")
    pub time: String,
    pub values: ForecastValues,
}

/// Weather values of a forecast entry, missing fields decode as zero
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastValues {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Tomorrow.io weather code (e.g., 1000 for clear)
    pub weather_code: i32,
}

/// Weather closest to the moment it was fetched, with its code resolved to text
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
    pub description: String,
}

impl CurrentWeather {
    pub fn from_entry(entry: &ForecastEntry, description: &str) -> CurrentWeather {
        CurrentWeather {
            timestamp: entry.time.clone(),
            temperature: entry.values.temperature,
            humidity: entry.values.humidity,
            wind_speed: entry.values.wind_speed,
            weather_code: entry.values.weather_code,
            description: description.to_string(),
        }
    }
}
