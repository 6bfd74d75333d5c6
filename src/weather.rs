pub mod codes;
pub mod response;
mod selector;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::error::AppError;
use response::{CurrentWeather, ForecastResponse};
use selector::select_nearest;

// API endpoint for the Tomorrow.io forecast service
const FORECAST_ENDPOINT: &str = "https://api.tomorrow.io/v4/weather/forecast";

/// Client for the Tomorrow.io hourly forecast.
pub struct TomorrowIo {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl TomorrowIo {
    pub fn new(api_key: &str) -> TomorrowIo {
        TomorrowIo {
            client: reqwest::Client::new(),
            endpoint: FORECAST_ENDPOINT.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Sends requests to `endpoint` instead of the public API.
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: &str) -> TomorrowIo {
        self.endpoint = endpoint.to_string();
        self
    }

    #[cfg(test)]
    pub fn with_client(mut self, client: reqwest::Client) -> TomorrowIo {
        self.client = client;
        self
    }

    /// Fetches the forecast and returns the entry closest to now.
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, AppError> {
        let now = Utc::now();
        self.current_weather_at(latitude, longitude, now).await
    }

    /// Fetches the forecast and returns the entry closest to `reference`.
    ///
    /// # Arguments
    /// * `latitude` - latitude of the location
    /// * `longitude` - longitude of the location
    /// * `reference` - the instant every entry is compared against
    ///
    /// # Returns
    /// * `CurrentWeather` built from the nearest hourly entry
    /// * Error if the request, the response status, the body, or any timestamp is invalid
    pub async fn current_weather_at(
        &self,
        latitude: f64,
        longitude: f64,
        reference: DateTime<Utc>,
    ) -> Result<CurrentWeather, AppError> {
        info!("Fetching forecast for location: {},{}", latitude, longitude);

        let url = forecast_url(&self.endpoint, latitude, longitude, &self.api_key);
        let request = self.client.get(&url).build().map_err(AppError::RequestBuild)?;
        let response = self.client.execute(request).await.map_err(AppError::Network)?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to fetch forecast: {}", status);
            return Err(AppError::ApiRequestFailed(format!(
                "Failed to fetch forecast: {}",
                status
            )));
        }

        let body = response.bytes().await.map_err(AppError::BodyRead)?;
        let forecast: ForecastResponse = serde_json::from_slice(&body)?;
        debug!(
            "Forecast fetched successfully: {} hourly entries",
            forecast.timelines.hourly.len()
        );

        current_weather_from_response(&forecast, reference)
    }
}

/// Fetches the current weather for a location from the public Tomorrow.io API.
pub async fn fetch_current_weather(
    latitude: f64,
    longitude: f64,
    api_key: &str,
) -> Result<CurrentWeather, AppError> {
    TomorrowIo::new(api_key)
        .current_weather(latitude, longitude)
        .await
}

/// Selects the hourly entry nearest to `reference` and resolves its description.
pub fn current_weather_from_response(
    forecast: &ForecastResponse,
    reference: DateTime<Utc>,
) -> Result<CurrentWeather, AppError> {
    let entry = select_nearest(&forecast.timelines.hourly, reference)?;
    debug!("Nearest forecast entry: {:?}", entry);

    Ok(CurrentWeather::from_entry(
        entry,
        codes::describe(entry.values.weather_code),
    ))
}

/// Builds the hourly, metric forecast URL for a location.
pub fn forecast_url(endpoint: &str, latitude: f64, longitude: f64, api_key: &str) -> String {
    format!(
        "{}?location={},{}&fields=temperature,humidity&timesteps=1h&units=metric&apikey={}",
        endpoint, latitude, longitude, api_key
    )
}
