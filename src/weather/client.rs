/**
 * Weather Service Client
 *
 * This module implements the typed client for the upstream weather service.
 * The upstream is treated as an external collaborator with a fixed JSON
 * shape; this client performs a single fetch per lookup with no caching and
 * no retries.
 *
 * # Request
 *
 * ```text
 * GET {base_url}?q={city}&appid={key}&units=metric
 * ```
 *
 * # Error Mapping
 *
 * - Upstream 404 (unknown city) - `WeatherError::CityNotFound`
 * - Other upstream error statuses or transport failures - `WeatherError::Upstream`
 * - A 200 body that does not match the expected shape - `WeatherError::Malformed`
 */

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Current conditions for a city, in the shape the frontend renders
///
/// This is the subset of the upstream response that the app uses; unknown
/// fields in the upstream body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved city name
    pub name: String,
    /// Country information
    pub sys: SysInfo,
    /// Temperature and humidity readings
    pub main: MainMetrics,
    /// Wind readings
    pub wind: Wind,
    /// Conditions, most significant first
    pub weather: Vec<Condition>,
}

/// Country block of a weather report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysInfo {
    /// ISO country code, e.g. "GB"
    pub country: String,
}

/// Temperature and humidity block of a weather report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    /// Temperature in degrees Celsius (metric units are requested)
    pub temp: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// Wind block of a weather report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in meters per second
    pub speed: f64,
}

/// One weather condition entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Condition group, e.g. "Clouds"
    pub main: String,
    /// Longer condition text, e.g. "scattered clouds"
    pub description: String,
}

/// Client for the upstream weather service
///
/// Holds the shared HTTP client together with the configured endpoint and
/// API key. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a client for the given endpoint and API key
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch current conditions for a city
    ///
    /// # Arguments
    /// * `city` - City name as typed by the user
    ///
    /// # Returns
    /// The typed weather report
    ///
    /// # Errors
    /// * `CityNotFound` - The upstream does not know the city
    /// * `Upstream` - Transport failure or a non-404 upstream error status
    /// * `Malformed` - The upstream body does not match the expected shape
    pub async fn current_by_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather upstream request failed: {}", e);
                WeatherError::Upstream(e)
            })?;

        // The upstream reports an unknown city as a 404 with a "cod" body
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::info!("Weather upstream does not know city: {}", city);
            return Err(WeatherError::CityNotFound);
        }

        let response = response.error_for_status().map_err(|e| {
            tracing::warn!("Weather upstream error status: {}", e);
            WeatherError::Upstream(e)
        })?;

        response.json::<WeatherReport>().await.map_err(|e| {
            tracing::warn!("Weather upstream body did not match expected shape: {}", e);
            WeatherError::Malformed
        })
    }
}
