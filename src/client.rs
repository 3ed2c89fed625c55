//! Geocoding client
//!
//! Wires request construction, the HTTP transport and result projection
//! together. Only construction-time errors (blank address, malformed viewport)
//! are returned; transport failures, undecodable bodies and non-OK statuses
//! degrade to an empty `LocationResult`.

use crate::config::Config;
use crate::constants::DEFAULT_SENSOR;
use crate::error::{Error, Result};
use crate::location::LocationResult;
use crate::query::{build_request_url, build_service_url, redact_key, GeocodeOptions};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP GET returning the response body as text
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given user agent and request timeout
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Geocoding API returned status: {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

/// Address geocoder
#[derive(Debug, Clone)]
pub struct Geocoder<T = ReqwestTransport> {
    transport: T,
    api_key: String,
    sensor: String,
}

impl Geocoder<ReqwestTransport> {
    /// Create a geocoder with default HTTP settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = Config::default();
        let transport = ReqwestTransport::new(
            &config.http.user_agent,
            Duration::from_secs(config.http.timeout_secs),
        )?;
        Ok(Self::with_transport(transport, api_key))
    }

    /// Create a geocoder from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(
            &config.http.user_agent,
            Duration::from_secs(config.http.timeout_secs),
        )?;
        Ok(Self::with_transport(transport, config.api.key.clone()).sensor(config.api.sensor))
    }
}

impl<T: Transport> Geocoder<T> {
    /// Create a geocoder over a custom transport
    pub fn with_transport(transport: T, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            sensor: DEFAULT_SENSOR.to_string(),
        }
    }

    /// Set the `sensor` flag sent with each request
    pub fn sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor.to_string();
        self
    }

    /// Base endpoint for this geocoder's key
    pub fn service_url(&self) -> String {
        build_service_url(&self.api_key)
    }

    /// Request URL for an address, without sending it
    pub fn request_url(&self, address: &str, options: &GeocodeOptions) -> Result<String> {
        build_request_url(&self.api_key, address, options, &self.sensor)
    }

    /// Geocode an address
    pub async fn get(&self, address: &str, options: &GeocodeOptions) -> Result<LocationResult> {
        let url = self.request_url(address, options)?;
        debug!(url = %redact_key(&url), "Sending geocode request");

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Geocode request for '{}' failed: {}", address, e);
                return Ok(LocationResult::empty(address));
            }
        };

        let location = LocationResult::from_json(address, &body);
        if location.is_empty() {
            warn!(
                status = location.status().unwrap_or("unknown"),
                error = location.error_message().unwrap_or(""),
                "No geocode result for '{}'",
                address
            );
        }

        Ok(location)
    }
}
