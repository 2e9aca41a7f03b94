//! HTTP client for the Pioupiou `live-with-meta` endpoints.

use crate::source::error::StationSourceError;
use crate::source::StationSource;
use crate::types::station::StationRecord;
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://api.pioupiou.fr/v1/live-with-meta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Every upstream response wraps its payload in `{ "data": ... }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Fetches live station data from the Windbird API.
///
/// The `try_*` methods report every failure as a [`StationSourceError`]. The
/// plain methods log the failure and degrade to an empty list or `None`.
///
/// # Examples
///
/// ```no_run
/// # use windbird::{StationClient, StationSourceError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), StationSourceError> {
/// let client = StationClient::builder().build()?;
/// let stations = client.fetch_all_stations().await;
/// println!("{} stations online", stations.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StationClient {
    http: Client,
    base_url: String,
}

#[bon]
impl StationClient {
    /// Creates a client.
    ///
    /// * `base_url` - Endpoint prefix, defaults to [`DEFAULT_BASE_URL`]. `/all` and
    ///   `/{id}` are appended to it.
    /// * `timeout` - Whole-request timeout, defaults to [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`StationSourceError::ClientBuild`] if the TLS backend cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into, default = DEFAULT_BASE_URL.to_string())] base_url: String,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
    ) -> Result<Self, StationSourceError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(StationSourceError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl StationClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every station known to the API.
    pub async fn try_fetch_all_stations(&self) -> Result<Vec<StationRecord>, StationSourceError> {
        let url = format!("{}/all", self.base_url);
        let stations: Vec<StationRecord> = self.get_data(&url).await?;
        info!("Fetched {} stations from {}", stations.len(), url);
        Ok(stations)
    }

    /// Fetches a single station by id.
    pub async fn try_fetch_station(&self, id: u32) -> Result<StationRecord, StationSourceError> {
        let url = format!("{}/{}", self.base_url, id);
        self.get_data(&url).await
    }

    /// Fetches every station, returning an empty list on any failure.
    pub async fn fetch_all_stations(&self) -> Vec<StationRecord> {
        match self.try_fetch_all_stations().await {
            Ok(stations) => stations,
            Err(e) => {
                warn!("Failed to fetch Windbird stations: {:?}", e);
                Vec::new()
            }
        }
    }

    /// Fetches a single station, returning `None` on any failure.
    pub async fn fetch_station(&self, id: u32) -> Option<StationRecord> {
        match self.try_fetch_station(id).await {
            Ok(station) => Some(station),
            Err(e) => {
                warn!("Failed to fetch Windbird station {}: {:?}", id, e);
                None
            }
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, StationSourceError> {
        debug!("Requesting {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| StationSourceError::NetworkRequest(url.to_string(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                if let Some(status) = e.status() {
                    return Err(StationSourceError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    });
                } else {
                    return Err(StationSourceError::NetworkRequest(url.to_string(), e));
                }
            }
        };
        let body = response
            .bytes()
            .await
            .map_err(|e| StationSourceError::NetworkRequest(url.to_string(), e))?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| StationSourceError::JsonParse {
                url: url.to_string(),
                source,
            })?;
        Ok(envelope.data)
    }
}

impl StationSource for StationClient {
    async fn fetch_all_stations(&self) -> Vec<StationRecord> {
        StationClient::fetch_all_stations(self).await
    }
}
