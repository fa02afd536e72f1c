//! JCDecaux portal requester.
//!
//! Holds the API key and host, resolves each typed fetch to a URL via
//! [`resolve`](crate::resource), issues one GET per call and maps the
//! response onto the caller's type. No caching, no retries, no timeout of
//! its own; callers who need deadlines supply a pre-configured
//! [`reqwest::Client`] through [`Requester::with_http_client`].

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::PortalError;
use crate::model::{Contract, Park, Station};
use crate::resource::{RequestOptions, ResourceKind, resolve};

/// Default host of the JCDecaux open-data API.
const DEFAULT_HOST: &str = "https://api.jcdecaux.com";

/// Client for the JCDecaux open-data portal.
///
/// Key and host are fixed after construction, so one instance can be
/// shared freely across tasks.
#[derive(Debug, Clone)]
pub struct Requester {
    http: reqwest::Client,
    api_key: String,
    host: String,
}

impl Requester {
    /// Create a requester bound to the production host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Override the host (for testing against a local server).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a caller-configured HTTP client (timeouts, proxies, ...).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Fetch every contract the portal operates.
    pub async fn get_contracts(&self) -> Result<Vec<Contract>, PortalError> {
        self.fetch_collection(ResourceKind::Contracts, &RequestOptions::none())
            .await
    }

    /// Fetch every station across all contracts.
    pub async fn get_stations(&self) -> Result<Vec<Station>, PortalError> {
        self.fetch_collection(ResourceKind::Stations, &RequestOptions::none())
            .await
    }

    /// Fetch the stations of one contract.
    pub async fn get_stations_in_contract(
        &self,
        contract_name: &str,
    ) -> Result<Vec<Station>, PortalError> {
        self.fetch_collection(
            ResourceKind::Stations,
            &RequestOptions::in_contract(contract_name),
        )
        .await
    }

    /// Fetch a single station by contract and number.
    pub async fn get_station(
        &self,
        contract_name: &str,
        number: i32,
    ) -> Result<Station, PortalError> {
        self.fetch_item(
            ResourceKind::Stations,
            &RequestOptions::item(contract_name, number),
        )
        .await
    }

    /// Fetch the parks of one contract.
    pub async fn get_parks(&self, contract_name: &str) -> Result<Vec<Park>, PortalError> {
        self.fetch_collection(
            ResourceKind::Parks,
            &RequestOptions::in_contract(contract_name),
        )
        .await
    }

    /// Fetch a single park by contract and number.
    pub async fn get_park(&self, contract_name: &str, number: i32) -> Result<Park, PortalError> {
        self.fetch_item(
            ResourceKind::Parks,
            &RequestOptions::item(contract_name, number),
        )
        .await
    }

    /// Re-fetch a station and overwrite it in place.
    ///
    /// On any error the previous field values are left untouched; callers
    /// must check the result before trusting the record to be fresh.
    pub async fn refresh_station(&self, station: &mut Station) -> Result<(), PortalError> {
        let contract = station.contract_name.clone();
        let fresh = self.get_station(&contract, station.number).await?;
        *station = fresh;
        Ok(())
    }

    /// Re-fetch a park and overwrite it in place.
    ///
    /// Same contract as [`Requester::refresh_station`].
    pub async fn refresh_park(&self, park: &mut Park) -> Result<(), PortalError> {
        let contract = park.contract_name.clone();
        let fresh = self.get_park(&contract, park.number).await?;
        *park = fresh;
        Ok(())
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        options: &RequestOptions,
    ) -> Result<Vec<T>, PortalError> {
        let body = self.execute(kind, options).await?;
        serde_json::from_str(&body).map_err(decode_error)
    }

    /// Fetch and decode a single resource.
    ///
    /// Decodes through `serde_json::Value` first so that an array body on
    /// an item path is reported as `TooManyResults` instead of a decode
    /// error.
    async fn fetch_item<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        options: &RequestOptions,
    ) -> Result<T, PortalError> {
        let body = self.execute(kind, options).await?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(decode_error)?;
        if value.is_array() {
            return Err(PortalError::TooManyResults);
        }
        serde_json::from_value(value).map_err(decode_error)
    }

    /// Resolve, issue the GET and return the status-checked body.
    async fn execute(
        &self,
        kind: ResourceKind,
        options: &RequestOptions,
    ) -> Result<String, PortalError> {
        let relative = resolve(kind, options, &self.api_key)?;
        let url = format!("{}{}", self.host, relative);

        // Log the path only; the query string carries the API key.
        debug!(
            path = relative.split('?').next().unwrap_or_default(),
            "GET"
        );

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        map_status(response.status())?;
        Ok(response.text().await?)
    }
}

/// Exact status mapping: 200 is the only success.
fn map_status(status: StatusCode) -> Result<(), PortalError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::FORBIDDEN => Err(PortalError::Unauthorized),
        StatusCode::NOT_FOUND => Err(PortalError::NoResourceFound),
        other => Err(PortalError::RequestFailed {
            status: other.as_u16(),
        }),
    }
}

fn decode_error(e: serde_json::Error) -> PortalError {
    PortalError::Json {
        message: e.to_string(),
    }
}
