//! Resource kinds and request-to-URL resolution.
//!
//! The upstream portal spreads its filters across two conventions: the
//! `vls/v3` service takes the contract as a query parameter, while
//! `parking/v1` embeds it in the path. [`resolve`] hides that split: it maps
//! a resource kind plus an optional [`RequestOptions`] filter onto the
//! relative URL to fetch, or fails before any network traffic when the
//! filter cannot identify a resource.

use crate::error::PortalError;

/// The closed set of resource kinds the portal serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Bike contracts (`vls/v3`). List-only upstream.
    Contracts,
    /// Bike renting stations (`vls/v3`).
    Stations,
    /// Bike parking facilities (`parking/v1`).
    Parks,
}

/// Transient per-call filter. Not persisted by the requester.
///
/// A present `number` turns the request into a single-item fetch; station
/// numbers are only unique within a contract, so item fetches always need
/// the contract too.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Contract to scope the request to.
    pub contract_name: Option<String>,
    /// Number identifying a single station or park within the contract.
    pub number: Option<i32>,
}

impl RequestOptions {
    /// No filtering: fetch the whole collection.
    pub fn none() -> Self {
        Self::default()
    }

    /// Scope a collection fetch to one contract.
    pub fn in_contract(contract_name: impl Into<String>) -> Self {
        Self {
            contract_name: Some(contract_name.into()),
            number: None,
        }
    }

    /// Identify a single station or park.
    pub fn item(contract_name: impl Into<String>, number: i32) -> Self {
        Self {
            contract_name: Some(contract_name.into()),
            number: Some(number),
        }
    }
}

/// Resolve a resource request to the relative URL to fetch.
///
/// The returned string starts with `/` and already carries the `apiKey`
/// query parameter; the requester only prepends the host. Identification
/// errors are reported here, before any request is issued.
pub(crate) fn resolve(
    kind: ResourceKind,
    options: &RequestOptions,
    api_key: &str,
) -> Result<String, PortalError> {
    match kind {
        ResourceKind::Contracts => {
            // Contracts are never fetched by number.
            if options.number.is_some() {
                return Err(PortalError::UnrecognisedType);
            }
            Ok(format!("/vls/v3/contracts?apiKey={api_key}"))
        }
        ResourceKind::Stations => match (options.number, options.contract_name.as_deref()) {
            (Some(number), Some(contract)) => Ok(format!(
                "/vls/v3/stations/{number}?contract={contract}&apiKey={api_key}"
            )),
            (Some(_), None) => Err(PortalError::NoIdentificationAvailable),
            (None, Some(contract)) => Ok(format!(
                "/vls/v3/stations?contract={contract}&apiKey={api_key}"
            )),
            (None, None) => Ok(format!("/vls/v3/stations?apiKey={api_key}")),
        },
        ResourceKind::Parks => {
            // Park paths embed the contract, so it is always required.
            let Some(contract) = options.contract_name.as_deref() else {
                return Err(PortalError::NoIdentificationAvailable);
            };
            match options.number {
                Some(number) => Ok(format!(
                    "/parking/v1/contracts/{contract}/parks/{number}?apiKey={api_key}"
                )),
                None => Ok(format!(
                    "/parking/v1/contracts/{contract}/parks?apiKey={api_key}"
                )),
            }
        }
    }
}
