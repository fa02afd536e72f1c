//! Typed client for the JCDecaux open-data portal.
//!
//! The portal exposes bike-share data over two HTTPS services: `vls/v3`
//! (contracts and renting stations) and `parking/v1` (parking facilities).
//! This crate decodes those JSON resources into plain records and wraps the
//! per-resource fetch operations behind a [`Requester`] holding the API key.
//!
//! Key characteristics of the portal:
//! - Every request authenticates with an `apiKey` query parameter.
//! - Station numbers are only unique within a contract, so single-station
//!   fetches always name both (`?contract=...` plus the number).
//! - Park paths embed the contract name as a path segment instead.
//! - Records are snapshots; re-fetch via the refresh operations to update
//!   them in place.

mod error;
mod model;
mod requester;
mod resource;

pub use error::PortalError;
pub use model::{Availabilities, Contract, Park, Position, Stands, Station};
pub use requester::Requester;
pub use resource::{RequestOptions, ResourceKind};
