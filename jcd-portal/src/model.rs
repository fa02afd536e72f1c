//! JCDecaux API resource DTOs.
//!
//! These types map directly to the JSON shapes served by the `vls/v3` and
//! `parking/v1` services. Wire names are fixed by the upstream API: the
//! self-service endpoints use camelCase (`contractName`, `totalStands`),
//! the contracts endpoint uses snake_case (`country_code`). Fields the
//! server omits decode to their zero value; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A bike contract that JCDecaux is currently operating.
///
/// Contracts are only ever listed in bulk; there is no single-contract
/// endpoint upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Contract {
    /// Identifier of the contract.
    pub name: String,

    /// ISO 3166 code of the country.
    pub country_code: String,

    /// Cities covered by this contract, in upstream order.
    pub cities: Vec<String>,

    /// Commercial name of the contract (the one users usually know).
    pub commercial_name: String,
}

/// Location, information and status of a bike renting station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Station {
    /// Name of the station.
    pub name: String,

    /// Name of the contract the station belongs to.
    pub contract_name: String,

    /// Number of the station. Not an id: only unique inside a contract.
    pub number: i32,

    /// Address of the station. Raw data; sometimes more of a comment than
    /// an address.
    pub address: String,

    /// Position of the station in WGS84 format.
    pub position: Position,

    /// Whether the station is `"OPEN"` or `"CLOSED"`.
    pub status: String,

    /// Timestamp of the last update of this snapshot.
    pub last_update: String,

    /// Whether the station has a payment terminal.
    pub banking: bool,

    /// Whether this is a bonus station.
    pub bonus: bool,

    /// Whether the station is connected to its backend.
    pub connected: bool,

    /// Whether the station allows overflow bike returns.
    pub overflow: bool,

    /// Total capacity and availabilities across the whole station.
    pub total_stands: Stands,

    /// Capacity and availabilities of the physical bike stands.
    pub main_stands: Stands,

    /// Capacity and availabilities of the overflow area.
    pub overflow_stands: Stands,
}

/// Location, information and status of a bike parking facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Park {
    /// Name of the park.
    pub name: String,

    /// Identification number of the park within its contract.
    pub number: i32,

    /// Name of the contract the park belongs to.
    pub contract_name: String,

    /// Address of the park. Raw data, same caveat as [`Station::address`].
    pub address: String,

    /// Park's zip code.
    pub zip_code: String,

    /// Whether the park is `"OPEN"` or `"CLOSED"`.
    pub status: String,

    /// Position of the park in WGS84 format.
    pub position: Position,

    /// `"FREE_ACCESS"` or `"SECURED"`.
    pub access_type: String,

    /// `"SINGLE"` or `"COLLECTIVE"`.
    pub locker_type: String,

    /// Park's city.
    pub city: String,

    /// Whether the park is guarded.
    pub has_surveillance: bool,

    /// Whether the park is free of charge.
    pub is_free: bool,

    /// Whether the park is off street.
    pub is_off_street: bool,

    /// Whether the park can charge eBikes.
    pub has_electric_support: bool,

    /// Whether the park has a customer office.
    pub has_physical_reception: bool,
}

/// A position in WGS84 decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Capacity and current availabilities of a group of bike stands.
///
/// `availabilities.bikes + availabilities.stands <= capacity` is the
/// expected physical relationship; the API does not strictly enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stands {
    /// Fixed number of places in this group.
    pub capacity: i32,

    /// Fluctuating bike/slot counts.
    pub availabilities: Availabilities,
}

/// Current bike and empty-slot counts within a stand group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Availabilities {
    /// Bikes currently docked.
    pub bikes: i32,

    /// Empty stand slots.
    pub stands: i32,
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn station_round_trips_through_json() {
        let station = fixtures::station();
        let json = serde_json::to_string(&station).unwrap();
        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, station);
    }

    #[test]
    fn park_round_trips_through_json() {
        let park = fixtures::park();
        let json = serde_json::to_string(&park).unwrap();
        let back: Park = serde_json::from_str(&json).unwrap();
        assert_eq!(back, park);
    }

    #[test]
    fn contract_round_trips_through_json() {
        let contract = fixtures::contract();
        let json = serde_json::to_string(&contract).unwrap();
        let back: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contract);
    }

    #[test]
    fn station_uses_upstream_wire_names() {
        let value = serde_json::to_value(fixtures::station()).unwrap();
        assert_eq!(value["contractName"], "Lyon");
        assert_eq!(value["lastUpdate"], "2019-04-08T12:23:34Z");
        assert_eq!(value["totalStands"]["capacity"], 40);
        assert_eq!(value["totalStands"]["availabilities"]["bikes"], 15);
    }

    #[test]
    fn park_uses_upstream_wire_names() {
        let value = serde_json::to_value(fixtures::park()).unwrap();
        assert_eq!(value["zipCode"], "44400");
        assert_eq!(value["accessType"], "FREE_ACCESS");
        assert_eq!(value["hasPhysicalReception"], false);
    }

    #[test]
    fn contract_uses_snake_case_wire_names() {
        let value = serde_json::to_value(fixtures::contract()).unwrap();
        assert_eq!(value["country_code"], "FR");
        assert_eq!(value["commercial_name"], "Vélo'v");
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let station: Station = serde_json::from_str("{}").unwrap();
        assert_eq!(station, Station::default());
        assert_eq!(station.total_stands.capacity, 0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let contract: Contract =
            serde_json::from_str(r#"{"name":"Lyon","some_future_field":42}"#).unwrap();
        assert_eq!(contract.name, "Lyon");
    }
}
