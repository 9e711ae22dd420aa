use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShipmentId(pub i64);

impl ShipmentId {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum ShipmentStatus {
    #[default]
    #[serde(rename = "In Transit")]
    #[strum(serialize = "In Transit")]
    InTransit,
    #[serde(rename = "Arrived at Port")]
    #[strum(serialize = "Arrived at Port")]
    ArrivedAtPort,
    Delayed,
    Delivered,
}

/// A tracked container shipment as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    pub status: ShipmentStatus,
    pub eta: DateTime<Utc>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a shipment. The caller supplies the eta, the service
/// does not recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShipment {
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    #[serde(default)]
    pub status: ShipmentStatus,
    pub eta: DateTime<Utc>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
}

/// Patch of a stored shipment, only supplied fields change.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentUpdate {
    pub status: Option<ShipmentStatus>,
    pub eta: Option<DateTime<Utc>>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
}

impl ShipmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.eta.is_none()
            && self.last_known_lat.is_none()
            && self.last_known_lng.is_none()
    }
}
