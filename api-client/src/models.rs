use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shipment_core::{eta::estimate_eta, ShipmentStatus};

/// Listing filter, serialized into query parameters.
#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

/// Paginated listing envelope returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentsResponse {
    pub data: Vec<shipment_core::Shipment>,
    pub pagination: Pagination,
}

/// Shipment creation input. When `eta` is `None` it is estimated from the
/// route before the request is sent, the server stores whatever the client
/// supplies.
#[derive(Debug, Clone)]
pub struct CreateShipment {
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    pub status: ShipmentStatus,
    pub eta: Option<DateTime<Utc>>,
    /// Known route distance in nautical miles. `None` or `0.0` lets the
    /// estimator resolve the distance from the port directory.
    pub known_distance: Option<f64>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    pub status: ShipmentStatus,
    pub eta: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_lng: Option<f64>,
}

impl From<CreateShipment> for CreateShipmentRequest {
    fn from(v: CreateShipment) -> Self {
        let eta = v.eta.unwrap_or_else(|| {
            estimate_eta(
                &v.origin_port,
                &v.destination_port,
                v.departure_date,
                v.known_distance.unwrap_or(0.0),
            )
        });

        Self {
            container_id: v.container_id,
            origin_port: v.origin_port,
            destination_port: v.destination_port,
            departure_date: v.departure_date,
            status: v.status,
            eta,
            last_known_lat: v.last_known_lat,
            last_known_lng: v.last_known_lng,
        }
    }
}

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_lng: Option<f64>,
}
