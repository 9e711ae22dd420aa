use chrono::{DateTime, Utc};
use shipment_core::ShipmentId;
use snafu::ResultExt;

use crate::error::{Error, StatusSnafu};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Shipment {
    pub shipment_id: i64,
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    pub status: String,
    pub eta: DateTime<Utc>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Shipment> for shipment_core::Shipment {
    type Error = Error;

    fn try_from(v: Shipment) -> Result<Self, Self::Error> {
        let status = v.status.parse().context(StatusSnafu {
            status: v.status.clone(),
        })?;

        Ok(Self {
            id: ShipmentId(v.shipment_id),
            container_id: v.container_id,
            origin_port: v.origin_port,
            destination_port: v.destination_port,
            departure_date: v.departure_date,
            status,
            eta: v.eta,
            last_known_lat: v.last_known_lat,
            last_known_lng: v.last_known_lng,
            created_at: v.created_at,
            updated_at: v.updated_at,
        })
    }
}
