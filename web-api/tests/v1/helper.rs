use chrono::{DateTime, Duration, TimeZone, Utc};
use shipment_core::{
    test_helper::InMemoryStorage, NewShipment, Shipment, ShipmentStatus, WebApiInboundPort,
};

pub fn departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn new_shipment(container_id: &str, origin_port: &str, destination_port: &str) -> NewShipment {
    NewShipment {
        container_id: container_id.into(),
        origin_port: origin_port.into(),
        destination_port: destination_port.into(),
        departure_date: departure(),
        status: ShipmentStatus::InTransit,
        eta: departure() + Duration::days(20),
        last_known_lat: None,
        last_known_lng: None,
    }
}

pub async fn seed(storage: &InMemoryStorage, shipments: &[NewShipment]) -> Vec<Shipment> {
    let mut stored = Vec::with_capacity(shipments.len());
    for shipment in shipments {
        stored.push(storage.create_shipment(shipment).await.unwrap());
    }
    stored
}
