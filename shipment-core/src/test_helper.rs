use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    DuplicateContainerIdSnafu, NewShipment, Result, Shipment, ShipmentId, ShipmentUpdate,
    ShipmentsPage, ShipmentsQuery, WebApiInboundPort, WebApiOutboundPort,
};

/// Storage double for API tests, matching the filtering, ordering and
/// pagination semantics of the postgres adapter.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    shipments: Vec<Shipment>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebApiOutboundPort for InMemoryStorage {
    async fn shipments(&self, query: &ShipmentsQuery) -> Result<ShipmentsPage> {
        let state = self.state.lock().unwrap();

        let mut matching: Vec<Shipment> = state
            .shipments
            .iter()
            .filter(|s| {
                let search_hit = query.search.as_deref().map_or(true, |term| {
                    let term = term.to_lowercase();
                    s.container_id.to_lowercase().contains(&term)
                        || s.origin_port.to_lowercase().contains(&term)
                        || s.destination_port.to_lowercase().contains(&term)
                });
                let status_hit = query.status.map_or(true, |status| s.status == status);
                search_hit && status_hit
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let shipments = matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();

        Ok(ShipmentsPage { shipments, total })
    }

    async fn shipment_by_id(&self, id: ShipmentId) -> Result<Option<Shipment>> {
        let state = self.state.lock().unwrap();
        Ok(state.shipments.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl WebApiInboundPort for InMemoryStorage {
    async fn create_shipment(&self, shipment: &NewShipment) -> Result<Shipment> {
        let mut state = self.state.lock().unwrap();

        if state
            .shipments
            .iter()
            .any(|s| s.container_id == shipment.container_id)
        {
            return DuplicateContainerIdSnafu {
                container_id: shipment.container_id.clone(),
            }
            .fail();
        }

        state.next_id += 1;
        let now = Utc::now();
        let stored = Shipment {
            id: ShipmentId(state.next_id),
            container_id: shipment.container_id.clone(),
            origin_port: shipment.origin_port.clone(),
            destination_port: shipment.destination_port.clone(),
            departure_date: shipment.departure_date,
            status: shipment.status,
            eta: shipment.eta,
            last_known_lat: shipment.last_known_lat,
            last_known_lng: shipment.last_known_lng,
            created_at: now,
            updated_at: now,
        };
        state.shipments.push(stored.clone());

        Ok(stored)
    }

    async fn update_shipment(
        &self,
        id: ShipmentId,
        update: &ShipmentUpdate,
    ) -> Result<Option<Shipment>> {
        let mut state = self.state.lock().unwrap();

        let Some(stored) = state.shipments.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        if let Some(status) = update.status {
            stored.status = status;
        }
        if let Some(eta) = update.eta {
            stored.eta = eta;
        }
        if let Some(lat) = update.last_known_lat {
            stored.last_known_lat = Some(lat);
        }
        if let Some(lng) = update.last_known_lng {
            stored.last_known_lng = Some(lng);
        }
        stored.updated_at = Utc::now();

        Ok(Some(stored.clone()))
    }

    async fn delete_shipment(&self, id: ShipmentId) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.shipments.len();
        state.shipments.retain(|s| s.id != id);
        Ok(state.shipments.len() < before)
    }
}
