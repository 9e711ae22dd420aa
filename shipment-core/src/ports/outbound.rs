use async_trait::async_trait;

use crate::{Result, Shipment, ShipmentId, ShipmentsPage, ShipmentsQuery};

/// Read side of the shipment store as the web API consumes it.
#[async_trait]
pub trait WebApiOutboundPort: Send + Sync {
    async fn shipments(&self, query: &ShipmentsQuery) -> Result<ShipmentsPage>;
    async fn shipment_by_id(&self, id: ShipmentId) -> Result<Option<Shipment>>;
}
