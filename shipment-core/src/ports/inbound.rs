use async_trait::async_trait;

use crate::{NewShipment, Result, Shipment, ShipmentId, ShipmentUpdate};

/// Write side of the shipment store.
#[async_trait]
pub trait WebApiInboundPort: Send + Sync {
    /// Stores a new shipment. A reused container id is a
    /// [`DuplicateContainerId`](crate::Error::DuplicateContainerId) error.
    async fn create_shipment(&self, shipment: &NewShipment) -> Result<Shipment>;
    /// Applies a patch, only supplied fields change. `None` when the id is
    /// unknown.
    async fn update_shipment(
        &self,
        id: ShipmentId,
        update: &ShipmentUpdate,
    ) -> Result<Option<Shipment>>;
    /// Removes a shipment, reporting whether it existed.
    async fn delete_shipment(&self, id: ShipmentId) -> Result<bool>;
}
