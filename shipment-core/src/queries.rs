use crate::{Shipment, ShipmentStatus};

pub const DEFAULT_LIMIT: u32 = 50;
pub const MAX_LIMIT: u32 = 100;

/// Filter and page selection for shipment listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentsQuery {
    /// Case-insensitive substring match on container id, origin port and
    /// destination port.
    pub search: Option<String>,
    pub status: Option<ShipmentStatus>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for ShipmentsQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// One page of shipments together with the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentsPage {
    pub shipments: Vec<Shipment>,
    pub total: u64,
}

impl ShipmentsPage {
    pub fn has_more(&self, query: &ShipmentsQuery) -> bool {
        u64::from(query.offset) + (self.shipments.len() as u64) < self.total
    }
}
