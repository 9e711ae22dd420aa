mod shipment;

pub use shipment::*;
