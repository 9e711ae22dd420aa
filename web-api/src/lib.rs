#![deny(warnings)]
#![deny(rust_2018_idioms)]

use routes::v1;
use shipment_core::{ShipmentStatus, WebApiInboundPort, WebApiOutboundPort};
use utoipa::OpenApi;

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;

pub trait Database: WebApiOutboundPort + WebApiInboundPort + 'static {}

impl<T> Database for T where T: WebApiOutboundPort + WebApiInboundPort + 'static {}

#[derive(OpenApi)]
#[openapi(
    paths(
        v1::shipment::shipments,
        v1::shipment::shipment_by_id,
        v1::shipment::create_shipment,
        v1::shipment::update_shipment,
        v1::shipment::delete_shipment,
    ),
    components(
        schemas(
            error::ErrorResponse,
            error::ApiError,
            ShipmentStatus,
            v1::shipment::Shipment,
            v1::shipment::ShipmentsResponse,
            v1::shipment::Pagination,
            v1::shipment::CreateShipmentBody,
            v1::shipment::UpdateShipmentBody,
        )
    ),
    tags(
        (name = "shipment-api", description = "container shipment tracking api")
    ),
)]
pub struct ApiDoc;
