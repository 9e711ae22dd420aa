pub mod v1;

use actix_web::web::{self, ServiceConfig};

use crate::Database;

pub fn routes<T: Database>(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/v1.0")
            .route("/shipments", web::get().to(v1::shipment::shipments::<T>))
            .route(
                "/shipments",
                web::post().to(v1::shipment::create_shipment::<T>),
            )
            .route(
                "/shipments/{id}",
                web::get().to(v1::shipment::shipment_by_id::<T>),
            )
            .route(
                "/shipments/{id}",
                web::put().to(v1::shipment::update_shipment::<T>),
            )
            .route(
                "/shipments/{id}",
                web::delete().to(v1::shipment::delete_shipment::<T>),
            ),
    );
}
