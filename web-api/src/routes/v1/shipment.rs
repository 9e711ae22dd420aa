use actix_web::{
    web::{self, Path},
    HttpResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shipment_core::{
    NewShipment, ShipmentId, ShipmentStatus, ShipmentUpdate, ShipmentsQuery, DEFAULT_LIMIT,
    MAX_LIMIT,
};
use tracing::{event, Level};
use utoipa::{IntoParams, ToSchema};

use crate::{error::ApiError, response::Response, Database};

#[derive(Default, Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentsParams {
    /// Case-insensitive substring match on container id, origin port and
    /// destination port.
    pub search: Option<String>,
    pub status: Option<ShipmentStatus>,
    /// Page size, defaults to 50 and is capped at 100.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<ShipmentsParams> for ShipmentsQuery {
    fn from(v: ShipmentsParams) -> Self {
        ShipmentsQuery {
            search: v.search.filter(|s| !s.is_empty()),
            status: v.status,
            limit: v.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
            offset: v.offset.unwrap_or(0),
        }
    }
}

#[utoipa::path(
    get,
    path = "/shipments",
    params(ShipmentsParams),
    responses(
        (status = 200, description = "a page of shipments, newest first", body = ShipmentsResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn shipments<T: Database>(
    db: web::Data<T>,
    params: web::Query<ShipmentsParams>,
) -> Result<Response<ShipmentsResponse>, ApiError> {
    let query: ShipmentsQuery = params.into_inner().into();

    let page = db.shipments(&query).await.map_err(|e| {
        event!(Level::ERROR, "failed to retrieve shipments: {:?}", e);
        ApiError::InternalServerError
    })?;

    let pagination = Pagination {
        total: page.total,
        limit: query.limit,
        offset: query.offset,
        has_more: page.has_more(&query),
    };

    Ok(Response::new(ShipmentsResponse {
        data: page.shipments.into_iter().map(Shipment::from).collect(),
        pagination,
    }))
}

#[utoipa::path(
    get,
    path = "/shipments/{id}",
    params(
        ("id" = i64, Path, description = "shipment id"),
    ),
    responses(
        (status = 200, description = "the requested shipment", body = Shipment),
        (status = 400, description = "the provided id was not a positive integer", body = ErrorResponse),
        (status = 404, description = "no shipment with the provided id exists", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn shipment_by_id<T: Database>(
    db: web::Data<T>,
    id: Path<i64>,
) -> Result<Response<Shipment>, ApiError> {
    let id = shipment_id(id.into_inner())?;

    let shipment = db
        .shipment_by_id(id)
        .await
        .map_err(|e| {
            event!(Level::ERROR, "failed to retrieve shipment {}: {:?}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::ShipmentNotFound)?;

    Ok(Response::new(shipment.into()))
}

#[utoipa::path(
    post,
    path = "/shipments",
    request_body = CreateShipmentBody,
    responses(
        (status = 201, description = "the stored shipment", body = Shipment),
        (status = 400, description = "the provided shipment was invalid", body = ErrorResponse),
        (status = 409, description = "a shipment with the provided container id already exists", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn create_shipment<T: Database>(
    db: web::Data<T>,
    body: web::Json<CreateShipmentBody>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    validate_new_shipment(&body)?;

    let new_shipment = NewShipment {
        container_id: body.container_id,
        origin_port: body.origin_port,
        destination_port: body.destination_port,
        departure_date: body.departure_date,
        status: body.status,
        eta: body.eta,
        last_known_lat: body.last_known_lat,
        last_known_lng: body.last_known_lng,
    };

    let created = db
        .create_shipment(&new_shipment)
        .await
        .map_err(|e| match e {
            shipment_core::Error::DuplicateContainerId { .. } => ApiError::DuplicateContainerId,
            e => {
                event!(Level::ERROR, "failed to create shipment: {:?}", e);
                ApiError::InternalServerError
            }
        })?;

    Ok(HttpResponse::Created().json(Shipment::from(created)))
}

#[utoipa::path(
    put,
    path = "/shipments/{id}",
    params(
        ("id" = i64, Path, description = "shipment id"),
    ),
    request_body = UpdateShipmentBody,
    responses(
        (status = 200, description = "the updated shipment", body = Shipment),
        (status = 400, description = "the provided patch was invalid", body = ErrorResponse),
        (status = 404, description = "no shipment with the provided id exists", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn update_shipment<T: Database>(
    db: web::Data<T>,
    id: Path<i64>,
    body: web::Json<UpdateShipmentBody>,
) -> Result<Response<Shipment>, ApiError> {
    let id = shipment_id(id.into_inner())?;
    let body = body.into_inner();

    validate_position(body.last_known_lat, body.last_known_lng)?;

    let update = ShipmentUpdate {
        status: body.status,
        eta: body.eta,
        last_known_lat: body.last_known_lat,
        last_known_lng: body.last_known_lng,
    };

    if update.is_empty() {
        return Err(ApiError::EmptyShipmentUpdate);
    }

    let updated = db
        .update_shipment(id, &update)
        .await
        .map_err(|e| {
            event!(Level::ERROR, "failed to update shipment {}: {:?}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::ShipmentNotFound)?;

    Ok(Response::new(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/shipments/{id}",
    params(
        ("id" = i64, Path, description = "shipment id"),
    ),
    responses(
        (status = 204, description = "the shipment was deleted"),
        (status = 400, description = "the provided id was not a positive integer", body = ErrorResponse),
        (status = 404, description = "no shipment with the provided id exists", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn delete_shipment<T: Database>(
    db: web::Data<T>,
    id: Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = shipment_id(id.into_inner())?;

    let deleted = db.delete_shipment(id).await.map_err(|e| {
        event!(Level::ERROR, "failed to delete shipment {}: {:?}", id, e);
        ApiError::InternalServerError
    })?;

    if !deleted {
        return Err(ApiError::ShipmentNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

fn shipment_id(id: i64) -> Result<ShipmentId, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidShipmentId);
    }
    Ok(ShipmentId(id))
}

fn validate_new_shipment(body: &CreateShipmentBody) -> Result<(), ApiError> {
    if body.container_id.trim().is_empty() {
        return Err(ApiError::EmptyContainerId);
    }
    if body.origin_port.trim().is_empty() {
        return Err(ApiError::EmptyOriginPort);
    }
    if body.destination_port.trim().is_empty() {
        return Err(ApiError::EmptyDestinationPort);
    }
    validate_position(body.last_known_lat, body.last_known_lng)
}

fn validate_position(lat: Option<f64>, lng: Option<f64>) -> Result<(), ApiError> {
    if let Some(lat) = lat {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ApiError::InvalidLatitude { lat });
        }
    }
    if let Some(lng) = lng {
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ApiError::InvalidLongitude { lng });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: i64,
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    pub status: ShipmentStatus,
    pub eta: DateTime<Utc>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<shipment_core::Shipment> for Shipment {
    fn from(v: shipment_core::Shipment) -> Self {
        Shipment {
            id: v.id.into_inner(),
            container_id: v.container_id,
            origin_port: v.origin_port,
            destination_port: v.destination_port,
            departure_date: v.departure_date,
            status: v.status,
            eta: v.eta,
            last_known_lat: v.last_known_lat,
            last_known_lng: v.last_known_lng,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentsResponse {
    pub data: Vec<Shipment>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentBody {
    pub container_id: String,
    pub origin_port: String,
    pub destination_port: String,
    pub departure_date: DateTime<Utc>,
    #[serde(default)]
    pub status: ShipmentStatus,
    pub eta: DateTime<Utc>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
}

#[derive(Default, Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipmentBody {
    pub status: Option<ShipmentStatus>,
    pub eta: Option<DateTime<Utc>>,
    pub last_known_lat: Option<f64>,
    pub last_known_lng: Option<f64>,
}
