use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub enum ApiError {
    ShipmentNotFound,
    DuplicateContainerId,
    InvalidShipmentId,
    EmptyContainerId,
    EmptyOriginPort,
    EmptyDestinationPort,
    InvalidLatitude { lat: f64 },
    InvalidLongitude { lng: f64 },
    EmptyShipmentUpdate,
    InternalServerError,
}

impl std::error::Error for ApiError {}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    error: ApiError,
    description: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ShipmentNotFound => f.write_str("shipment not found"),
            ApiError::DuplicateContainerId => {
                f.write_str("a shipment with this container id already exists")
            }
            ApiError::InvalidShipmentId => {
                f.write_str("shipment id must be a positive integer")
            }
            ApiError::EmptyContainerId => f.write_str("container id is required"),
            ApiError::EmptyOriginPort => f.write_str("origin port is required"),
            ApiError::EmptyDestinationPort => f.write_str("destination port is required"),
            ApiError::InvalidLatitude { lat } => f.write_fmt(format_args!(
                "invalid latitude: {lat}, must be between -90 and 90"
            )),
            ApiError::InvalidLongitude { lng } => f.write_fmt(format_args!(
                "invalid longitude: {lng}, must be between -180 and 180"
            )),
            ApiError::EmptyShipmentUpdate => {
                f.write_str("at least one field must be provided for update")
            }
            ApiError::InternalServerError => f.write_str("an internal server error occured"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidShipmentId
            | ApiError::EmptyContainerId
            | ApiError::EmptyOriginPort
            | ApiError::EmptyDestinationPort
            | ApiError::InvalidLatitude { lat: _ }
            | ApiError::InvalidLongitude { lng: _ }
            | ApiError::EmptyShipmentUpdate => StatusCode::BAD_REQUEST,
            ApiError::ShipmentNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateContainerId => StatusCode::CONFLICT,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let error = ErrorResponse {
            error: *self,
            description: format!("{self}"),
        };
        HttpResponse::build(self.status_code()).json(&error)
    }
}
