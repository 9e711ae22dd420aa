use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to connect to postgres"))]
    Connection {
        #[snafu(implicit)]
        location: Location,
        source: sqlx::Error,
    },
    #[snafu(display("a query failed"))]
    Query {
        #[snafu(implicit)]
        location: Location,
        source: sqlx::Error,
    },
    #[snafu(display("shipment with container id '{container_id}' already exists"))]
    DuplicateContainerId {
        #[snafu(implicit)]
        location: Location,
        container_id: String,
    },
    #[snafu(display("invalid shipment status '{status}' in shipments row"))]
    Status {
        #[snafu(implicit)]
        location: Location,
        status: String,
        source: strum::ParseError,
    },
}

impl From<Error> for shipment_core::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::DuplicateContainerId { container_id, .. } => {
                shipment_core::DuplicateContainerIdSnafu { container_id }.build()
            }
            e => shipment_core::StorageSnafu {
                message: format!("{e:?}"),
            }
            .build(),
        }
    }
}
