use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("shipment with container id '{container_id}' already exists"))]
    DuplicateContainerId {
        #[snafu(implicit)]
        location: Location,
        container_id: String,
    },
    #[snafu(display("storage operation failed: {message}"))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
}
