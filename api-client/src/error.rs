use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
    #[snafu(display("HTTP transport error"))]
    Request {
        #[snafu(implicit)]
        location: Location,
        source: reqwest_middleware::Error,
    },
    #[snafu(display("failed to decode response body"))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        source: reqwest::Error,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::FailedRequest { status, .. } => Some(*status),
            Error::Request { .. } | Error::Decode { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Error::FailedRequest { body, .. } => Some(body),
            Error::Request { .. } | Error::Decode { .. } => None,
        }
    }
}
