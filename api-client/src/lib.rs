#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod client;
mod error;
mod models;

pub use reqwest::StatusCode;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::{Error, Result};
pub use models::*;
