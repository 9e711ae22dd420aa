#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod domain;
mod error;
mod ports;
mod queries;

pub mod eta;

#[cfg(feature = "test")]
pub mod test_helper;

pub use domain::*;
pub use error::*;
pub use ports::*;
pub use queries::*;
