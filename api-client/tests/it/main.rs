#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod helper;
mod shipments;
