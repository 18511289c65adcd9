extern crate self as common;

pub mod serde;

pub use common_derive::SerdeExt;
