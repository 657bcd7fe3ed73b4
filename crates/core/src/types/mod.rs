//! Core value types shared by the contracts.

pub mod date;
pub mod id;

pub use date::{DateError, IsoDate};
pub use id::*;
