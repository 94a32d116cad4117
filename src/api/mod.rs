//! Market-data acquisition.

mod client;
mod error;

pub use client::{StooqClient, STOOQ_BASE};
pub use error::ApiError;
