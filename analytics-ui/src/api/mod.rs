mod client;
mod error;

pub use client::{ApiClient, ConnectionReport};
pub use error::ApiError;
