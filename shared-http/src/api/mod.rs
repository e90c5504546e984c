//! Wire types for the ClickHouse HTTP interface.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
