/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod credit;
pub mod error;
pub mod market;
pub mod orders;

pub use error::{Result, TemError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, TemClient};
pub use orders::ORDER_PAGE_SIZE;
