/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Tron Energy Market adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod pricing;
pub mod types;

// Re-export commonly used types from http
pub use http::{ClientConfig, DEFAULT_BASE_URL, ORDER_PAGE_SIZE, Result, TemClient, TemError};

// Re-export pricing helpers
pub use pricing::{
    SECONDS_PER_DAY, SUN_PER_TRX, compute_order_payment, effective_duration, sun_to_trx,
    trx_to_sun,
};

// Re-export all types
pub use types::*;
