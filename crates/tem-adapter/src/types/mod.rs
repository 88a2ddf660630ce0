/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod casing;
pub mod enums;
pub mod info;
pub mod models;
pub mod requests;
pub mod responses;
pub(crate) mod serde_helpers;

pub use casing::{decode, decode_value};
pub use enums::*;
pub use info::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
