//! Domain value objects for a token issuance.

pub mod metadata;
pub mod request;
pub mod result;

pub use metadata::MetadataDocument;
pub use request::{ImageFormat, IssuanceRequest};
pub use result::IssuanceResult;
