pub mod client;
pub mod error;
pub mod gateway;
pub mod request;
pub mod types;

pub use addrlookup_core::{ClassificationFilter, SearchScope};
pub use client::{AddressLookupClient, LookupOutcome};
pub use error::LookupError;
pub use gateway::{GatewayResponse, HttpGateway, ReqwestGateway};
pub use request::{
    build_by_free_text, build_by_post_code, build_by_uprn, build_by_uprn_extended, build_by_usrn,
    Identifier, LookupRequest,
};
pub use types::AddressRecord;
