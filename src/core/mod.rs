pub mod checksum;
pub mod validator;

pub use crate::domain::model::{
    DecodedIdentity, PlaceKind, ResolvedPlace, Sex, UNKNOWN_PLACE_NAME,
};
pub use crate::domain::ports::LocationLookup;
pub use crate::utils::error::ValidationError;
