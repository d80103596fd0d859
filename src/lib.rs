pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::location_table::{LocationEntry, LocationTable};
pub use core::checksum::check_character;
pub use core::validator::Validator;
pub use domain::model::{DecodedIdentity, PlaceKind, ResolvedPlace, Sex, UNKNOWN_PLACE_NAME};
pub use domain::ports::LocationLookup;
pub use utils::error::{CfError, Result, ValidationError};
