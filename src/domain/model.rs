use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Name reported when a place code is missing from both lookup namespaces.
pub const UNKNOWN_PLACE_NAME: &str = "unknown location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceKind {
    /// Italian municipality ("Comune").
    Municipality,
    /// Foreign country ("Estero"), place codes prefixed with 'Z'.
    Foreign,
    /// Code absent from both namespaces of the location table.
    Unknown,
}

/// Everything a structurally valid tax code reveals about its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    pub sex: Sex,
    pub birth_date: NaiveDate,
    /// Whole years elapsed since the birth date, relative to the
    /// reference date the code was validated against.
    pub age: i32,
    pub birth_place_code: String,
    pub birth_place_name: String,
    pub birth_place_kind: PlaceKind,
}

/// A place code resolved against the location table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlace {
    pub name: String,
    pub kind: PlaceKind,
}
