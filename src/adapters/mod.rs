// Adapters layer: concrete implementations for external collaborators.
// The only one this crate ships is the file-backed location table.

pub mod location_table;

pub use location_table::{LocationEntry, LocationTable};
