use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::model::{PlaceKind, ResolvedPlace};
use crate::domain::ports::LocationLookup;
use crate::utils::error::{CfError, Result};

/// One entry of the persisted location file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub code: String,
    pub name: String,
}

/// Persisted shape of the table: two named groups, Italian municipalities
/// under "Comune" and foreign countries under "Estero".
#[derive(Debug, Deserialize)]
struct LocationFile {
    #[serde(rename = "Comune")]
    comune: Vec<LocationEntry>,
    #[serde(rename = "Estero")]
    estero: Vec<LocationEntry>,
}

/// Indexed place-code lookup backed by the JSON location file.
///
/// Built once at startup, read-only afterwards. Codes are unique within
/// each namespace; resolution tries municipalities before foreign
/// countries.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    municipalities: HashMap<String, String>,
    foreign_countries: HashMap<String, String>,
}

impl LocationTable {
    /// Loads the table from a JSON file with the documented shape. Fails
    /// on missing file, malformed JSON, or a payload without both groups.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading location table from: {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        let payload: serde_json::Value = serde_json::from_str(&raw)?;

        if !payload.is_object()
            || payload.get("Comune").is_none()
            || payload.get("Estero").is_none()
        {
            return Err(CfError::TableError {
                message: format!(
                    "location file {} must be a JSON object with \"Comune\" and \"Estero\" groups",
                    path.display()
                ),
            });
        }

        let file: LocationFile = serde_json::from_value(payload)?;
        let table = Self::from_entries(file.comune, file.estero);

        tracing::info!(
            "Loaded location table: {} municipalities, {} foreign countries",
            table.municipalities.len(),
            table.foreign_countries.len()
        );

        Ok(table)
    }

    /// Builds a table directly from entry lists. Used by tests to supply
    /// synthetic tables without touching the filesystem.
    pub fn from_entries(comune: Vec<LocationEntry>, estero: Vec<LocationEntry>) -> Self {
        let municipalities = comune
            .into_iter()
            .map(|entry| (entry.code, entry.name))
            .collect();
        let foreign_countries = estero
            .into_iter()
            .map(|entry| (entry.code, entry.name))
            .collect();

        Self {
            municipalities,
            foreign_countries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.municipalities.is_empty() && self.foreign_countries.is_empty()
    }
}

impl LocationLookup for LocationTable {
    fn resolve(&self, code: &str) -> Option<ResolvedPlace> {
        if let Some(name) = self.municipalities.get(code) {
            return Some(ResolvedPlace {
                name: name.clone(),
                kind: PlaceKind::Municipality,
            });
        }

        self.foreign_countries.get(code).map(|name| ResolvedPlace {
            name: name.clone(),
            kind: PlaceKind::Foreign,
        })
    }
}
