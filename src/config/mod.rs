use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "codice-fiscale")]
#[command(about = "Validate Italian tax codes and decode the identity they carry")]
pub struct CliConfig {
    /// Tax codes to validate; runs a built-in demonstration set when empty
    pub codes: Vec<String>,

    #[arg(long, default_value = "location_codes.json")]
    pub location_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("location_file", &self.location_file)?;

        for code in &self.codes {
            validate_non_empty_string("codes", code)?;
        }

        Ok(())
    }
}
