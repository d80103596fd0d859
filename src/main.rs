use clap::Parser;
use codice_fiscale::utils::{logger, validation::Validate};
use codice_fiscale::{CliConfig, DecodedIdentity, LocationTable, PlaceKind, Sex, Validator};

/// Demonstration codes covering each validation outcome, used when no
/// codes are passed on the command line.
const DEMO_CODES: [&str; 6] = [
    "RSSMRA80A15H501I", // valid, male, born in Rome
    "MRCRSS75T55Z100L", // valid, female, born abroad
    "RSSMRA80A15H501Z", // wrong check character
    "RSSMRA80B30H501X", // February 30th
    "RSSMRA80A15Z999M", // place code absent from the table
    "ABCDE112A34B567C", // digit inside the name code
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting codice-fiscale CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let table = match LocationTable::from_file(&config.location_file) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("❌ Failed to load location table: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let validator = Validator::new(table);

    let codes: Vec<String> = if config.codes.is_empty() {
        tracing::info!("No codes given, running the demonstration set");
        DEMO_CODES.iter().map(|code| code.to_string()).collect()
    } else {
        config.codes.clone()
    };

    for code in &codes {
        println!("\nCodice Fiscale: {}", code);
        match validator.validate(code) {
            Ok(identity) => print_identity(&identity),
            Err(e) => println!("❌ Invalid: {}", e),
        }
    }

    Ok(())
}

fn print_identity(identity: &DecodedIdentity) {
    if identity.birth_place_kind == PlaceKind::Unknown {
        tracing::warn!(
            "No matching location found for code: {}",
            identity.birth_place_code
        );
    }

    let sex = match identity.sex {
        Sex::Male => "Male",
        Sex::Female => "Female",
    };
    let kind = match identity.birth_place_kind {
        PlaceKind::Municipality => "Comune",
        PlaceKind::Foreign => "Estero",
        PlaceKind::Unknown => "unknown",
    };

    println!("✅ Valid");
    println!("   Sex: {}", sex);
    println!("   Age: {} years", identity.age);
    println!("   Birth date: {}", identity.birth_date);
    println!(
        "   Birth place: {} ({}) - {}",
        identity.birth_place_code, kind, identity.birth_place_name
    );
}
