// Romanian identity card field extraction from OCR text dumps

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use idscan::{
    contract::{ContractDetails, TemplateData},
    models::{FormatValidationResult, ReviewRules},
    processing::{OcrProvider, TextDumpProvider},
    utils::{config::CONFIG_FILE, AppConfig, IdCardError},
    validation::DetailsValidator,
    IdCardProcessor,
};
use log::error;

#[derive(Parser)]
#[command(name = "idscan", version, about = "Extract identity card fields from OCR output")]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the extracted fields as JSON
    Extract {
        /// OCR dump, one recognised line per line
        dump: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Check that the fields needed for the review form were found
    Validate {
        dump: PathBuf,
        /// Also require birth data and the decomposed address
        #[arg(long)]
        detailed: bool,
    },
    /// Print the combined template data for contract generation
    Contract {
        dump: PathBuf,
        #[arg(long)]
        reg_number: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        place: String,
        #[arg(long)]
        city: String,
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn print_report(title: &str, validation: &FormatValidationResult) {
    println!("{}: {}", title, if validation.is_valid { "VALID" } else { "INVALID" });
    for issue in &validation.issues {
        println!("  - [{}] {}", issue.field, issue.message);
    }
}

fn extract_fields(dump: &Path, pretty: bool) -> Result<bool, IdCardError> {
    let lines = TextDumpProvider.extract_lines(dump)?;
    let result = idscan::extract(&lines);
    for skipped in &result.skipped {
        eprintln!("skipped: {}", skipped);
    }

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(true)
}

fn validate(dump: &Path, detailed: bool) -> Result<bool, IdCardError> {
    let rules = if detailed {
        ReviewRules::detailed()
    } else {
        ReviewRules::basic()
    };
    let processed = IdCardProcessor::new(TextDumpProvider)
        .with_rules(rules)
        .process(dump)?;

    print_report("Review form", &processed.validation);
    Ok(processed.validation.is_valid)
}

fn contract(dump: &Path, details: ContractDetails, config: &Path) -> Result<bool, IdCardError> {
    DetailsValidator::check(&details)?;

    let config = AppConfig::load_or_init(config)?;
    let processed = IdCardProcessor::new(TextDumpProvider).process(dump)?;
    if !processed.validation.is_valid {
        print_report("Review form", &processed.validation);
    }

    let today = Local::now().date_naive();
    let data = TemplateData::build(&processed.result, &details, config.salary, today);
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Extract { dump, pretty } => extract_fields(&dump, pretty),
        Command::Validate { dump, detailed } => validate(&dump, detailed),
        Command::Contract {
            dump,
            reg_number,
            phone,
            place,
            city,
            config,
        } => {
            let details = ContractDetails {
                registration_number: reg_number,
                phone,
                place,
                city,
            };
            contract(&dump, details, &config)
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
