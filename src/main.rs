// src/main.rs
use anyhow::{bail, Context};
use dotenv::dotenv;
use std::env;
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zakat_maal::common::{DonationError, EngineConfig, FieldId, ValidationResult};
use zakat_maal::donations::{DonationForm, DonationService, InMemoryTransactionGateway};
use zakat_maal::ValidationEngine;

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

#[derive(Debug, Default)]
struct CliArgs {
    field: Option<FieldId>,
    submit: bool,
    path: Option<String>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--field" => {
                let name = args.next().context("--field needs a field name")?;
                let field = FieldId::parse(&name)
                    .with_context(|| format!("Unknown field '{}'", name))?;
                parsed.field = Some(field);
            }
            "--submit" => parsed.submit = true,
            "-" => parsed.path = None,
            other if other.starts_with("--") => bail!("Unknown option '{}'", other),
            other => parsed.path = Some(other.to_string()),
        }
    }

    if parsed.submit && parsed.field.is_some() {
        bail!("--field and --submit cannot be combined");
    }

    Ok(parsed)
}

fn read_form(path: Option<&str>) -> anyhow::Result<DonationForm> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read form from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Form is not valid JSON")
}

fn print_result(result: &ValidationResult) -> anyhow::Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = EngineConfig::from_env();
    config.validate()?;
    info!(
        min_nominal = config.min_nominal,
        phone_country_code = %config.phone_country_code,
        "Engine configuration loaded"
    );

    let args = parse_args()?;
    let form = read_form(args.path.as_deref())?;
    let engine = ValidationEngine::new(config.clone());

    // ========================================================================
    // VALIDATION / SUBMISSION
    // ========================================================================

    if let Some(field) = args.field {
        let errors = engine.validate_field(&form, field);
        return print_result(&ValidationResult::from_errors(errors));
    }

    if !args.submit {
        return print_result(&engine.validate_all(&form));
    }

    let gateway = Arc::new(InMemoryTransactionGateway::new(&config));
    let service = DonationService::new(engine, gateway);

    match service.submit(&form).await {
        Ok(instructions) => {
            println!("{}", serde_json::to_string_pretty(&instructions)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(DonationError::Validation(result)) => print_result(&result),
        Err(e) => Err(e.into()),
    }
}
