//! Command-line inspection of `Campaign` messages.
//!
//! Binary input is the protobuf wire format; JSON input and output use the
//! field names of the protobuf schema.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use adwire::ads::resources::FieldAccess;
use adwire::Campaign;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "adwire-inspect", version, about = "Inspect Google Ads campaign messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a binary campaign and print it as JSON
    Decode {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,
    },
    /// Encode a JSON campaign to the binary wire format
    Encode {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,
        /// Output file; standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a campaign and list every violation
    Validate {
        /// Input file; standard input when omitted
        input: Option<PathBuf>,
        #[arg(long, value_enum, env = "ADWIRE_INPUT_FORMAT", default_value_t = Format::Binary)]
        format: Format,
        #[arg(long, value_enum, env = "ADWIRE_STAGE", default_value_t = Stage::Any)]
        stage: Stage,
    },
    /// List campaign fields with their tags and access
    Fields,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Binary,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Stage {
    /// Rules that hold for every campaign
    Any,
    /// Rules for a campaign about to be created
    Create,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input } => decode(input),
        Commands::Encode { input, output } => encode(input, output),
        Commands::Validate {
            input,
            format,
            stage,
        } => validate(input, format, stage),
        Commands::Fields => fields(),
    }
}

fn read_input(input: Option<PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn load(input: Option<PathBuf>, format: Format) -> Result<Campaign> {
    let buf = read_input(input)?;
    log::debug!("read {} bytes of {:?} input", buf.len(), format);
    let campaign = match format {
        Format::Binary => adwire::decode(buf.as_slice()).context("Failed to decode campaign")?,
        Format::Json => serde_json::from_slice(&buf).context("Failed to parse campaign JSON")?,
    };
    Ok(campaign)
}

fn decode(input: Option<PathBuf>) -> Result<ExitCode> {
    let campaign = load(input, Format::Binary)?;
    if !campaign.unknown_fields.is_empty() {
        log::warn!(
            "{} unknown field value(s) are not shown in JSON",
            campaign.unknown_fields.len()
        );
    }
    let json = serde_json::to_string_pretty(&campaign)?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

fn encode(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<ExitCode> {
    let campaign = load(input, Format::Json)?;
    let buf = adwire::encode(&campaign);
    match output {
        Some(path) => {
            fs::write(&path, &buf).with_context(|| format!("Failed to write {}", path.display()))?
        }
        None => io::stdout()
            .write_all(&buf)
            .context("Failed to write standard output")?,
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(input: Option<PathBuf>, format: Format, stage: Stage) -> Result<ExitCode> {
    let campaign = load(input, format)?;
    let result = match stage {
        Stage::Any => campaign.validate(),
        Stage::Create => campaign.validate_for_create(),
    };
    match result {
        Ok(()) => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            for violation in error.violations() {
                eprintln!("{}", violation);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn fields() -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    for field in Campaign::FIELDS {
        let access = match field.access {
            FieldAccess::Mutable => "mutable",
            FieldAccess::Immutable => "immutable",
            FieldAccess::ReadOnly => "read-only",
        };
        let filterable = if Campaign::NON_FILTERABLE.contains(&field.name) {
            "  (not filterable)"
        } else {
            ""
        };
        writeln!(
            stdout,
            "{:>3}  {:<32} {}{}",
            field.tag, field.name, access, filterable
        )?;
    }
    Ok(ExitCode::SUCCESS)
}
