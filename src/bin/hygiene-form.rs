use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use chrono::FixedOffset;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use hygiene_form::{AssembleOpts, DayBoundary, DocumentAssembler, FormInput, RunResponse};

/// Render a hand-hygiene observation form to PDF.
///
/// Prints exactly one JSON object on stdout: `{"success":true,"path":...}` or
/// `{"success":false,"error":...}`. Logs go to stderr (`RUST_LOG`, default `warn`).
#[derive(Parser, Debug)]
#[command(name = "hygiene-form", version)]
struct Cli {
    /// Output PDF path.
    output: PathBuf,

    /// Input document as a JSON string (`facilityInfo` and `records`).
    json: String,

    /// Split sessions on calendar days at this UTC offset (minutes) instead of the system zone.
    #[arg(long, allow_negative_numbers = true)]
    utc_offset_minutes: Option<i32>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", RunResponse::failure(e.to_string().trim_end()));
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(path) => {
            println!("{}", RunResponse::ok(&path));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            println!("{}", RunResponse::failure(format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let input = FormInput::from_json_str(&cli.json)?;

    let day_boundary = match cli.utc_offset_minutes {
        Some(minutes) => {
            let offset = minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .with_context(|| format!("utc offset {minutes} minutes is out of range"))?;
            DayBoundary::Fixed(offset)
        }
        None => DayBoundary::Local,
    };

    if let Some(parent) = cli.output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let assembler = DocumentAssembler::new(AssembleOpts { day_boundary });
    let path = assembler.assemble(&input.facility_info, &input.records, &cli.output)?;
    Ok(path)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
