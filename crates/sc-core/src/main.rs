//! Sparecast - spare-pool contingency probability calculator.
//!
//! Thin presentation layer over the `sc_core` library: collect inputs,
//! validate, run the model once per requested spare level, print
//! rounded results. All numerical work lives in the library crates.

use clap::{Args, Parser, Subcommand};

use sc_common::{Error, OutputFormat};
use sc_core::exit_codes::ExitCode;
use sc_core::logging::{init_logging, LogFormat};
use sc_core::model::{build_transition_matrix, check_spare_count};
use sc_core::{DurationUnit, ModelInputs, Report};

/// Steady-state contingency probabilities for a redundant fleet with a
/// spare pool.
#[derive(Parser)]
#[command(name = "sparecast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Emit logs as JSON lines instead of text
    #[arg(long, global = true)]
    log_json: bool,
}

/// Fleet and timing parameters shared by all commands.
#[derive(Args, Debug)]
struct FleetArgs {
    /// Number of installed units (at least 2)
    #[arg(long, short = 'u')]
    units: u32,

    /// Per-unit failures per year
    #[arg(long, short = 'a')]
    failure_rate: f64,

    /// Spare procurement lead time
    #[arg(long)]
    lead_time: f64,

    /// Unit for the lead time
    #[arg(long, default_value = "years")]
    lead_unit: DurationUnit,

    /// Spare installation time
    #[arg(long)]
    install_time: f64,

    /// Unit for the installation time
    #[arg(long, default_value = "weeks")]
    install_unit: DurationUnit,
}

impl FleetArgs {
    fn to_inputs(&self) -> ModelInputs {
        ModelInputs {
            unit_count: self.units,
            failure_rate: self.failure_rate,
            lead_time: self.lead_time,
            lead_unit: self.lead_unit,
            installation_time: self.install_time,
            install_unit: self.install_unit,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute contingency bands for one or more spare levels
    Evaluate(EvaluateArgs),

    /// Dump the transition matrix for one spare level (diagnostic)
    Matrix(MatrixArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[command(flatten)]
    fleet: FleetArgs,

    /// Spare levels to report, comma separated
    #[arg(long, short = 's', value_delimiter = ',', default_value = "0,1,2")]
    spares: Vec<u32>,
}

#[derive(Args, Debug)]
struct MatrixArgs {
    #[command(flatten)]
    fleet: FleetArgs,

    /// Spare level to build the matrix for
    #[arg(long, short = 's', default_value_t = 0)]
    spares: u32,
}

fn main() {
    let cli = Cli::parse();
    let log_format = if cli.global.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(cli.global.verbose, cli.global.quiet, log_format);

    let result = match &cli.command {
        Commands::Evaluate(args) => run_evaluate(args, cli.global.format),
        Commands::Matrix(args) => run_matrix(args, cli.global.format),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Clean.as_i32()),
        Err(err) => {
            tracing::error!(code = err.code(), category = %err.category(), "{err}");
            eprintln!("error: {err}");
            std::process::exit(ExitCode::from_error(&err).as_i32());
        }
    }
}

fn run_evaluate(args: &EvaluateArgs, format: OutputFormat) -> Result<(), Error> {
    let inputs = args.fleet.to_inputs();
    let report = Report::compute(&inputs, &args.spares)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print!("{}", report.to_table()),
    }
    Ok(())
}

fn run_matrix(args: &MatrixArgs, format: OutputFormat) -> Result<(), Error> {
    check_spare_count(args.spares)?;
    let params = args.fleet.to_inputs().normalize()?;
    let matrix = build_transition_matrix(&params, args.spares)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
        OutputFormat::Table => {
            for row in matrix.rows() {
                let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.6}")).collect();
                println!("{}", cells.join(" "));
            }
        }
    }
    Ok(())
}
