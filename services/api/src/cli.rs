use crate::infra::ConfiguredBenchmarks;
use crate::report::{render_report, CalculationReport};
use crate::server;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use firb_calculator::calculator::{CalculationSubmission, CalculatorService, CurrencySubmission};
use firb_calculator::config::AppConfig;
use firb_calculator::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "FIRB Purchase Cost Calculator",
    about = "Check foreign buyer eligibility and estimate Australian property purchase costs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Price a single purchase and print an itemized report
    Calculate(CalculateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// citizen, permanent, temporary, or foreign
    #[arg(long)]
    pub(crate) citizenship: String,
    /// Visa subclass, recorded for temporary residents
    #[arg(long)]
    pub(crate) visa_subtype: Option<String>,
    /// Mark a citizen or permanent resident as living overseas
    #[arg(long)]
    pub(crate) overseas: bool,
    /// newDwelling, established, vacantLand, or commercial
    #[arg(long)]
    pub(crate) property_type: String,
    /// Purchase price in AUD
    #[arg(long)]
    pub(crate) value: f64,
    /// State or territory code, e.g. NSW
    #[arg(long)]
    pub(crate) state: String,
    /// individual, company, or trust
    #[arg(long)]
    pub(crate) entity_type: Option<String>,
    #[arg(long)]
    pub(crate) first_home_buyer: bool,
    /// Deposit as a percentage of the price
    #[arg(long, default_value_t = 20.0)]
    pub(crate) deposit: f64,
    /// Benchmark classification such as house or unit
    #[arg(long)]
    pub(crate) classification: Option<String>,
    #[arg(long)]
    pub(crate) bedrooms: Option<u8>,
    /// Report figures in this currency (three-letter code)
    #[arg(long, requires = "aud_rate")]
    pub(crate) currency: Option<String>,
    /// Units of --currency per AUD
    #[arg(long, requires = "currency")]
    pub(crate) aud_rate: Option<f64>,
    /// Benchmark CSV; defaults to FIRB_BENCHMARK_CSV
    #[arg(long)]
    pub(crate) benchmarks: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl CalculateArgs {
    pub(crate) fn submission(&self) -> CalculationSubmission {
        let currency = match (&self.currency, self.aud_rate) {
            (Some(code), Some(aud_rate)) => Some(CurrencySubmission {
                code: code.clone(),
                aud_rate,
            }),
            _ => None,
        };

        CalculationSubmission {
            citizenship_status: self.citizenship.clone(),
            visa_subtype: self.visa_subtype.clone(),
            ordinarily_resident: self.overseas.then_some(false),
            property_type: self.property_type.clone(),
            property_value: self.value,
            state: self.state.clone(),
            first_home_buyer: Some(self.first_home_buyer),
            entity_type: self.entity_type.clone(),
            deposit_percent: Some(self.deposit),
            classification: self.classification.clone(),
            bedrooms: self.bedrooms,
            currency,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculation(args),
    }
}

fn run_calculation(args: CalculateArgs) -> Result<(), AppError> {
    let csv_path = match args.benchmarks.clone() {
        Some(path) => Some(path),
        None => AppConfig::load()?.benchmarks.csv_path,
    };
    let service = CalculatorService::new(Arc::new(ConfiguredBenchmarks::from_path(csv_path)));

    let outcome = service.calculate(args.submission())?;
    let report = CalculationReport::new(outcome, Utc::now());

    if args.json {
        let payload = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{payload}");
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}
