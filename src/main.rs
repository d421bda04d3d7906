//! chaircare - CLI for job quotes and chair QR payloads.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use rust_decimal::Decimal;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use chaircare_rs::{
    load_tables, qr, render_itemized, PricingCalculator, PricingRequest, ServiceType, TravelTier,
    Urgency,
};

/// Price ChairCare jobs and encode/decode chair QR payloads.
#[derive(Parser, Debug)]
#[command(name = "chaircare")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a job and print the itemized breakdown
    Quote(QuoteArgs),

    /// Quick VAT-inclusive estimate without add-ons, travel or urgency
    Estimate {
        /// Service type (cleaning, repair, maintenance, inspection, assessment)
        #[arg(short, long)]
        service: ServiceType,

        /// Number of chairs
        #[arg(short, long)]
        chairs: u32,

        /// Pricing tables JSON file (defaults to the standard tables)
        #[arg(long)]
        tables: Option<PathBuf>,
    },

    /// Chair QR payload encoding and decoding
    Qr {
        #[command(subcommand)]
        action: QrCommand,
    },

    /// Print the effective pricing tables as JSON
    Tables {
        /// Pricing tables JSON file (defaults to the standard tables)
        #[arg(long)]
        tables: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct QuoteArgs {
    /// Read the request from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["service", "chairs", "add_on", "travel", "urgent", "discount", "parts"])]
    request: Option<PathBuf>,

    /// Service type (cleaning, repair, maintenance, inspection, assessment)
    #[arg(short, long, required_unless_present = "request")]
    service: Option<ServiceType>,

    /// Number of chairs
    #[arg(short, long, required_unless_present = "request")]
    chairs: Option<u32>,

    /// Additional service key (repeatable)
    #[arg(long = "add-on")]
    add_on: Vec<String>,

    /// Travel tier (local, regional, extended, remote)
    #[arg(long)]
    travel: Option<TravelTier>,

    /// Apply the urgent surcharge
    #[arg(long)]
    urgent: bool,

    /// Discount subtracted before VAT
    #[arg(long)]
    discount: Option<Decimal>,

    /// Parts and materials cost added before VAT
    #[arg(long)]
    parts: Option<Decimal>,

    /// Pricing tables JSON file (defaults to the standard tables)
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum QrCommand {
    /// Print the payload for a chair
    Encode {
        /// Chair record id
        #[arg(long)]
        id: String,

        /// Chair display number
        #[arg(long)]
        number: String,

        /// Trailing category segment, as written by bulk chair creation
        #[arg(long)]
        category: Option<String>,
    },

    /// Decode scanned payloads (one per line on stdin when none are given)
    Decode {
        payloads: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Quote(quote) => run_quote(quote),
        Command::Estimate {
            service,
            chairs,
            tables,
        } => {
            let tables = load_tables(tables.as_deref()).context("Failed to load pricing tables")?;
            let estimate = PricingCalculator::new(&tables).estimate(service, chairs)?;
            println!("{}", chaircare_rs::format_currency(estimate));
            Ok(())
        }
        Command::Qr { action } => run_qr(action),
        Command::Tables { tables } => {
            let tables = load_tables(tables.as_deref()).context("Failed to load pricing tables")?;
            println!("{}", serde_json::to_string_pretty(&tables)?);
            Ok(())
        }
    }
}

fn run_quote(args: QuoteArgs) -> Result<()> {
    let request = match &args.request {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<PricingRequest>(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => request_from_flags(&args)?,
    };

    let tables = load_tables(args.tables.as_deref()).context("Failed to load pricing tables")?;
    let breakdown = match PricingCalculator::new(&tables).calculate(&request) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            error!("{}", err);
            anyhow::bail!("Pricing failed");
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render_itemized(&breakdown));
    }

    info!(
        "Quoted {} job for {} chair(s)",
        request.service_type, request.chair_count
    );

    Ok(())
}

fn request_from_flags(args: &QuoteArgs) -> Result<PricingRequest> {
    let service = args.service.context("--service is required")?;
    let chairs = args.chairs.context("--chairs is required")?;

    let mut request = PricingRequest::new(service, chairs)
        .with_travel_tier(args.travel.unwrap_or_default())
        .with_discount(args.discount.unwrap_or_default())
        .with_parts_cost(args.parts.unwrap_or_default());
    if args.urgent {
        request = request.with_urgency(Urgency::Urgent);
    }
    for key in &args.add_on {
        request = request.with_add_on(key.as_str());
    }

    Ok(request)
}

fn run_qr(action: QrCommand) -> Result<()> {
    match action {
        QrCommand::Encode {
            id,
            number,
            category,
        } => {
            let payload = match category {
                Some(category) => qr::encode_with_category(&id, &number, &category),
                None => qr::encode(&id, &number),
            };
            println!("{}", payload);
        }
        QrCommand::Decode { payloads } => {
            if payloads.is_empty() {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let line = line.context("Failed to read stdin")?;
                    print_decoded(line.trim_end_matches('\r'))?;
                }
            } else {
                for payload in &payloads {
                    print_decoded(payload)?;
                }
            }
        }
    }
    Ok(())
}

fn print_decoded(payload: &str) -> Result<()> {
    let decoded = qr::decode(payload);
    if decoded.is_low_confidence() {
        warn!("Unrecognized QR payload, using it verbatim: {:?}", payload);
    }
    println!("{}", serde_json::to_string(&decoded)?);
    Ok(())
}
