use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pixgen::interfaces::csv::code_writer::{CodeWriter, GeneratedCode, write_json};
use pixgen::interfaces::csv::request_reader::RequestReader;
use pixgen::{Amount, PaymentRequest, generate};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Static Pix \"Copia e Cola\" code generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a single code and print it
    Generate {
        /// Pix key of the payee (email, phone, document or random key)
        #[arg(long)]
        key: String,

        /// Payee name, at most 25 characters
        #[arg(long)]
        name: String,

        /// Payee city, at most 15 characters
        #[arg(long)]
        city: String,

        /// Fixed amount, e.g. 25.00. Omit to let the payer type it in.
        #[arg(long)]
        amount: Option<Amount>,

        /// Free-text description shown to the payer
        #[arg(long)]
        description: Option<String>,

        /// Transaction reference, defaults to "***"
        #[arg(long)]
        txid: Option<String>,
    },
    /// Generate one code per row of a CSV file (key,name,city,amount,description,txid)
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Print a JSON array instead of CSV
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            key,
            name,
            city,
            amount,
            description,
            txid,
        } => {
            let mut request = PaymentRequest::new(key, &name, &city).into_diagnostic()?;
            if let Some(amount) = amount {
                request = request.with_amount(amount);
            }
            if let Some(description) = description {
                request = request.with_description(description);
            }
            if let Some(txid) = txid {
                request = request.with_reference_id(txid);
            }

            info!(
                name = request.payee_name(),
                city = request.payee_city(),
                amount = ?request.amount().map(|a| a.to_string()),
                "generating code"
            );
            println!("{}", generate(&request));
        }
        Command::Batch { input, json } => {
            let file = File::open(&input).into_diagnostic()?;
            let reader = RequestReader::new(file);

            let mut codes = Vec::new();
            for (index, result) in reader.requests().enumerate() {
                match result {
                    Ok(request) => codes.push(GeneratedCode {
                        txid: request.reference_id().to_string(),
                        code: generate(&request),
                    }),
                    Err(e) => {
                        debug!(row = index + 1, error = %e, "skipping row");
                        eprintln!("Error in row {}: {}", index + 1, e);
                    }
                }
            }
            info!(count = codes.len(), input = %input.display(), "batch complete");

            let stdout = io::stdout();
            if json {
                write_json(stdout.lock(), &codes).into_diagnostic()?;
            } else {
                CodeWriter::new(stdout.lock())
                    .write_codes(codes)
                    .into_diagnostic()?;
            }
        }
    }

    Ok(())
}
