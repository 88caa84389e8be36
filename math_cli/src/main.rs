//! # sqrt-cli
//!
//! Prints the square root of a number using `math_core`. Build with
//! `--features table-sqrt` to exercise the lookup-table implementation.
//!
//! ```bash
//! sqrt-cli 2
//! sqrt-cli 10 --json
//! ```

use clap::Parser;
use math_core::{implementation, sqrt, Implementation};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "sqrt-cli")]
#[command(version, about = "Compute a square root with math_core", long_about = None)]
struct Cli {
    /// Number to take the square root of
    #[arg(allow_negative_numbers = true)]
    number: f64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// JSON output of a single computation
#[derive(Debug, Serialize)]
struct SqrtOutput {
    input: f64,
    sqrt: f64,
    implementation: Implementation,
}

/// Format a result as the sentence or as a JSON object.
fn render(output: &SqrtOutput, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(output)
    } else {
        Ok(format!("The square root of {} is {}", output.input, output.sqrt))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let output = SqrtOutput {
        input: cli.number,
        sqrt: sqrt(cli.number),
        implementation: implementation(),
    };
    tracing::debug!(
        input = output.input,
        sqrt = output.sqrt,
        implementation = output.implementation.display_name(),
        "computed"
    );

    match render(&output, cli.json) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }
    }
}
