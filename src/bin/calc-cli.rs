use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "Command-line client for the calculator service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate `<operand1> <operation> <operand2>`, e.g. `calc 2 + 3`
    #[command(allow_negative_numbers = true)]
    Calc {
        operand1: f64,
        operation: String,
        operand2: f64,
    },
    /// List supported operations and their symbols
    Operations,
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Calc {
            operand1,
            operation,
            operand2,
        } => {
            let res = client
                .post(format!("{}/api/calculator/calculate", cli.url))
                .json(&json!({
                    "operand1": operand1,
                    "operand2": operand2,
                    "operation": operation,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Operations => {
            let res = client
                .get(format!("{}/api/calculator/operations", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => {
            if !status.is_success() {
                eprintln!("Service returned status {}", status);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Err(_) => {
            eprintln!("Error: service returned status {}", status);
            eprintln!("Response: {}", text);
        }
    }
    Ok(())
}
