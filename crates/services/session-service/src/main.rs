//! Session Service - operator tooling for interview session storage.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_service_lib::{SchemaBackend, SessionServiceConfig};

#[derive(Parser)]
#[command(name = "session-service")]
#[command(about = "Interview session storage tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the interview_sessions table definition
    Schema {
        /// Database backend (defaults to SESSION_SERVICE_SCHEMA_BACKEND)
        #[arg(long, value_enum)]
        backend: Option<SchemaBackend>,
        /// Print the explicit schema as JSON instead of SQL
        #[arg(long)]
        json: bool,
    },
    /// Hash a password read from stdin
    HashPassword,
    /// Check a password read from stdin against a stored hash
    VerifyPassword {
        #[arg(long)]
        hash: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = SessionServiceConfig::from_env();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schema { backend, json } => {
            let backend = backend.unwrap_or(config.schema_backend);
            println!("{}", session_service_lib::render_schema(backend, json)?);
        }
        Commands::HashPassword => {
            let plain = session_service_lib::read_secret(&mut std::io::stdin().lock())?;
            println!("{}", session_service_lib::hash_password(&plain, &config)?);
        }
        Commands::VerifyPassword { hash } => {
            let plain = session_service_lib::read_secret(&mut std::io::stdin().lock())?;
            if session_service_lib::check_password(&plain, &hash) {
                println!("match");
            } else {
                println!("mismatch");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
