pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub use client::{ApiClient, ClientError};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "comments")]
#[command(about = "Comments CLI - list and delete comments on a running server")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "COMMENTS_API_URL", default_value = DEFAULT_SERVER_URL, help = "Server base URL")]
    pub url: String,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, conflicts_with = "text", help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List every comment")]
    List,

    #[command(about = "Delete a comment by id")]
    Delete {
        #[arg(help = "Comment id (24 hex characters)")]
        id: String,
    },

    #[command(about = "Check server health status from the /health endpoint")]
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url)?;

    match cli.command {
        Commands::List => commands::list(&client, &output_format).await,
        Commands::Delete { id } => commands::delete(&client, &id, &output_format).await,
        Commands::Health => commands::health(&client, &output_format).await,
    }
}
