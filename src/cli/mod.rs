use clap::{Parser, Subcommand};
use serde_json::json;

use crate::auth::{generate_jwt, password::hash_password};
use crate::config;
use crate::database::DatabaseManager;

#[derive(Parser)]
#[command(name = "jobly")]
#[command(about = "Jobly CLI - maintenance tasks for the job board API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the database tables if they do not exist")]
    Migrate,

    #[command(about = "Mint a signed token for local testing")]
    Token {
        #[arg(help = "Username to put in the token")]
        username: String,
        #[arg(long, help = "Mark the token as an admin token")]
        admin: bool,
    },

    #[command(about = "Print the argon2 hash of a password")]
    Hash {
        #[arg(help = "Plain-text password")]
        password: String,
    },
}

#[derive(Debug, Clone, Copy)]
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

    fn print(self, key: &str, value: &str) {
        match self {
            OutputFormat::Text => println!("{}", value),
            OutputFormat::Json => println!("{}", json!({ key: value })),
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => {
            let config = config::config();
            let pool = DatabaseManager::connect(config.database_url()?, &config.database).await?;
            DatabaseManager::migrate(&pool).await?;
            output_format.print("status", "migrated");
        }
        Commands::Token { username, admin } => {
            let token = generate_jwt(&username, admin)?;
            output_format.print("token", &token);
        }
        Commands::Hash { password } => {
            let hash = hash_password(&password)?;
            output_format.print("hash", &hash);
        }
    }

    Ok(())
}
