use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::io::Read;

use sessionstore::SessionStore;
use sessionstore::cli::Cli;
use sessionstore::config::Config;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("sessionstore starting");

    match cli.command {
        sessionstore::cli::Command::Put { key, file } => {
            let store = SessionStore::open(&config.store_path)?;
            let content = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .context(format!("Failed to read input file: {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            let value: serde_json::Value = serde_json::from_str(&content).context("Input is not valid JSON")?;
            store.put(&key, &value)?;
            println!("{} Stored key: {}", "✓".green(), key.cyan());
        }
        sessionstore::cli::Command::Get { key } => {
            let store = SessionStore::open(&config.store_path)?;
            match store.get(&key)? {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => println!("No document for key: {}", key),
            }
        }
        sessionstore::cli::Command::List => {
            let store = SessionStore::open(&config.store_path)?;
            let keys = store.list()?;
            if keys.is_empty() {
                println!("No documents found");
            } else {
                for key in keys {
                    println!("{}", key);
                }
            }
        }
        sessionstore::cli::Command::Delete { key } => {
            let store = SessionStore::open(&config.store_path)?;
            if store.delete(&key)? {
                println!("{} Deleted key: {}", "✓".green(), key);
            } else {
                println!("No document for key: {}", key);
            }
        }
        sessionstore::cli::Command::Path { key } => {
            let store = SessionStore::open(&config.store_path)?;
            println!("{}", store.file_path(&key)?.display());
        }
    }

    Ok(())
}
