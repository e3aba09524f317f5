use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod error;
mod generators;
mod models;
mod storage;

use crate::cli::{handlers, Args, CliCommand};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::storage::PasswordStore;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load().with_overrides(args.word_list.clone(), args.store_dir.clone());

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let store = PasswordStore::new(config.store_directory.clone());
    log::debug!("Password logs live under {}", store.root().display());

    let command = match args.command {
        Some(command) => command,
        None => {
            return cli::menu::run_cli_menu(&config, &store).map_err(|e| {
                log::error!("CLI menu error: {:#}", e);
                e
            });
        }
    };

    let mut generator = PasswordGenerator::new();

    match command {
        CliCommand::Random(random) => {
            let options = random.options(config.default_password_length);
            let target = if random.no_save { None } else { Some(&store) };
            match handlers::handle_random(&mut generator, target, &options) {
                Ok(password) => println!("{}", password.value),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        CliCommand::Memorable { words, case, no_save } => {
            let num_words = words.unwrap_or(config.default_num_words);
            let target = if no_save { None } else { Some(&store) };
            let result = handlers::resolve_word_list(&config).and_then(|path| {
                handlers::handle_memorable(&mut generator, target, num_words, case, &path)
            });
            match result {
                Ok(password) => println!("{}", password.value),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        CliCommand::History { category, limit } => {
            match handlers::handle_history(&store, category, limit) {
                Ok(entries) if entries.is_empty() => {
                    println!("No {} passwords saved yet.", category)
                }
                Ok(entries) => {
                    for entry in entries {
                        println!("{}", entry.to_line());
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }

    Ok(())
}
