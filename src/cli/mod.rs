// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Word list used for memorable passwords, one word per line (overrides PASSFORGE_WORD_LIST)
    #[arg(long, global = true)]
    pub word_list: Option<PathBuf>,

    /// Directory the Random/ and Memorable/ logs are written under (overrides PASSFORGE_STORE_DIR)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Command to execute. Without one, an interactive session starts.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
